//! Translation of storefront lifecycle events into [`EventRecord`]s.
//!
//! Every function here is pure with respect to crate state: it reads the context it is given,
//! optionally looks products or orders up through [`Catalog`], and returns a record. Nothing is
//! sent from this module.
use crate::{
    event::{EventKind, EventRecord, ItemLine},
    storefront::{Cart, Catalog, OrderId, Product, ProductId, RequestContext},
    Error, Result,
};

/// A storefront lifecycle trigger together with the context it fires with.
#[derive(Clone, Copy)]
pub enum StorefrontEvent<'r> {
    /// A page was rendered.
    PageRendered(&'r dyn RequestContext),
    /// A product page was rendered.
    ProductPageRendered {
        /// Request being rendered.
        request: &'r dyn RequestContext,
        /// Product in context.
        product: Option<&'r Product>,
    },
    /// An item was added to the cart.
    AddedToCart {
        /// Identifier supplied with the cart action.
        product_id: ProductId,
        /// Units added.
        quantity: u32,
    },
    /// The checkout page was entered.
    CheckoutEntered(&'r Cart),
    /// An order reached its confirmation page.
    OrderConfirmed(OrderId),
    /// Cart contents were displayed.
    CartDisplayed(&'r Cart),
}

impl<'r> StorefrontEvent<'r> {
    /// Kind of record this trigger produces.
    pub fn kind(&self) -> EventKind {
        match self {
            StorefrontEvent::PageRendered(_) => EventKind::PageView,
            StorefrontEvent::ProductPageRendered { .. } => EventKind::ProductView,
            StorefrontEvent::AddedToCart { .. } => EventKind::AddToCart,
            StorefrontEvent::CheckoutEntered(_) => EventKind::CheckoutStart,
            StorefrontEvent::OrderConfirmed(_) => EventKind::Purchase,
            StorefrontEvent::CartDisplayed(_) => EventKind::CartView,
        }
    }
}

/// Map `event` to its record.
///
/// Returns `Ok(None)` when the event is skipped by its guard (non-user-facing requests, pages
/// that are not single-product pages) and `Err` when referenced data cannot be resolved.
pub fn map_event(
    event: StorefrontEvent<'_>,
    catalog: &(impl Catalog + ?Sized),
) -> Result<Option<EventRecord>> {
    match event {
        StorefrontEvent::PageRendered(request) => Ok(page_view(request)),
        StorefrontEvent::ProductPageRendered { request, product } => {
            Ok(product_view(request, product))
        }
        StorefrontEvent::AddedToCart {
            product_id,
            quantity,
        } => add_to_cart(catalog, product_id, quantity).map(Some),
        StorefrontEvent::CheckoutEntered(cart) => Ok(Some(checkout_start(cart))),
        StorefrontEvent::OrderConfirmed(order_id) => purchase(catalog, order_id).map(Some),
        StorefrontEvent::CartDisplayed(cart) => Ok(Some(cart_view(cart))),
    }
}

/// `page_view` for user-facing page loads. Admin and background-fetch requests yield `None`
/// without reading the page URL or title.
pub fn page_view(request: &(impl RequestContext + ?Sized)) -> Option<EventRecord> {
    if request.is_admin() || request.is_background_fetch() {
        return None;
    }

    Some(EventRecord::PageView {
        page_url: request.page_url(),
        page_title: request.page_title(),
    })
}

/// `product_view` for single-product pages.
pub fn product_view(
    request: &(impl RequestContext + ?Sized),
    product: Option<&Product>,
) -> Option<EventRecord> {
    if !request.is_single_product() {
        return None;
    }

    let Some(product) = product else {
        log::warn!(target: "storefront_tracking", "product page rendered without a product in context");
        return None;
    };

    Some(EventRecord::ProductView {
        product_id: product.id,
        product_name: product.name.clone(),
        price: product.price.clone(),
    })
}

/// `add_to_cart`, resolving the product by the id supplied with the cart action.
pub fn add_to_cart(
    catalog: &(impl Catalog + ?Sized),
    product_id: ProductId,
    quantity: u32,
) -> Result<EventRecord> {
    let product = catalog
        .product(product_id)
        .ok_or(Error::ProductNotFound(product_id))?;

    Ok(EventRecord::AddToCart {
        product_id,
        product_name: product.name,
        price: product.price,
        quantity,
    })
}

/// `checkout_start` listing the cart in iteration order.
pub fn checkout_start(cart: &Cart) -> EventRecord {
    EventRecord::CheckoutStart {
        items: cart_lines(cart),
    }
}

/// `cart_view` listing the cart in iteration order.
pub fn cart_view(cart: &Cart) -> EventRecord {
    EventRecord::CartView {
        items: cart_lines(cart),
    }
}

/// `purchase` for a completed order.
///
/// Items are built from the order's own lines, not from the live cart. Lines whose product can
/// no longer be resolved are left out of `items`.
pub fn purchase(catalog: &(impl Catalog + ?Sized), order_id: OrderId) -> Result<EventRecord> {
    let order = catalog
        .order(order_id)
        .ok_or(Error::OrderNotFound(order_id))?;

    let items = order
        .items
        .iter()
        .filter_map(|line| {
            let Some(product) = catalog.product(line.product_id) else {
                log::warn!(target: "storefront_tracking",
                           order_id:serde = order.id,
                           product_id:serde = line.product_id;
                           "omitting order line for a product that no longer exists");
                return None;
            };
            Some(ItemLine {
                product_id: product.id,
                product_name: product.name,
                price: product.price,
                quantity: line.quantity,
            })
        })
        .collect();

    Ok(EventRecord::Purchase {
        transaction_id: order.id,
        value: order.total,
        currency: order.currency,
        items,
    })
}

fn cart_lines(cart: &Cart) -> Vec<ItemLine> {
    cart.items.iter().map(ItemLine::from).collect()
}
