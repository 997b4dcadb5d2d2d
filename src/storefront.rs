//! Data and lookups the storefront hands over when a lifecycle hook fires.
use std::collections::HashMap;

use derive_more::{Display, From};
use serde::Serialize;

/// Storefront product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

/// Storefront order identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

/// A catalog product as the storefront sees it at event time.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price as a decimal string, e.g. `"19.99"`.
    pub price: String,
}

impl Product {
    /// Create a product with the given id, name and decimal price.
    pub fn new(id: u64, name: impl Into<String>, price: impl Into<String>) -> Self {
        Product {
            id: ProductId::from(id),
            name: name.into(),
            price: price.into(),
        }
    }
}

/// A cart line: the product with its data as of cart time, and how many were added.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    /// The product, as held by the cart.
    pub product: Product,
    /// Units in the cart.
    pub quantity: u32,
}

/// Current cart contents, in the order the storefront iterates them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    /// Lines in cart order.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line to the cart.
    pub fn with_item(mut self, product: Product, quantity: u32) -> Self {
        self.items.push(CartItem { product, quantity });
        self
    }
}

/// An order line. The product is referenced by id and resolved through [`Catalog`], so it may
/// have been deleted since the order was placed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    /// Product this line was placed for.
    pub product_id: ProductId,
    /// Units ordered.
    pub quantity: u32,
}

/// A completed order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Order identifier, reported as `transaction_id`.
    pub id: OrderId,
    /// Order total as a decimal string.
    pub total: String,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Order lines.
    pub items: Vec<OrderItem>,
}

/// The request being handled when a hook fires.
///
/// Predicates are checked before any page data is read, so implementations may compute
/// `page_url`/`page_title` lazily.
pub trait RequestContext {
    /// Request targets the administrative area.
    fn is_admin(&self) -> bool;
    /// Request is an asynchronous data fetch rather than a page load.
    fn is_background_fetch(&self) -> bool;
    /// Request renders a single-product page.
    fn is_single_product(&self) -> bool;
    /// Canonical URL of the rendered page.
    fn page_url(&self) -> String;
    /// Title of the rendered page.
    fn page_title(&self) -> String;
}

/// Plain-data [`RequestContext`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageRequest {
    /// Returned by [`RequestContext::page_url`].
    pub url: String,
    /// Returned by [`RequestContext::page_title`].
    pub title: String,
    /// Returned by [`RequestContext::is_admin`].
    pub is_admin: bool,
    /// Returned by [`RequestContext::is_background_fetch`].
    pub is_background_fetch: bool,
    /// Returned by [`RequestContext::is_single_product`].
    pub is_single_product: bool,
}

impl PageRequest {
    /// A user-facing page load.
    pub fn page(url: impl Into<String>, title: impl Into<String>) -> Self {
        PageRequest {
            url: url.into(),
            title: title.into(),
            ..Default::default()
        }
    }
}

impl RequestContext for PageRequest {
    fn is_admin(&self) -> bool {
        self.is_admin
    }
    fn is_background_fetch(&self) -> bool {
        self.is_background_fetch
    }
    fn is_single_product(&self) -> bool {
        self.is_single_product
    }
    fn page_url(&self) -> String {
        self.url.clone()
    }
    fn page_title(&self) -> String {
        self.title.clone()
    }
}

/// Product and order lookups provided by the storefront.
pub trait Catalog {
    /// Look a product up by id. `None` if it does not exist or was deleted.
    fn product(&self, id: ProductId) -> Option<Product>;
    /// Load a completed order by id.
    fn order(&self, id: OrderId) -> Option<Order>;
}

pub(crate) struct EmptyCatalog;
impl Catalog for EmptyCatalog {
    fn product(&self, _id: ProductId) -> Option<Product> {
        None
    }
    fn order(&self, _id: OrderId) -> Option<Order> {
        None
    }
}

/// A [`Catalog`] backed by hash maps. Useful for tests and offline demos.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: HashMap<ProductId, Product>,
    orders: HashMap<OrderId, Order>,
}

impl InMemoryCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a product, returning the previous one with the same id.
    pub fn insert_product(&mut self, product: Product) -> Option<Product> {
        self.products.insert(product.id, product)
    }

    /// Insert an order, returning the previous one with the same id.
    pub fn insert_order(&mut self, order: Order) -> Option<Order> {
        self.orders.insert(order.id, order)
    }

    /// Remove a product, as if it were deleted from the store.
    pub fn remove_product(&mut self, id: ProductId) -> Option<Product> {
        self.products.remove(&id)
    }
}

impl Catalog for InMemoryCatalog {
    fn product(&self, id: ProductId) -> Option<Product> {
        self.products.get(&id).cloned()
    }

    fn order(&self, id: OrderId) -> Option<Order> {
        self.orders.get(&id).cloned()
    }
}

impl<T: Catalog + ?Sized> Catalog for &T {
    fn product(&self, id: ProductId) -> Option<Product> {
        (**self).product(id)
    }

    fn order(&self, id: OrderId) -> Option<Order> {
        (**self).order(id)
    }
}
