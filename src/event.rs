use serde::{Serialize, Serializer};

use crate::storefront::{CartItem, OrderId, ProductId};

/// Kind of storefront event, as tagged on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// `page_view`
    PageView,
    /// `product_view`
    ProductView,
    /// `add_to_cart`
    AddToCart,
    /// `checkout_start`
    CheckoutStart,
    /// `purchase`
    Purchase,
    /// `cart_view`
    CartView,
}

impl EventKind {
    /// Value of the `event` key for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::PageView => "page_view",
            EventKind::ProductView => "product_view",
            EventKind::AddToCart => "add_to_cart",
            EventKind::CheckoutStart => "checkout_start",
            EventKind::Purchase => "purchase",
            EventKind::CartView => "cart_view",
        }
    }
}

/// One product line inside a cart or order record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemLine {
    /// Product identifier.
    pub product_id: ProductId,
    /// Product name at event time.
    pub product_name: String,
    /// Unit price as a decimal string.
    pub price: String,
    /// Units of the product on this line.
    pub quantity: u32,
}

impl From<&CartItem> for ItemLine {
    fn from(item: &CartItem) -> Self {
        ItemLine {
            product_id: item.product.id,
            product_name: item.product.name.clone(),
            price: item.product.price.clone(),
            quantity: item.quantity,
        }
    }
}

/// A storefront event ready to be sent to the collector.
///
/// Serializes to a flat JSON object with the kind in the `event` key:
///
/// ```
/// # use storefront_tracking::EventRecord;
/// let record = EventRecord::PageView {
///     page_url: "https://shop.example/".to_owned(),
///     page_title: "Home".to_owned(),
/// };
/// assert_eq!(
///     serde_json::to_string(&record).unwrap(),
///     r#"{"event":"page_view","page_url":"https://shop.example/","page_title":"Home"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventRecord {
    /// A user-facing page was rendered.
    PageView {
        /// Canonical URL of the page.
        page_url: String,
        /// Title of the page.
        page_title: String,
    },
    /// A single-product page was rendered.
    ProductView {
        /// Product identifier.
        product_id: ProductId,
        /// Product name.
        product_name: String,
        /// Unit price as a decimal string.
        price: String,
    },
    /// An item was added to the cart.
    AddToCart {
        /// Identifier supplied with the cart action.
        product_id: ProductId,
        /// Product name.
        product_name: String,
        /// Unit price as a decimal string.
        price: String,
        /// Units added.
        quantity: u32,
    },
    /// The checkout page was entered with the current cart.
    CheckoutStart {
        /// Cart lines in cart order.
        items: Vec<ItemLine>,
    },
    /// An order was completed.
    Purchase {
        /// Order id.
        transaction_id: OrderId,
        /// Order total as a decimal string.
        value: String,
        /// ISO 4217 currency code.
        currency: String,
        /// Order lines use `item_id`/`item_name` keys on the wire.
        #[serde(serialize_with = "serialize_purchased_items")]
        items: Vec<ItemLine>,
    },
    /// Cart contents were displayed.
    CartView {
        /// Cart lines in cart order.
        items: Vec<ItemLine>,
    },
}

impl EventRecord {
    /// Kind of this record, matching its `event` tag.
    pub fn kind(&self) -> EventKind {
        match self {
            EventRecord::PageView { .. } => EventKind::PageView,
            EventRecord::ProductView { .. } => EventKind::ProductView,
            EventRecord::AddToCart { .. } => EventKind::AddToCart,
            EventRecord::CheckoutStart { .. } => EventKind::CheckoutStart,
            EventRecord::Purchase { .. } => EventKind::Purchase,
            EventRecord::CartView { .. } => EventKind::CartView,
        }
    }
}

#[derive(Serialize)]
struct PurchasedItem<'a> {
    item_id: ProductId,
    item_name: &'a str,
    price: &'a str,
    quantity: u32,
}

fn serialize_purchased_items<S: Serializer>(
    items: &[ItemLine],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(items.iter().map(|item| PurchasedItem {
        item_id: item.product_id,
        item_name: &item.product_name,
        price: &item.price,
        quantity: item.quantity,
    }))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{EventKind, EventRecord, ItemLine};
    use crate::storefront::{OrderId, ProductId};

    fn widget(quantity: u32) -> ItemLine {
        ItemLine {
            product_id: ProductId(45),
            product_name: "Widget".to_owned(),
            price: "19.99".to_owned(),
            quantity,
        }
    }

    #[test]
    fn purchase_items_use_item_keys() {
        let record = EventRecord::Purchase {
            transaction_id: OrderId(123),
            value: "49.99".to_owned(),
            currency: "USD".to_owned(),
            items: vec![widget(2)],
        };

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "event": "purchase",
                "transaction_id": 123,
                "value": "49.99",
                "currency": "USD",
                "items": [{"item_id": 45, "item_name": "Widget", "price": "19.99", "quantity": 2}],
            })
        );
    }

    #[test]
    fn cart_items_use_product_keys() {
        let record = EventRecord::CartView {
            items: vec![widget(1)],
        };

        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"event":"cart_view","items":[{"product_id":45,"product_name":"Widget","price":"19.99","quantity":1}]}"#
        );
    }

    #[test]
    fn add_to_cart_is_flat() {
        let record = EventRecord::AddToCart {
            product_id: ProductId(45),
            product_name: "Widget".to_owned(),
            price: "19.99".to_owned(),
            quantity: 3,
        };

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "event": "add_to_cart",
                "product_id": 45,
                "product_name": "Widget",
                "price": "19.99",
                "quantity": 3,
            })
        );
    }

    #[test]
    fn event_tag_matches_kind() {
        let records = [
            EventRecord::PageView {
                page_url: String::new(),
                page_title: String::new(),
            },
            EventRecord::ProductView {
                product_id: ProductId(1),
                product_name: String::new(),
                price: String::new(),
            },
            EventRecord::CheckoutStart { items: vec![] },
            EventRecord::CartView { items: vec![] },
        ];

        for record in &records {
            let value = serde_json::to_value(record).unwrap();
            assert_eq!(value["event"], record.kind().as_str());
        }
        assert_eq!(EventKind::Purchase.as_str(), "purchase");
    }
}
