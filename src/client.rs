use crate::{
    mapper::{self, StorefrontEvent},
    storefront::{Cart, Catalog, OrderId, Product, ProductId, RequestContext},
    ClientConfig, DeliveryClient, EventSink, Result,
};

/// Storefront-facing entry point. Call the method matching each lifecycle hook.
///
/// Every method maps the hook's context to an [`EventRecord`](crate::EventRecord) and hands it to
/// the configured sink, which posts it to the collector by default. Nothing is returned: mapping
/// and delivery failures are logged and never reach the storefront request.
///
/// # Examples
/// ```no_run
/// # use storefront_tracking::{Cart, ClientConfig, PageRequest, Product};
/// let client = ClientConfig::from_endpoint_url("https://collector.example/collect")
///     .to_client()
///     .unwrap();
///
/// client.page_rendered(&PageRequest::page("https://shop.example/", "Shop"));
/// client.cart_displayed(&Cart::new().with_item(Product::new(45, "Widget", "19.99"), 1));
/// ```
pub struct Client<'a> {
    catalog: Box<dyn Catalog + Send + Sync + 'a>,
    event_sink: Box<dyn EventSink + Send + Sync + 'a>,
}

impl<'a> Client<'a> {
    /// Create a new `Client` using the specified configuration.
    ///
    /// When no custom sink is configured, this builds a [`DeliveryClient`] for the configured
    /// endpoint and fails if the URL is invalid.
    pub fn new(config: ClientConfig<'a>) -> Result<Self> {
        let event_sink = match config.event_sink {
            Some(event_sink) => event_sink,
            None => Box::new(DeliveryClient::new(&config.endpoint_url, config.timeout)?),
        };

        Ok(Client {
            catalog: config.catalog,
            event_sink,
        })
    }

    /// Map and send a single storefront event.
    pub fn track(&self, event: StorefrontEvent<'_>) {
        let kind = event.kind();
        match mapper::map_event(event, &*self.catalog) {
            Ok(Some(record)) => self.event_sink.send_event(&record),
            Ok(None) => {
                log::debug!(target: "storefront_tracking", event = kind.as_str(); "event skipped");
            }
            Err(err) => {
                log::warn!(target: "storefront_tracking",
                           event = kind.as_str();
                           "dropping event: {}", err);
            }
        }
    }

    /// A page was rendered. Admin and background-fetch requests are ignored.
    pub fn page_rendered(&self, request: &dyn RequestContext) {
        self.track(StorefrontEvent::PageRendered(request));
    }

    /// A product page was rendered with `product` in context.
    pub fn product_page_rendered(&self, request: &dyn RequestContext, product: Option<&Product>) {
        self.track(StorefrontEvent::ProductPageRendered { request, product });
    }

    /// An item was added to the cart. The product is resolved through the catalog.
    pub fn added_to_cart(&self, product_id: ProductId, quantity: u32) {
        self.track(StorefrontEvent::AddedToCart {
            product_id,
            quantity,
        });
    }

    /// The checkout page was entered.
    pub fn checkout_entered(&self, cart: &Cart) {
        self.track(StorefrontEvent::CheckoutEntered(cart));
    }

    /// An order reached its confirmation page. The order is loaded through the catalog.
    pub fn order_confirmed(&self, order_id: OrderId) {
        self.track(StorefrontEvent::OrderConfirmed(order_id));
    }

    /// Cart contents were displayed.
    pub fn cart_displayed(&self, cart: &Cart) {
        self.track(StorefrontEvent::CartDisplayed(cart));
    }
}
