use std::time::Duration;

use crate::{
    storefront::{Catalog, EmptyCatalog},
    Client, EventSink, Result,
};

/// Configuration for [`Client`].
///
/// # Examples
/// ```
/// # use std::time::Duration;
/// # use storefront_tracking::{ClientConfig, InMemoryCatalog};
/// let client = ClientConfig::from_endpoint_url("https://collector.example/collect")
///     .timeout(Duration::from_secs(2))
///     .catalog(InMemoryCatalog::new())
///     .to_client()
///     .unwrap();
/// ```
pub struct ClientConfig<'a> {
    pub(crate) endpoint_url: String,
    pub(crate) timeout: Duration,
    pub(crate) catalog: Box<dyn Catalog + Send + Sync + 'a>,
    pub(crate) event_sink: Option<Box<dyn EventSink + Send + Sync + 'a>>,
}

impl<'a> ClientConfig<'a> {
    /// Create a default configuration delivering events to `endpoint_url`.
    ///
    /// ```
    /// # use storefront_tracking::ClientConfig;
    /// ClientConfig::from_endpoint_url("https://collector.example/collect");
    /// ```
    pub fn from_endpoint_url(endpoint_url: impl Into<String>) -> Self {
        ClientConfig {
            endpoint_url: endpoint_url.into(),
            timeout: ClientConfig::DEFAULT_TIMEOUT,
            catalog: Box::new(EmptyCatalog),
            event_sink: None,
        }
    }

    /// Default bound on a single delivery, connect time included.
    ///
    /// Delivery runs inside the storefront request, so this is also the most an unreachable
    /// collector adds to a page load per event.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

    /// Override the delivery timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the catalog used to resolve products for `add_to_cart` and orders for `purchase`.
    ///
    /// Without a catalog, both events are dropped with a warning.
    pub fn catalog(mut self, catalog: impl Catalog + Send + Sync + 'a) -> Self {
        self.catalog = Box::new(catalog);
        self
    }

    /// Replace HTTP delivery with a custom sink.
    pub fn event_sink(mut self, event_sink: impl EventSink + Send + Sync + 'a) -> Self {
        self.event_sink = Some(Box::new(event_sink));
        self
    }

    /// Create a new [`Client`] using the specified configuration.
    ///
    /// Fails if the endpoint URL is invalid or the HTTP client cannot be built.
    pub fn to_client(self) -> Result<Client<'a>> {
        Client::new(self)
    }
}
