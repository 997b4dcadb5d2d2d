//! An HTTP client that posts event records to the collector.
use std::time::Duration;

use reqwest::Url;

use crate::{Error, EventRecord, Result};

/// Receives finished event records.
///
/// [`DeliveryClient`] is the default sink. Closures are sinks too, which lets integrations tee
/// records elsewhere or capture them in tests:
///
/// ```
/// # use storefront_tracking::{ClientConfig, EventRecord};
/// let client = ClientConfig::from_endpoint_url("https://collector.example/collect")
///     .event_sink(|record: &EventRecord| println!("{:?}", record))
///     .to_client();
/// ```
pub trait EventSink {
    /// Send one record. Implementations must not panic or propagate failures.
    fn send_event(&self, record: &EventRecord);
}

impl<T: Fn(&EventRecord)> EventSink for T {
    fn send_event(&self, record: &EventRecord) {
        self(record);
    }
}

/// Posts each record as a JSON document to a single collector endpoint.
///
/// Delivery is synchronous: [`DeliveryClient::deliver`] returns once the collector has answered,
/// the request failed, or the timeout elapsed. There is no queue and no retry.
pub struct DeliveryClient {
    // Client holds a connection pool internally, so we're reusing the client between requests.
    client: reqwest::blocking::Client,
    endpoint_url: Url,
}

impl DeliveryClient {
    /// Create a client posting to `endpoint_url`. `timeout` bounds both connecting and the whole
    /// request.
    pub fn new(endpoint_url: &str, timeout: Duration) -> Result<DeliveryClient> {
        let endpoint_url = Url::parse(endpoint_url).map_err(Error::InvalidEndpointUrl)?;
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        Ok(DeliveryClient {
            client,
            endpoint_url,
        })
    }

    /// Post `record` once, reporting the outcome.
    pub fn try_deliver(&self, record: &EventRecord) -> Result<()> {
        log::trace!(target: "storefront_tracking", event:serde = record; "posting event");

        let response = self
            .client
            .post(self.endpoint_url.clone())
            .json(record)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UnexpectedStatus(status));
        }

        log::debug!(target: "storefront_tracking",
                    event = record.kind().as_str(),
                    status = status.as_u16();
                    "event delivered");
        Ok(())
    }

    /// Post `record` once, logging any failure instead of returning it.
    pub fn deliver(&self, record: &EventRecord) {
        if let Err(err) = self.try_deliver(record) {
            log::error!(target: "storefront_tracking",
                        event = record.kind().as_str();
                        "error sending event to collector: {}", err);
        }
    }
}

impl EventSink for DeliveryClient {
    fn send_event(&self, record: &EventRecord) {
        self.deliver(record);
    }
}
