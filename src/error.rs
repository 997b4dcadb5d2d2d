use std::sync::Arc;

use reqwest::StatusCode;
use thiserror::Error;

use crate::storefront::{OrderId, ProductId};

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while mapping or delivering storefront events.
///
/// [`Client`](crate::Client) never returns these to the storefront: mapping and delivery errors
/// are logged and dropped. They are exposed for direct users of [`mapper`](crate::mapper) and
/// [`DeliveryClient`](crate::DeliveryClient).
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// The configured collector endpoint is not a valid URL.
    #[error("invalid endpoint_url configuration")]
    InvalidEndpointUrl(#[source] url::ParseError),

    /// Connection failure, timeout, or any other transport-level error.
    #[error(transparent)]
    // reqwest::Error is not clonable, so we're wrapping it in an Arc.
    Network(Arc<reqwest::Error>),

    /// The collector answered with a non-2xx status.
    #[error("collector responded with {0}")]
    UnexpectedStatus(StatusCode),

    /// A product referenced by the event could not be resolved.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// An order referenced by the event could not be resolved.
    #[error("order {0} not found")]
    OrderNotFound(OrderId),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self::Network(Arc::new(value))
    }
}
