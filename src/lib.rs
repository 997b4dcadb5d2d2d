//! Forward storefront lifecycle events to an analytics collector over HTTP.
//!
//! # Overview
//!
//! The storefront calls a [`Client`] method from each lifecycle hook (page rendered, product
//! page rendered, item added to cart, checkout entered, order confirmed, cart displayed). The
//! client maps the hook's context to an [`EventRecord`] and posts it as JSON to a single
//! collector endpoint, synchronously and exactly once.
//!
//! Storefront data reaches the crate through the [`RequestContext`] and [`Catalog`] traits, so
//! the mapping in [`mapper`] can be used and tested without any storefront framework.
//!
//! # Error Handling
//!
//! Errors are represented by the [`Error`] enum.
//!
//! Tracking must never break the storefront, so [`Client`] swallows every mapping and delivery
//! error after logging it. The only fallible step is building the client. Use [`mapper`] and
//! [`DeliveryClient::try_deliver`] directly to observe errors.
//!
//! # Logging
//!
//! The package uses the [`log`](https://docs.rs/log/latest/log/) crate with the
//! `storefront_tracking` target. A failed delivery is only visible in the logs, so consider
//! installing a `log`-compatible logger.

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(missing_docs)]

mod client;
mod config;
mod delivery;
mod error;
mod event;
pub mod mapper;
mod storefront;
#[cfg(test)]
mod test_logger;

pub use client::Client;
pub use config::ClientConfig;
pub use delivery::{DeliveryClient, EventSink};
pub use error::{Error, Result};
pub use event::{EventKind, EventRecord, ItemLine};
pub use mapper::StorefrontEvent;
pub use storefront::{
    Cart, CartItem, Catalog, InMemoryCatalog, Order, OrderId, OrderItem, PageRequest, Product,
    ProductId, RequestContext,
};
