//! Build and serialize JSON API error payloads.
//!
//! Collect [`Error`]s in a [`Bag`]; the bag keeps one aggregate status for
//! the whole response.

pub mod config;
pub mod errors;
pub mod metrics;
pub mod openapi;

pub use config::{ConfigError, RenderConfig};
pub use errors::{classify, Bag, Error, Link, Source, StatusClass};
