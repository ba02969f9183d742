//! JSON API error objects and the bag that aggregates them
//!
//! Ref: <https://jsonapi.org/format/#errors>

pub mod bag;
pub mod error;
pub(crate) mod numeric;
#[cfg(feature = "axum")]
pub mod response;
pub mod status;

pub use bag::Bag;
pub use error::{Error, Link, Source};
pub use status::{classify, StatusClass};
