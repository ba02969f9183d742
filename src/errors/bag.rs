use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use super::error::Error;
use super::numeric;
use super::status::reconcile;
use crate::config::RenderConfig;

/// Ordered collection of errors with one aggregate status.
///
/// A bag decoded from JSON keeps the `status` found in the payload; it is not
/// recomputed from the decoded errors. Later `add` calls reconcile against
/// that value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Bag {
    errors: Vec<Error>,
    /// Representative status for the whole response, omitted when zero
    #[serde(
        with = "numeric",
        default,
        skip_serializing_if = "numeric::is_zero"
    )]
    #[schema(value_type = Option<String>, example = "400")]
    status: u16,
}

impl Bag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for `Bag::new()` followed by `add_error(status, detail)`
    pub fn with_error(status: u16, detail: impl Into<String>) -> Self {
        let mut bag = Self::new();
        bag.add_error(status, detail);
        bag
    }

    /// Append an error and recompute the aggregate status.
    ///
    /// Returns the stored error so callers can keep decorating it. Changes
    /// made through that reference do not affect the aggregate status.
    pub fn add(&mut self, error: Error) -> &mut Error {
        let incoming = error.status;

        if self.errors.is_empty() {
            self.status = incoming;
        } else {
            let previous = self.status;
            self.status = reconcile(previous, incoming);
            if self.status != previous {
                debug!(
                    previous,
                    incoming,
                    status = self.status,
                    "Aggregate error status changed"
                );
            }
        }

        self.errors.push(error);
        let last = self.errors.len() - 1;
        &mut self.errors[last]
    }

    pub fn add_error(&mut self, status: u16, detail: impl Into<String>) -> &mut Error {
        self.add(Error::new(status, detail))
    }

    /// Aggregate status, zero while the bag is empty
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    /// Prepare the bag for output, dropping fields the config excludes
    pub fn render(mut self, config: &RenderConfig) -> Self {
        for error in &mut self.errors {
            if !config.include_debug {
                error.strip_debug();
            }
            if !config.include_meta {
                error.meta = None;
            }
        }
        self
    }
}

impl From<Error> for Bag {
    fn from(error: Error) -> Self {
        let mut bag = Self::new();
        bag.add(error);
        bag
    }
}

impl Extend<Error> for Bag {
    fn extend<I: IntoIterator<Item = Error>>(&mut self, iter: I) {
        for error in iter {
            self.add(error);
        }
    }
}

impl FromIterator<Error> for Bag {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

impl IntoIterator for Bag {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Bag {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
