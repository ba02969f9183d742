use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Broad class of an HTTP-like status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    /// Below 400 or at/above 600
    Unknown,

    /// 400..500
    ClientError,

    /// 500..600
    ServerError,
}

impl StatusClass {
    /// Classify a status code
    pub fn from_status(status: u16) -> Self {
        match status {
            400..=499 => Self::ClientError,
            500..=599 => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    /// Representative status code for this class (0, 400 or 500)
    pub fn as_status(&self) -> u16 {
        match self {
            Self::Unknown => 0,
            Self::ClientError => 400,
            Self::ServerError => 500,
        }
    }

    /// Label used for metrics
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "other",
            Self::ClientError => "4xx",
            Self::ServerError => "5xx",
        }
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns 400 or 500 depending on the class of `status`.
///
/// Codes below 400 or at/above 600 are not classifiable and yield 0.
pub fn classify(status: u16) -> u16 {
    StatusClass::from_status(status).as_status()
}

/// Reconcile the aggregate status of a non-empty bag with the status of a
/// newly added error.
pub(crate) fn reconcile(previous: u16, incoming: u16) -> u16 {
    if previous == incoming {
        return previous;
    }

    let class = classify(previous);
    if class == classify(incoming) {
        class
    } else {
        400
    }
}
