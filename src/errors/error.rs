use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

use super::numeric;
use super::status::StatusClass;

/// References to the part of the request that caused an error
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Source {
    /// JSON pointer into the request document, e.g. `/data/attributes/password`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pointer: String,
    /// Name of the query parameter that caused the error
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parameter: String,
}

/// Link to further details about an error
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Link {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub about: String,
}

/// A single JSON API error object.
///
/// Fields are declared in wire order; `status` and `code` are written as
/// quoted decimal strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Error {
    /// Application-specific error code, omitted when zero
    #[serde(
        with = "numeric",
        default,
        skip_serializing_if = "numeric::is_zero"
    )]
    #[schema(value_type = Option<String>, example = "1042")]
    pub code: u32,
    /// Diagnostics that should not reach production clients
    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    #[schema(value_type = Option<Object>)]
    pub debug: Option<Map<String, Value>>,
    /// Human-readable explanation
    pub detail: String,
    /// Unique identifier for this occurrence
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Link>,
    /// Non-standard meta information
    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    #[schema(value_type = Option<Object>)]
    pub meta: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// HTTP status code applicable to this problem
    #[serde(with = "numeric")]
    #[schema(value_type = String, example = "422")]
    pub status: u16,
    /// Short summary of the problem
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
}

fn is_none_or_empty(map: &Option<Map<String, Value>>) -> bool {
    map.as_ref().map_or(true, Map::is_empty)
}

impl Error {
    /// Create a new error with the given status and detail
    pub fn new(status: u16, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
            ..Default::default()
        }
    }

    /// Broad class of this error's status
    pub fn class(&self) -> StatusClass {
        StatusClass::from_status(self.status)
    }

    /// Set `links.about`, creating the link object if needed
    pub fn set_about_link(&mut self, url: impl Into<String>) -> &mut Self {
        self.links.get_or_insert_with(Link::default).about = url.into();
        self
    }

    /// Return the source object, attaching an empty one first if absent
    pub fn ensure_source(&mut self) -> &mut Source {
        self.source.get_or_insert_with(Source::default)
    }

    /// Point `source.pointer` at the offending part of the request document
    pub fn set_pointer(&mut self, pointer: impl Into<String>) -> &mut Self {
        self.ensure_source().pointer = pointer.into();
        self
    }

    /// Name the query parameter that caused the error in `source.parameter`
    pub fn set_parameter(&mut self, parameter: impl Into<String>) -> &mut Self {
        self.ensure_source().parameter = parameter.into();
        self
    }

    /// Add one `meta` entry, creating the map if needed
    pub fn insert_meta(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.meta
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Add one `debug` entry, creating the map if needed
    pub fn insert_debug(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.debug
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Give this occurrence a random UUID unless it already has an id
    pub fn assign_id(&mut self) -> &str {
        if self.id.is_empty() {
            self.id = Uuid::new_v4().to_string();
        }
        &self.id
    }

    /// Drop diagnostic data before the error leaves the process
    pub fn strip_debug(&mut self) {
        self.debug = None;
    }
}

/// Consuming builders
impl Error {
    pub fn with_code(mut self, code: u32) -> Self {
        self.code = code;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_about_link(mut self, url: impl Into<String>) -> Self {
        self.set_about_link(url);
        self
    }

    pub fn with_pointer(mut self, pointer: impl Into<String>) -> Self {
        self.set_pointer(pointer);
        self
    }

    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.set_parameter(parameter);
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert_meta(key, value);
        self
    }

    pub fn with_debug(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert_debug(key, value);
        self
    }
}

/// Helpers for creating common errors
impl Error {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, detail).with_title("Bad Request")
    }

    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(401, detail).with_title("Unauthorized")
    }

    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::new(403, detail).with_title("Forbidden")
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, detail).with_title("Not Found")
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::new(409, detail).with_title("Conflict")
    }

    pub fn unprocessable_entity(detail: impl Into<String>) -> Self {
        Self::new(422, detail).with_title("Unprocessable Entity")
    }

    pub fn internal_server_error(detail: impl Into<String>) -> Self {
        Self::new(500, detail).with_title("Internal Server Error")
    }

    pub fn service_unavailable(detail: impl Into<String>) -> Self {
        Self::new(503, detail).with_title("Service Unavailable")
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.detail)
    }
}

// Not derived with thiserror: a field named `source` would be taken as the
// error's cause.
impl std::error::Error for Error {}
