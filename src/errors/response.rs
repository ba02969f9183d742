use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use super::bag::Bag;
use super::error::Error;
use super::status::StatusClass;
use crate::config::{RenderConfig, JSON_API_CONTENT_TYPE};
use crate::metrics;

/// HTTP status for a bag, 500 when the aggregate is unset or out of range
fn http_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl Bag {
    /// Render the bag per `config` and turn it into an HTTP response
    pub fn into_response_with(self, config: &RenderConfig) -> Response {
        let content_type = HeaderValue::from_str(&config.content_type).unwrap_or_else(|_| {
            warn!(
                content_type = %config.content_type,
                "Invalid content type, using default"
            );
            HeaderValue::from_static(JSON_API_CONTENT_TYPE)
        });

        respond(self.render(config), content_type)
    }
}

fn respond(bag: Bag, content_type: HeaderValue) -> Response {
    let status = http_status(bag.status());
    let class = StatusClass::from_status(status.as_u16());

    match class {
        StatusClass::ServerError => warn!(
            status = %status.as_u16(),
            error_count = bag.len(),
            "Responding with server error payload"
        ),
        _ => info!(
            status = %status.as_u16(),
            error_count = bag.len(),
            "Responding with error payload"
        ),
    }
    metrics::record_response(class, bag.len());

    let mut response = (status, Json(bag)).into_response();
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, content_type);
    response
}

impl IntoResponse for Bag {
    fn into_response(self) -> Response {
        respond(self, HeaderValue::from_static(JSON_API_CONTENT_TYPE))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        Bag::from(self).into_response()
    }
}
