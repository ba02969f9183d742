pub mod registry;

use prometheus::{Encoder, TextEncoder};

use crate::errors::StatusClass;

/// Encode this crate's metrics in Prometheus exposition format
pub fn gather() -> Result<String, prometheus::Error> {
    registry::init_metrics();

    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;

    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Record one outgoing error payload
pub fn record_response(class: StatusClass, error_count: usize) {
    ERROR_RESPONSES_TOTAL
        .with_label_values(&[class.label()])
        .inc();
    ERRORS_PER_RESPONSE.observe(error_count as f64);
}

// Re-export commonly used metrics for convenience
pub use registry::{ERRORS_PER_RESPONSE, ERROR_RESPONSES_TOTAL, REGISTRY};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_response() {
        registry::init_metrics();

        let before = ERROR_RESPONSES_TOTAL
            .with_label_values(&[StatusClass::ServerError.label()])
            .get();
        record_response(StatusClass::ServerError, 2);
        let after = ERROR_RESPONSES_TOTAL
            .with_label_values(&[StatusClass::ServerError.label()])
            .get();

        assert!(after > before);
    }

    #[test]
    fn test_gather_contains_metrics() {
        record_response(StatusClass::ClientError, 1);
        let text = gather().unwrap();
        assert!(text.contains("jsonapi_error_responses_total"));
        assert!(text.contains("jsonapi_errors_per_response"));
    }

    #[test]
    fn test_gather_excludes_default_registry() {
        let host_counter =
            prometheus::IntCounter::new("host_app_requests_total", "Counter owned by the host")
                .unwrap();
        prometheus::register(Box::new(host_counter.clone())).unwrap();
        host_counter.inc();

        let text = gather().unwrap();
        assert!(!text.contains("host_app_requests_total"));
        assert!(text.contains("jsonapi_errors_per_response"));
    }
}
