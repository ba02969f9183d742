use lazy_static::lazy_static;
use prometheus::{Histogram, HistogramOpts, IntCounterVec, Opts, Registry};

lazy_static! {
    /// Registry holding only this crate's metrics
    pub static ref REGISTRY: Registry = Registry::new();

    pub static ref ERROR_RESPONSES_TOTAL: IntCounterVec = {
        let counter = IntCounterVec::new(
            Opts::new(
                "jsonapi_error_responses_total",
                "Total error payloads turned into HTTP responses",
            ),
            &["class"],  // class: 4xx, 5xx, other
        )
        .unwrap();
        REGISTRY.register(Box::new(counter.clone())).unwrap();
        counter
    };

    pub static ref ERRORS_PER_RESPONSE: Histogram = {
        let histogram = Histogram::with_opts(
            HistogramOpts::new(
                "jsonapi_errors_per_response",
                "Number of error objects carried by one response",
            )
            .buckets(vec![1.0, 2.0, 3.0, 5.0, 10.0, 25.0, 50.0, 100.0]),
        )
        .unwrap();
        REGISTRY.register(Box::new(histogram.clone())).unwrap();
        histogram
    };
}

/// Force registration so the metrics show up before the first error response
pub fn init_metrics() {
    lazy_static::initialize(&ERROR_RESPONSES_TOTAL);
    lazy_static::initialize(&ERRORS_PER_RESPONSE);
}
