use lazy_static::lazy_static;
use prometheus::{Counter, Histogram, register_counter, register_histogram};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("cardgen_requests_total", "Total number of generate requests").unwrap();
    pub static ref PROVIDER_FAILURES: Counter = register_counter!(
        "cardgen_provider_failures_total",
        "Provider calls that failed"
    )
    .unwrap();
    pub static ref INVALID_JSON: Counter = register_counter!(
        "cardgen_invalid_json_total",
        "Provider replies that were not valid JSON"
    )
    .unwrap();
    pub static ref SCHEMA_MISMATCHES: Counter = register_counter!(
        "cardgen_schema_mismatch_total",
        "Returned items not matching the requested card shape"
    )
    .unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "cardgen_request_latency_seconds",
        "Generate request latency in seconds"
    )
    .unwrap();
}
