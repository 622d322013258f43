//! Mirror Metrics
//!
//! Counters and histograms for the fetch and upload phases. Recording goes
//! through the `metrics` facade and is a no-op until a recorder is installed.

use crate::domain::PipelineStage;

pub const FETCHES_TOTAL: &str = "mirror_fetches_total";
pub const FETCH_BYTES: &str = "mirror_fetch_bytes";
pub const UPLOADS_TOTAL: &str = "mirror_uploads_total";
pub const UPLOAD_DURATION_SECONDS: &str = "mirror_upload_duration_seconds";
pub const FAILURES_TOTAL: &str = "mirror_failures_total";

/// Metrics collection for the mirror pipeline
pub struct MirrorMetrics;

impl MirrorMetrics {
    /// Record a fully read source response
    pub fn record_fetch(status: u16, payload_bytes: usize) {
        ::metrics::counter!(FETCHES_TOTAL, "status_class" => status_class(status)).increment(1);
        ::metrics::histogram!(FETCH_BYTES).record(payload_bytes as f64);
    }

    /// Record a successful object write
    pub fn record_upload(duration_secs: f64) {
        ::metrics::counter!(UPLOADS_TOTAL).increment(1);
        ::metrics::histogram!(UPLOAD_DURATION_SECONDS).record(duration_secs);
    }

    /// Record a failed invocation by error kind and stage
    pub fn record_failure(kind: &'static str, stage: Option<PipelineStage>) {
        let stage = stage.map(PipelineStage::as_str).unwrap_or("none");
        ::metrics::counter!(FAILURES_TOTAL, "kind" => kind, "stage" => stage).increment(1);
    }
}

/// Bucket an HTTP status into `1xx`..`5xx`
pub fn status_class(status: u16) -> &'static str {
    match status {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}
