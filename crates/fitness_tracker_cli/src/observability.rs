//! Logging filter and metric counters for the driver.

use fitness_tracker_core::TrainingKind;
use tracing_subscriber::EnvFilter;

pub const TRAININGS_TOTAL: &str = "fitness_tracker_trainings_total";
pub const TRAININGS_SKIPPED_TOTAL: &str = "fitness_tracker_trainings_skipped_total";

const FALLBACK_FILTER: &str = "info";

/// Build the log filter, falling back to `info` when `level` does not parse.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

pub fn describe_metrics() {
    metrics::describe_counter!(TRAININGS_TOTAL, "Trainings summarized, by kind");
    metrics::describe_counter!(
        TRAININGS_SKIPPED_TOTAL,
        "Packages skipped without a summary, by reason"
    );
}

pub fn record_summary(kind: TrainingKind) {
    metrics::counter!(TRAININGS_TOTAL, "kind" => kind.code()).increment(1);
}

pub fn record_skip(reason: &'static str) {
    metrics::counter!(TRAININGS_SKIPPED_TOTAL, "reason" => reason).increment(1);
}
