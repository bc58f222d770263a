//! Tests for the logging and configuration setup done in main.rs

use fitness_tracker_cli::{Config, OutputFormat, observability};

#[test]
fn test_config_from_empty_env() {
    let cfg = Config::from_env_with(|_| None).expect("cfg");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.output, OutputFormat::Text);
}

#[test]
fn test_env_filter_creation() {
    let filter = observability::env_filter("warn,fitness_tracker_core=debug");
    assert!(!format!("{:?}", filter).is_empty());
}

#[test]
fn test_env_filter_fallback() {
    // Should not panic and create a valid filter
    let filter = observability::env_filter("fitness_tracker=loud");
    assert_eq!(filter.to_string(), "info");
}

#[test]
fn test_subscriber_builds_with_configured_filter() {
    let cfg = Config::default();
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(observability::env_filter(&cfg.log_level))
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("fitness_tracker: subscriber ready");
    });
}
