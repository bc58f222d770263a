use fitness_tracker_cli::{Config, DEFAULT_PACKAGES, observability, run};

fn main() -> anyhow::Result<()> {
    // `FITNESS_TRACKER_LOG_LEVEL`, then `RUST_LOG`, default `info`
    let config = Config::from_env()?;

    // stdout carries the summaries, logs go to stderr
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(observability::env_filter(&config.log_level))
        .init();
    observability::describe_metrics();
    tracing::info!(
        "fitness_tracker: log filter: {}, output: {:?}",
        config.log_level,
        config.output
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = run(&DEFAULT_PACKAGES, &config, &mut out)?;

    tracing::info!(
        printed = report.printed,
        unknown = report.unknown,
        invalid = report.invalid,
        "fitness_tracker: done"
    );
    Ok(())
}
