//! Driver that summarizes a fixed list of sensor packages.

use std::io::Write;

use fitness_tracker_core::{TrainingError, UNKNOWN_CODE_MESSAGE, read_package};

pub mod config;
pub mod error;
pub mod observability;

pub use config::{Config, OutputFormat};
pub use error::{CliError, CliResult};

/// One raw sensor package: activity code plus positional readings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Package<'a> {
    pub code: &'a str,
    pub data: &'a [f64],
}

impl<'a> Package<'a> {
    pub const fn new(code: &'a str, data: &'a [f64]) -> Self {
        Self { code, data }
    }
}

pub const DEFAULT_PACKAGES: [Package<'static>; 3] = [
    Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    Package::new("RUN", &[15000.0, 1.0, 75.0]),
    Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

/// Outcome counts of one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub printed: usize,
    pub unknown: usize,
    pub invalid: usize,
}

/// Summarize `packages` in order, writing one line per package to `out`.
///
/// Unknown codes produce the diagnostic line instead of a summary. Packages
/// that fail validation are logged and skipped. Only write or serialization
/// failures abort the run.
pub fn run<W: Write>(
    packages: &[Package<'_>],
    config: &Config,
    out: &mut W,
) -> CliResult<RunReport> {
    let mut report = RunReport::default();
    for package in packages {
        match read_package(package.code, package.data) {
            Ok(training) => {
                let info = training.show_training_info();
                match config.output {
                    OutputFormat::Text => writeln!(out, "{info}")?,
                    OutputFormat::Json => {
                        serde_json::to_writer(&mut *out, &info)?;
                        writeln!(out)?;
                    }
                }
                observability::record_summary(training.kind());
                report.printed += 1;
            }
            Err(err @ TrainingError::UnknownCode(_)) => {
                tracing::warn!(code = package.code, "skipping package: {}", err);
                match config.output {
                    OutputFormat::Text => writeln!(out, "{UNKNOWN_CODE_MESSAGE}")?,
                    OutputFormat::Json => {
                        let line = serde_json::json!({
                            "code": package.code,
                            "error": UNKNOWN_CODE_MESSAGE,
                        });
                        serde_json::to_writer(&mut *out, &line)?;
                        writeln!(out)?;
                    }
                }
                observability::record_skip(err.reason());
                report.unknown += 1;
            }
            Err(err) => {
                tracing::warn!(code = package.code, "skipping package: {}", err);
                observability::record_skip(err.reason());
                report.invalid += 1;
            }
        }
    }
    Ok(report)
}
