//! Workout calculator: turns raw sensor packages into training summaries.
//!
//! A package is a three-letter code (`SWM`, `RUN`, `WLK`) plus the positional
//! readings for that activity. [`read_package`] builds the matching
//! [`Training`], and [`Training::show_training_info`] produces the
//! [`InfoMessage`] that renders the human-readable summary line.

use thiserror::Error;

pub mod dispatch;
pub mod message;
pub mod training;
pub mod utils;

pub use dispatch::{TrainingKind, read_package};
pub use message::InfoMessage;
pub use training::{Running, SportsWalking, Swimming, Training, TrainingInputs};

/// Diagnostic line printed in place of a summary when a package carries an
/// unknown activity code.
pub const UNKNOWN_CODE_MESSAGE: &str = "Неизвестная кодировка типа тренировки.";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrainingError {
    #[error("unknown training code: {0}")]
    UnknownCode(String),
    #[error("{code} expects {expected} values, got {actual}")]
    InvalidArgumentCount {
        code: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("duration must be a positive number of hours, got {0}")]
    InvalidDuration(f64),
    #[error("height must be a positive number of centimeters, got {0}")]
    InvalidHeight(f64),
    #[error("{field} must be a non-negative whole number, got {value}")]
    InvalidCount { field: &'static str, value: f64 },
}

impl TrainingError {
    /// Short label used when reporting skipped packages.
    pub fn reason(&self) -> &'static str {
        match self {
            TrainingError::UnknownCode(_) => "unknown_code",
            TrainingError::InvalidArgumentCount { .. } => "invalid_argument_count",
            TrainingError::InvalidDuration(_) => "invalid_duration",
            TrainingError::InvalidHeight(_) => "invalid_height",
            TrainingError::InvalidCount { .. } => "invalid_count",
        }
    }
}
