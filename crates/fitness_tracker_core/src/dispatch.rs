//! Activity code table and package reader.

use schemars::JsonSchema;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::TrainingError;
use crate::training::{Running, SportsWalking, Swimming, Training, TrainingInputs};
use crate::utils::to_count;

type Builder = fn(&[f64]) -> Result<Training, TrainingError>;

/// Entry of the activity code table.
struct TrainingSpec {
    code: &'static str,
    label: &'static str,
    arity: usize,
    build: Builder,
}

static SWIMMING: TrainingSpec = TrainingSpec {
    code: "SWM",
    label: "Swimming",
    arity: 5,
    build: build_swimming,
};

static RUNNING: TrainingSpec = TrainingSpec {
    code: "RUN",
    label: "Running",
    arity: 3,
    build: build_running,
};

static SPORTS_WALKING: TrainingSpec = TrainingSpec {
    code: "WLK",
    label: "SportsWalking",
    arity: 4,
    build: build_sports_walking,
};

static TRAINING_TABLE: [&TrainingSpec; 3] = [&SWIMMING, &RUNNING, &SPORTS_WALKING];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub enum TrainingKind {
    Swimming,
    Running,
    SportsWalking,
}

impl TrainingKind {
    pub const ALL: [TrainingKind; 3] = [
        TrainingKind::Swimming,
        TrainingKind::Running,
        TrainingKind::SportsWalking,
    ];

    fn spec(self) -> &'static TrainingSpec {
        match self {
            TrainingKind::Swimming => &SWIMMING,
            TrainingKind::Running => &RUNNING,
            TrainingKind::SportsWalking => &SPORTS_WALKING,
        }
    }

    /// Three-letter package code, e.g. `RUN`.
    pub fn code(self) -> &'static str {
        self.spec().code
    }

    /// Label shown in the summary line.
    pub fn label(self) -> &'static str {
        self.spec().label
    }

    /// Number of positional readings a package of this kind carries.
    pub fn arity(self) -> usize {
        self.spec().arity
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.code() == code)
    }
}

impl FromStr for TrainingKind {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| TrainingError::UnknownCode(s.to_string()))
    }
}

impl fmt::Display for TrainingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Build the training described by a sensor package.
///
/// `data` holds the readings in the order the activity expects them:
/// - `RUN`: steps, hours, weight (kg)
/// - `WLK`: steps, hours, weight (kg), height (cm)
/// - `SWM`: strokes, hours, weight (kg), pool length (m), laps
pub fn read_package(code: &str, data: &[f64]) -> Result<Training, TrainingError> {
    let spec = TRAINING_TABLE
        .iter()
        .find(|spec| spec.code == code)
        .ok_or_else(|| TrainingError::UnknownCode(code.to_string()))?;
    if data.len() != spec.arity {
        return Err(TrainingError::InvalidArgumentCount {
            code: spec.code,
            expected: spec.arity,
            actual: data.len(),
        });
    }
    (spec.build)(data)
}

fn common_inputs(data: &[f64]) -> Result<TrainingInputs, TrainingError> {
    TrainingInputs::new(to_count("step_count", data[0])?, data[1], data[2])
}

fn build_running(data: &[f64]) -> Result<Training, TrainingError> {
    Ok(Training::Running(Running {
        inputs: common_inputs(data)?,
    }))
}

fn build_sports_walking(data: &[f64]) -> Result<Training, TrainingError> {
    let walk = SportsWalking::new(common_inputs(data)?, data[3])?;
    Ok(Training::SportsWalking(walk))
}

fn build_swimming(data: &[f64]) -> Result<Training, TrainingError> {
    Ok(Training::Swimming(Swimming {
        inputs: common_inputs(data)?,
        pool_length_m: data[3],
        pool_laps: to_count("pool_laps", data[4])?,
    }))
}
