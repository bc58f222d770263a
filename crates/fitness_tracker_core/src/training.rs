//! Per-activity formulas for distance, mean speed and spent calories.
//!
//! Every activity shares [`TrainingInputs`] (steps, duration, weight). Running
//! and sports walking convert steps to distance with the same step length and
//! derive speed from that distance; swimming uses a longer stroke length for
//! distance and computes speed from the pool instead.

use crate::TrainingError;
use crate::dispatch::TrainingKind;
use crate::message::InfoMessage;
use crate::utils::{floor_div, positive};

/// Step length for running and walking, in meters.
pub const LEN_STEP_M: f64 = 0.65;
/// Stroke length for swimming, in meters.
pub const SWIMMING_LEN_STEP_M: f64 = 1.38;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_HOUR: f64 = 60.0;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Readings common to every activity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrainingInputs {
    step_count: u32,
    duration_hours: f64,
    weight_kg: f64,
}

impl TrainingInputs {
    /// Fails with [`TrainingError::InvalidDuration`] unless the duration is a
    /// positive, finite number of hours.
    pub fn new(
        step_count: u32,
        duration_hours: f64,
        weight_kg: f64,
    ) -> Result<Self, TrainingError> {
        let duration_hours =
            positive(duration_hours).ok_or(TrainingError::InvalidDuration(duration_hours))?;
        Ok(Self {
            step_count,
            duration_hours,
            weight_kg,
        })
    }

    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn distance_km(&self, len_step_m: f64) -> f64 {
        f64::from(self.step_count) * len_step_m / M_IN_KM
    }

    fn step_mean_speed(&self, len_step_m: f64) -> f64 {
        self.distance_km(len_step_m) / self.duration_hours
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Running {
    pub inputs: TrainingInputs,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SportsWalking {
    pub inputs: TrainingInputs,
    height_cm: f64,
}

impl SportsWalking {
    /// Fails with [`TrainingError::InvalidHeight`] unless the height is a
    /// positive, finite number of centimeters. Negative heights are rejected
    /// along with zero.
    pub fn new(inputs: TrainingInputs, height_cm: f64) -> Result<Self, TrainingError> {
        let height_cm = positive(height_cm).ok_or(TrainingError::InvalidHeight(height_cm))?;
        Ok(Self { inputs, height_cm })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swimming {
    pub inputs: TrainingInputs,
    pub pool_length_m: f64,
    pub pool_laps: u32,
}

/// One workout, ready to be summarized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Training {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Training {
    pub fn kind(&self) -> TrainingKind {
        match self {
            Training::Running(_) => TrainingKind::Running,
            Training::SportsWalking(_) => TrainingKind::SportsWalking,
            Training::Swimming(_) => TrainingKind::Swimming,
        }
    }

    pub fn inputs(&self) -> &TrainingInputs {
        match self {
            Training::Running(t) => &t.inputs,
            Training::SportsWalking(t) => &t.inputs,
            Training::Swimming(t) => &t.inputs,
        }
    }

    /// Length covered by a single step or stroke, in meters.
    pub fn len_step_m(&self) -> f64 {
        match self {
            Training::Running(_) | Training::SportsWalking(_) => LEN_STEP_M,
            Training::Swimming(_) => SWIMMING_LEN_STEP_M,
        }
    }

    /// Distance in kilometers.
    pub fn distance(&self) -> f64 {
        self.inputs().distance_km(self.len_step_m())
    }

    /// Mean speed in km/h.
    pub fn mean_speed(&self) -> f64 {
        match self {
            Training::Running(_) | Training::SportsWalking(_) => {
                self.inputs().step_mean_speed(self.len_step_m())
            }
            Training::Swimming(s) => {
                s.pool_length_m * f64::from(s.pool_laps) / M_IN_KM / s.inputs.duration_hours
            }
        }
    }

    /// Spent calories in kcal.
    pub fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed();
        let TrainingInputs {
            duration_hours,
            weight_kg,
            ..
        } = *self.inputs();
        match self {
            Training::Running(_) => {
                (RUN_SPEED_MULTIPLIER * speed - RUN_SPEED_SHIFT) * weight_kg / M_IN_KM
                    * duration_hours
                    * MIN_IN_HOUR
            }
            Training::SportsWalking(w) => {
                let speed_height_ratio = floor_div(speed.powi(2), w.height_cm);
                (WALK_WEIGHT_MULTIPLIER * weight_kg
                    + speed_height_ratio * WALK_SPEED_HEIGHT_MULTIPLIER * weight_kg)
                    * duration_hours
                    * MIN_IN_HOUR
            }
            Training::Swimming(_) => {
                (speed + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * weight_kg
            }
        }
    }

    /// Build the summary record for this workout.
    pub fn show_training_info(&self) -> InfoMessage {
        let message = InfoMessage {
            training_type: self.kind().label().to_string(),
            duration: self.inputs().duration_hours,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        };
        tracing::debug!(
            training_type = %message.training_type,
            distance = message.distance,
            speed = message.speed,
            calories = message.calories,
            "computed training summary"
        );
        message
    }
}
