//! Workout records
//!
//! This module provides the base workout record, the `Training` contract every
//! workout kind implements, and the closed `Workout` sum type over the three
//! supported kinds.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use serde::{Deserialize, Serialize};

use crate::message::InfoMessage;
use crate::types::WorkoutKind;

/// Distance covered by one step (metres)
pub const LEN_STEP: f64 = 0.65;
/// Metres in a kilometre
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Raw sensor inputs shared by every workout kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Number of actions (steps when running or walking, strokes when swimming)
    pub action: u32,
    /// Duration (hours)
    pub duration: f64,
    /// Athlete weight (kg)
    pub weight: f64,
}

impl WorkoutRecord {
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }

    /// Duration converted to minutes
    pub fn duration_min(&self) -> f64 {
        self.duration * MIN_IN_H
    }
}

/// Computation contract for a workout kind
///
/// Distance and mean speed have default formulas; the calorie formula has none
/// and must be supplied by every kind.
pub trait Training {
    /// Kind reported in the summary
    const KIND: WorkoutKind;

    /// Distance covered by one action (metres)
    const LEN_STEP: f64 = LEN_STEP;

    /// Raw inputs of this workout
    fn record(&self) -> &WorkoutRecord;

    /// Distance in kilometres
    fn distance_km(&self) -> f64 {
        f64::from(self.record().action) * Self::LEN_STEP / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.record().duration
    }

    /// Calories spent (kcal)
    fn spent_calories(&self) -> f64;

    /// Build the summary message for this workout
    fn show_training_info(&self) -> InfoMessage {
        InfoMessage::new(
            Self::KIND.label(),
            self.record().duration,
            self.distance_km(),
            self.mean_speed_kmh(),
            self.spent_calories(),
        )
    }
}

/// A workout of any supported kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running(_) => Running::KIND,
            Workout::SportsWalking(_) => SportsWalking::KIND,
            Workout::Swimming(_) => Swimming::KIND,
        }
    }

    pub fn record(&self) -> &WorkoutRecord {
        match self {
            Workout::Running(w) => w.record(),
            Workout::SportsWalking(w) => w.record(),
            Workout::Swimming(w) => w.record(),
        }
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            Workout::Running(w) => w.distance_km(),
            Workout::SportsWalking(w) => w.distance_km(),
            Workout::Swimming(w) => w.distance_km(),
        }
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Running(w) => w.mean_speed_kmh(),
            Workout::SportsWalking(w) => w.mean_speed_kmh(),
            Workout::Swimming(w) => w.mean_speed_kmh(),
        }
    }

    pub fn spent_calories(&self) -> f64 {
        match self {
            Workout::Running(w) => w.spent_calories(),
            Workout::SportsWalking(w) => w.spent_calories(),
            Workout::Swimming(w) => w.spent_calories(),
        }
    }

    pub fn show_training_info(&self) -> InfoMessage {
        match self {
            Workout::Running(w) => w.show_training_info(),
            Workout::SportsWalking(w) => w.show_training_info(),
            Workout::Swimming(w) => w.show_training_info(),
        }
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Workout::SportsWalking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}
