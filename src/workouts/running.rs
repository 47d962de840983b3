//! Running workout

use serde::{Deserialize, Serialize};

use super::{Training, WorkoutRecord, M_IN_KM};
use crate::types::WorkoutKind;

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

/// Running workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Running {
    pub record: WorkoutRecord,
}

impl Running {
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            record: WorkoutRecord::new(action, duration, weight),
        }
    }
}

impl Training for Running {
    const KIND: WorkoutKind = WorkoutKind::Running;

    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    /// Not clamped: below ~1.1 km/h the result is negative.
    fn spent_calories(&self) -> f64 {
        let duration_min = self.record.duration_min();
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh() - CALORIES_MEAN_SPEED_SHIFT)
            * self.record.weight
            / M_IN_KM
            * duration_min
    }
}
