//! Swimming workout

use serde::{Deserialize, Serialize};

use super::{Training, WorkoutRecord, M_IN_KM};
use crate::types::WorkoutKind;

/// Distance covered by one stroke (metres)
pub const SWIM_LEN_STEP: f64 = 1.38;

const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Swimming workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    pub record: WorkoutRecord,
    /// Pool length (metres)
    pub length_pool: f64,
    /// Number of pool lengths swum
    pub count_pool: u32,
}

impl Swimming {
    pub fn new(action: u32, duration: f64, weight: f64, length_pool: f64, count_pool: u32) -> Self {
        Self {
            record: WorkoutRecord::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    const KIND: WorkoutKind = WorkoutKind::Swimming;
    const LEN_STEP: f64 = SWIM_LEN_STEP;

    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    /// Speed from pool lengths swum rather than stroke count
    fn mean_speed_kmh(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.record.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.record.weight
    }
}
