//! Sports walking workout

use serde::{Deserialize, Serialize};

use super::{Training, WorkoutRecord};
use crate::types::WorkoutKind;

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Sports walking workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportsWalking {
    pub record: WorkoutRecord,
    /// Athlete height (cm)
    pub height: f64,
}

impl SportsWalking {
    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            record: WorkoutRecord::new(action, duration, weight),
            height,
        }
    }
}

impl Training for SportsWalking {
    const KIND: WorkoutKind = WorkoutKind::SportsWalking;

    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn spent_calories(&self) -> f64 {
        let duration_min = self.record.duration_min();
        let weight = self.record.weight;
        // Floor division: rounds toward negative infinity.
        let speed_height_ratio = (self.mean_speed_kmh().powi(2) / self.height).floor();

        (CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_height_ratio * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * duration_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walking_calories_below_height_ratio() {
        let walking = SportsWalking::new(9000, 1.0, 75.0, 180.0);

        // speed 5.85, 5.85^2 / 180 = 0.19 -> 0
        // 0.035 * 75 * 60 = 157.5
        assert!((walking.mean_speed_kmh() - 5.85).abs() < 1e-9);
        assert!((walking.spent_calories() - 157.5).abs() < 1e-6);
    }

    #[test]
    fn test_walking_ratio_is_floored() {
        let walking = SportsWalking::new(30000, 1.0, 75.0, 180.0);

        // speed 19.5, 380.25 / 180 = 2.1125 -> 2
        // (2.625 + 2 * 2.175) * 60 = 418.5
        assert!((walking.spent_calories() - 418.5).abs() < 1e-6);
    }

    #[test]
    fn test_walking_floor_rounds_toward_negative_infinity() {
        let walking = SportsWalking::new(9000, 1.0, 75.0, -180.0);

        // 34.2225 / -180 = -0.19 -> -1 (truncation would give 0)
        // (2.625 - 2.175) * 60 = 27.0
        assert!((walking.spent_calories() - 27.0).abs() < 1e-6);
    }
}
