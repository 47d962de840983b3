//! Training summary message
//!
//! Holds the five computed values of a workout and renders them into the fixed
//! summary line shown to the user.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Computed workout values ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    /// Workout label ("Running", "SportsWalking", "Swimming")
    pub training_type: String,
    /// Duration (hours)
    pub duration: f64,
    /// Distance (kilometres)
    pub distance: f64,
    /// Mean speed (km/h)
    pub speed: f64,
    /// Calories spent (kcal)
    pub calories: f64,
}

impl InfoMessage {
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Render the summary line, every number with three decimals
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

/// Round to three decimal places
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_message_template() {
        let msg = InfoMessage::new("Running", 1.0, 9.75, 9.75, 699.75);
        assert_eq!(
            msg.get_message(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
        );
    }

    #[test]
    fn test_trailing_zeros_kept() {
        let msg = InfoMessage::new("Swimming", 0.5, 2.0, 4.0, 100.0);
        let text = msg.to_string();
        assert!(text.contains("Длительность: 0.500 ч."));
        assert!(text.contains("Дистанция: 2.000 км"));
        assert!(text.contains("Ср. скорость: 4.000 км/ч"));
        assert!(text.contains("Потрачено ккал: 100.000."));
    }

    #[test]
    fn test_values_rounded_to_three_digits() {
        let msg = InfoMessage::new("Swimming", 1.0, 0.9936, 1.0, -12.34567);
        let text = msg.to_string();
        assert!(text.contains("Дистанция: 0.994 км"));
        assert!(text.contains("Потрачено ккал: -12.346."));
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(0.9936), 0.994);
        assert_eq!(round3(9.75), 9.75);
        assert_eq!(round3(-1.23449), -1.234);
    }
}
