//! Sensor package reader
//!
//! Maps a package code and its positional parameters to a concrete workout.

use tracing::{debug, warn};

use crate::error::WorkoutError;
use crate::types::WorkoutKind;
use crate::workouts::{Running, SportsWalking, Swimming, Workout};

/// Build a workout from a package code and its positional parameters.
///
/// # Arguments
/// * `workout_type` - Package code: "SWM", "RUN" or "WLK"
/// * `data` - Parameters in constructor order:
///   - RUN: action, duration, weight
///   - WLK: action, duration, weight, height
///   - SWM: action, duration, weight, length_pool, count_pool
///
/// # Example
/// ```
/// use workout_stats::read_package;
///
/// let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
/// assert_eq!(workout.show_training_info().training_type, "Running");
/// ```
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let kind = WorkoutKind::from_code(workout_type).inspect_err(|_| {
        warn!(code = workout_type, "rejected package with unknown workout type");
    })?;

    if data.len() != kind.arity() {
        warn!(
            code = workout_type,
            expected = kind.arity(),
            actual = data.len(),
            "rejected package with wrong parameter count"
        );
        return Err(WorkoutError::ParameterCount {
            code: workout_type.to_string(),
            expected: kind.arity(),
            actual: data.len(),
        });
    }

    let action = whole_count("action", data[0])?;
    let (duration, weight) = (data[1], data[2]);

    let workout = match kind {
        WorkoutKind::Running => Running::new(action, duration, weight).into(),
        WorkoutKind::SportsWalking => SportsWalking::new(action, duration, weight, data[3]).into(),
        WorkoutKind::Swimming => {
            let count_pool = whole_count("count_pool", data[4])?;
            Swimming::new(action, duration, weight, data[3], count_pool).into()
        }
    };

    debug!(code = workout_type, action, duration, weight, "read workout package");
    Ok(workout)
}

/// Convert a count parameter (steps, strokes, laps) to an integer
fn whole_count(name: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workouts::Training;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_swimming_package() {
        let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();

        assert_eq!(
            workout,
            Workout::Swimming(Swimming::new(720, 1.0, 80.0, 25.0, 40))
        );
    }

    #[test]
    fn test_read_running_and_walking_packages() {
        let running = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        let walking = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();

        assert_eq!(running.kind(), WorkoutKind::Running);
        match walking {
            Workout::SportsWalking(w) => {
                assert_eq!(w.height, 180.0);
                assert_eq!(w.record().action, 9000);
            }
            other => panic!("expected walking, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_code_fails_for_any_parameters() {
        for data in [&[][..], &[1.0, 1.0, 1.0][..], &[720.0, 1.0, 80.0, 25.0, 40.0][..]] {
            let err = read_package("XYZ", data).unwrap_err();
            assert!(matches!(err, WorkoutError::InvalidWorkoutType(ref c) if c == "XYZ"));
        }
    }

    #[test]
    fn test_wrong_parameter_count() {
        let err = read_package("WLK", &[9000.0, 1.0, 75.0]).unwrap_err();

        match err {
            WorkoutError::ParameterCount {
                code,
                expected,
                actual,
            } => {
                assert_eq!(code, "WLK");
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_fractional_count_rejected() {
        let err = read_package("RUN", &[100.5, 1.0, 75.0]).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidParameter { name: "action", .. }
        ));

        let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -1.0]).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidParameter {
                name: "count_pool",
                ..
            }
        ));
    }

    #[test]
    fn test_non_count_parameters_pass_through() {
        // Zero duration and negative weight are not validated.
        let workout = read_package("RUN", &[15000.0, 0.0, -75.0]).unwrap();
        assert_eq!(workout.record().duration, 0.0);
        assert_eq!(workout.record().weight, -75.0);
    }
}
