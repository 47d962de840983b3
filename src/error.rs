//! Error types for workout statistics

use thiserror::Error;

/// Errors that can occur while building or encoding a workout
#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("Unknown workout type: {0}")]
    InvalidWorkoutType(String),

    #[error("Workout {code} expects {expected} parameters, got {actual}")]
    ParameterCount {
        code: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}
