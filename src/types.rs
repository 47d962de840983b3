//! Core types for workout statistics
//!
//! This module defines the workout kinds recognised by the package reader and the
//! JSON payload shapes produced by the summary encoder.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WorkoutError;

/// Workout kind, identified on the wire by a three-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    /// All supported kinds, in the order the codes are listed
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Resolve a package code ("SWM", "RUN", "WLK")
    pub fn from_code(code: &str) -> Result<Self, WorkoutError> {
        match code {
            "SWM" => Ok(WorkoutKind::Swimming),
            "RUN" => Ok(WorkoutKind::Running),
            "WLK" => Ok(WorkoutKind::SportsWalking),
            other => Err(WorkoutError::InvalidWorkoutType(other.to_string())),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Label shown as the workout type in summaries
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Positional parameter names expected by the package reader
    pub fn parameter_names(&self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Running => &["action", "duration", "weight"],
            WorkoutKind::SportsWalking => &["action", "duration", "weight", "height"],
            WorkoutKind::Swimming => &[
                "action",
                "duration",
                "weight",
                "length_pool",
                "count_pool",
            ],
        }
    }

    /// Number of positional parameters
    pub fn arity(&self) -> usize {
        self.parameter_names().len()
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutKind::from_code(s)
    }
}

/// Summary producer metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Summary provenance information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryProvenance {
    /// Package code the workout was read from
    pub workout_code: String,
    pub computed_at_utc: String,
}

/// Rounded workout metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub training_type: String,
    /// Duration (hours)
    pub duration_h: f64,
    /// Distance (kilometres)
    pub distance_km: f64,
    /// Mean speed (km/h)
    pub speed_kmh: f64,
    /// Calories spent (kcal)
    pub calories_kcal: f64,
}

/// Complete summary payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryPayload {
    pub schema_version: String,
    pub producer: SummaryProducer,
    pub provenance: SummaryProvenance,
    pub summary: SummaryMetrics,
}
