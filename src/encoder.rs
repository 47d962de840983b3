//! Summary encoding
//!
//! This module wraps a workout summary into a JSON payload carrying producer and
//! provenance metadata. Metrics are rounded to three decimals, matching the text
//! summary.

use chrono::Utc;
use uuid::Uuid;

use crate::error::WorkoutError;
use crate::message::round3;
use crate::types::{SummaryMetrics, SummaryPayload, SummaryProducer, SummaryProvenance};
use crate::workouts::Workout;
use crate::{PRODUCER_NAME, STATS_VERSION};

/// Current summary payload schema version
pub const SUMMARY_SCHEMA_VERSION: &str = "1.0.0";

/// Encoder producing summary payloads
pub struct SummaryEncoder {
    instance_id: String,
}

impl Default for SummaryEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Encode a workout into a summary payload
    pub fn encode(&self, workout: &Workout) -> SummaryPayload {
        let info = workout.show_training_info();

        SummaryPayload {
            schema_version: SUMMARY_SCHEMA_VERSION.to_string(),
            producer: SummaryProducer {
                name: PRODUCER_NAME.to_string(),
                version: STATS_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            provenance: SummaryProvenance {
                workout_code: workout.kind().code().to_string(),
                computed_at_utc: Utc::now().to_rfc3339(),
            },
            summary: SummaryMetrics {
                training_type: info.training_type,
                duration_h: round3(info.duration),
                distance_km: round3(info.distance),
                speed_kmh: round3(info.speed),
                calories_kcal: round3(info.calories),
            },
        }
    }

    /// Encode to a compact JSON string
    pub fn encode_to_json(&self, workout: &Workout) -> Result<String, WorkoutError> {
        serde_json::to_string(&self.encode(workout)).map_err(WorkoutError::JsonError)
    }

    /// Encode to a pretty-printed JSON string
    pub fn encode_to_json_pretty(&self, workout: &Workout) -> Result<String, WorkoutError> {
        serde_json::to_string_pretty(&self.encode(workout)).map_err(WorkoutError::JsonError)
    }
}
