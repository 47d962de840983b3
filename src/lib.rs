//! Workout Stats - distance, speed and calorie statistics for workouts
//!
//! A sensor package (a workout code plus positional readings) is turned into a
//! workout record, whose formulas produce a summary: package reader → workout
//! record → info message (text) or summary encoder (JSON).
//!
//! ## Workouts
//!
//! - **Running** (`RUN`): action, duration, weight
//! - **Sports walking** (`WLK`): action, duration, weight, height
//! - **Swimming** (`SWM`): action, duration, weight, pool length, pool count

pub mod encoder;
pub mod error;
pub mod message;
pub mod package;
pub mod types;
pub mod workouts;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use encoder::SummaryEncoder;
pub use error::WorkoutError;
pub use message::InfoMessage;
pub use package::read_package;
pub use types::WorkoutKind;
pub use workouts::{Running, SportsWalking, Swimming, Training, Workout, WorkoutRecord};

/// Library version embedded in all summary payloads
pub const STATS_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for summary payloads
pub const PRODUCER_NAME: &str = "workout-stats";
