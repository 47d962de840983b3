//! Workout CLI - Command-line interface for workout statistics
//!
//! Commands:
//! - demo: Summarize the built-in sample packages
//! - show: Summarize a single package given on the command line
//! - codes: List supported workout codes and their parameters

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use workout_stats::types::SummaryPayload;
use workout_stats::{read_package, SummaryEncoder, Workout, WorkoutError, WorkoutKind};
use workout_stats::{PRODUCER_NAME, STATS_VERSION};

/// Sample packages processed by `workout demo`
const DEMO_PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

/// Workout - distance, speed and calorie statistics for workouts
#[derive(Parser)]
#[command(name = "workout")]
#[command(author = "Synheart AI Inc")]
#[command(version = STATS_VERSION)]
#[command(about = "Summarize running, walking and swimming workouts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the built-in sample packages
    Demo {
        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Summarize a single package
    Show {
        /// Workout code (SWM, RUN or WLK)
        code: String,

        /// Positional parameters (see `workout codes`)
        #[arg(required = true, allow_negative_numbers = true)]
        params: Vec<f64>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// List supported workout codes
    Codes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Summary line (one per workout)
    Text,
    /// Newline-delimited JSON (one summary payload per line)
    Ndjson,
    /// Pretty-printed JSON array of summary payloads
    JsonPretty,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), WorkoutCliError> {
    match cli.command {
        Commands::Demo { format } => cmd_demo(format),
        Commands::Show {
            code,
            params,
            format,
        } => cmd_show(&code, &params, format),
        Commands::Codes { json } => cmd_codes(json),
    }
}

fn cmd_demo(format: OutputFormat) -> Result<(), WorkoutCliError> {
    let workouts = DEMO_PACKAGES
        .iter()
        .map(|(code, data)| read_package(code, data))
        .collect::<Result<Vec<_>, _>>()?;

    info!(count = workouts.len(), "processing demo packages");
    write_output(&workouts, &format)
}

fn cmd_show(code: &str, params: &[f64], format: OutputFormat) -> Result<(), WorkoutCliError> {
    let workout = read_package(code, params)?;
    write_output(&[workout], &format)
}

fn cmd_codes(json: bool) -> Result<(), WorkoutCliError> {
    let codes: Vec<CodeInfo> = WorkoutKind::ALL
        .iter()
        .map(|kind| CodeInfo {
            code: kind.code(),
            label: kind.label(),
            parameters: kind.parameter_names(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&codes)?);
    } else {
        println!("{} {}", PRODUCER_NAME, STATS_VERSION);
        println!();
        for info in &codes {
            println!(
                "  {}  {:<14} {}",
                info.code,
                info.label,
                info.parameters.join(", ")
            );
        }
    }

    Ok(())
}

// Helper functions

fn write_output(workouts: &[Workout], format: &OutputFormat) -> Result<(), WorkoutCliError> {
    let output = format_output(workouts, format)?;
    let mut stdout = io::stdout();
    write!(stdout, "{}", output)?;
    stdout.flush()?;
    Ok(())
}

fn format_output(workouts: &[Workout], format: &OutputFormat) -> Result<String, WorkoutCliError> {
    match format {
        OutputFormat::Text => {
            let mut lines: Vec<String> = Vec::new();
            for workout in workouts {
                lines.push(workout.show_training_info().get_message());
            }
            Ok(lines.join("\n") + "\n")
        }
        OutputFormat::Ndjson => {
            let encoder = SummaryEncoder::new();
            let mut lines: Vec<String> = Vec::new();
            for workout in workouts {
                lines.push(encoder.encode_to_json(workout)?);
            }
            Ok(lines.join("\n") + "\n")
        }
        OutputFormat::JsonPretty => {
            let encoder = SummaryEncoder::new();
            let payloads: Vec<SummaryPayload> =
                workouts.iter().map(|w| encoder.encode(w)).collect();
            Ok(serde_json::to_string_pretty(&payloads)? + "\n")
        }
    }
}

#[derive(Serialize)]
struct CodeInfo {
    code: &'static str,
    label: &'static str,
    parameters: &'static [&'static str],
}

// Error types

#[derive(Debug)]
enum WorkoutCliError {
    Io(io::Error),
    Workout(WorkoutError),
    Json(serde_json::Error),
}

impl From<io::Error> for WorkoutCliError {
    fn from(e: io::Error) -> Self {
        WorkoutCliError::Io(e)
    }
}

impl From<WorkoutError> for WorkoutCliError {
    fn from(e: WorkoutError) -> Self {
        WorkoutCliError::Workout(e)
    }
}

impl From<serde_json::Error> for WorkoutCliError {
    fn from(e: serde_json::Error) -> Self {
        WorkoutCliError::Json(e)
    }
}

#[derive(Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<WorkoutCliError> for CliError {
    fn from(e: WorkoutCliError) -> Self {
        match e {
            WorkoutCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: None,
            },
            WorkoutCliError::Workout(e @ WorkoutError::InvalidWorkoutType(_)) => CliError {
                code: "INVALID_WORKOUT_TYPE".to_string(),
                message: e.to_string(),
                hint: Some("Run 'workout codes' for supported codes".to_string()),
            },
            WorkoutCliError::Workout(
                e @ (WorkoutError::ParameterCount { .. } | WorkoutError::InvalidParameter { .. }),
            ) => CliError {
                code: "INVALID_PARAMETERS".to_string(),
                message: e.to_string(),
                hint: Some("Run 'workout codes' for the expected parameters".to_string()),
            },
            WorkoutCliError::Workout(e @ WorkoutError::JsonError(_)) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: None,
            },
            WorkoutCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: None,
            },
        }
    }
}
