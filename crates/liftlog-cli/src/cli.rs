//! CLI argument definitions for the `liftlog` binary.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use liftlog_cli::input::{ExerciseSpec, parse_date};

#[derive(Parser)]
#[command(
    name = "liftlog",
    version,
    about = "Lift Log - a personal workout log",
    long_about = "Record workouts, their exercises and sets, then browse, search,\n\
                  edit or delete them. All workouts are kept in one JSON document\n\
                  in the data directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp (always on with --log-file).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Config file to read instead of the platform default.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the workout data file (overrides the config file).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Storage key, used as the data file name (overrides the config file).
    #[arg(long = "storage-key", value_name = "KEY", global = true)]
    pub storage_key: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List workouts, optionally filtered by name.
    List {
        /// Case-insensitive text to look for in workout names.
        #[arg(long = "search", short = 's', value_name = "TEXT")]
        search: Option<String>,
    },

    /// Show one workout with its exercises and sets.
    Show {
        #[arg(value_name = "WORKOUT_ID")]
        id: String,
    },

    /// Create a workout.
    New(NewArgs),

    /// Rename a workout.
    Rename {
        #[arg(value_name = "WORKOUT_ID")]
        id: String,
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Change a workout's date.
    SetDate {
        #[arg(value_name = "WORKOUT_ID")]
        id: String,
        /// YYYY-MM-DD or an RFC 3339 timestamp.
        #[arg(value_name = "DATE", value_parser = parse_date)]
        date: DateTime<Utc>,
    },

    /// Add an exercise to a workout.
    AddExercise {
        #[arg(value_name = "WORKOUT_ID")]
        workout_id: String,
        /// NAME[:WEIGHTxREPS,...], e.g. "Squat:100x5,110x3".
        #[arg(value_name = "EXERCISE")]
        exercise: ExerciseSpec,
    },

    /// Append a set to an exercise.
    AddSet(SetArgs),

    /// Change the weight and/or reps of a set.
    EditSet {
        #[command(flatten)]
        target: SetTarget,
        #[command(flatten)]
        values: SetValues,
    },

    /// Attach or clear an exercise image reference.
    SetImage {
        #[arg(value_name = "WORKOUT_ID")]
        workout_id: String,
        #[arg(value_name = "EXERCISE_ID")]
        exercise_id: String,
        /// Image URI to store; omit to clear.
        #[arg(value_name = "URI")]
        uri: Option<String>,
    },

    /// Delete a workout.
    Delete {
        #[arg(value_name = "WORKOUT_ID")]
        id: String,
    },

    /// Delete an exercise from a workout.
    DeleteExercise {
        #[arg(value_name = "WORKOUT_ID")]
        workout_id: String,
        #[arg(value_name = "EXERCISE_ID")]
        exercise_id: String,
    },

    /// Delete a set; later sets move up one position.
    DeleteSet {
        #[command(flatten)]
        target: SetTarget,
    },
}

#[derive(Parser)]
pub struct NewArgs {
    /// Workout name.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Workout date (default: now). YYYY-MM-DD or an RFC 3339 timestamp.
    #[arg(long = "date", value_name = "DATE", value_parser = parse_date)]
    pub date: Option<DateTime<Utc>>,

    /// Exercise as NAME[:WEIGHTxREPS,...]; repeat for more exercises.
    #[arg(long = "exercise", short = 'e', value_name = "EXERCISE", required = true)]
    pub exercises: Vec<ExerciseSpec>,
}

#[derive(Parser)]
pub struct SetArgs {
    #[arg(value_name = "WORKOUT_ID")]
    pub workout_id: String,
    #[arg(value_name = "EXERCISE_ID")]
    pub exercise_id: String,
    #[command(flatten)]
    pub values: SetValues,
}

/// A set addressed by position (1-based on the command line).
#[derive(Args)]
pub struct SetTarget {
    #[arg(value_name = "WORKOUT_ID")]
    pub workout_id: String,
    #[arg(value_name = "EXERCISE_ID")]
    pub exercise_id: String,
    /// Set number as shown by `show`, starting at 1.
    #[arg(value_name = "SET", value_parser = clap::value_parser!(u32).range(1..))]
    pub set: u32,
}

impl SetTarget {
    /// Zero-based index into the exercise's sets.
    pub fn index(&self) -> usize {
        self.set as usize - 1
    }
}

#[derive(Args)]
pub struct SetValues {
    /// Weight in kg.
    #[arg(long = "weight", short = 'w', value_name = "KG")]
    pub weight: Option<String>,
    /// Repetitions.
    #[arg(long = "reps", short = 'r', value_name = "REPS")]
    pub reps: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
