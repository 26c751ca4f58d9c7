//! Lift Log CLI.

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use liftlog_cli::commands::{self, NewWorkout};
use liftlog_cli::config::{AppConfig, config_path, load_config};
use liftlog_cli::logging::{LogConfig, LogFormat, init_logging};
use liftlog_persistence::{FileMedium, StoreError, WorkoutStore};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod render;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::render::{print_workout, print_workout_list};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(error) => {
            eprintln!("error: failed to start runtime: {error}");
            std::process::exit(1);
        }
    };
    let exit_code = match runtime.block_on(run(cli)) {
        Ok(()) => 0,
        Err(error) => {
            report_error(&error);
            1
        }
    };
    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    let app_config = match cli.config.clone().or_else(config_path) {
        Some(path) => load_config(&path),
        None => AppConfig::default(),
    }
    .with_overrides(cli.data_dir.clone(), cli.storage_key.clone());
    let data_dir = app_config.resolve_data_dir()?;
    let store = WorkoutStore::with_config(FileMedium::new(data_dir), &app_config.store_config());
    tracing::debug!(
        data_dir = %store.medium().root().display(),
        key = store.key(),
        "opened workout store"
    );

    match cli.command {
        Command::List { search } => {
            let workouts = commands::list(&store, search.as_deref()).await?;
            print_workout_list(&workouts, search.as_deref());
        }
        Command::Show { id } => {
            let workout = commands::show(&store, &id).await?;
            print_workout(&workout);
        }
        Command::New(args) => {
            let workout = commands::create(
                &store,
                NewWorkout {
                    name: args.name,
                    date: args.date,
                    exercises: args.exercises,
                },
            )
            .await?;
            println!("Created workout {}", workout.id);
            print_workout(&workout);
        }
        Command::Rename { id, name } => {
            let workout = commands::rename(&store, &id, &name).await?;
            println!("Renamed workout {} to '{}'", workout.id, workout.name);
        }
        Command::SetDate { id, date } => {
            let workout = commands::set_date(&store, &id, date).await?;
            println!("Workout {} is now dated {}", workout.id, workout.date);
        }
        Command::AddExercise {
            workout_id,
            exercise,
        } => {
            let added = commands::add_exercise(&store, &workout_id, &exercise).await?;
            println!("Added exercise '{}' ({})", added.name, added.id);
        }
        Command::AddSet(args) => {
            let index = commands::add_set(
                &store,
                &args.workout_id,
                &args.exercise_id,
                args.values.weight.as_deref(),
                args.values.reps.as_deref(),
            )
            .await?;
            println!("Added set {}", index + 1);
        }
        Command::EditSet { target, values } => {
            let set = commands::edit_set(
                &store,
                &target.workout_id,
                &target.exercise_id,
                target.index(),
                values.weight.as_deref(),
                values.reps.as_deref(),
            )
            .await?;
            println!("Set {} is now {} kg x {}", target.set, set.weight, set.reps);
        }
        Command::SetImage {
            workout_id,
            exercise_id,
            uri,
        } => {
            let cleared = uri.is_none();
            commands::set_image(&store, &workout_id, &exercise_id, uri).await?;
            if cleared {
                println!("Cleared image for exercise {exercise_id}");
            } else {
                println!("Updated image for exercise {exercise_id}");
            }
        }
        Command::Delete { id } => {
            commands::delete(&store, &id).await?;
            println!("Deleted workout {id}");
        }
        Command::DeleteExercise {
            workout_id,
            exercise_id,
        } => {
            commands::delete_exercise(&store, &workout_id, &exercise_id).await?;
            println!("Deleted exercise {exercise_id}");
        }
        Command::DeleteSet { target } => {
            commands::delete_set(&store, &target.workout_id, &target.exercise_id, target.index())
                .await
                .with_context(|| format!("set {}", target.set))?;
            println!("Deleted set {}", target.set);
        }
    }
    Ok(())
}

fn report_error(error: &anyhow::Error) {
    tracing::debug!("command failed: {error:?}");
    match error.downcast_ref::<StoreError>() {
        Some(store_error) => {
            eprintln!("error: {}", store_error.user_message());
            if let Some(hint) = store_error.suggestion() {
                eprintln!("hint: {hint}");
            }
        }
        None => eprintln!("error: {error:#}"),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };

    let mut config = LogConfig::default()
        .with_level(level_filter)
        .with_format(format)
        .with_ansi(with_ansi)
        .with_timestamps(cli.log_timestamps || cli.log_file.is_some())
        .with_target(level_filter >= LevelFilter::DEBUG)
        .with_log_file(cli.log_file.clone());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config
}
