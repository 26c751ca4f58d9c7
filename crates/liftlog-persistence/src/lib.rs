//! Persistent storage for Lift Log workouts.
//!
//! The whole workout collection lives under one key of a key-value medium as
//! a single JSON document. [`WorkoutStore`] exposes create/read/update/delete
//! operations over workouts, exercises and sets, each one a complete
//! load → mutate → save cycle.
//!
//! # Stored Format
//!
//! ```text
//! [{ "id": string, "name": string, "date": ISO-8601 string,
//!    "exercises": [{ "id": string, "name": string,
//!                     "imageUri"?: string,
//!                     "sets": [{ "weight": number, "reps": number }] }] }]
//! ```
//!
//! A missing or blank value is an empty collection. A value that fails to
//! decode is reported as [`StoreError::StorageUnavailable`] and is never
//! overwritten by a mutation.
//!
//! # Example
//!
//! ```ignore
//! use liftlog_model::{Exercise, Workout};
//! use liftlog_persistence::{FileMedium, WorkoutStore};
//!
//! let store = WorkoutStore::new(FileMedium::new("/path/to/data"));
//!
//! let mut workout = Workout::new("Leg Day");
//! workout.add_exercise(Exercise::named("Squat"));
//! store.create_workout(workout).await?;
//!
//! let workouts = store.list_workouts().await?;
//! ```
//!
//! # Architecture
//!
//! - `medium/` - The [`KeyValueMedium`] trait plus memory and file media
//! - `store.rs` - [`WorkoutStore`] operations
//! - `codec.rs` - Collection ↔ JSON text
//! - `config.rs` - [`StoreConfig`]
//! - `error.rs` - Error types with user-friendly messages

mod codec;
mod config;
mod error;
mod medium;
mod store;

pub use config::{DEFAULT_STORAGE_KEY, StoreConfig};
pub use error::{Entity, MediumError, Result, StoreError};
pub use medium::{FileMedium, KeyValueMedium, MemoryMedium};
pub use store::WorkoutStore;
