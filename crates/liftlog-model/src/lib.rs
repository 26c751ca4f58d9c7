//! Record model for Lift Log.
//!
//! Workouts own an ordered list of exercises, and exercises own an ordered
//! list of sets. These types define the canonical persisted shape; they carry
//! no storage behavior of their own.

pub mod error;
pub mod exercise;
pub mod ids;
pub mod workout;

pub use error::{ModelError, Result};
pub use exercise::{Exercise, Set, SetField, UNNAMED_EXERCISE};
pub use ids::new_record_id;
pub use workout::{Collection, Workout, format_date};
