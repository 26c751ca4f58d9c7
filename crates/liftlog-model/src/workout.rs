//! Workout records and in-memory draft editing.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::exercise::Exercise;
use crate::ids::new_record_id;

/// The full ordered set of workouts; persisted as a single unit.
pub type Collection = Vec<Workout>;

/// A named, dated collection of exercises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Globally unique; immutable after creation.
    pub id: String,
    pub name: String,
    /// ISO-8601 timestamp, kept exactly as stored.
    pub date: String,
    /// Insertion order is preserved across saves.
    pub exercises: Vec<Exercise>,
}

impl Workout {
    /// Create an empty workout dated now.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_date(name, Utc::now())
    }

    /// Create an empty workout with an explicit date.
    pub fn with_date(name: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: new_record_id(),
            name: name.into(),
            date: format_date(date),
            exercises: Vec::new(),
        }
    }

    /// Parse the stored date.
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn set_date(&mut self, date: DateTime<Utc>) {
        self.date = format_date(date);
    }

    /// Check that a new workout is worth saving.
    pub fn validate_for_save(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ModelError::EmptyName);
        }
        if self.exercises.is_empty() {
            return Err(ModelError::NoExercises);
        }
        Ok(())
    }

    /// Trim names and give blank exercises a placeholder name.
    pub fn finalize(&mut self) {
        self.name = self.name.trim().to_string();
        for exercise in &mut self.exercises {
            exercise.name = exercise.normalized_name();
        }
    }

    /// Append an exercise and return its id.
    pub fn add_exercise(&mut self, exercise: Exercise) -> String {
        let id = exercise.id.clone();
        self.exercises.push(exercise);
        id
    }

    /// First exercise with the given id.
    pub fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn exercise_mut(&mut self, id: &str) -> Option<&mut Exercise> {
        self.exercises.iter_mut().find(|e| e.id == id)
    }

    pub fn rename_exercise(&mut self, id: &str, name: impl Into<String>) -> Result<()> {
        let exercise = self.require_exercise(id)?;
        exercise.name = name.into();
        Ok(())
    }

    pub fn set_exercise_image(&mut self, id: &str, uri: Option<String>) -> Result<()> {
        let exercise = self.require_exercise(id)?;
        exercise.image_uri = uri;
        Ok(())
    }

    /// Remove every exercise with the given id.
    ///
    /// Returns whether anything was removed.
    pub fn remove_exercise(&mut self, id: &str) -> bool {
        let before = self.exercises.len();
        self.exercises.retain(|e| e.id != id);
        self.exercises.len() != before
    }

    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }

    pub fn total_volume(&self) -> f64 {
        self.exercises.iter().map(Exercise::volume).sum()
    }

    fn require_exercise(&mut self, id: &str) -> Result<&mut Exercise> {
        self.exercise_mut(id)
            .ok_or_else(|| ModelError::ExerciseNotFound(id.to_string()))
    }
}

/// Render a timestamp the way workout dates are stored
/// (`2024-03-29T18:04:05.123Z`).
pub fn format_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}
