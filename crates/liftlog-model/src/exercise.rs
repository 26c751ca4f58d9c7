//! Exercises and the sets performed within them.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::ids::new_record_id;

/// Name given to exercises saved without one.
pub const UNNAMED_EXERCISE: &str = "Unnamed Exercise";

/// One performed set: a weight lifted for a number of repetitions.
///
/// Sets have no identity of their own. They are addressed by position within
/// their exercise, and positions shift when an earlier set is removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Set {
    /// Weight in kilograms.
    pub weight: f64,
    /// Repetition count.
    pub reps: u32,
}

impl Set {
    pub fn new(weight: f64, reps: u32) -> Self {
        Self {
            weight: sanitize_weight(weight),
            reps,
        }
    }

    /// Weight multiplied by reps.
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

/// Editable field of a [`Set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetField {
    Weight,
    Reps,
}

/// A named movement within a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Unique within the owning workout; never reassigned.
    pub id: String,
    pub name: String,
    /// Reference to a locally stored image. Stored verbatim, never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
    pub sets: Vec<Set>,
}

impl Default for Exercise {
    fn default() -> Self {
        Self::new()
    }
}

impl Exercise {
    /// Create an unnamed exercise with a fresh id and a single zeroed set.
    pub fn new() -> Self {
        Self {
            id: new_record_id(),
            name: String::new(),
            image_uri: None,
            sets: vec![Set::default()],
        }
    }

    /// Create a named exercise with a fresh id and a single zeroed set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::new()
        }
    }

    /// Replace the default set list.
    #[must_use]
    pub fn with_sets(mut self, sets: Vec<Set>) -> Self {
        self.sets = sets;
        self
    }

    #[must_use]
    pub fn with_image_uri(mut self, uri: impl Into<String>) -> Self {
        self.image_uri = Some(uri.into());
        self
    }

    /// Append a zeroed set and return its index.
    pub fn add_set(&mut self) -> usize {
        self.sets.push(Set::default());
        self.sets.len() - 1
    }

    /// Remove the set at `index`, shifting later sets down by one.
    pub fn remove_set(&mut self, index: usize) -> Result<Set> {
        if index >= self.sets.len() {
            return Err(ModelError::SetIndexOutOfRange {
                index,
                len: self.sets.len(),
            });
        }
        Ok(self.sets.remove(index))
    }

    /// Apply raw text input to one field of a set.
    ///
    /// Input that does not parse as a finite, non-negative number is stored
    /// as zero. Reps are truncated toward zero.
    pub fn apply_set_input(&mut self, index: usize, field: SetField, raw: &str) -> Result<()> {
        let len = self.sets.len();
        let set = self
            .sets
            .get_mut(index)
            .ok_or(ModelError::SetIndexOutOfRange { index, len })?;
        let value = parse_number(raw);
        match field {
            SetField::Weight => set.weight = value,
            // `as` saturates at u32::MAX
            SetField::Reps => set.reps = value.trunc() as u32,
        }
        Ok(())
    }

    /// Total volume across all sets.
    pub fn volume(&self) -> f64 {
        self.sets.iter().map(Set::volume).sum()
    }

    /// Name as it should be persisted: trimmed, with a placeholder when blank.
    pub fn normalized_name(&self) -> String {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            UNNAMED_EXERCISE.to_string()
        } else {
            trimmed.to_string()
        }
    }
}

fn parse_number(raw: &str) -> f64 {
    raw.trim().parse::<f64>().map_or(0.0, sanitize_weight)
}

fn sanitize_weight(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
