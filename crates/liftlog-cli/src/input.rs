//! Parsing of command-line workout input.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use liftlog_model::{Exercise, Set};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("exercise name must not be empty")]
    EmptyExerciseName,
    #[error("invalid set '{0}': expected WEIGHTxREPS, e.g. 60x5")]
    InvalidSet(String),
    #[error("invalid date '{0}': expected YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidDate(String),
}

/// An exercise described on the command line as `NAME[:WEIGHTxREPS,...]`.
///
/// Without a set list the exercise starts with one zeroed set.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSpec {
    pub name: String,
    pub sets: Vec<Set>,
}

impl ExerciseSpec {
    /// Build a fresh exercise (with a new id) from this description.
    pub fn to_exercise(&self) -> Exercise {
        let exercise = Exercise::named(self.name.clone());
        if self.sets.is_empty() {
            exercise
        } else {
            exercise.with_sets(self.sets.clone())
        }
    }
}

impl FromStr for ExerciseSpec {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, sets) = match s.rsplit_once(':') {
            Some((name, sets)) => (name.trim(), parse_sets(sets)?),
            None => (s.trim(), Vec::new()),
        };
        if name.is_empty() {
            return Err(InputError::EmptyExerciseName);
        }
        Ok(Self {
            name: name.to_string(),
            sets,
        })
    }
}

fn parse_sets(list: &str) -> Result<Vec<Set>, InputError> {
    list.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_set)
        .collect()
}

/// Parse `WEIGHTxREPS` (`x` or `X`).
pub fn parse_set(token: &str) -> Result<Set, InputError> {
    let invalid = || InputError::InvalidSet(token.to_string());
    let (weight, reps) = token
        .split_once(['x', 'X'])
        .ok_or_else(invalid)?;
    let weight: f64 = weight.trim().parse().map_err(|_| invalid())?;
    let reps: u32 = reps.trim().parse().map_err(|_| invalid())?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(invalid());
    }
    Ok(Set::new(weight, reps))
}

/// Parse a workout date: a calendar day (midnight UTC) or a full timestamp.
pub fn parse_date(value: &str) -> Result<DateTime<Utc>, InputError> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| InputError::InvalidDate(value.to_string()))
}
