//! Conversion between the collection and its stored JSON text.

use liftlog_model::Collection;
use thiserror::Error;

/// A collection that cannot be written in a form that reads back.
#[derive(Debug, Error)]
pub(crate) enum EncodeError {
    #[error("invalid weight {weight} in set {set} of exercise '{exercise_id}' (workout '{workout_id}')")]
    InvalidWeight {
        workout_id: String,
        exercise_id: String,
        set: usize,
        weight: f64,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Decode a stored value.
///
/// A missing or blank value is the first-run state and decodes to an empty
/// collection. Anything else must be a valid JSON array of workouts.
pub(crate) fn decode_collection(raw: Option<&str>) -> Result<Collection, serde_json::Error> {
    match raw {
        Some(text) if !text.trim().is_empty() => serde_json::from_str(text),
        _ => Ok(Collection::new()),
    }
}

/// Encode a collection for storage.
///
/// Weights must be finite and non-negative. JSON has no encoding for NaN or
/// infinity, so such a set would be written as `null` and the stored value
/// would no longer decode.
pub(crate) fn encode_collection(collection: &Collection) -> Result<String, EncodeError> {
    check_weights(collection)?;
    Ok(serde_json::to_string(collection)?)
}

fn check_weights(collection: &Collection) -> Result<(), EncodeError> {
    for workout in collection {
        for exercise in &workout.exercises {
            for (set, s) in exercise.sets.iter().enumerate() {
                if !s.weight.is_finite() || s.weight < 0.0 {
                    return Err(EncodeError::InvalidWeight {
                        workout_id: workout.id.clone(),
                        exercise_id: exercise.id.clone(),
                        set,
                        weight: s.weight,
                    });
                }
            }
        }
    }
    Ok(())
}
