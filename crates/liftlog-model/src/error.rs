use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("workout name must not be empty")]
    EmptyName,
    #[error("workout must contain at least one exercise")]
    NoExercises,
    #[error("exercise not found: {0}")]
    ExerciseNotFound(String),
    #[error("set index {index} out of range (exercise has {len} sets)")]
    SetIndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
