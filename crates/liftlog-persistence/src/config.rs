//! Store configuration.

use serde::{Deserialize, Serialize};

/// Key the collection is stored under when nothing else is configured.
pub const DEFAULT_STORAGE_KEY: &str = "workouts";

/// Configuration for a [`WorkoutStore`](crate::WorkoutStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// The single medium key holding the serialized collection.
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    /// Use a different storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
