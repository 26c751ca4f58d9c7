//! In-process medium.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::KeyValueMedium;
use crate::error::MediumError;

/// Shared in-memory key-value map.
///
/// Clones share the same underlying map, so a handle kept by the caller
/// observes every write made through the store.
#[derive(Debug, Clone, Default)]
pub struct MemoryMedium {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a medium with one value already stored.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            values: Arc::new(Mutex::new(HashMap::from([(key.into(), value.into())]))),
        }
    }

    /// Current raw value for `key`, read synchronously.
    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.lock().ok().and_then(|values| values.get(key).cloned())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, MediumError> {
        self.values
            .lock()
            .map_err(|_| MediumError::Unavailable("memory medium lock poisoned".to_string()))
    }
}

impl KeyValueMedium for MemoryMedium {
    async fn get(&self, key: &str) -> Result<Option<String>, MediumError> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), MediumError> {
        self.lock()?.insert(key.to_string(), value);
        Ok(())
    }
}
