//! Key-value media that hold the serialized collection.
//!
//! A medium is an opaque string store addressed by key. The workout store
//! only ever uses one key, reads the whole value, and writes the whole value
//! back; atomicity of that single write is the medium's responsibility.

mod file;
mod memory;

pub use file::FileMedium;
pub use memory::MemoryMedium;

use crate::error::MediumError;

/// String-keyed storage backing a [`WorkoutStore`](crate::WorkoutStore).
pub trait KeyValueMedium: Send + Sync {
    /// Read the value stored under `key`; `None` if nothing was ever written.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, MediumError>> + Send;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: String) -> impl Future<Output = Result<(), MediumError>> + Send;
}
