//! The workout store.
//!
//! Each operation loads the entire collection from the medium, applies one
//! change, and writes the entire collection back with a single `set`. No
//! state is cached between calls, so sequential calls always observe each
//! other's effects. Overlapping calls from concurrent tasks race and the last
//! write wins.

use liftlog_model::{Collection, Workout};

use crate::codec::{decode_collection, encode_collection};
use crate::config::StoreConfig;
use crate::error::{Entity, Result, StoreError};
use crate::medium::KeyValueMedium;

/// CRUD access to the persisted workout collection.
#[derive(Debug, Clone)]
pub struct WorkoutStore<M> {
    medium: M,
    key: String,
}

impl<M: KeyValueMedium> WorkoutStore<M> {
    /// Create a store using the default storage key.
    pub fn new(medium: M) -> Self {
        Self::with_config(medium, &StoreConfig::default())
    }

    pub fn with_config(medium: M, config: &StoreConfig) -> Self {
        Self {
            medium,
            key: config.storage_key.clone(),
        }
    }

    /// Key the collection is stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn medium(&self) -> &M {
        &self.medium
    }

    /// All workouts in persisted order.
    ///
    /// Returns an empty list when nothing has been stored yet.
    pub async fn list_workouts(&self) -> Result<Collection> {
        self.load().await
    }

    /// First workout with the given id.
    pub async fn get_workout(&self, id: &str) -> Result<Option<Workout>> {
        let collection = self.load().await?;
        Ok(collection.into_iter().find(|w| w.id == id))
    }

    /// Append a workout to the end of the collection.
    ///
    /// Ids are not checked for uniqueness; a colliding id is appended as a
    /// duplicate and later lookups resolve to the first match.
    pub async fn create_workout(&self, workout: Workout) -> Result<()> {
        let mut collection = self.load().await?;
        if collection.iter().any(|w| w.id == workout.id) {
            tracing::warn!(
                workout_id = %workout.id,
                "appending workout with an id that already exists"
            );
        }
        tracing::debug!(workout_id = %workout.id, "creating workout");
        collection.push(workout);
        self.save(&collection).await
    }

    /// Remove every workout with the given id. Unknown ids are not an error.
    pub async fn delete_workout(&self, id: &str) -> Result<()> {
        let mut collection = self.load().await?;
        let before = collection.len();
        collection.retain(|w| w.id != id);
        tracing::debug!(
            workout_id = %id,
            removed = before - collection.len(),
            "deleting workout"
        );
        self.save(&collection).await
    }

    /// Replace the first workout whose id matches, wholesale.
    ///
    /// Returns [`StoreError::NotFound`] without writing when no workout has
    /// that id.
    pub async fn update_workout(&self, workout: Workout) -> Result<()> {
        let mut collection = self.load().await?;
        let slot = collection
            .iter_mut()
            .find(|w| w.id == workout.id)
            .ok_or_else(|| StoreError::not_found(Entity::Workout, &workout.id))?;
        tracing::debug!(workout_id = %workout.id, "updating workout");
        *slot = workout;
        self.save(&collection).await
    }

    /// Remove an exercise from a workout.
    ///
    /// The workout must exist; an exercise id it does not contain leaves the
    /// workout as it was.
    pub async fn delete_exercise(&self, workout_id: &str, exercise_id: &str) -> Result<()> {
        let mut collection = self.load().await?;
        let workout = find_workout(&mut collection, workout_id)?;
        let removed = workout.remove_exercise(exercise_id);
        tracing::debug!(
            workout_id = %workout_id,
            exercise_id = %exercise_id,
            removed,
            "deleting exercise"
        );
        self.save(&collection).await
    }

    /// Remove the set at `set_index`, shifting later sets down by one.
    ///
    /// Set positions are not stable; recompute the index from a freshly
    /// loaded workout before calling.
    pub async fn delete_set(
        &self,
        workout_id: &str,
        exercise_id: &str,
        set_index: usize,
    ) -> Result<()> {
        let mut collection = self.load().await?;
        let workout = find_workout(&mut collection, workout_id)?;
        let exercise = workout
            .exercise_mut(exercise_id)
            .ok_or_else(|| StoreError::not_found(Entity::Exercise, exercise_id))?;
        let len = exercise.sets.len();
        if set_index >= len {
            return Err(StoreError::IndexOutOfRange {
                index: set_index,
                len,
            });
        }
        exercise.sets.remove(set_index);
        tracing::debug!(
            workout_id = %workout_id,
            exercise_id = %exercise_id,
            set_index,
            "deleting set"
        );
        self.save(&collection).await
    }

    async fn load(&self) -> Result<Collection> {
        let raw = self
            .medium
            .get(&self.key)
            .await
            .map_err(|e| StoreError::unavailable("read", &self.key, e))?;
        let collection = decode_collection(raw.as_deref())
            .map_err(|e| StoreError::unavailable("decode", &self.key, e))?;
        tracing::debug!(key = %self.key, workouts = collection.len(), "loaded collection");
        Ok(collection)
    }

    async fn save(&self, collection: &Collection) -> Result<()> {
        let text = encode_collection(collection)
            .map_err(|e| StoreError::unavailable("encode", &self.key, e))?;
        self.medium
            .set(&self.key, text)
            .await
            .map_err(|e| StoreError::unavailable("write", &self.key, e))?;
        tracing::info!("Saved {} workouts to '{}'", collection.len(), self.key);
        Ok(())
    }
}

fn find_workout<'a>(collection: &'a mut Collection, id: &str) -> Result<&'a mut Workout> {
    collection
        .iter_mut()
        .find(|w| w.id == id)
        .ok_or_else(|| StoreError::not_found(Entity::Workout, id))
}
