//! Integration tests for the workout store.

use liftlog_model::{Exercise, Set, Workout};
use liftlog_persistence::{
    DEFAULT_STORAGE_KEY, Entity, FileMedium, KeyValueMedium, MediumError, MemoryMedium,
    StoreError, WorkoutStore,
};
use tempfile::tempdir;

fn leg_day() -> Workout {
    let mut workout = Workout::new("Leg Day");
    workout.add_exercise(Exercise::named("Squat").with_sets(vec![
        Set::new(100.0, 5),
        Set::new(110.0, 3),
        Set::new(120.0, 1),
    ]));
    workout.add_exercise(Exercise::named("Leg Press").with_image_uri("file:///press.jpg"));
    workout
}

fn arm_day() -> Workout {
    let mut workout = Workout::new("Arm day");
    workout.add_exercise(Exercise::named("Curl"));
    workout
}

/// Medium that refuses reads and/or writes.
#[derive(Default)]
struct FailingMedium {
    fail_reads: bool,
    fail_writes: bool,
    inner: MemoryMedium,
}

impl KeyValueMedium for FailingMedium {
    async fn get(&self, key: &str) -> Result<Option<String>, MediumError> {
        if self.fail_reads {
            return Err(MediumError::Unavailable("read refused".to_string()));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), MediumError> {
        if self.fail_writes {
            return Err(MediumError::Unavailable("write refused".to_string()));
        }
        self.inner.set(key, value).await
    }
}

#[tokio::test]
async fn first_run_lists_empty() {
    let store = WorkoutStore::new(MemoryMedium::new());
    assert!(store.list_workouts().await.unwrap().is_empty());

    let blank = WorkoutStore::new(MemoryMedium::with_value(DEFAULT_STORAGE_KEY, ""));
    assert!(blank.list_workouts().await.unwrap().is_empty());
}

#[tokio::test]
async fn created_workouts_round_trip_in_order() {
    let store = WorkoutStore::new(MemoryMedium::new());
    let a = leg_day();
    let b = arm_day();
    store.create_workout(a.clone()).await.unwrap();
    store.create_workout(b.clone()).await.unwrap();

    assert_eq!(store.list_workouts().await.unwrap(), vec![a, b]);
}

#[tokio::test]
async fn delete_workout_is_idempotent() {
    let store = WorkoutStore::new(MemoryMedium::new());
    let a = leg_day();
    let b = arm_day();
    store.create_workout(a.clone()).await.unwrap();
    store.create_workout(b.clone()).await.unwrap();

    store.delete_workout(&a.id).await.unwrap();
    let once = store.list_workouts().await.unwrap();
    store.delete_workout(&a.id).await.unwrap();
    let twice = store.list_workouts().await.unwrap();

    assert_eq!(once, vec![b]);
    assert_eq!(once, twice);

    store.delete_workout("never-existed").await.unwrap();
    assert_eq!(store.list_workouts().await.unwrap(), twice);
}

#[tokio::test]
async fn delete_workout_removes_every_duplicate() {
    let store = WorkoutStore::new(MemoryMedium::new());
    let a = leg_day();
    let mut dup = arm_day();
    dup.id = a.id.clone();
    store.create_workout(a.clone()).await.unwrap();
    store.create_workout(dup).await.unwrap();

    store.delete_workout(&a.id).await.unwrap();
    assert!(store.list_workouts().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_replaces_wholesale_in_place() {
    let store = WorkoutStore::new(MemoryMedium::new());
    let a = leg_day();
    let b = arm_day();
    let c = Workout::new("Cardio");
    for w in [&a, &b, &c] {
        store.create_workout(w.clone()).await.unwrap();
    }

    let mut replacement = Workout::new("Arms & Shoulders");
    replacement.id = b.id.clone();
    replacement.date = "2023-12-31T23:59:59.000Z".to_string();
    store.update_workout(replacement.clone()).await.unwrap();

    let listed = store.list_workouts().await.unwrap();
    assert_eq!(listed, vec![a, replacement.clone(), c]);
    // Not a merge: the old exercises are gone.
    assert!(listed[1].exercises.is_empty());
}

#[tokio::test]
async fn update_unknown_workout_is_not_found_and_unchanged() {
    let medium = MemoryMedium::new();
    let store = WorkoutStore::new(medium.clone());
    store.create_workout(leg_day()).await.unwrap();
    let before = medium.snapshot(DEFAULT_STORAGE_KEY);

    let err = store.update_workout(arm_day()).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(medium.snapshot(DEFAULT_STORAGE_KEY), before);
}

#[tokio::test]
async fn delete_exercise_removes_only_that_exercise() {
    let store = WorkoutStore::new(MemoryMedium::new());
    let w = leg_day();
    store.create_workout(w.clone()).await.unwrap();

    store
        .delete_exercise(&w.id, &w.exercises[0].id)
        .await
        .unwrap();

    let stored = store.get_workout(&w.id).await.unwrap().unwrap();
    assert_eq!(stored.exercises, vec![w.exercises[1].clone()]);

    // Unknown exercise inside a known workout is a no-op.
    store.delete_exercise(&w.id, "x").await.unwrap();
    assert_eq!(store.get_workout(&w.id).await.unwrap(), Some(stored));
}

#[tokio::test]
async fn delete_exercise_in_missing_workout_is_not_found() {
    let medium = MemoryMedium::new();
    let store = WorkoutStore::new(medium.clone());
    store.create_workout(leg_day()).await.unwrap();
    let before = store.list_workouts().await.unwrap();
    let raw_before = medium.snapshot(DEFAULT_STORAGE_KEY);

    let err = store
        .delete_exercise("missing-workout", "x")
        .await
        .unwrap_err();
    match err {
        StoreError::NotFound { entity, id } => {
            assert_eq!(entity, Entity::Workout);
            assert_eq!(id, "missing-workout");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert_eq!(store.list_workouts().await.unwrap(), before);
    assert_eq!(medium.snapshot(DEFAULT_STORAGE_KEY), raw_before);
}

#[tokio::test]
async fn delete_set_shifts_later_sets() {
    let store = WorkoutStore::new(MemoryMedium::new());
    let w = leg_day();
    let exercise_id = w.exercises[0].id.clone();
    store.create_workout(w.clone()).await.unwrap();

    store.delete_set(&w.id, &exercise_id, 1).await.unwrap();

    let stored = store.get_workout(&w.id).await.unwrap().unwrap();
    assert_eq!(
        stored.exercise(&exercise_id).unwrap().sets,
        vec![Set::new(100.0, 5), Set::new(120.0, 1)]
    );
    // The sibling exercise is untouched.
    assert_eq!(stored.exercises[1], w.exercises[1]);
}

#[tokio::test]
async fn corrupt_blob_fails_closed() {
    let medium = MemoryMedium::with_value(DEFAULT_STORAGE_KEY, "[{\"id\": ");
    let store = WorkoutStore::new(medium.clone());

    let err = store.list_workouts().await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::StorageUnavailable {
            operation: "decode",
            ..
        }
    ));

    // Mutations must not replace the unreadable value.
    assert!(store.create_workout(leg_day()).await.is_err());
    assert!(store.delete_workout("anything").await.is_err());
    assert_eq!(
        medium.snapshot(DEFAULT_STORAGE_KEY).as_deref(),
        Some("[{\"id\": ")
    );
}

#[tokio::test]
async fn unencodable_weight_is_rejected_before_writing() {
    let medium = MemoryMedium::new();
    let store = WorkoutStore::new(medium.clone());
    let good = leg_day();
    store.create_workout(good.clone()).await.unwrap();
    let raw_before = medium.snapshot(DEFAULT_STORAGE_KEY);

    let mut bad = Workout::new("Bad");
    bad.add_exercise(Exercise::named("Deadlift").with_sets(vec![Set {
        weight: f64::NAN,
        reps: 5,
    }]));
    assert!(matches!(
        store.create_workout(bad.clone()).await,
        Err(StoreError::StorageUnavailable {
            operation: "encode",
            ..
        })
    ));

    let mut edited = good.clone();
    edited.exercises[0].sets[0].weight = f64::INFINITY;
    assert!(matches!(
        store.update_workout(edited).await,
        Err(StoreError::StorageUnavailable {
            operation: "encode",
            ..
        })
    ));

    // Nothing was written, so the collection still loads.
    assert_eq!(medium.snapshot(DEFAULT_STORAGE_KEY), raw_before);
    assert_eq!(store.list_workouts().await.unwrap(), vec![good]);
}

#[tokio::test]
async fn medium_failures_are_storage_unavailable() {
    let unreadable = WorkoutStore::new(FailingMedium {
        fail_reads: true,
        ..FailingMedium::default()
    });
    assert!(matches!(
        unreadable.list_workouts().await,
        Err(StoreError::StorageUnavailable {
            operation: "read",
            ..
        })
    ));

    let unwritable = WorkoutStore::new(FailingMedium {
        fail_writes: true,
        ..FailingMedium::default()
    });
    assert!(unwritable.list_workouts().await.unwrap().is_empty());
    assert!(matches!(
        unwritable.create_workout(leg_day()).await,
        Err(StoreError::StorageUnavailable {
            operation: "write",
            ..
        })
    ));
    assert!(unwritable.list_workouts().await.unwrap().is_empty());
}

#[tokio::test]
async fn sequential_calls_observe_each_other() {
    let store = WorkoutStore::new(MemoryMedium::new());
    let mut w = leg_day();
    store.create_workout(w.clone()).await.unwrap();

    w.name = "Heavy Leg Day".to_string();
    store.update_workout(w.clone()).await.unwrap();
    store.delete_set(&w.id, &w.exercises[0].id, 0).await.unwrap();
    store
        .delete_exercise(&w.id, &w.exercises[1].id)
        .await
        .unwrap();

    let stored = store.get_workout(&w.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Heavy Leg Day");
    assert_eq!(stored.exercises.len(), 1);
    assert_eq!(
        stored.exercises[0].sets,
        vec![Set::new(110.0, 3), Set::new(120.0, 1)]
    );
}

#[tokio::test]
async fn file_medium_persists_across_store_instances() {
    let dir = tempdir().unwrap();
    let w = leg_day();

    {
        let store = WorkoutStore::new(FileMedium::new(dir.path()));
        store.create_workout(w.clone()).await.unwrap();
    }

    let reopened = WorkoutStore::new(FileMedium::new(dir.path()));
    assert_eq!(reopened.list_workouts().await.unwrap(), vec![w]);

    let raw = std::fs::read_to_string(dir.path().join("workouts.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["exercises"][1]["imageUri"], "file:///press.jpg");
    assert!(value[0]["exercises"][0].get("imageUri").is_none());
}
