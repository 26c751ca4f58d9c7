//! Command implementations.
//!
//! Each command works from a fresh store read. Edits to an existing workout
//! load it, change the copy, and hand the whole workout back to
//! `update_workout`; indices given on the command line are checked against
//! that fresh copy.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use liftlog_model::{Exercise, Set, SetField, Workout};
use liftlog_persistence::{KeyValueMedium, WorkoutStore};
use liftlog_search::WorkoutSearch;
use tracing::info;

use crate::input::ExerciseSpec;

/// Description of a workout to create.
#[derive(Debug, Clone)]
pub struct NewWorkout {
    pub name: String,
    pub date: Option<DateTime<Utc>>,
    pub exercises: Vec<ExerciseSpec>,
}

/// Workouts whose name matches `search`, or all of them.
pub async fn list<M: KeyValueMedium>(
    store: &WorkoutStore<M>,
    search: Option<&str>,
) -> Result<Vec<Workout>> {
    let all = store.list_workouts().await.context("load workouts")?;
    let mut view = WorkoutSearch::new(all);
    if let Some(query) = search {
        view.set_query(query);
    }
    Ok(view.visible().into_iter().cloned().collect())
}

pub async fn show<M: KeyValueMedium>(store: &WorkoutStore<M>, id: &str) -> Result<Workout> {
    match store.get_workout(id).await.context("load workouts")? {
        Some(workout) => Ok(workout),
        None => bail!("workout not found: {id}"),
    }
}

pub async fn create<M: KeyValueMedium>(
    store: &WorkoutStore<M>,
    new: NewWorkout,
) -> Result<Workout> {
    let mut workout = match new.date {
        Some(date) => Workout::with_date(new.name, date),
        None => Workout::new(new.name),
    };
    for spec in &new.exercises {
        workout.add_exercise(spec.to_exercise());
    }
    workout.validate_for_save()?;
    workout.finalize();

    store
        .create_workout(workout.clone())
        .await
        .context("save workout")?;
    info!(workout_id = %workout.id, exercises = workout.exercises.len(), "created workout");
    Ok(workout)
}

pub async fn rename<M: KeyValueMedium>(
    store: &WorkoutStore<M>,
    id: &str,
    name: &str,
) -> Result<Workout> {
    let name = name.trim();
    if name.is_empty() {
        bail!("workout name must not be empty");
    }
    edit_workout(store, id, |workout| {
        workout.name = name.to_string();
        Ok(())
    })
    .await
    .map(|(workout, ())| workout)
}

pub async fn set_date<M: KeyValueMedium>(
    store: &WorkoutStore<M>,
    id: &str,
    date: DateTime<Utc>,
) -> Result<Workout> {
    edit_workout(store, id, |workout| {
        workout.set_date(date);
        Ok(())
    })
    .await
    .map(|(workout, ())| workout)
}

pub async fn add_exercise<M: KeyValueMedium>(
    store: &WorkoutStore<M>,
    workout_id: &str,
    spec: &ExerciseSpec,
) -> Result<Exercise> {
    let exercise = spec.to_exercise();
    let added = exercise.clone();
    edit_workout(store, workout_id, move |workout| {
        workout.add_exercise(exercise);
        Ok(())
    })
    .await?;
    Ok(added)
}

/// Append a set and fill in any provided values. Returns the new set's index.
pub async fn add_set<M: KeyValueMedium>(
    store: &WorkoutStore<M>,
    workout_id: &str,
    exercise_id: &str,
    weight: Option<&str>,
    reps: Option<&str>,
) -> Result<usize> {
    edit_workout(store, workout_id, |workout| {
        let exercise = find_exercise(workout, exercise_id)?;
        let index = exercise.add_set();
        apply_set_fields(exercise, index, weight, reps)?;
        Ok(index)
    })
    .await
    .map(|(_, index)| index)
}

/// Overwrite fields of an existing set. Returns the updated set.
pub async fn edit_set<M: KeyValueMedium>(
    store: &WorkoutStore<M>,
    workout_id: &str,
    exercise_id: &str,
    index: usize,
    weight: Option<&str>,
    reps: Option<&str>,
) -> Result<Set> {
    edit_workout(store, workout_id, |workout| {
        let exercise = find_exercise(workout, exercise_id)?;
        apply_set_fields(exercise, index, weight, reps)?;
        Ok(exercise.sets[index])
    })
    .await
    .map(|(_, set)| set)
}

pub async fn set_image<M: KeyValueMedium>(
    store: &WorkoutStore<M>,
    workout_id: &str,
    exercise_id: &str,
    uri: Option<String>,
) -> Result<()> {
    edit_workout(store, workout_id, |workout| {
        workout.set_exercise_image(exercise_id, uri)?;
        Ok(())
    })
    .await
    .map(|_| ())
}

pub async fn delete<M: KeyValueMedium>(store: &WorkoutStore<M>, id: &str) -> Result<()> {
    store.delete_workout(id).await.context("delete workout")?;
    info!(workout_id = %id, "deleted workout");
    Ok(())
}

pub async fn delete_exercise<M: KeyValueMedium>(
    store: &WorkoutStore<M>,
    workout_id: &str,
    exercise_id: &str,
) -> Result<()> {
    store
        .delete_exercise(workout_id, exercise_id)
        .await
        .context("delete exercise")?;
    Ok(())
}

pub async fn delete_set<M: KeyValueMedium>(
    store: &WorkoutStore<M>,
    workout_id: &str,
    exercise_id: &str,
    index: usize,
) -> Result<()> {
    store
        .delete_set(workout_id, exercise_id, index)
        .await
        .context("delete set")?;
    Ok(())
}

/// Load one workout, apply `edit` to it, and write the whole workout back.
async fn edit_workout<M, F, T>(store: &WorkoutStore<M>, id: &str, edit: F) -> Result<(Workout, T)>
where
    M: KeyValueMedium,
    F: FnOnce(&mut Workout) -> Result<T>,
{
    let mut workout = show(store, id).await?;
    let output = edit(&mut workout)?;
    store
        .update_workout(workout.clone())
        .await
        .context("save workout")?;
    Ok((workout, output))
}

fn find_exercise<'a>(workout: &'a mut Workout, exercise_id: &str) -> Result<&'a mut Exercise> {
    match workout.exercise_mut(exercise_id) {
        Some(exercise) => Ok(exercise),
        None => bail!("exercise not found: {exercise_id}"),
    }
}

fn apply_set_fields(
    exercise: &mut Exercise,
    index: usize,
    weight: Option<&str>,
    reps: Option<&str>,
) -> Result<()> {
    if let Some(raw) = weight {
        exercise.apply_set_input(index, SetField::Weight, raw)?;
    }
    if let Some(raw) = reps {
        exercise.apply_set_input(index, SetField::Reps, raw)?;
    }
    if index >= exercise.sets.len() {
        bail!(
            "set index {index} out of range (exercise has {} sets)",
            exercise.sets.len()
        );
    }
    Ok(())
}
