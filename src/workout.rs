// ABOUTME: Workout planner session that seeds exercises with engine prescriptions
// ABOUTME: Add/update/remove exercises, start the session, and complete it with a summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CycleFit

//! # Workout Planner
//!
//! A `WorkoutPlan` is the in-memory workout being built or performed. Every
//! exercise added to it starts from the recommendation engine's prescription
//! and can then be edited by the user. Completing a workout returns a summary
//! and resets the plan for the next session.

use chrono::{DateTime, Utc};
use cyclefit_core::constants::planner::SECONDS_PER_SET;
use cyclefit_core::errors::{AppError, AppResult};
use cyclefit_core::models::{CyclePhase, Exercise, Profile};
use cyclefit_intelligence::RecommendationEngineTrait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// An exercise in the current workout with its working prescription
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutExercise {
    /// Catalog exercise
    pub exercise: Exercise,
    /// Working sets
    pub sets: u32,
    /// Reps per set
    pub reps: u32,
    /// Load in kilograms, if tracked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Rest between sets
    pub rest_seconds: u32,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Whether the user has ticked the exercise off
    pub completed: bool,
    /// Cycle phase the initial prescription was computed for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_phase: Option<CyclePhase>,
}

/// Partial edit of a workout exercise; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutExerciseUpdate {
    /// New set count
    pub sets: Option<u32>,
    /// New rep count
    pub reps: Option<u32>,
    /// New load in kilograms
    pub weight_kg: Option<f64>,
    /// New rest in seconds
    pub rest_seconds: Option<u32>,
    /// New notes
    pub notes: Option<String>,
    /// New completion state
    pub completed: Option<bool>,
}

/// Result of finishing a workout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutSummary {
    /// Identifier of the finished workout
    pub workout_id: Uuid,
    /// Name given to the workout
    pub name: String,
    /// Exercises ticked off
    pub completed_exercises: usize,
    /// Exercises in the workout
    pub total_exercises: usize,
    /// Sets across all exercises
    pub total_sets: u32,
    /// Whole minutes between start and completion
    pub duration_minutes: i64,
}

/// Workout being planned or performed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlan {
    id: Uuid,
    name: String,
    notes: Option<String>,
    exercises: Vec<WorkoutExercise>,
    started_at: Option<DateTime<Utc>>,
}

impl Default for WorkoutPlan {
    fn default() -> Self {
        Self::new("")
    }
}

impl WorkoutPlan {
    /// Empty plan with a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            notes: None,
            exercises: Vec::new(),
            started_at: None,
        }
    }

    /// Attach notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Workout identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Workout name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the workout
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Workout notes
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Exercises in order
    #[must_use]
    pub fn exercises(&self) -> &[WorkoutExercise] {
        &self.exercises
    }

    /// Whether the workout has been started and not yet completed
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    /// When the workout was started
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Sets across all exercises
    #[must_use]
    pub fn total_sets(&self) -> u32 {
        self.exercises.iter().map(|e| e.sets).sum()
    }

    /// Rough session length: every set takes 30 s of work plus its rest,
    /// rounded to the nearest minute (half a minute rounds up)
    #[must_use]
    pub fn estimated_duration_minutes(&self) -> u64 {
        let seconds: u64 = self
            .exercises
            .iter()
            .map(|e| {
                u64::from(e.sets) * (u64::from(e.rest_seconds) + SECONDS_PER_SET)
            })
            .sum();
        (seconds + 30) / 60
    }

    /// Whole minutes since the workout started, `None` when not active
    #[must_use]
    pub fn elapsed_minutes(&self, now: DateTime<Utc>) -> Option<i64> {
        self.started_at
            .map(|started| (now - started).num_minutes().max(0))
    }

    /// Add an exercise seeded with the engine's prescription for `profile`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` while the workout is active
    pub fn add_exercise(
        &mut self,
        exercise: &Exercise,
        engine: &dyn RecommendationEngineTrait,
        profile: &Profile,
        reference: DateTime<Utc>,
    ) -> AppResult<&WorkoutExercise> {
        if self.is_active() {
            return Err(AppError::invalid_input(
                "Cannot add exercises to an active workout",
            ));
        }

        let recommendation = engine.recommend_detailed(profile, &exercise.descriptor(), reference);
        let prescription = recommendation.prescription;

        debug!(
            workout_id = %self.id,
            exercise_id = %exercise.id,
            prescription = %prescription,
            "Added exercise with recommended prescription"
        );

        let index = self.exercises.len();
        self.exercises.push(WorkoutExercise {
            exercise: exercise.clone(),
            sets: prescription.sets,
            reps: prescription.reps,
            weight_kg: None,
            rest_seconds: prescription.rest_seconds,
            notes: None,
            completed: false,
            cycle_phase: recommendation.cycle_phase,
        });
        Ok(&self.exercises[index])
    }

    /// Apply a partial edit to the exercise at `index`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an out-of-range index. Returns
    /// `InvalidInput` for zero sets or reps, for set/rep/rest edits while the
    /// workout is active, and for completion changes while it is not.
    pub fn update_exercise(
        &mut self,
        index: usize,
        update: WorkoutExerciseUpdate,
    ) -> AppResult<&WorkoutExercise> {
        if update.sets == Some(0) || update.reps == Some(0) {
            return Err(AppError::invalid_input("Sets and reps must be at least 1"));
        }
        let active = self.is_active();
        if active
            && (update.sets.is_some() || update.reps.is_some() || update.rest_seconds.is_some())
        {
            return Err(AppError::invalid_input(
                "Sets, reps and rest are locked while the workout is active",
            ));
        }
        if !active && update.completed.is_some() {
            return Err(AppError::invalid_input(
                "Exercises can only be marked complete during an active workout",
            ));
        }
        let entry = self
            .exercises
            .get_mut(index)
            .ok_or_else(|| {
                AppError::not_found(format!("Workout exercise {index}"))
                    .with_resource_id(index.to_string())
            })?;

        if let Some(sets) = update.sets {
            entry.sets = sets;
        }
        if let Some(reps) = update.reps {
            entry.reps = reps;
        }
        if let Some(weight) = update.weight_kg {
            entry.weight_kg = Some(weight);
        }
        if let Some(rest) = update.rest_seconds {
            entry.rest_seconds = rest;
        }
        if let Some(notes) = update.notes {
            entry.notes = Some(notes);
        }
        if let Some(completed) = update.completed {
            entry.completed = completed;
        }
        Ok(entry)
    }

    /// Remove and return the exercise at `index`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an out-of-range index
    pub fn remove_exercise(&mut self, index: usize) -> AppResult<WorkoutExercise> {
        if index >= self.exercises.len() {
            return Err(AppError::not_found(format!("Workout exercise {index}"))
                .with_resource_id(index.to_string()));
        }
        Ok(self.exercises.remove(index))
    }

    /// Start the workout at `at`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the workout is already active or has no exercises
    pub fn start(&mut self, at: DateTime<Utc>) -> AppResult<()> {
        if self.is_active() {
            return Err(AppError::invalid_input("Workout is already active"));
        }
        if self.exercises.is_empty() {
            return Err(AppError::invalid_input(
                "Add at least one exercise before starting",
            ));
        }
        self.started_at = Some(at);
        info!(workout_id = %self.id, exercises = self.exercises.len(), "Workout started");
        Ok(())
    }

    /// Finish the workout at `at`, returning a summary and resetting the plan
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the workout is not active or `at` precedes the start
    pub fn complete(&mut self, at: DateTime<Utc>) -> AppResult<WorkoutSummary> {
        let started_at = self
            .started_at
            .ok_or_else(|| AppError::invalid_input("Workout has not been started"))?;
        if at < started_at {
            return Err(AppError::invalid_input(
                "Completion time precedes the workout start",
            ));
        }

        let summary = WorkoutSummary {
            workout_id: self.id,
            name: self.name.clone(),
            completed_exercises: self.exercises.iter().filter(|e| e.completed).count(),
            total_exercises: self.exercises.len(),
            total_sets: self.total_sets(),
            duration_minutes: (at - started_at).num_minutes(),
        };

        info!(
            workout_id = %summary.workout_id,
            completed = summary.completed_exercises,
            total = summary.total_exercises,
            duration_minutes = summary.duration_minutes,
            "Workout completed"
        );

        *self = Self::new("");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ExerciseCatalog;
    use chrono::{Duration, TimeZone};
    use cyclefit_core::errors::ErrorCode;
    use cyclefit_intelligence::config::intelligence::RecommendationEngineConfig;
    use cyclefit_intelligence::WorkoutRecommendationEngine;

    fn engine() -> WorkoutRecommendationEngine {
        WorkoutRecommendationEngine::with_config(RecommendationEngineConfig::default())
    }

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 18, 0, 0).unwrap()
    }

    fn plan_with(ids: &[&str]) -> WorkoutPlan {
        let catalog = ExerciseCatalog::builtin();
        let mut plan = WorkoutPlan::new("Upper Body");
        for id in ids {
            plan.add_exercise(
                catalog.get(id).unwrap(),
                &engine(),
                &Profile::new(),
                reference(),
            )
            .unwrap();
        }
        plan
    }

    #[test]
    fn test_added_exercise_uses_engine_prescription() {
        let plan = plan_with(&["ex_bench_press"]);
        let entry = &plan.exercises()[0];
        assert_eq!((entry.sets, entry.reps, entry.rest_seconds), (3, 10, 75));
        assert!(!entry.completed);
    }

    #[test]
    fn test_cannot_add_while_active() {
        let mut plan = plan_with(&["ex_push_ups"]);
        plan.start(reference()).unwrap();
        let catalog = ExerciseCatalog::builtin();
        let err = plan
            .add_exercise(
                catalog.get("ex_squats").unwrap(),
                &engine(),
                &Profile::new(),
                reference(),
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_update_rejects_zero_reps_and_bad_index() {
        let mut plan = plan_with(&["ex_push_ups"]);
        let zero = WorkoutExerciseUpdate {
            reps: Some(0),
            ..Default::default()
        };
        assert_eq!(
            plan.update_exercise(0, zero).unwrap_err().code,
            ErrorCode::InvalidInput
        );
        assert_eq!(
            plan.update_exercise(3, WorkoutExerciseUpdate::default())
                .unwrap_err()
                .code,
            ErrorCode::ResourceNotFound
        );
    }

    #[test]
    fn test_start_requires_exercises() {
        let mut plan = WorkoutPlan::new("Empty");
        assert!(plan.start(reference()).is_err());
    }

    #[test]
    fn test_complete_summarizes_and_resets() {
        let mut plan = plan_with(&["ex_push_ups", "ex_squats", "ex_deadlifts"]);
        let workout_id = plan.id();
        plan.start(reference()).unwrap();
        plan.update_exercise(
            1,
            WorkoutExerciseUpdate {
                completed: Some(true),
                ..Default::default()
            },
        )
        .unwrap();

        let summary = plan
            .complete(reference() + Duration::seconds(45 * 60 + 59))
            .unwrap();

        assert_eq!(summary.workout_id, workout_id);
        assert_eq!(summary.completed_exercises, 1);
        assert_eq!(summary.total_exercises, 3);
        assert_eq!(summary.total_sets, 2 + 2 + 4);
        assert_eq!(summary.duration_minutes, 45);
        assert!(plan.exercises().is_empty());
        assert!(!plan.is_active());
        assert_ne!(plan.id(), workout_id);
    }

    #[test]
    fn test_prescription_locked_while_active() {
        let mut plan = plan_with(&["ex_push_ups"]);
        plan.start(reference()).unwrap();

        for update in [
            WorkoutExerciseUpdate {
                sets: Some(9),
                ..Default::default()
            },
            WorkoutExerciseUpdate {
                reps: Some(30),
                ..Default::default()
            },
            WorkoutExerciseUpdate {
                rest_seconds: Some(5),
                ..Default::default()
            },
        ] {
            assert_eq!(
                plan.update_exercise(0, update).unwrap_err().code,
                ErrorCode::InvalidInput
            );
        }
        let entry = &plan.exercises()[0];
        assert_eq!((entry.sets, entry.reps, entry.rest_seconds), (2, 8, 90));

        let entry = plan
            .update_exercise(
                0,
                WorkoutExerciseUpdate {
                    weight_kg: Some(10.0),
                    notes: Some("slow eccentric".into()),
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(entry.completed);
        assert_eq!(entry.weight_kg, Some(10.0));
    }

    #[test]
    fn test_completion_toggle_requires_active_workout() {
        let mut plan = plan_with(&["ex_push_ups"]);
        let err = plan
            .update_exercise(
                0,
                WorkoutExerciseUpdate {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(!plan.exercises()[0].completed);

        let entry = plan
            .update_exercise(
                0,
                WorkoutExerciseUpdate {
                    sets: Some(4),
                    notes: Some("warm up first".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(entry.sets, 4);
        assert_eq!(entry.notes.as_deref(), Some("warm up first"));
    }

    #[test]
    fn test_stats_for_empty_plan() {
        let plan = WorkoutPlan::new("Empty");
        assert_eq!(plan.total_sets(), 0);
        assert_eq!(plan.estimated_duration_minutes(), 0);
        assert_eq!(plan.elapsed_minutes(reference()), None);
    }

    #[test]
    fn test_estimated_duration_rounds_half_minutes_up() {
        // push ups: 2 x (90 + 30) = 240 s = 4 min
        let mut plan = plan_with(&["ex_push_ups"]);
        assert_eq!(plan.total_sets(), 2);
        assert_eq!(plan.estimated_duration_minutes(), 4);

        // 3 x (0 + 30) = 90 s -> 1.5 min -> 2
        plan.update_exercise(
            0,
            WorkoutExerciseUpdate {
                sets: Some(3),
                rest_seconds: Some(0),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(plan.estimated_duration_minutes(), 2);

        // 1 x (59 + 30) = 89 s -> 1.48 min -> 1
        plan.update_exercise(
            0,
            WorkoutExerciseUpdate {
                sets: Some(1),
                rest_seconds: Some(59),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(plan.estimated_duration_minutes(), 1);
    }

    #[test]
    fn test_elapsed_minutes_since_start() {
        let mut plan = plan_with(&["ex_push_ups", "ex_squats"]);
        assert_eq!(plan.elapsed_minutes(reference()), None);

        plan.start(reference()).unwrap();
        assert_eq!(plan.total_sets(), 4);
        assert_eq!(
            plan.elapsed_minutes(reference() + Duration::seconds(12 * 60 + 59)),
            Some(12)
        );
        assert_eq!(
            plan.elapsed_minutes(reference() - Duration::minutes(3)),
            Some(0)
        );
    }

    #[test]
    fn test_complete_requires_active_workout() {
        let mut plan = plan_with(&["ex_push_ups"]);
        assert!(plan.complete(reference()).is_err());
    }
}
