// ABOUTME: Workout recommendation engine producing sets, reps, and rest per exercise
// ABOUTME: Applies difficulty base table, goal adjustments, and cycle-phase adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CycleFit

//! Training prescription engine
//!
//! A prescription is computed in three steps, each producing a new value:
//!
//! 1. base prescription from the exercise difficulty
//! 2. goal adjustment (strength, endurance)
//! 3. cycle-phase adjustment for female profiles with a known period date
//!
//! The engine holds nothing but its configuration. The reference instant is
//! always an argument, so identical inputs give identical outputs.

use chrono::{DateTime, Utc};
use cyclefit_core::models::{
    CyclePhase, Difficulty, ExerciseDescriptor, FitnessGoal, Gender, Prescription, Profile,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::intelligence::{IntelligenceConfig, RecommendationEngineConfig};
use crate::cycle::classify_cycle_phase;

/// Prescription together with the phase that shaped it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    /// Final sets/reps/rest
    pub prescription: Prescription,
    /// Phase applied, if the profile tracks its cycle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_phase: Option<CyclePhase>,
}

/// Trait for generating exercise prescriptions
pub trait RecommendationEngineTrait: Send + Sync {
    /// Base prescription for a difficulty tier
    fn base_prescription(&self, difficulty: Difficulty) -> Prescription;

    /// Apply goal-specific adjustments; `None` leaves the prescription unchanged
    fn adjust_for_goal(&self, prescription: Prescription, goal: Option<FitnessGoal>)
        -> Prescription;

    /// Apply cycle-phase adjustments; `None` leaves the prescription unchanged
    fn adjust_for_cycle_phase(
        &self,
        prescription: Prescription,
        phase: Option<CyclePhase>,
    ) -> Prescription;

    /// Full prescription plus the cycle phase used, if any
    fn recommend_detailed(
        &self,
        profile: &Profile,
        exercise: &ExerciseDescriptor,
        reference: DateTime<Utc>,
    ) -> Recommendation;

    /// Full prescription for a profile and exercise at `reference`
    fn recommend(
        &self,
        profile: &Profile,
        exercise: &ExerciseDescriptor,
        reference: DateTime<Utc>,
    ) -> Prescription {
        self.recommend_detailed(profile, exercise, reference)
            .prescription
    }
}

/// Configurable workout recommendation engine
#[derive(Debug, Clone)]
pub struct WorkoutRecommendationEngine {
    config: RecommendationEngineConfig,
}

impl Default for WorkoutRecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutRecommendationEngine {
    /// Create an engine from the global configuration
    #[must_use]
    pub fn new() -> Self {
        let global_config = IntelligenceConfig::global();
        Self {
            config: global_config.recommendation_engine.clone(),
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: RecommendationEngineConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &RecommendationEngineConfig {
        &self.config
    }
}

impl RecommendationEngineTrait for WorkoutRecommendationEngine {
    fn base_prescription(&self, difficulty: Difficulty) -> Prescription {
        self.config.base.for_difficulty(difficulty)
    }

    fn adjust_for_goal(
        &self,
        prescription: Prescription,
        goal: Option<FitnessGoal>,
    ) -> Prescription {
        let goals = &self.config.goals;
        let limits = &self.config.limits;

        match goal {
            Some(FitnessGoal::Strength) => Prescription {
                reps: prescription
                    .reps
                    .saturating_sub(goals.strength_rep_reduction)
                    .max(limits.min_reps),
                rest_seconds: prescription
                    .rest_seconds
                    .saturating_add(goals.strength_rest_increase_seconds),
                ..prescription
            },
            Some(FitnessGoal::Endurance) => Prescription {
                reps: prescription
                    .reps
                    .saturating_add(goals.endurance_rep_increase),
                rest_seconds: prescription
                    .rest_seconds
                    .saturating_sub(goals.endurance_rest_reduction_seconds)
                    .max(limits.min_rest_seconds),
                ..prescription
            },
            Some(
                FitnessGoal::WeightLoss | FitnessGoal::MuscleGain | FitnessGoal::GeneralFitness,
            )
            | None => prescription,
        }
    }

    fn adjust_for_cycle_phase(
        &self,
        prescription: Prescription,
        phase: Option<CyclePhase>,
    ) -> Prescription {
        let cycle = &self.config.cycle;
        let limits = &self.config.limits;

        match phase {
            Some(CyclePhase::Menstrual) => Prescription {
                sets: prescription
                    .sets
                    .saturating_sub(cycle.menstrual_set_reduction)
                    .max(limits.min_sets),
                reps: prescription
                    .reps
                    .saturating_sub(cycle.menstrual_rep_reduction)
                    .max(limits.min_reps),
                ..prescription
            },
            Some(CyclePhase::Ovulation) => Prescription {
                sets: prescription
                    .sets
                    .saturating_add(cycle.ovulation_set_increase),
                reps: prescription
                    .reps
                    .saturating_add(cycle.ovulation_rep_increase),
                ..prescription
            },
            Some(CyclePhase::Follicular | CyclePhase::Luteal) | None => prescription,
        }
    }

    fn recommend_detailed(
        &self,
        profile: &Profile,
        exercise: &ExerciseDescriptor,
        reference: DateTime<Utc>,
    ) -> Recommendation {
        let base = self.base_prescription(exercise.difficulty);
        let mut prescription = self.adjust_for_goal(base, profile.fitness_goal);

        let cycle_phase = if profile.gender == Some(Gender::Female) {
            classify_cycle_phase(
                profile.last_period_date,
                reference,
                profile.cycle_length_days(),
            )
        } else {
            None
        };
        if cycle_phase.is_some() {
            prescription = self.adjust_for_cycle_phase(prescription, cycle_phase);
        }

        debug!(
            difficulty = %exercise.difficulty,
            goal = ?profile.fitness_goal,
            phase = ?cycle_phase,
            base = %base,
            result = %prescription,
            "Computed exercise prescription"
        );

        Recommendation {
            prescription,
            cycle_phase,
        }
    }
}
