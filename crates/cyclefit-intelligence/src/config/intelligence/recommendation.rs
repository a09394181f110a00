// ABOUTME: Recommendation engine configuration for workout prescriptions
// ABOUTME: Configures the base prescription table, goal and cycle adjustments, and floors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CycleFit

//! Recommendation Engine Configuration
//!
//! Provides configuration for the workout recommendation engine: the base
//! sets/reps/rest table per difficulty tier, the amounts applied for training
//! goals and cycle phases, and the floors every adjusted prescription is
//! clamped to.

use cyclefit_core::constants::prescription;
use cyclefit_core::models::{Difficulty, Prescription};
use serde::{Deserialize, Serialize};

/// Recommendation Engine Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationEngineConfig {
    /// Base prescription per difficulty tier
    pub base: BasePrescriptionTable,
    /// Adjustments applied for training goals
    pub goals: GoalAdjustments,
    /// Adjustments applied for cycle phases
    pub cycle: CycleAdjustments,
    /// Floors applied after reducing adjustments
    pub limits: PrescriptionLimits,
}

/// Base prescription per difficulty tier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BasePrescriptionTable {
    /// Beginner exercises
    pub beginner: Prescription,
    /// Intermediate exercises
    pub intermediate: Prescription,
    /// Advanced exercises
    pub advanced: Prescription,
}

impl BasePrescriptionTable {
    /// Look up the base prescription for a tier
    #[must_use]
    pub const fn for_difficulty(&self, difficulty: Difficulty) -> Prescription {
        match difficulty {
            Difficulty::Beginner => self.beginner,
            Difficulty::Intermediate => self.intermediate,
            Difficulty::Advanced => self.advanced,
        }
    }
}

/// Rep and rest changes for goal-specific training
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalAdjustments {
    /// Reps removed for strength goals
    pub strength_rep_reduction: u32,
    /// Rest seconds added for strength goals
    pub strength_rest_increase_seconds: u32,
    /// Reps added for endurance goals
    pub endurance_rep_increase: u32,
    /// Rest seconds removed for endurance goals
    pub endurance_rest_reduction_seconds: u32,
}

/// Set and rep changes for cycle phases
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CycleAdjustments {
    /// Sets removed during the menstrual phase
    pub menstrual_set_reduction: u32,
    /// Reps removed during the menstrual phase
    pub menstrual_rep_reduction: u32,
    /// Sets added during ovulation
    pub ovulation_set_increase: u32,
    /// Reps added during ovulation
    pub ovulation_rep_increase: u32,
}

/// Floors every reduced prescription is clamped to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrescriptionLimits {
    /// Minimum sets
    pub min_sets: u32,
    /// Minimum reps
    pub min_reps: u32,
    /// Minimum rest in seconds
    pub min_rest_seconds: u32,
}

impl Default for BasePrescriptionTable {
    fn default() -> Self {
        Self {
            beginner: prescription::BEGINNER.into(),
            intermediate: prescription::INTERMEDIATE.into(),
            advanced: prescription::ADVANCED.into(),
        }
    }
}

impl Default for GoalAdjustments {
    fn default() -> Self {
        Self {
            strength_rep_reduction: prescription::STRENGTH_REP_REDUCTION,
            strength_rest_increase_seconds: prescription::STRENGTH_REST_INCREASE_SECONDS,
            endurance_rep_increase: prescription::ENDURANCE_REP_INCREASE,
            endurance_rest_reduction_seconds: prescription::ENDURANCE_REST_REDUCTION_SECONDS,
        }
    }
}

impl Default for CycleAdjustments {
    fn default() -> Self {
        Self {
            menstrual_set_reduction: prescription::MENSTRUAL_SET_REDUCTION,
            menstrual_rep_reduction: prescription::MENSTRUAL_REP_REDUCTION,
            ovulation_set_increase: prescription::OVULATION_SET_INCREASE,
            ovulation_rep_increase: prescription::OVULATION_REP_INCREASE,
        }
    }
}

impl Default for PrescriptionLimits {
    fn default() -> Self {
        Self {
            min_sets: prescription::MIN_SETS,
            min_reps: prescription::MIN_REPS,
            min_rest_seconds: prescription::MIN_REST_SECONDS,
        }
    }
}
