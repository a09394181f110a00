// ABOUTME: Profile and cycle insights shown alongside recommendations
// ABOUTME: Phase guidance text, focus areas from profile setup, and goal labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CycleFit

use chrono::{DateTime, Utc};
use cyclefit_core::models::{ActivityLevel, CyclePhase, FitnessGoal, Gender, Profile};
use serde::{Deserialize, Serialize};

use crate::cycle::{days_since_period, phase_for_day_offset};

/// Label shown when the profile has no goal
pub const GOAL_NOT_SET: &str = "Not Set";

/// Current cycle phase with training guidance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CycleInsight {
    /// Inferred phase
    pub phase: CyclePhase,
    /// Whole days since the last period start
    pub days_since_period: i64,
    /// Display label ("Menstrual", ...)
    pub label: String,
    /// Suggested training focus for the phase
    pub guidance: String,
}

/// Suggested training focus for a phase
#[must_use]
pub const fn phase_guidance(phase: CyclePhase) -> &'static str {
    match phase {
        CyclePhase::Menstrual => "Light exercises, yoga, walking",
        CyclePhase::Follicular => "Great time for strength training",
        CyclePhase::Ovulation => "Peak energy - intense workouts",
        CyclePhase::Luteal => "Moderate intensity, focus on endurance",
    }
}

/// Cycle insight for female profiles with a known period date
#[must_use]
pub fn cycle_insight(profile: &Profile, reference: DateTime<Utc>) -> Option<CycleInsight> {
    if profile.gender != Some(Gender::Female) {
        return None;
    }
    let days = days_since_period(profile.last_period_date?, reference);
    let phase = phase_for_day_offset(days);

    Some(CycleInsight {
        phase,
        days_since_period: days,
        label: phase.display_name().to_owned(),
        guidance: phase_guidance(phase).to_owned(),
    })
}

/// Display label for an optional goal
#[must_use]
pub fn goal_label(goal: Option<FitnessGoal>) -> &'static str {
    goal.map_or(GOAL_NOT_SET, |g| g.display_name())
}

/// What the planner will emphasise for this profile
///
/// Order follows the profile form: goal, then experience, then cycle.
#[must_use]
pub fn profile_focus_areas(profile: &Profile) -> Vec<&'static str> {
    let mut areas = Vec::new();

    match profile.fitness_goal {
        Some(FitnessGoal::MuscleGain) => {
            areas.push("Strength training with progressive overload");
        }
        Some(FitnessGoal::WeightLoss) => areas.push("High-intensity interval training (HIIT)"),
        _ => {}
    }

    match profile.activity_level {
        Some(ActivityLevel::Beginner) => areas.push("Bodyweight exercises to build foundation"),
        Some(ActivityLevel::Advanced) => {
            areas.push("Complex compound movements and advanced techniques");
        }
        _ => {}
    }

    if profile.gender == Some(Gender::Female) {
        areas.push("Cycle-optimized workout intensity and timing");
    }

    areas
}
