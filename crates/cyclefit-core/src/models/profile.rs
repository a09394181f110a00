// ABOUTME: User profile model and its enumerations (gender, goal, activity level)
// ABOUTME: Immutable input to the recommendation engine with typed optional fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CycleFit

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{cycle::DEFAULT_CYCLE_LENGTH_DAYS, planner::DEFAULT_WORKOUT_FREQUENCY};
use crate::errors::AppError;

/// Gender as collected by profile setup
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,
    /// Female; enables cycle-phase adjustments
    Female,
}

impl Gender {
    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Primary training goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Reduce body weight
    WeightLoss,
    /// Build muscle mass
    MuscleGain,
    /// Build maximal strength; fewer reps, longer rest
    Strength,
    /// Build muscular endurance; more reps, shorter rest
    Endurance,
    /// No particular focus
    GeneralFitness,
}

impl FitnessGoal {
    /// Human-readable label
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::MuscleGain => "Muscle Gain",
            Self::Strength => "Strength Building",
            Self::Endurance => "Endurance",
            Self::GeneralFitness => "General Fitness",
        }
    }

    /// Snake-case identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Strength => "strength",
            Self::Endurance => "endurance",
            Self::GeneralFitness => "general_fitness",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitnessGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weight_loss" => Ok(Self::WeightLoss),
            "muscle_gain" => Ok(Self::MuscleGain),
            "strength" => Ok(Self::Strength),
            "endurance" => Ok(Self::Endurance),
            "general_fitness" => Ok(Self::GeneralFitness),
            other => Err(AppError::invalid_input(format!(
                "Unknown fitness goal '{other}'"
            ))),
        }
    }
}

/// Self-reported training experience
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// New to exercise
    Beginner,
    /// Some experience
    Intermediate,
    /// Very experienced
    Advanced,
}

impl ActivityLevel {
    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

const fn default_cycle_length() -> u32 {
    DEFAULT_CYCLE_LENGTH_DAYS
}

/// User profile collected during setup
///
/// Every field the engine reads is optional with a documented fallback:
/// a missing goal means no goal adjustment, a missing period date means no
/// cycle adjustment.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use cyclefit_core::models::{FitnessGoal, Gender, Profile};
///
/// let profile = Profile::new()
///     .with_gender(Gender::Female)
///     .with_fitness_goal(FitnessGoal::Strength)
///     .with_last_period_date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
/// assert!(profile.tracks_cycle());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Gender, if provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Primary goal, if provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness_goal: Option<FitnessGoal>,
    /// Training experience, if provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    /// Start date of the last reported period
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_period_date: Option<NaiveDate>,
    /// Reported cycle length in days
    #[serde(default = "default_cycle_length")]
    pub menstrual_cycle_length: u32,
    /// Age in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Height in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Planned sessions per week
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_frequency: Option<u32>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            gender: None,
            fitness_goal: None,
            activity_level: None,
            last_period_date: None,
            menstrual_cycle_length: DEFAULT_CYCLE_LENGTH_DAYS,
            age: None,
            height_cm: None,
            weight_kg: None,
            workout_frequency: None,
        }
    }
}

impl Profile {
    /// Empty profile with default cycle length
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set gender
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Set fitness goal
    #[must_use]
    pub const fn with_fitness_goal(mut self, goal: FitnessGoal) -> Self {
        self.fitness_goal = Some(goal);
        self
    }

    /// Set activity level
    #[must_use]
    pub const fn with_activity_level(mut self, level: ActivityLevel) -> Self {
        self.activity_level = Some(level);
        self
    }

    /// Set the last period start date
    #[must_use]
    pub const fn with_last_period_date(mut self, date: NaiveDate) -> Self {
        self.last_period_date = Some(date);
        self
    }

    /// Set cycle length in days
    #[must_use]
    pub const fn with_cycle_length(mut self, days: u32) -> Self {
        self.menstrual_cycle_length = days;
        self
    }

    /// Set age in years
    #[must_use]
    pub const fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Set planned sessions per week
    #[must_use]
    pub const fn with_workout_frequency(mut self, sessions_per_week: u32) -> Self {
        self.workout_frequency = Some(sessions_per_week);
        self
    }

    /// Whether cycle-phase adjustments apply to this profile
    #[must_use]
    pub fn tracks_cycle(&self) -> bool {
        self.gender == Some(Gender::Female) && self.last_period_date.is_some()
    }

    /// Planned sessions per week, falling back to the default of 3
    #[must_use]
    pub fn workout_frequency_or_default(&self) -> u32 {
        self.workout_frequency.unwrap_or(DEFAULT_WORKOUT_FREQUENCY)
    }

    /// Cycle length, treating zero as "not provided"
    #[must_use]
    pub const fn cycle_length_days(&self) -> u32 {
        if self.menstrual_cycle_length == 0 {
            DEFAULT_CYCLE_LENGTH_DAYS
        } else {
            self.menstrual_cycle_length
        }
    }
}
