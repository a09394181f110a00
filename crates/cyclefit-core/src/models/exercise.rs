// ABOUTME: Exercise models including difficulty tiers, muscle groups, and equipment
// ABOUTME: Exercise, ExerciseDescriptor, Difficulty, MuscleGroup, and Equipment definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CycleFit

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Exercise experience tier driving the base prescription
///
/// Variants are declared in ascending order so the derived `Ord` matches
/// beginner < intermediate < advanced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Suitable for people new to training
    Beginner,
    /// Requires some training experience
    Intermediate,
    /// Requires solid technique and strength base
    Advanced,
}

impl Difficulty {
    /// All tiers in ascending order
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

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

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(AppError::invalid_input(format!(
                "Unknown difficulty '{other}'"
            ))),
        }
    }
}

/// Muscle groups shown on the body map
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Lats, rhomboids, traps
    Back,
    /// Quads, hamstrings, calves
    Legs,
    /// Glute max/med
    Glutes,
    /// Biceps and triceps
    Arms,
    /// Deltoids
    Shoulders,
    /// Abs and obliques
    Core,
}

impl MuscleGroup {
    /// Every muscle group on the body map
    pub const ALL: [Self; 7] = [
        Self::Chest,
        Self::Back,
        Self::Legs,
        Self::Glutes,
        Self::Arms,
        Self::Shoulders,
        Self::Core,
    ];

    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Legs => "legs",
            Self::Glutes => "glutes",
            Self::Arms => "arms",
            Self::Shoulders => "shoulders",
            Self::Core => "core",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Equipment an exercise requires
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    /// No equipment
    Bodyweight,
    /// A pair of dumbbells
    Dumbbells,
    /// Barbell and plates
    Barbell,
    /// Cable or lever machine
    Machine,
}

/// Minimal exercise input to the recommendation engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseDescriptor {
    /// Experience tier of the exercise
    pub difficulty: Difficulty,
}

impl ExerciseDescriptor {
    /// Descriptor for the given tier
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }
}

/// A catalog exercise with coaching cues
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    /// Stable identifier (e.g. `ex_push_ups`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Primary muscle group worked
    pub muscle_group: MuscleGroup,
    /// Required equipment
    pub equipment: Equipment,
    /// Experience tier
    pub difficulty: Difficulty,
    /// How to perform the movement
    pub instructions: String,
    /// Form cues
    pub tips: String,
}

impl Exercise {
    /// The subset of this exercise the recommendation engine needs
    #[must_use]
    pub const fn descriptor(&self) -> ExerciseDescriptor {
        ExerciseDescriptor::new(self.difficulty)
    }
}

impl From<&Exercise> for ExerciseDescriptor {
    fn from(exercise: &Exercise) -> Self {
        exercise.descriptor()
    }
}
