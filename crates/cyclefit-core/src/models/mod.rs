// ABOUTME: Core data models for profiles, exercises, prescriptions, and cycle phases
// ABOUTME: Re-exports the domain types shared by the engine, catalog, and planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CycleFit

//! # Data Models
//!
//! Explicit, typed records for everything the recommendation engine consumes
//! and produces. Optional profile fields are `Option`s with documented
//! fallbacks rather than loosely-typed maps.

/// Menstrual cycle phase
pub mod cycle;
/// Exercise catalog entries and difficulty tiers
pub mod exercise;
/// Sets/reps/rest output value
pub mod prescription;
/// User profile and its enumerations
pub mod profile;

pub use cycle::CyclePhase;
pub use exercise::{Difficulty, Equipment, Exercise, ExerciseDescriptor, MuscleGroup};
pub use prescription::Prescription;
pub use profile::{ActivityLevel, FitnessGoal, Gender, Profile};
