// ABOUTME: Main library entry point for the CycleFit workout recommendation library
// ABOUTME: Exercise catalog, workout planner, dashboard summary, and AI advisor seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CycleFit

#![deny(unsafe_code)]

//! # CycleFit
//!
//! Workout recommendations for a fitness-tracking application. Given a user
//! profile and an exercise, the engine prescribes sets, reps, and rest,
//! adjusted for the user's goal and, for female profiles, the current
//! menstrual-cycle phase.
//!
//! ## Architecture
//!
//! - **`cyclefit-core`**: Models, error types, and constants
//! - **`cyclefit-intelligence`**: Prescription engine, cycle phases, insights
//! - **this crate**: Catalog, planner session, dashboard, AI advisor, logging
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use cyclefit::intelligence::{RecommendationEngineTrait, WorkoutRecommendationEngine};
//! use cyclefit::models::{Difficulty, ExerciseDescriptor, FitnessGoal, Gender, Profile};
//!
//! let now = Utc::now();
//! let profile = Profile::new()
//!     .with_gender(Gender::Female)
//!     .with_fitness_goal(FitnessGoal::Strength)
//!     .with_last_period_date(now.date_naive() - Duration::days(14));
//!
//! let engine = WorkoutRecommendationEngine::new();
//! let prescription = engine.recommend(
//!     &profile,
//!     &ExerciseDescriptor::new(Difficulty::Intermediate),
//!     now,
//! );
//! println!("{prescription}");
//! ```

/// AI workout advisor seam over an external text generator
pub mod advisor;

/// Built-in exercise catalog
pub mod catalog;

/// Dashboard summary over an in-memory workout log
pub mod dashboard;

/// Structured logging setup
pub mod logging;

/// Workout planner session
pub mod workout;

/// Re-export core crate modules
pub use cyclefit_core::{constants, errors, models};

/// Re-export the intelligence crate
pub use cyclefit_intelligence as intelligence;
