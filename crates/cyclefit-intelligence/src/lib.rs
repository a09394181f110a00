// ABOUTME: Workout recommendation intelligence for the CycleFit workspace
// ABOUTME: Prescription engine, cycle-phase inference, insights, and engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CycleFit

#![deny(unsafe_code)]

//! # CycleFit Intelligence
//!
//! Pure, synchronous training logic. Nothing in this crate performs I/O; the
//! only shared state is the immutable global configuration.

/// Engine configuration with environment overrides
pub mod config;
/// Cycle phase classification from period dates
pub mod cycle;
/// Guidance text and profile focus areas
pub mod insights;
/// Sets/reps/rest prescription engine
pub mod recommendation_engine;

pub use config::{ConfigError, IntelligenceConfig};
pub use cycle::{classify_cycle_phase, days_since_period, phase_for_day_offset};
pub use insights::{cycle_insight, goal_label, phase_guidance, profile_focus_areas, CycleInsight};
pub use recommendation_engine::{
    Recommendation, RecommendationEngineTrait, WorkoutRecommendationEngine,
};
