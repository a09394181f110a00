// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Cycle-phase day bands, prescription defaults, and planner limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CycleFit

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large list.

/// Menstrual cycle day bands and defaults
pub mod cycle {
    /// Cycle length assumed when a profile does not provide one
    pub const DEFAULT_CYCLE_LENGTH_DAYS: u32 = 28;
    /// Last day offset (inclusive) classified as menstrual
    pub const MENSTRUAL_LAST_DAY: i64 = 5;
    /// Last day offset (inclusive) classified as follicular
    pub const FOLLICULAR_LAST_DAY: i64 = 13;
    /// Last day offset (inclusive) classified as ovulation
    pub const OVULATION_LAST_DAY: i64 = 16;
}

/// Default prescription table and adjustment amounts
pub mod prescription {
    /// Beginner base prescription (sets, reps, rest seconds)
    pub const BEGINNER: (u32, u32, u32) = (2, 8, 90);
    /// Intermediate base prescription (sets, reps, rest seconds)
    pub const INTERMEDIATE: (u32, u32, u32) = (3, 10, 75);
    /// Advanced base prescription (sets, reps, rest seconds)
    pub const ADVANCED: (u32, u32, u32) = (4, 12, 60);

    /// Reps removed for strength goals
    pub const STRENGTH_REP_REDUCTION: u32 = 3;
    /// Rest seconds added for strength goals
    pub const STRENGTH_REST_INCREASE_SECONDS: u32 = 30;
    /// Reps added for endurance goals
    pub const ENDURANCE_REP_INCREASE: u32 = 5;
    /// Rest seconds removed for endurance goals
    pub const ENDURANCE_REST_REDUCTION_SECONDS: u32 = 15;

    /// Sets removed during the menstrual phase
    pub const MENSTRUAL_SET_REDUCTION: u32 = 1;
    /// Reps removed during the menstrual phase
    pub const MENSTRUAL_REP_REDUCTION: u32 = 2;
    /// Sets added during ovulation
    pub const OVULATION_SET_INCREASE: u32 = 1;
    /// Reps added during ovulation
    pub const OVULATION_REP_INCREASE: u32 = 2;

    /// Floor applied to sets after reductions
    pub const MIN_SETS: u32 = 1;
    /// Floor applied to reps after reductions
    pub const MIN_REPS: u32 = 5;
    /// Floor applied to rest after reductions
    pub const MIN_REST_SECONDS: u32 = 0;
}

/// Workout planner and dashboard defaults
pub mod planner {
    /// Weekly sessions assumed when a profile does not provide a frequency
    pub const DEFAULT_WORKOUT_FREQUENCY: u32 = 3;
    /// Weekly target the dashboard measures progress against when unset
    pub const DASHBOARD_WORKOUT_FREQUENCY: u32 = 4;
    /// Working time assumed per set when estimating session length
    pub const SECONDS_PER_SET: u64 = 30;
    /// Number of workouts listed as "recent" on the dashboard
    pub const RECENT_WORKOUTS_LIMIT: usize = 3;
    /// Window used for weekly progress
    pub const WEEKLY_WINDOW_DAYS: i64 = 7;
    /// Token budget for AI workout plan generation
    pub const AI_PLAN_MAX_TOKENS: u32 = 500;
}

/// Service identification for structured logging
pub mod service_names {
    /// Service name used in log records
    pub const CYCLEFIT: &str = "cyclefit";
}
