// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, fixed reference times, and profile fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CycleFit
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `cyclefit`

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use cyclefit::models::{ActivityLevel, FitnessGoal, Gender, Profile};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fixed "now" used across tests: 2025-03-15 09:30 UTC
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 15, 9, 30, 0).unwrap()
}

/// Calendar date `days` before the reference time
pub fn days_ago(days: i64) -> NaiveDate {
    reference_time().date_naive() - Duration::days(days)
}

/// Female profile whose last period started `days` before the reference time
pub fn female_profile(days_since_period: i64) -> Profile {
    Profile::new()
        .with_gender(Gender::Female)
        .with_last_period_date(days_ago(days_since_period))
}

/// Fully populated profile used by planner and advisor tests
pub fn complete_profile() -> Profile {
    Profile::new()
        .with_gender(Gender::Female)
        .with_age(29)
        .with_fitness_goal(FitnessGoal::Strength)
        .with_activity_level(ActivityLevel::Intermediate)
        .with_workout_frequency(4)
        .with_last_period_date(days_ago(14))
}
