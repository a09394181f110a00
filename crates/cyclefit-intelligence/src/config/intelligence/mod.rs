// ABOUTME: Intelligence configuration for the workout recommendation engine
// ABOUTME: Loads defaults, applies environment overrides, and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CycleFit

//! Intelligence Configuration Module
//!
//! Provides the configuration consumed by the recommendation engine, loaded
//! once per process from defaults plus `CYCLEFIT_*` environment overrides.
//!
//! # Module Structure
//!
//! - `recommendation` - Base prescription table, goal/cycle adjustments, floors
//! - `error` - Configuration error types

pub mod error;
pub mod recommendation;

pub use error::ConfigError;
pub use recommendation::{
    BasePrescriptionTable, CycleAdjustments, GoalAdjustments, PrescriptionLimits,
    RecommendationEngineConfig,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntelligenceConfig {
    /// Configuration for the workout recommendation engine
    pub recommendation_engine: RecommendationEngineConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment overrides on top of defaults
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a floor is zero where a positive value is required,
    /// when a base tier falls below the floors, or when base sets are not
    /// ordered beginner <= intermediate <= advanced
    pub fn validate(&self) -> Result<(), ConfigError> {
        let engine = &self.recommendation_engine;
        let limits = &engine.limits;

        if limits.min_sets == 0 {
            return Err(ConfigError::ValueOutOfRange("min_sets must be at least 1"));
        }
        if limits.min_reps == 0 {
            return Err(ConfigError::ValueOutOfRange("min_reps must be at least 1"));
        }

        for tier in [
            &engine.base.beginner,
            &engine.base.intermediate,
            &engine.base.advanced,
        ] {
            if tier.sets < limits.min_sets || tier.reps < limits.min_reps {
                return Err(ConfigError::InvalidRange(
                    "base prescription must not fall below min_sets/min_reps",
                ));
            }
            if tier.rest_seconds < limits.min_rest_seconds {
                return Err(ConfigError::InvalidRange(
                    "base prescription rest must not fall below min_rest_seconds",
                ));
            }
        }

        if engine.base.beginner.sets > engine.base.intermediate.sets
            || engine.base.intermediate.sets > engine.base.advanced.sets
        {
            return Err(ConfigError::InvalidRange(
                "base sets must be non-decreasing from beginner to advanced",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        let val = match env::var(env_var_name) {
            Ok(val) => val,
            Err(env::VarError::NotPresent) => return Ok(()),
            Err(e) => return Err(ConfigError::EnvVar(e)),
        };
        *target = val
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let engine = &mut self.recommendation_engine;

        // Base prescription table
        Self::apply_env_var("CYCLEFIT_BEGINNER_SETS", &mut engine.base.beginner.sets)?;
        Self::apply_env_var("CYCLEFIT_BEGINNER_REPS", &mut engine.base.beginner.reps)?;
        Self::apply_env_var(
            "CYCLEFIT_BEGINNER_REST_SECONDS",
            &mut engine.base.beginner.rest_seconds,
        )?;
        Self::apply_env_var(
            "CYCLEFIT_INTERMEDIATE_SETS",
            &mut engine.base.intermediate.sets,
        )?;
        Self::apply_env_var(
            "CYCLEFIT_INTERMEDIATE_REPS",
            &mut engine.base.intermediate.reps,
        )?;
        Self::apply_env_var(
            "CYCLEFIT_INTERMEDIATE_REST_SECONDS",
            &mut engine.base.intermediate.rest_seconds,
        )?;
        Self::apply_env_var("CYCLEFIT_ADVANCED_SETS", &mut engine.base.advanced.sets)?;
        Self::apply_env_var("CYCLEFIT_ADVANCED_REPS", &mut engine.base.advanced.reps)?;
        Self::apply_env_var(
            "CYCLEFIT_ADVANCED_REST_SECONDS",
            &mut engine.base.advanced.rest_seconds,
        )?;

        // Goal adjustments
        Self::apply_env_var(
            "CYCLEFIT_STRENGTH_REP_REDUCTION",
            &mut engine.goals.strength_rep_reduction,
        )?;
        Self::apply_env_var(
            "CYCLEFIT_STRENGTH_REST_INCREASE_SECONDS",
            &mut engine.goals.strength_rest_increase_seconds,
        )?;
        Self::apply_env_var(
            "CYCLEFIT_ENDURANCE_REP_INCREASE",
            &mut engine.goals.endurance_rep_increase,
        )?;
        Self::apply_env_var(
            "CYCLEFIT_ENDURANCE_REST_REDUCTION_SECONDS",
            &mut engine.goals.endurance_rest_reduction_seconds,
        )?;

        // Cycle adjustments
        Self::apply_env_var(
            "CYCLEFIT_MENSTRUAL_SET_REDUCTION",
            &mut engine.cycle.menstrual_set_reduction,
        )?;
        Self::apply_env_var(
            "CYCLEFIT_MENSTRUAL_REP_REDUCTION",
            &mut engine.cycle.menstrual_rep_reduction,
        )?;
        Self::apply_env_var(
            "CYCLEFIT_OVULATION_SET_INCREASE",
            &mut engine.cycle.ovulation_set_increase,
        )?;
        Self::apply_env_var(
            "CYCLEFIT_OVULATION_REP_INCREASE",
            &mut engine.cycle.ovulation_rep_increase,
        )?;

        // Floors
        Self::apply_env_var("CYCLEFIT_MIN_SETS", &mut engine.limits.min_sets)?;
        Self::apply_env_var("CYCLEFIT_MIN_REPS", &mut engine.limits.min_reps)?;
        Self::apply_env_var(
            "CYCLEFIT_MIN_REST_SECONDS",
            &mut engine.limits.min_rest_seconds,
        )?;

        Ok(self)
    }
}
