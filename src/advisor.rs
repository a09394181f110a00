// ABOUTME: AI workout advisor seam over an external text-generation service
// ABOUTME: Builds the profile prompt and maps generator failures to a retryable error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CycleFit

//! # AI Workout Advisor
//!
//! The hosted text-generation service is an external collaborator. This module
//! defines the contract it must satisfy (`TextGenerator`), the prompt sent to
//! it, and the error mapping callers rely on: any failure becomes a retryable
//! `RecommendationUnavailable` error, never a fatal one.
//!
//! The generated text is unstructured and independent of the prescription
//! engine; nothing here feeds back into sets/reps/rest.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use chrono::Utc;
//! use cyclefit::advisor::{TextGenerator, WorkoutAdvisor};
//! use cyclefit::models::Profile;
//!
//! async fn example(generator: Arc<dyn TextGenerator>) {
//!     let advisor = WorkoutAdvisor::new(generator);
//!     match advisor.generate_plan(&Profile::new(), Utc::now()).await {
//!         Ok(plan) => println!("{plan}"),
//!         Err(e) if e.is_retryable() => println!("Try again: {e}"),
//!         Err(e) => println!("{e}"),
//!     }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cyclefit_core::constants::planner::AI_PLAN_MAX_TOKENS;
use cyclefit_core::errors::{AppError, AppResult};
use cyclefit_core::models::{Gender, Profile};
use cyclefit_intelligence::classify_cycle_phase;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

/// Message shown to users when generation fails
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate AI workout. Please try again.";

/// Prompt and limits sent to the text generator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Free-text prompt
    pub prompt: String,
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

impl GenerationRequest {
    /// Request with the default token budget
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: AI_PLAN_MAX_TOKENS,
        }
    }

    /// Override the token budget
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Contract for the external text-generation service
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider identifier used in logs
    fn name(&self) -> &'static str;

    /// Generate unstructured text for a prompt
    async fn generate(&self, request: &GenerationRequest) -> AppResult<String>;
}

/// Describe the profile for the text generator
///
/// Missing fields fall back to neutral wording; the cycle line is only added
/// for female profiles.
#[must_use]
pub fn build_workout_prompt(profile: &Profile, reference: DateTime<Utc>) -> String {
    let subject = profile.gender.map_or("person", |g| g.as_str());
    let age = profile
        .age
        .map_or_else(|| "unknown".to_owned(), |a| a.to_string());
    let goal = profile.fitness_goal.map_or("general fitness", |g| g.as_str());
    let level = profile.activity_level.map_or("beginner", |l| l.as_str());
    let frequency = profile.workout_frequency_or_default();

    let mut lines = vec![
        format!("Generate a personalized workout plan for a {subject} with the following profile:"),
        format!("- Age: {age}"),
        format!("- Fitness Goal: {goal}"),
        format!("- Activity Level: {level}"),
        format!("- Workout Frequency: {frequency} times per week"),
    ];

    if profile.gender == Some(Gender::Female) {
        let phase = classify_cycle_phase(
            profile.last_period_date,
            reference,
            profile.cycle_length_days(),
        );
        lines.push(format!(
            "- Current cycle phase: {}",
            phase.map_or("unknown", |p| p.as_str())
        ));
    }

    lines.push(String::new());
    lines.push(
        "Please provide a detailed workout plan with specific exercises, sets, reps, and rest \
         periods. Focus on exercises that match their goal and experience level."
            .to_owned(),
    );

    lines.join("\n")
}

/// Generates free-text workout plans through a `TextGenerator`
#[derive(Clone)]
pub struct WorkoutAdvisor {
    generator: Arc<dyn TextGenerator>,
    max_tokens: u32,
}

impl WorkoutAdvisor {
    /// Advisor over a generator with the default token budget
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            max_tokens: AI_PLAN_MAX_TOKENS,
        }
    }

    /// Override the token budget
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Request a workout plan for `profile`
    ///
    /// # Errors
    ///
    /// Returns a retryable `RecommendationUnavailable` error if the generator
    /// fails or returns no text
    pub async fn generate_plan(
        &self,
        profile: &Profile,
        reference: DateTime<Utc>,
    ) -> AppResult<String> {
        let request = GenerationRequest::new(build_workout_prompt(profile, reference))
            .with_max_tokens(self.max_tokens);

        let text = self.generator.generate(&request).await.map_err(|e| {
            warn!(
                provider = self.generator.name(),
                error = %e,
                "AI workout generation failed"
            );
            AppError::recommendation_unavailable(GENERATION_FAILED_MESSAGE)
                .with_details(json!({ "provider": self.generator.name(), "cause": e.code }))
                .with_source(e)
        })?;

        if text.trim().is_empty() {
            warn!(
                provider = self.generator.name(),
                "AI workout generation returned no text"
            );
            return Err(AppError::recommendation_unavailable(
                GENERATION_FAILED_MESSAGE,
            ));
        }

        info!(
            provider = self.generator.name(),
            chars = text.len(),
            "AI workout generated"
        );
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use cyclefit_core::models::{ActivityLevel, FitnessGoal};

    #[test]
    fn test_prompt_defaults_for_empty_profile() {
        let reference = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let prompt = build_workout_prompt(&Profile::new(), reference);

        assert!(prompt.starts_with("Generate a personalized workout plan for a person"));
        assert!(prompt.contains("- Age: unknown"));
        assert!(prompt.contains("- Fitness Goal: general fitness"));
        assert!(prompt.contains("- Activity Level: beginner"));
        assert!(prompt.contains("- Workout Frequency: 3 times per week"));
        assert!(!prompt.contains("cycle phase"));
    }

    #[test]
    fn test_prompt_includes_cycle_phase_for_female_profile() {
        let reference = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let profile = Profile::new()
            .with_gender(Gender::Female)
            .with_age(31)
            .with_fitness_goal(FitnessGoal::Endurance)
            .with_activity_level(ActivityLevel::Advanced)
            .with_workout_frequency(5)
            .with_last_period_date(reference.date_naive() - Duration::days(2));

        let prompt = build_workout_prompt(&profile, reference);
        assert!(prompt.contains("for a female"));
        assert!(prompt.contains("- Age: 31"));
        assert!(prompt.contains("- Fitness Goal: endurance"));
        assert!(prompt.contains("- Activity Level: advanced"));
        assert!(prompt.contains("- Workout Frequency: 5 times per week"));
        assert!(prompt.contains("- Current cycle phase: menstrual"));
    }

    #[test]
    fn test_prompt_unknown_phase_without_date() {
        let reference = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let profile = Profile::new().with_gender(Gender::Female);
        assert!(build_workout_prompt(&profile, reference).contains("- Current cycle phase: unknown"));
    }
}
