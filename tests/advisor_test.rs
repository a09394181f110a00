// ABOUTME: Integration tests for the AI workout advisor over mock text generators
// ABOUTME: Verifies prompt contents, success passthrough, and retryable failure mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CycleFit
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::error::Error as _;
use std::sync::Arc;

use async_trait::async_trait;
use common::{complete_profile, init_test_logging, reference_time};
use cyclefit::advisor::{
    GenerationRequest, TextGenerator, WorkoutAdvisor, GENERATION_FAILED_MESSAGE,
};
use cyclefit::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
use tokio::sync::Mutex;

/// Canned outcome for the mock generator
enum Reply {
    Text(String),
    Upstream503,
    MalformedJson,
}

/// Records every request and replies with a fixed outcome
struct MockGenerator {
    reply: Reply,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl MockGenerator {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Text(text.to_owned()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn failing(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            requests: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(&self, request: &GenerationRequest) -> AppResult<String> {
        self.requests.lock().await.push(request.clone());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Upstream503 => Err(AppError::external_service(
                "mock",
                "upstream returned 503",
            )),
            Reply::MalformedJson => {
                let body: serde_json::Value = serde_json::from_str("{\"plan\": ")?;
                Ok(body.to_string())
            }
        }
    }
}

#[tokio::test]
async fn test_generated_plan_is_returned_verbatim() {
    init_test_logging();
    let generator = MockGenerator::replying("Day 1: Squats 4x9, rest 105s");
    let advisor = WorkoutAdvisor::new(generator.clone());

    let plan = advisor
        .generate_plan(&complete_profile(), reference_time())
        .await
        .unwrap();
    assert_eq!(plan, "Day 1: Squats 4x9, rest 105s");

    let requests = generator.requests.lock().await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.max_tokens, 500);
    assert!(request.prompt.contains("for a female"));
    assert!(request.prompt.contains("- Age: 29"));
    assert!(request.prompt.contains("- Fitness Goal: strength"));
    assert!(request.prompt.contains("- Workout Frequency: 4 times per week"));
    assert!(request.prompt.contains("- Current cycle phase: ovulation"));
}

#[tokio::test]
async fn test_token_budget_is_forwarded() {
    init_test_logging();
    let generator = MockGenerator::replying("Rest day");
    let advisor = WorkoutAdvisor::new(generator.clone()).with_max_tokens(120);

    advisor
        .generate_plan(&complete_profile(), reference_time())
        .await
        .unwrap();
    assert_eq!(generator.requests.lock().await[0].max_tokens, 120);
}

#[tokio::test]
async fn test_generator_failure_is_retryable() {
    init_test_logging();
    let advisor = WorkoutAdvisor::new(MockGenerator::failing(Reply::Upstream503));

    let err = advisor
        .generate_plan(&complete_profile(), reference_time())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::RecommendationUnavailable);
    assert!(err.is_retryable());
    assert_eq!(err.message, GENERATION_FAILED_MESSAGE);
    assert!(err.source().is_some());
    assert_eq!(err.context.details["provider"], "mock");
    assert_eq!(err.context.details["cause"], "EXTERNAL_SERVICE_ERROR");

    let response = ErrorResponse::from(err);
    assert!(response.retryable);
}

#[tokio::test]
async fn test_non_retryable_generator_error_still_maps_to_unavailable() {
    init_test_logging();
    let advisor = WorkoutAdvisor::new(MockGenerator::failing(Reply::MalformedJson));

    let err = advisor
        .generate_plan(&complete_profile(), reference_time())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::RecommendationUnavailable);
    assert!(err.is_retryable());
    assert_eq!(err.context.details["cause"], "SERIALIZATION_ERROR");
}

#[tokio::test]
async fn test_blank_generation_is_unavailable() {
    init_test_logging();
    let advisor = WorkoutAdvisor::new(MockGenerator::replying("   \n"));

    let err = advisor
        .generate_plan(&complete_profile(), reference_time())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::RecommendationUnavailable);
    assert!(err.source().is_none());
}
