// ABOUTME: Core types and constants for the CycleFit workout recommendation workspace
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CycleFit

#![deny(unsafe_code)]

//! # CycleFit Core
//!
//! Foundation crate providing shared types and constants for the CycleFit
//! workout recommendation workspace. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Cycle-phase day bands, prescription defaults, planner limits
//! - **models**: Profile, exercise, prescription, and cycle-phase types

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Profile, Exercise, Prescription, `CyclePhase`)
pub mod models;
