// ABOUTME: Configuration module for cyclefit-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CycleFit

/// Intelligence module configuration (prescription table, adjustments, limits)
pub mod intelligence;

pub use intelligence::{ConfigError, IntelligenceConfig};
