// ABOUTME: Training prescription value type (sets, reps, rest seconds)
// ABOUTME: Output of the recommendation engine, recomputed on every call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CycleFit

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sets/reps/rest triple recommended for an exercise
///
/// Plain value with no identity. Adjustments produce a new value instead of
/// mutating the input.
///
/// # Examples
///
/// ```rust
/// use cyclefit_core::models::Prescription;
///
/// let prescription = Prescription::new(3, 10, 75);
/// assert_eq!(prescription.total_reps(), 30);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Prescription {
    /// Number of working sets (at least 1)
    pub sets: u32,
    /// Repetitions per set (at least 1)
    pub reps: u32,
    /// Rest between sets in seconds
    pub rest_seconds: u32,
}

impl Prescription {
    /// Create a prescription
    #[must_use]
    pub const fn new(sets: u32, reps: u32, rest_seconds: u32) -> Self {
        Self {
            sets,
            reps,
            rest_seconds,
        }
    }

    /// Total repetitions across all sets
    #[must_use]
    pub const fn total_reps(&self) -> u32 {
        self.sets.saturating_mul(self.reps)
    }
}

impl From<(u32, u32, u32)> for Prescription {
    fn from((sets, reps, rest_seconds): (u32, u32, u32)) -> Self {
        Self::new(sets, reps, rest_seconds)
    }
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {} ({}s rest)",
            self.sets, self.reps, self.rest_seconds
        )
    }
}
