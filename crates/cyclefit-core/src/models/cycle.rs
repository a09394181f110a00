// ABOUTME: Menstrual cycle phase enumeration derived from days since last period
// ABOUTME: Defines CyclePhase with display names and snake_case serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CycleFit

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four menstrual-cycle stages
///
/// Derived from the days elapsed since the last reported period start; never
/// stored on a profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CyclePhase {
    /// Days 0-5
    Menstrual,
    /// Days 6-13
    Follicular,
    /// Days 14-16
    Ovulation,
    /// Day 17 onwards
    Luteal,
}

impl CyclePhase {
    /// Human-readable label for dashboards
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Menstrual => "Menstrual",
            Self::Follicular => "Follicular",
            Self::Ovulation => "Ovulation",
            Self::Luteal => "Luteal",
        }
    }

    /// Lowercase identifier, as used in prompts and logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Menstrual => "menstrual",
            Self::Follicular => "follicular",
            Self::Ovulation => "ovulation",
            Self::Luteal => "luteal",
        }
    }
}

impl fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
