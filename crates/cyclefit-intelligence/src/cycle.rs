// ABOUTME: Menstrual cycle phase inference from the last reported period date
// ABOUTME: Fixed day bands over whole days elapsed since the period start
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CycleFit

//! Cycle phase classification
//!
//! The phase is a pure function of the whole days elapsed between the period
//! start (midnight UTC) and the caller-supplied reference instant:
//!
//! | days since | phase |
//! |---|---|
//! | ≤ 5 | menstrual |
//! | 6-13 | follicular |
//! | 14-16 | ovulation |
//! | ≥ 17 | luteal |
//!
//! The bands are fixed. The reported cycle length does not shift them and
//! offsets past the end of the cycle are not wrapped; a stale period date
//! keeps classifying as luteal.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use cyclefit_core::constants::cycle::{FOLLICULAR_LAST_DAY, MENSTRUAL_LAST_DAY, OVULATION_LAST_DAY};
use cyclefit_core::models::CyclePhase;
use tracing::debug;

/// Whole days elapsed since the period start, rounded toward negative infinity
///
/// A period date after the reference yields a negative offset.
#[must_use]
pub fn days_since_period(last_period_date: NaiveDate, reference: DateTime<Utc>) -> i64 {
    let period_start = Utc.from_utc_datetime(&last_period_date.and_time(NaiveTime::MIN));
    let elapsed = reference - period_start;
    let whole_days = elapsed.num_days();
    if elapsed < Duration::days(whole_days) {
        whole_days - 1
    } else {
        whole_days
    }
}

/// Map a day offset onto its phase band
#[must_use]
pub const fn phase_for_day_offset(days_since: i64) -> CyclePhase {
    if days_since <= MENSTRUAL_LAST_DAY {
        CyclePhase::Menstrual
    } else if days_since <= FOLLICULAR_LAST_DAY {
        CyclePhase::Follicular
    } else if days_since <= OVULATION_LAST_DAY {
        CyclePhase::Ovulation
    } else {
        CyclePhase::Luteal
    }
}

/// Classify the cycle phase at `reference`
///
/// Returns `None` when no period date is known. `cycle_length_days` only
/// drives the stale-date diagnostic; it does not move the phase bands.
#[must_use]
pub fn classify_cycle_phase(
    last_period_date: Option<NaiveDate>,
    reference: DateTime<Utc>,
    cycle_length_days: u32,
) -> Option<CyclePhase> {
    let last_period_date = last_period_date?;
    let days_since = days_since_period(last_period_date, reference);

    if days_since >= i64::from(cycle_length_days) {
        debug!(
            days_since,
            cycle_length_days, "Period date is older than one cycle; phase is not wrapped"
        );
    }

    Some(phase_for_day_offset(days_since))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 20, 9, 30, 0).unwrap()
    }

    fn days_before(days: i64) -> NaiveDate {
        reference().date_naive() - Duration::days(days)
    }

    #[test]
    fn test_days_since_counts_whole_days() {
        assert_eq!(days_since_period(days_before(0), reference()), 0);
        assert_eq!(days_since_period(days_before(14), reference()), 14);
    }

    #[test]
    fn test_future_period_date_is_negative() {
        let tomorrow = reference().date_naive() + Duration::days(1);
        assert_eq!(days_since_period(tomorrow, reference()), -1);
        assert_eq!(
            classify_cycle_phase(Some(tomorrow), reference(), 28),
            Some(CyclePhase::Menstrual)
        );
    }

    #[test]
    fn test_band_boundaries() {
        let cases = [
            (0, CyclePhase::Menstrual),
            (5, CyclePhase::Menstrual),
            (6, CyclePhase::Follicular),
            (13, CyclePhase::Follicular),
            (14, CyclePhase::Ovulation),
            (16, CyclePhase::Ovulation),
            (17, CyclePhase::Luteal),
            (20, CyclePhase::Luteal),
        ];
        for (offset, expected) in cases {
            assert_eq!(
                classify_cycle_phase(Some(days_before(offset)), reference(), 28),
                Some(expected),
                "offset {offset}"
            );
        }
    }

    #[test]
    fn test_missing_date_has_no_phase() {
        assert_eq!(classify_cycle_phase(None, reference(), 28), None);
    }

    #[test]
    fn test_stale_date_stays_luteal() {
        assert_eq!(
            classify_cycle_phase(Some(days_before(90)), reference(), 28),
            Some(CyclePhase::Luteal)
        );
    }

    #[test]
    fn test_cycle_length_does_not_shift_bands() {
        let date = Some(days_before(15));
        assert_eq!(
            classify_cycle_phase(date, reference(), 21),
            classify_cycle_phase(date, reference(), 35)
        );
    }
}
