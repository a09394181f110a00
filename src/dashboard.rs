// ABOUTME: Dashboard summary built from the profile and an in-memory workout log
// ABOUTME: Goal label, cycle insight, recent workouts, totals, and weekly progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CycleFit

use chrono::{DateTime, Duration, NaiveDate, Utc};
use cyclefit_core::constants::planner::{
    DASHBOARD_WORKOUT_FREQUENCY, RECENT_WORKOUTS_LIMIT, WEEKLY_WINDOW_DAYS,
};
use cyclefit_core::models::{MuscleGroup, Profile};
use cyclefit_intelligence::{cycle_insight, goal_label, CycleInsight};
use serde::{Deserialize, Serialize};

/// One logged workout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutLogEntry {
    /// Log entry identifier
    pub id: String,
    /// Day the workout took place
    pub date: NaiveDate,
    /// Muscle groups trained
    pub muscle_groups: Vec<MuscleGroup>,
    /// Exercises performed
    pub total_exercises: u32,
    /// Sets performed
    pub total_sets: u32,
    /// Session length
    pub duration_minutes: u32,
}

/// Everything the dashboard cards display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardSummary {
    /// Goal display label ("Not Set" when missing)
    pub goal_label: String,
    /// Current cycle phase, for female profiles with a period date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<CycleInsight>,
    /// Most recent workouts, newest first
    pub recent_workouts: Vec<WorkoutLogEntry>,
    /// Workouts in the log
    pub total_workouts: usize,
    /// Sets across the log
    pub total_sets: u32,
    /// Minutes across the log
    pub total_minutes: u32,
    /// Workouts in the last seven days
    pub workouts_this_week: u32,
    /// Percent of the weekly target reached (target defaults to four sessions)
    pub weekly_progress_percent: u8,
}

/// Percent of `planned` reached by `completed`, capped at 100
#[must_use]
pub fn weekly_progress(completed: u32, planned: u32) -> u8 {
    if planned == 0 {
        return 0;
    }
    let percent = (u64::from(completed) * 100 / u64::from(planned)).min(100);
    u8::try_from(percent).unwrap_or(100)
}

impl DashboardSummary {
    /// Build the summary as of `reference`
    #[must_use]
    pub fn build(profile: &Profile, log: &[WorkoutLogEntry], reference: DateTime<Utc>) -> Self {
        let today = reference.date_naive();
        let week_start = today - Duration::days(WEEKLY_WINDOW_DAYS - 1);

        let mut recent: Vec<WorkoutLogEntry> = log.to_vec();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(RECENT_WORKOUTS_LIMIT);

        let workouts_this_week = log
            .iter()
            .filter(|w| w.date >= week_start && w.date <= today)
            .count();
        let workouts_this_week = u32::try_from(workouts_this_week).unwrap_or(u32::MAX);

        Self {
            goal_label: goal_label(profile.fitness_goal).to_owned(),
            cycle: cycle_insight(profile, reference),
            recent_workouts: recent,
            total_workouts: log.len(),
            total_sets: log.iter().map(|w| w.total_sets).sum(),
            total_minutes: log.iter().map(|w| w.duration_minutes).sum(),
            workouts_this_week,
            weekly_progress_percent: weekly_progress(
                workouts_this_week,
                profile
                    .workout_frequency
                    .filter(|&f| f > 0)
                    .unwrap_or(DASHBOARD_WORKOUT_FREQUENCY),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_weekly_progress() {
        assert_eq!(weekly_progress(3, 4), 75);
        assert_eq!(weekly_progress(5, 4), 100);
        assert_eq!(weekly_progress(2, 0), 0);
    }

    #[test]
    fn test_weekly_target_defaults_to_four_sessions() {
        let reference = Utc.with_ymd_and_hms(2025, 4, 2, 7, 0, 0).unwrap();
        let log: Vec<WorkoutLogEntry> = (0..2)
            .map(|day| WorkoutLogEntry {
                id: format!("w{day}"),
                date: reference.date_naive() - Duration::days(day),
                muscle_groups: vec![MuscleGroup::Back],
                total_exercises: 2,
                total_sets: 6,
                duration_minutes: 30,
            })
            .collect();

        let summary = DashboardSummary::build(&Profile::new(), &log, reference);
        assert_eq!(summary.workouts_this_week, 2);
        assert_eq!(summary.weekly_progress_percent, 50);

        let zero = Profile::new().with_workout_frequency(0);
        let summary = DashboardSummary::build(&zero, &log, reference);
        assert_eq!(summary.weekly_progress_percent, 50);

        let twice_weekly = Profile::new().with_workout_frequency(2);
        let summary = DashboardSummary::build(&twice_weekly, &log, reference);
        assert_eq!(summary.weekly_progress_percent, 100);
    }
}
