//! Pure, stateless progress calculations.
//!
//! Raw goal values are never clamped; only the derived percentages are,
//! so over-achieved goals read as 100% while keeping their true totals.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{MONTHS_PER_YEAR, MONTH_NAMES};
use crate::goals::{Goal, LogEntry};

/// Completion percentage for display: `min(100, round(current/target*100))`.
/// A non-positive target reads as 0% rather than dividing by zero.
pub fn percent_complete(goal: &Goal) -> u8 {
    clamped_percent(goal.current, goal.target)
}

/// Completion as an unrounded value in [0, 100], used for averaging.
pub fn completion_ratio(goal: &Goal) -> f64 {
    if goal.target <= 0.0 {
        return 0.0;
    }
    (goal.current / goal.target * 100.0).min(100.0)
}

/// Amount still missing to reach the target, floored at zero.
pub fn remaining(goal: &Goal) -> f64 {
    (goal.target - goal.current).max(0.0)
}

/// Mean of the per-goal clamped completion ratios, for the global header
/// indicator. An empty list yields 0.
pub fn aggregate_progress(goals: &[Goal]) -> f64 {
    if goals.is_empty() {
        return 0.0;
    }
    let sum: f64 = goals.iter().map(completion_ratio).sum();
    sum / goals.len() as f64
}

/// (filled, empty) segments for a progress ring. A goal at or over its
/// target renders as a single full segment instead of a negative remainder.
pub fn donut_segments(current: f64, target: f64) -> (f64, f64) {
    if current >= target {
        (1.0, 0.0)
    } else {
        (current, (target - current).max(0.0))
    }
}

/// Derived view of one calendar month of a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyProgress {
    /// Calendar month, 1-12.
    pub month: u32,
    pub year: i32,
    pub name: String,
    /// Sum of the month's log values (a log without a value counts as 1).
    pub current: f64,
    /// Even share of the annual target: `target / 12`.
    pub target: f64,
    pub percentage: u8,
    /// Timestamp of the most recent log within the month, if any.
    pub last_log: Option<DateTime<Utc>>,
}

/// Breakdown of one calendar month (UTC): filters the goal's logs to the
/// month, sums their values, and measures them against an even monthly
/// share of the annual target.
pub fn monthly_breakdown(goal: &Goal, year: i32, month: u32) -> MonthlyProgress {
    let monthly_target = goal.target / MONTHS_PER_YEAR as f64;

    let mut current = 0.0;
    let mut last_log: Option<DateTime<Utc>> = None;
    for log in logs_in_month(&goal.logs, year, month) {
        current += log.amount();
        let when = Utc.timestamp_millis_opt(log.timestamp).single();
        if let Some(when) = when {
            if last_log.map(|prev| when > prev).unwrap_or(true) {
                last_log = Some(when);
            }
        }
    }

    MonthlyProgress {
        month,
        year,
        name: month_name(month),
        current,
        target: monthly_target,
        percentage: clamped_percent(current, monthly_target),
        last_log,
    }
}

/// All twelve monthly breakdowns of a year, January first.
pub fn year_breakdown(goal: &Goal, year: i32) -> Vec<MonthlyProgress> {
    (1..=MONTHS_PER_YEAR)
        .map(|month| monthly_breakdown(goal, year, month))
        .collect()
}

fn logs_in_month<'a>(
    logs: &'a [LogEntry],
    year: i32,
    month: u32,
) -> impl Iterator<Item = &'a LogEntry> {
    logs.iter().filter(move |log| {
        Utc.timestamp_millis_opt(log.timestamp)
            .single()
            .map(|date| date.year() == year && date.month() == month)
            .unwrap_or(false)
    })
}

fn month_name(month: u32) -> String {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or_default()
        .to_string()
}

fn clamped_percent(current: f64, target: f64) -> u8 {
    if target <= 0.0 {
        return 0;
    }
    let pct = (current / target * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}
