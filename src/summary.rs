//! Reduction of aggregated day buckets into work and commute reports.

use chrono::{DateTime, Local};
use log::warn;

use crate::day::{DateKey, DayAggregator};
use crate::error::{Result, WorktimeError};

/// Whole-hours threshold a day must exceed to enter the average.
///
/// Filters out spurious single-ping days. A day of exactly two hours and
/// change does not qualify.
pub const MIN_ELIGIBLE_HOURS: i64 = 2;

/// One day of observed work presence.
#[derive(Debug, Clone, Copy)]
pub struct WorkDay {
    pub date: DateKey,
    pub arrived: DateTime<Local>,
    pub left: DateTime<Local>,
    pub duration_seconds: i64,
}

impl WorkDay {
    /// Whole hours of the day's duration.
    pub fn hours(&self) -> i64 {
        self.duration_seconds / 3600
    }

    /// Remainder minutes of the day's duration.
    pub fn minutes(&self) -> i64 {
        self.duration_seconds % 3600 / 60
    }

    /// Whether the day counts toward the average.
    pub fn is_eligible(&self) -> bool {
        self.hours() > MIN_ELIGIBLE_HOURS
    }
}

/// Mean duration over the eligible work days.
#[derive(Debug, Clone, Copy)]
pub struct WorkAverage {
    pub eligible_days: usize,
    pub hours: i64,
    pub minutes: i64,
}

/// One day with both work presence and home presence around it.
#[derive(Debug, Clone, Copy)]
pub struct CommuteDay {
    pub date: DateKey,
    /// Minutes between leaving home and arriving at work.
    pub morning_minutes: i64,
    /// Minutes between leaving work and arriving home.
    pub evening_minutes: i64,
}

/// Per-day work durations in ascending date order.
///
/// A bucket missing either extreme never observed real presence and is
/// skipped with a warning instead of producing nonsense arithmetic.
pub fn work_report(aggregator: &DayAggregator) -> Vec<WorkDay> {
    let mut days = Vec::with_capacity(aggregator.work_day_count());
    for (date, bucket) in aggregator.work_days() {
        let (Some(arrived), Some(left)) = (bucket.arrived, bucket.left) else {
            warn!("skipping {}: incomplete presence observation", date);
            continue;
        };
        days.push(WorkDay {
            date: *date,
            arrived,
            left,
            duration_seconds: (left - arrived).num_seconds(),
        });
    }
    days
}

/// Mean work duration across the eligible days.
///
/// Returns [`WorktimeError::NoEligibleDays`] when no day passes the filter,
/// so callers get a reportable outcome instead of a division by zero.
pub fn average_work_duration(days: &[WorkDay]) -> Result<WorkAverage> {
    let eligible: Vec<i64> = days
        .iter()
        .filter(|day| day.is_eligible())
        .map(|day| day.duration_seconds)
        .collect();
    if eligible.is_empty() {
        return Err(WorktimeError::NoEligibleDays);
    }
    let mean_seconds = eligible.iter().sum::<i64>() / eligible.len() as i64;
    Ok(WorkAverage {
        eligible_days: eligible.len(),
        hours: mean_seconds / 3600,
        minutes: mean_seconds % 3600 / 60,
    })
}

/// Per-day commute durations for days with both a work and a home bucket.
///
/// Days without a matching home bucket are skipped silently; a home bucket
/// missing one of its extremes is skipped with a warning since neither leg
/// can be trusted without the other.
pub fn commute_report(aggregator: &DayAggregator) -> Vec<CommuteDay> {
    let mut days = Vec::new();
    for (date, work) in aggregator.work_days() {
        let Some(home) = aggregator.home_days().get(date) else {
            continue;
        };
        let (Some(work_arrived), Some(work_left)) = (work.arrived, work.left) else {
            warn!("skipping commute on {}: incomplete work presence", date);
            continue;
        };
        let (Some(home_arrived), Some(home_left)) = (home.arrived, home.left) else {
            warn!("skipping commute on {}: incomplete home presence", date);
            continue;
        };
        days.push(CommuteDay {
            date: *date,
            morning_minutes: (work_arrived - home_left).num_minutes(),
            evening_minutes: (home_arrived - work_left).num_minutes(),
        });
    }
    days
}
