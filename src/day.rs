//! Per-calendar-day presence aggregation.
//!
//! Each classified fix folds into a [`DayBucket`] keyed by its local calendar
//! date. Work presence accumulates plain earliest/latest extremes. Home
//! presence uses an asymmetric rule built around the commute pattern: only an
//! evening fix can establish the return home, and only a morning fix can
//! establish the departure. Fixes between noon and 13:00 fall in neither
//! window and update nothing.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Datelike, Local, Timelike};
use serde::{Deserialize, Serialize};

/// First hour counted as evening for the home arrival rule.
const EVENING_START_HOUR: u32 = 13;

/// First hour no longer counted as morning for the home departure rule.
const MORNING_END_HOUR: u32 = 12;

/// Calendar-day bucket key derived from a record's local timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateKey {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateKey {
    /// Bucket key for the local calendar date of the given timestamp.
    pub fn from_datetime(timestamp: &DateTime<Local>) -> Self {
        Self {
            year: timestamp.year(),
            month: timestamp.month(),
            day: timestamp.day(),
        }
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// The tracked location categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    Work,
    Home,
}

/// Running presence extremes for one location kind on one calendar day.
///
/// Absent fields mean no fix has established that extreme yet, which keeps
/// "no presence observed" distinct from any real timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DayBucket {
    /// Earliest observed presence. Only ever lowered once set.
    pub arrived: Option<DateTime<Local>>,
    /// Latest observed presence. Only ever raised once set.
    pub left: Option<DateTime<Local>>,
}

/// Accumulates day buckets for work and home presence.
///
/// Buckets are created lazily on the first classified fix for a date and are
/// never removed. The maps are read once the full stream has been consumed.
#[derive(Debug, Default)]
pub struct DayAggregator {
    work: BTreeMap<DateKey, DayBucket>,
    home: BTreeMap<DateKey, DayBucket>,
}

impl DayAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one classified fix into its day bucket.
    ///
    /// Work fixes update both extremes independently. Home fixes follow the
    /// asymmetric commute rule: an evening fix (hour >= 13) may lower
    /// `arrived`, and otherwise a morning fix (hour < 12) may raise `left`.
    /// The arrival rule is evaluated first; an evening fix that does not
    /// lower `arrived` is not offered to the departure rule.
    pub fn record(&mut self, kind: LocationKind, timestamp: DateTime<Local>) {
        let key = DateKey::from_datetime(&timestamp);
        match kind {
            LocationKind::Work => {
                let bucket = self.work.entry(key).or_default();
                if bucket.arrived.map_or(true, |arrived| timestamp < arrived) {
                    bucket.arrived = Some(timestamp);
                }
                if bucket.left.map_or(true, |left| timestamp > left) {
                    bucket.left = Some(timestamp);
                }
            }
            LocationKind::Home => {
                let hour = timestamp.hour();
                let bucket = self.home.entry(key).or_default();
                if hour >= EVENING_START_HOUR {
                    if bucket.arrived.map_or(true, |arrived| timestamp < arrived) {
                        bucket.arrived = Some(timestamp);
                    }
                } else if hour < MORNING_END_HOUR
                    && bucket.left.map_or(true, |left| timestamp > left)
                {
                    bucket.left = Some(timestamp);
                }
            }
        }
    }

    /// Work buckets in ascending date order.
    pub fn work_days(&self) -> &BTreeMap<DateKey, DayBucket> {
        &self.work
    }

    /// Home buckets in ascending date order.
    pub fn home_days(&self) -> &BTreeMap<DateKey, DayBucket> {
        &self.home
    }

    /// Number of distinct days with observed work presence.
    pub fn work_day_count(&self) -> usize {
        self.work.len()
    }

    /// Number of distinct days with observed home presence.
    pub fn home_day_count(&self) -> usize {
        self.home.len()
    }
}
