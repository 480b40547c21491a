//! Single-pass scan over a newest-first record stream.

use chrono::{Local, TimeZone};
use log::{debug, info};

use crate::day::{DayAggregator, LocationKind};
use crate::error::{Result, WorktimeError};
use crate::geofence::{GeofenceSet, PlanarDistance};
use crate::records::LocationRecord;

/// Emit a progress line after this many records.
const PROGRESS_INTERVAL: u64 = 10_000;

/// Outcome of a completed stream scan.
#[derive(Debug)]
pub struct ScanResult {
    /// Accumulated per-day presence state.
    pub aggregator: DayAggregator,
    /// Records consumed from the stream, including the one that triggered
    /// the start-date cutoff.
    pub processed: u64,
}

/// Scan a record stream, classify each fix, and fold it into day buckets.
///
/// The stream must be descending by timestamp (newest first). The scan stops
/// outright at the first record older than `start_threshold_ms`; it never
/// skips and resumes. A threshold of zero disables the cutoff.
///
/// Classification gives work priority: a fix inside both fences counts as
/// work. At most one kind is recorded per fix.
pub fn scan_records<I>(
    records: I,
    start_threshold_ms: i64,
    distance: &PlanarDistance,
    work: &GeofenceSet,
    home: Option<&GeofenceSet>,
) -> Result<ScanResult>
where
    I: IntoIterator<Item = LocationRecord>,
{
    let mut aggregator = DayAggregator::new();
    let mut processed = 0u64;

    for record in records {
        processed += 1;
        if processed % PROGRESS_INTERVAL == 0 {
            info!("at record {}", processed);
        }

        if record.timestamp_ms < start_threshold_ms {
            debug!(
                "record {} is older than the start threshold, stopping",
                record.timestamp_ms
            );
            break;
        }

        let timestamp = Local
            .timestamp_millis_opt(record.timestamp_ms)
            .single()
            .ok_or(WorktimeError::TimestampOutOfRange(record.timestamp_ms))?;

        let point = record.point();
        if work.contains(&point, distance) {
            aggregator.record(LocationKind::Work, timestamp);
        } else if let Some(home) = home {
            if home.contains(&point, distance) {
                aggregator.record(LocationKind::Home, timestamp);
            }
        }
    }

    info!("processed {} records", processed);
    Ok(ScanResult {
        aggregator,
        processed,
    })
}
