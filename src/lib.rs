//! # Worktime
//!
//! Daily work-duration and commute analytics over a personal
//! location-history export.
//!
//! This library provides:
//! - Geofence classification of GPS fixes against named reference points
//! - Per-calendar-day presence aggregation (earliest arrival, latest departure)
//! - Work-duration and morning/evening commute summaries
//! - A streaming scan over newest-first record exports with a start-date cutoff
//!
//! ## Features
//!
//! - **`synthetic`** - Seeded synthetic record generation for benchmarks
//!
//! ## Quick Start
//!
//! ```rust
//! use worktime::{scan_records, GeofenceSet, GpsPoint, LocationRecord, PlanarDistance};
//!
//! let office = GpsPoint::new(46.5197, 6.6323);
//! let distance = PlanarDistance::new(office.latitude);
//! let work = GeofenceSet::new(vec![office], 0.5).unwrap();
//!
//! // Newest-first fixes, as found in a location-history export.
//! let records = vec![
//!     LocationRecord {
//!         timestamp_ms: 1_700_000_000_000,
//!         latitude_e7: 465_197_000,
//!         longitude_e7: 66_323_000,
//!     },
//!     LocationRecord {
//!         timestamp_ms: 1_699_999_990_000,
//!         latitude_e7: 465_197_100,
//!         longitude_e7: 66_323_100,
//!     },
//! ];
//!
//! let scan = scan_records(records, 0, &distance, &work, None).unwrap();
//! assert_eq!(scan.processed, 2);
//! assert_eq!(scan.aggregator.work_day_count(), 1);
//! ```

use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{Result, WorktimeError};

// Geofence matching (planar distance + tolerance test)
pub mod geofence;
pub use geofence::{GeofenceSet, PlanarDistance, EARTH_RADIUS_KM};

// Per-day presence aggregation
pub mod day;
pub use day::{DateKey, DayAggregator, DayBucket, LocationKind};

// Location-history export decoding
pub mod records;
pub use records::{read_location_history, LocationHistory, LocationRecord};

// Stream scan over newest-first records
pub mod driver;
pub use driver::{scan_records, ScanResult};

// Work-duration and commute summaries
pub mod summary;
pub use summary::{
    average_work_duration, commute_report, work_report, CommuteDay, WorkAverage, WorkDay,
    MIN_ELIGIBLE_HOURS,
};

// Run configuration parsing (coordinates, tolerance, start date)
pub mod config;
pub use config::{parse_coordinate, parse_coordinate_list, parse_start_date, DEFAULT_TOLERANCE_KM};

// Synthetic record generation for benchmarks
#[cfg(feature = "synthetic")]
pub mod synthetic;

// ============================================================================
// Core Types
// ============================================================================

/// A GPS coordinate with latitude and longitude in signed decimal degrees.
///
/// # Example
/// ```
/// use worktime::GpsPoint;
/// let point = GpsPoint::new(46.5197, 6.6323); // Lausanne
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsPoint {
    /// Create a new GPS point.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check if the point has valid coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}
