//! Parsing of run configuration: coordinates, tolerance, start date.

use chrono::{Local, NaiveDate, NaiveTime, TimeZone};

use crate::error::{Result, WorktimeError};
use crate::GpsPoint;

/// Default geofence tolerance radius in kilometers.
pub const DEFAULT_TOLERANCE_KM: f64 = 0.5;

/// Parse a single `"lat:lon"` coordinate in decimal degrees.
pub fn parse_coordinate(input: &str) -> Result<GpsPoint> {
    let invalid = || WorktimeError::InvalidCoordinate(input.to_string());
    let mut parts = input.splitn(2, ':');
    let (Some(lat), Some(lon)) = (parts.next(), parts.next()) else {
        return Err(invalid());
    };
    let latitude = lat.trim().parse::<f64>().map_err(|_| invalid())?;
    let longitude = lon.trim().parse::<f64>().map_err(|_| invalid())?;
    let point = GpsPoint::new(latitude, longitude);
    if !point.is_valid() {
        return Err(invalid());
    }
    Ok(point)
}

/// Parse a comma-separated list of `"lat:lon"` coordinates.
pub fn parse_coordinate_list(input: &str) -> Result<Vec<GpsPoint>> {
    input
        .split(',')
        .map(|part| parse_coordinate(part.trim()))
        .collect()
}

/// Parse a `YYYY-MM-DD` local calendar date into the epoch-millisecond
/// timestamp of its local midnight.
///
/// Rejected input aborts the run before any stream processing starts; a bad
/// date never silently degrades to "no filter".
pub fn parse_start_date(input: &str) -> Result<i64> {
    let invalid = || WorktimeError::InvalidStartDate(input.to_string());
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| invalid())?;
    let midnight = date.and_time(NaiveTime::MIN);
    let local = Local
        .from_local_datetime(&midnight)
        .single()
        .ok_or_else(invalid)?;
    Ok(local.timestamp_millis())
}
