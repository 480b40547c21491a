//! Decoding of the location-history JSON export.
//!
//! The export is a single object with a `locations` array, newest fix first.
//! Fields not listed here (accuracy, altitude, activity guesses) are ignored.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::GpsPoint;

/// Fixed-point scale of the exported E7 coordinates.
const E7_SCALE: f64 = 10_000_000.0;

/// One GPS fix from the export.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Milliseconds since epoch. Older exports encode this as a JSON string.
    #[serde(rename = "timestampMs", deserialize_with = "timestamp_ms_lenient")]
    pub timestamp_ms: i64,
    #[serde(rename = "latitudeE7")]
    pub latitude_e7: i64,
    #[serde(rename = "longitudeE7")]
    pub longitude_e7: i64,
}

impl LocationRecord {
    /// The fix position in decimal degrees.
    pub fn point(&self) -> GpsPoint {
        GpsPoint::new(
            self.latitude_e7 as f64 / E7_SCALE,
            self.longitude_e7 as f64 / E7_SCALE,
        )
    }
}

/// A decoded export, newest fix first.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationHistory {
    pub locations: Vec<LocationRecord>,
}

/// Read and decode a location-history export file.
///
/// Any malformed record aborts the decode rather than being skipped.
pub fn read_location_history<P: AsRef<Path>>(path: P) -> Result<LocationHistory> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let history = serde_json::from_reader(reader)?;
    Ok(history)
}

/// Accept `timestampMs` as either a JSON number or an integer string.
fn timestamp_ms_lenient<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(ms) => Ok(ms),
        Raw::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("non-numeric timestampMs {text:?}"))),
    }
}
