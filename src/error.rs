//! Unified error handling for the worktime library.

use thiserror::Error;

/// Errors produced while configuring or running an analysis pass.
#[derive(Error, Debug)]
pub enum WorktimeError {
    #[error("invalid coordinate {0:?}: expected \"lat:lon\" in decimal degrees")]
    InvalidCoordinate(String),

    #[error("invalid start date {0:?}: expected YYYY-MM-DD")]
    InvalidStartDate(String),

    #[error("geofence needs at least one reference coordinate")]
    EmptyGeofence,

    #[error("record timestamp {0}ms has no local calendar representation")]
    TimestampOutOfRange(i64),

    #[error("no work day exceeded the eligibility threshold")]
    NoEligibleDays,

    #[error("failed to read location history: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed location history: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WorktimeError>;
