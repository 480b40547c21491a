//! Geofence matching using a planar equirectangular distance approximation.
//!
//! Distances are computed on a flat projection: the longitude delta is scaled
//! by the cosine of a single reference latitude fixed at construction time,
//! then combined with the latitude delta in a Euclidean norm. The shared
//! coefficient assumes all points of interest lie within a small geographic
//! span; it is intentionally not recomputed per point pair.

use crate::error::{Result, WorktimeError};
use crate::GpsPoint;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Converts a degree-space Euclidean norm into kilometers.
const DEG_TO_KM: f64 = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;

/// Planar distance model with a precomputed longitude coefficient.
///
/// The reference latitude is fixed once per run. Conventionally this is the
/// first configured home coordinate, or the first work coordinate when no
/// home is tracked.
#[derive(Debug, Clone, Copy)]
pub struct PlanarDistance {
    lon_coefficient: f64,
}

impl PlanarDistance {
    /// Create a distance model anchored at the given reference latitude
    /// in decimal degrees.
    pub fn new(reference_latitude: f64) -> Self {
        Self {
            lon_coefficient: reference_latitude.to_radians().cos(),
        }
    }

    /// Approximate distance between two points in kilometers.
    ///
    /// Accurate to well under a percent for the few-kilometer spans this
    /// model is built for; degrades for widely separated points.
    pub fn distance_km(&self, a: &GpsPoint, b: &GpsPoint) -> f64 {
        let dlat = a.latitude - b.latitude;
        let dlon = (a.longitude - b.longitude) * self.lon_coefficient;
        (dlat * dlat + dlon * dlon).sqrt() * DEG_TO_KM
    }
}

/// An immutable set of reference coordinates plus a tolerance radius.
///
/// A point is inside the fence when its distance to any member is strictly
/// less than the tolerance. Ties are exclusive.
#[derive(Debug, Clone)]
pub struct GeofenceSet {
    members: Vec<GpsPoint>,
    tolerance_km: f64,
}

impl GeofenceSet {
    /// Create a geofence from one or more reference points.
    ///
    /// Returns an error for an empty member list.
    pub fn new(members: Vec<GpsPoint>, tolerance_km: f64) -> Result<Self> {
        if members.is_empty() {
            return Err(WorktimeError::EmptyGeofence);
        }
        Ok(Self {
            members,
            tolerance_km,
        })
    }

    /// The reference coordinates, in configuration order.
    pub fn members(&self) -> &[GpsPoint] {
        &self.members
    }

    /// The tolerance radius in kilometers.
    pub fn tolerance_km(&self) -> f64 {
        self.tolerance_km
    }

    /// Test whether a point falls within the fence.
    pub fn contains(&self, point: &GpsPoint, distance: &PlanarDistance) -> bool {
        self.members
            .iter()
            .any(|member| distance.distance_km(point, member) < self.tolerance_km)
    }
}
