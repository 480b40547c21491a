//! Synthetic location-history generator for benchmarks and stress tests.
//!
//! Generates a newest-first record stream following a regular commute
//! schedule between a home and a work anchor, with uniform-ish GPS jitter
//! around each anchor. Deterministic for a given seed.
//!
//! Feature-gated behind `synthetic`, not included in production builds.

use chrono::{Duration, Local, NaiveDate, NaiveTime, TimeZone};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::records::LocationRecord;
use crate::GpsPoint;

/// Meters per degree of latitude (approximately constant).
const METERS_PER_DEG_LAT: f64 = 111_320.0;

/// Fixed-point scale of the exported E7 coordinates.
const E7_SCALE: f64 = 10_000_000.0;

/// Minutes between consecutive fixes within one stay.
const FIX_SPACING_MINUTES: i64 = 3;

/// A repeating weekday commute between two anchors.
///
/// Each day produces four stays: home before departure, work after arrival,
/// work before departure, and home after return. Departure stays end at
/// their nominal time; arrival stays begin at theirs.
#[derive(Debug, Clone)]
pub struct CommuteScenario {
    pub home: GpsPoint,
    pub work: GpsPoint,
    /// Number of consecutive calendar days to generate.
    pub days: u32,
    /// Fixes emitted per stay.
    pub fixes_per_stay: u32,
    /// Nominal (hour, minute) of leaving home.
    pub home_departure: (u32, u32),
    /// Nominal (hour, minute) of arriving at work.
    pub work_arrival: (u32, u32),
    /// Nominal (hour, minute) of leaving work.
    pub work_departure: (u32, u32),
    /// Nominal (hour, minute) of arriving home.
    pub home_arrival: (u32, u32),
    /// GPS noise amplitude in meters.
    pub gps_noise_sigma_meters: f64,
    /// RNG seed for deterministic reproduction.
    pub seed: u64,
}

impl Default for CommuteScenario {
    fn default() -> Self {
        Self {
            home: GpsPoint::new(46.5191, 6.6323),
            work: GpsPoint::new(46.5470, 6.5656),
            days: 5,
            fixes_per_stay: 3,
            home_departure: (7, 45),
            work_arrival: (8, 30),
            work_departure: (17, 30),
            home_arrival: (18, 20),
            gps_noise_sigma_meters: 8.0,
            seed: 42,
        }
    }
}

impl CommuteScenario {
    /// Generate a newest-first record stream covering `days` calendar days
    /// ending on `last_day`.
    pub fn generate(&self, last_day: NaiveDate) -> Vec<LocationRecord> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut records = Vec::with_capacity((self.days * self.fixes_per_stay * 4) as usize);

        for back in (0..self.days).rev() {
            let date = last_day - Duration::days(back as i64);
            self.push_stay(&mut records, &mut rng, date, self.home, self.home_departure, true);
            self.push_stay(&mut records, &mut rng, date, self.work, self.work_arrival, false);
            self.push_stay(&mut records, &mut rng, date, self.work, self.work_departure, true);
            self.push_stay(&mut records, &mut rng, date, self.home, self.home_arrival, false);
        }

        records.reverse();
        records
    }

    /// Emit the fixes of one stay in chronological order.
    ///
    /// `ends_at_nominal` places the last fix at the nominal time (a
    /// departure); otherwise the first fix lands on it (an arrival).
    fn push_stay(
        &self,
        out: &mut Vec<LocationRecord>,
        rng: &mut StdRng,
        date: NaiveDate,
        anchor: GpsPoint,
        nominal: (u32, u32),
        ends_at_nominal: bool,
    ) {
        let (hour, minute) = nominal;
        let base = date.and_time(NaiveTime::MIN)
            + Duration::hours(hour as i64)
            + Duration::minutes(minute as i64);

        for i in 0..self.fixes_per_stay {
            let at = if ends_at_nominal {
                base - Duration::minutes(
                    FIX_SPACING_MINUTES * (self.fixes_per_stay - 1 - i) as i64,
                )
            } else {
                base + Duration::minutes(FIX_SPACING_MINUTES * i as i64)
            };
            let local = Local
                .from_local_datetime(&at)
                .single()
                .expect("synthetic fix time is unambiguous");
            let point = self.jitter(rng, anchor);
            out.push(LocationRecord {
                timestamp_ms: local.timestamp_millis(),
                latitude_e7: (point.latitude * E7_SCALE).round() as i64,
                longitude_e7: (point.longitude * E7_SCALE).round() as i64,
            });
        }
    }

    fn jitter(&self, rng: &mut StdRng, anchor: GpsPoint) -> GpsPoint {
        let sigma = self.gps_noise_sigma_meters;
        if sigma <= 0.0 {
            return anchor;
        }
        // Mean of two uniform draws approximates a normal well enough here.
        let mut draw = |rng: &mut StdRng| {
            (rng.gen_range(-sigma..sigma) + rng.gen_range(-sigma..sigma)) / 2.0
        };
        let dlat = draw(rng) / METERS_PER_DEG_LAT;
        let dlng = draw(rng) / (METERS_PER_DEG_LAT * anchor.latitude.to_radians().cos());
        GpsPoint::new(anchor.latitude + dlat, anchor.longitude + dlng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_strictly_descending_records() {
        let scenario = CommuteScenario::default();
        let records = scenario.generate(NaiveDate::from_ymd_opt(2024, 6, 28).unwrap());

        assert_eq!(
            records.len(),
            (scenario.days * scenario.fixes_per_stay * 4) as usize
        );
        for pair in records.windows(2) {
            assert!(pair[0].timestamp_ms > pair[1].timestamp_ms);
        }
    }

    #[test]
    fn same_seed_reproduces_the_stream() {
        let scenario = CommuteScenario::default();
        let day = NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();
        assert_eq!(scenario.generate(day), scenario.generate(day));
    }
}
