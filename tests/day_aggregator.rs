//! Tests for the day aggregator's accumulation rules

use chrono::{DateTime, Local, TimeZone};
use worktime::{DateKey, DayAggregator, LocationKind};

fn ts(hour: u32, minute: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 6, 3, hour, minute, 0)
        .single()
        .unwrap()
}

fn key() -> DateKey {
    DateKey::from_datetime(&ts(12, 0))
}

#[test]
fn test_work_first_record_sets_both_extremes() {
    let mut agg = DayAggregator::new();
    agg.record(LocationKind::Work, ts(9, 0));

    let bucket = agg.work_days()[&key()];
    assert_eq!(bucket.arrived, Some(ts(9, 0)));
    assert_eq!(bucket.left, Some(ts(9, 0)));
}

#[test]
fn test_work_extremes_are_order_independent() {
    // Same fixes in three different orders must yield identical extremes.
    let orders: [[(u32, u32); 4]; 3] = [
        [(9, 0), (12, 15), (17, 30), (7, 50)],
        [(17, 30), (7, 50), (12, 15), (9, 0)],
        [(7, 50), (9, 0), (12, 15), (17, 30)],
    ];

    for order in orders {
        let mut agg = DayAggregator::new();
        for (h, m) in order {
            agg.record(LocationKind::Work, ts(h, m));
        }
        let bucket = agg.work_days()[&key()];
        assert_eq!(bucket.arrived, Some(ts(7, 50)));
        assert_eq!(bucket.left, Some(ts(17, 30)));
    }
}

#[test]
fn test_home_evening_record_lowers_arrived() {
    let mut agg = DayAggregator::new();
    agg.record(LocationKind::Home, ts(19, 0));
    agg.record(LocationKind::Home, ts(18, 20));

    let bucket = agg.home_days()[&key()];
    assert_eq!(bucket.arrived, Some(ts(18, 20)));
}

#[test]
fn test_home_morning_record_never_lowers_arrived() {
    let mut agg = DayAggregator::new();
    agg.record(LocationKind::Home, ts(18, 20));
    agg.record(LocationKind::Home, ts(7, 45));

    let bucket = agg.home_days()[&key()];
    assert_eq!(bucket.arrived, Some(ts(18, 20)));
    assert_eq!(bucket.left, Some(ts(7, 45)));
}

#[test]
fn test_home_morning_record_raises_left() {
    let mut agg = DayAggregator::new();
    agg.record(LocationKind::Home, ts(7, 0));
    agg.record(LocationKind::Home, ts(7, 45));

    let bucket = agg.home_days()[&key()];
    assert_eq!(bucket.left, Some(ts(7, 45)));
    assert_eq!(bucket.arrived, None);
}

#[test]
fn test_home_evening_record_never_raises_left() {
    let mut agg = DayAggregator::new();
    agg.record(LocationKind::Home, ts(18, 20));
    agg.record(LocationKind::Home, ts(19, 0));

    let bucket = agg.home_days()[&key()];
    assert_eq!(bucket.left, None);
}

#[test]
fn test_home_midday_record_updates_neither_field() {
    let mut agg = DayAggregator::new();
    agg.record(LocationKind::Home, ts(18, 20));
    agg.record(LocationKind::Home, ts(12, 30));
    agg.record(LocationKind::Home, ts(7, 45));

    let bucket = agg.home_days()[&key()];
    assert_eq!(bucket.arrived, Some(ts(18, 20)));
    assert_eq!(bucket.left, Some(ts(7, 45)));
}

#[test]
fn test_home_bucket_created_on_first_hit_even_without_updates() {
    let mut agg = DayAggregator::new();
    agg.record(LocationKind::Home, ts(12, 30));

    let bucket = agg.home_days()[&key()];
    assert_eq!(bucket.arrived, None);
    assert_eq!(bucket.left, None);
    assert_eq!(agg.home_day_count(), 1);
}

#[test]
fn test_buckets_are_keyed_by_calendar_day() {
    let mut agg = DayAggregator::new();
    agg.record(
        LocationKind::Work,
        Local.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).single().unwrap(),
    );
    agg.record(
        LocationKind::Work,
        Local.with_ymd_and_hms(2024, 6, 4, 9, 0, 0).single().unwrap(),
    );

    assert_eq!(agg.work_day_count(), 2);
    assert_eq!(agg.home_day_count(), 0);
}

#[test]
fn test_date_key_orders_chronologically() {
    let a = DateKey {
        year: 2023,
        month: 12,
        day: 31,
    };
    let b = DateKey {
        year: 2024,
        month: 1,
        day: 1,
    };
    let c = DateKey {
        year: 2024,
        month: 1,
        day: 2,
    };
    assert!(a < b && b < c);
    assert_eq!(b.to_string(), "2024-01-01");
}
