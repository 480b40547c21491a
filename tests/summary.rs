//! Tests for the work-duration and commute summaries

use chrono::{DateTime, Local, TimeZone};
use worktime::{
    average_work_duration, commute_report, work_report, DayAggregator, LocationKind,
    WorktimeError,
};

fn ts(day: u32, hour: u32, minute: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 6, day, hour, minute, 0)
        .single()
        .unwrap()
}

#[test]
fn test_work_report_splits_duration_into_hours_and_minutes() {
    let mut agg = DayAggregator::new();
    agg.record(LocationKind::Work, ts(3, 9, 0));
    agg.record(LocationKind::Work, ts(3, 17, 30));

    let days = work_report(&agg);
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].hours(), 8);
    assert_eq!(days[0].minutes(), 30);
    assert_eq!(days[0].duration_seconds, 8 * 3600 + 30 * 60);
}

#[test]
fn test_work_report_is_in_ascending_date_order() {
    let mut agg = DayAggregator::new();
    // Fixes arrive newest day first, as in a real export.
    agg.record(LocationKind::Work, ts(5, 9, 0));
    agg.record(LocationKind::Work, ts(3, 9, 0));
    agg.record(LocationKind::Work, ts(4, 9, 0));

    let days = work_report(&agg);
    let dates: Vec<u32> = days.iter().map(|d| d.date.day).collect();
    assert_eq!(dates, vec![3, 4, 5]);
}

#[test]
fn test_average_skips_short_days() {
    let mut agg = DayAggregator::new();
    // A one-hour day and a nine-hour day; only the latter is eligible.
    agg.record(LocationKind::Work, ts(3, 12, 0));
    agg.record(LocationKind::Work, ts(3, 13, 0));
    agg.record(LocationKind::Work, ts(4, 8, 30));
    agg.record(LocationKind::Work, ts(4, 17, 30));

    let days = work_report(&agg);
    let average = average_work_duration(&days).unwrap();
    assert_eq!(average.eligible_days, 1);
    assert_eq!(average.hours, 9);
    assert_eq!(average.minutes, 0);
}

#[test]
fn test_eligibility_is_on_whole_hours() {
    // 2h59m truncates to 2 whole hours and stays ineligible.
    let mut agg = DayAggregator::new();
    agg.record(LocationKind::Work, ts(3, 9, 0));
    agg.record(LocationKind::Work, ts(3, 11, 59));
    agg.record(LocationKind::Work, ts(4, 9, 0));
    agg.record(LocationKind::Work, ts(4, 18, 0));

    let days = work_report(&agg);
    assert!(!days[0].is_eligible());
    assert!(days[1].is_eligible());

    let average = average_work_duration(&days).unwrap();
    assert_eq!(average.eligible_days, 1);
    assert_eq!(average.hours, 9);
    assert_eq!(average.minutes, 0);
}

#[test]
fn test_average_with_no_eligible_days_is_an_error() {
    let mut agg = DayAggregator::new();
    agg.record(LocationKind::Work, ts(3, 12, 0));
    agg.record(LocationKind::Work, ts(3, 13, 0));

    let days = work_report(&agg);
    assert!(matches!(
        average_work_duration(&days),
        Err(WorktimeError::NoEligibleDays)
    ));
}

#[test]
fn test_average_of_empty_report_is_an_error() {
    let agg = DayAggregator::new();
    let days = work_report(&agg);
    assert!(days.is_empty());
    assert!(matches!(
        average_work_duration(&days),
        Err(WorktimeError::NoEligibleDays)
    ));
}

#[test]
fn test_commute_report_minutes() {
    let mut agg = DayAggregator::new();
    agg.record(LocationKind::Home, ts(3, 7, 45));
    agg.record(LocationKind::Work, ts(3, 8, 30));
    agg.record(LocationKind::Work, ts(3, 17, 30));
    agg.record(LocationKind::Home, ts(3, 18, 20));

    let commutes = commute_report(&agg);
    assert_eq!(commutes.len(), 1);
    assert_eq!(commutes[0].morning_minutes, 45);
    assert_eq!(commutes[0].evening_minutes, 50);
}

#[test]
fn test_commute_skips_days_without_a_home_bucket() {
    let mut agg = DayAggregator::new();
    agg.record(LocationKind::Work, ts(3, 9, 0));
    agg.record(LocationKind::Work, ts(3, 17, 30));

    assert!(commute_report(&agg).is_empty());
}

#[test]
fn test_commute_skips_days_with_incomplete_home_presence() {
    let mut agg = DayAggregator::new();
    agg.record(LocationKind::Work, ts(3, 9, 0));
    agg.record(LocationKind::Work, ts(3, 17, 30));
    // Evening arrival only; the morning departure was never observed.
    agg.record(LocationKind::Home, ts(3, 18, 20));

    assert!(commute_report(&agg).is_empty());
}
