use std::f64::consts::{PI, TAU};

use chrono::{TimeDelta, TimeZone, Utc};
use orrery::core::time::years_to_days;
use orrery::orbits::{PeriodUnit, epoch_offset, initial_angle, initial_angle_from_offset, j2000};

fn assert_angle_close(actual: f64, expected: f64) {
    let diff = (actual - expected).rem_euclid(TAU);
    let diff = diff.min(TAU - diff);
    assert!(
        diff < 1e-9,
        "angle {actual} differs from {expected} by {diff}"
    );
}

#[test]
fn reference_epoch_gives_zero_phase() {
    let angle = initial_angle(j2000(), j2000(), 365.25, PeriodUnit::Days);
    assert_eq!(angle, 0.0);
}

#[test]
fn half_period_after_epoch_is_opposite() {
    let start = j2000() + TimeDelta::milliseconds((182.625 * 86_400_000.0) as i64);
    let angle = initial_angle(start, j2000(), 365.25, PeriodUnit::Days);
    assert_angle_close(angle, PI);
}

#[test]
fn full_period_wraps_back_to_zero() {
    let start = j2000() + TimeDelta::days(88);
    let angle = initial_angle(start, j2000(), 88.0, PeriodUnit::Days);
    assert!((0.0..TAU).contains(&angle));
    assert_angle_close(angle, 0.0);
}

#[test]
fn dates_before_epoch_normalize_into_range() {
    let start = j2000() - TimeDelta::days(22);
    let angle = initial_angle(start, j2000(), 88.0, PeriodUnit::Days);
    assert!((0.0..TAU).contains(&angle), "got {angle}");
    assert_angle_close(angle, 1.5 * PI);
}

#[test]
fn years_unit_matches_days_unit() {
    let start = Utc.with_ymd_and_hms(2024, 3, 20, 3, 6, 0).unwrap();
    let in_days = initial_angle(start, j2000(), 687.0, PeriodUnit::Days);
    let period_years = PeriodUnit::Years.convert_days(687.0);
    let in_years = initial_angle(start, j2000(), period_years, PeriodUnit::Years);
    assert_angle_close(in_days, in_years);
}

#[test]
fn offset_is_signed_and_unit_aware() {
    let later = j2000() + TimeDelta::hours(36);
    assert!((epoch_offset(later, j2000(), PeriodUnit::Days) - 1.5).abs() < 1e-12);
    assert!((epoch_offset(j2000(), later, PeriodUnit::Days) + 1.5).abs() < 1e-12);

    let year_later = j2000() + TimeDelta::milliseconds((365.25 * 86_400_000.0) as i64);
    assert!((epoch_offset(year_later, j2000(), PeriodUnit::Years) - 1.0).abs() < 1e-12);
}

#[test]
fn negative_offsets_wrap_positive() {
    assert_angle_close(initial_angle_from_offset(-0.25, 1.0), 1.5 * PI);
    assert!(initial_angle_from_offset(-1e-18, 1.0) < TAU);
}

#[test]
fn whole_periods_from_any_base_date_keep_the_phase() {
    let base = Utc.with_ymd_and_hms(2031, 7, 4, 18, 30, 0).unwrap();
    let period_days = 687;
    let expected = initial_angle(base, j2000(), period_days as f64, PeriodUnit::Days);
    for k in [-7i64, -1, 3, 50] {
        let shifted = base + TimeDelta::days(k * period_days);
        let angle = initial_angle(shifted, j2000(), period_days as f64, PeriodUnit::Days);
        assert!((0.0..TAU).contains(&angle));
        assert_angle_close(angle, expected);
    }
}

#[test]
fn year_conversion_round_trips_through_period_unit() {
    assert!((PeriodUnit::Years.convert_days(years_to_days(2.5)) - 2.5).abs() < 1e-12);
    assert_eq!(years_to_days(1.0), 365.25);
}
