//! Synthetic fare generation: formula, horizon handling and determinism.

mod common;

use chrono::{Datelike, Duration, Weekday};
use common::date;
use fare_calendar::{Fare, FareSeriesGenerator};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ---------------------------------------------------------------------------
// Formula
// ---------------------------------------------------------------------------

#[test]
fn seed_combines_day_and_zero_based_month() {
    assert_eq!(FareSeriesGenerator::seed(date(2025, 1, 1)), 1);
    assert_eq!(FareSeriesGenerator::seed(date(2025, 6, 22)), 77);
    // 31 + 11 * 31 = 372
    assert_eq!(FareSeriesGenerator::seed(date(2025, 12, 31)), 72);
}

#[test]
fn sunday_without_discount_gets_weekend_multiplier() {
    // seed 77, base 7549, 7549 * 1.3 = 9813.7
    assert_eq!(FareSeriesGenerator::base_fare(date(2025, 6, 22)), Some(7549));
    assert_eq!(
        FareSeriesGenerator::fare_for(date(2025, 6, 22)),
        Fare::Available(9814)
    );
}

#[test]
fn weekday_without_discount_is_base_fare() {
    // Monday, seed 57
    assert_eq!(
        FareSeriesGenerator::fare_for(date(2025, 6, 2)),
        Fare::Available(13809)
    );
}

#[test]
fn weekday_discount_applies_when_seed_ends_below_three() {
    // Thursday, seed 60, base 14220 * 0.8
    assert_eq!(
        FareSeriesGenerator::fare_for(date(2025, 6, 5)),
        Fare::Available(11376)
    );
}

#[test]
fn weekend_and_discount_stack() {
    // Friday, seed 61, base 14357 * 1.3 * 0.8 = 14931.28
    assert_eq!(
        FareSeriesGenerator::fare_for(date(2025, 6, 6)),
        Fare::Available(14931)
    );
}

#[test]
fn half_fares_round_up() {
    // Friday, seed 75, base 7275 * 1.3 = 9457.5
    assert_eq!(
        FareSeriesGenerator::fare_for(date(2025, 6, 20)),
        Fare::Available(9458)
    );
}

#[test]
fn low_seeds_have_no_flights() {
    // July 14..=23 map to seeds 0..=9
    for day in 14..=23 {
        let d = date(2025, 7, day);
        assert!(FareSeriesGenerator::seed(d) < 10);
        assert_eq!(FareSeriesGenerator::fare_for(d), Fare::Unavailable);
        assert_eq!(FareSeriesGenerator::base_fare(d), None);
    }
    assert!(FareSeriesGenerator::fare_for(date(2025, 7, 24)).is_available());
}

#[test]
fn weekend_is_friday_through_sunday() {
    let monday = date(2025, 6, 2);
    for offset in 0..7 {
        let d = monday + Duration::days(offset);
        let expected = matches!(d.weekday(), Weekday::Fri | Weekday::Sat | Weekday::Sun);
        assert_eq!(FareSeriesGenerator::is_weekend(d), expected, "{}", d);
    }
}

#[test]
fn random_dates_respect_base_range_and_multipliers() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let epoch = date(2000, 1, 1);

    for _ in 0..2000 {
        let d = epoch + Duration::days(rng.gen_range(0..20_000));
        let Some(base) = FareSeriesGenerator::base_fare(d) else {
            assert_eq!(FareSeriesGenerator::fare_for(d), Fare::Unavailable);
            continue;
        };
        assert!((6000..=14999).contains(&base), "{} base {}", d, base);

        let fare = FareSeriesGenerator::fare_for(d).amount().unwrap();
        let seed = FareSeriesGenerator::seed(d);
        let weekend = if FareSeriesGenerator::is_weekend(d) { 1.3 } else { 1.0 };
        let discount = if seed % 10 < 3 { 0.8 } else { 1.0 };
        assert_eq!(fare, (base as f64 * weekend * discount).round() as u32);
        assert!(fare > 0);
    }
}

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

#[test]
fn generate_covers_inclusive_horizon() {
    let start = date(2025, 6, 1);
    let series = FareSeriesGenerator::generate(start, 30);

    assert_eq!(series.len(), 31);
    assert_eq!(series.first_date(), Some(start));
    assert_eq!(series.last_date(), Some(date(2025, 7, 1)));
    assert!(series.is_contiguous());
    assert_eq!(series.fare(date(2025, 6, 22)), Fare::Available(9814));
}

#[test]
fn zero_horizon_yields_single_day() {
    let series = FareSeriesGenerator::generate(date(2025, 6, 1), 0);
    assert_eq!(series.len(), 1);
    assert_eq!(series.fare(date(2025, 6, 1)), Fare::Available(17774));
}

#[test]
fn negative_horizon_yields_empty_series() {
    let series = FareSeriesGenerator::generate(date(2025, 6, 1), -5);
    assert!(series.is_empty());
    assert_eq!(series.bounds(), None);
}

#[test]
fn default_horizon_is_ninety_days() {
    let series = FareSeriesGenerator::generate_default(date(2025, 6, 1));
    assert_eq!(series.len(), 91);
    assert_eq!(series.last_date(), Some(date(2025, 8, 30)));
}

#[test]
fn unavailable_rate_is_about_ten_percent() {
    let series = FareSeriesGenerator::generate(date(2025, 1, 1), 364);
    let unavailable = series.iter().filter(|e| !e.fare.is_available()).count();
    let rate = unavailable as f64 / series.len() as f64;
    assert!((0.05..=0.15).contains(&rate), "rate {}", rate);

    let summer = FareSeriesGenerator::generate_default(date(2025, 6, 1));
    assert_eq!(summer.summary().unavailable_days, 10);
}

#[test]
fn generation_is_deterministic() {
    common::init_logging();
    let start = date(2025, 6, 1);
    let a = FareSeriesGenerator::generate(start, 30);
    let b = FareSeriesGenerator::generate(start, 30);
    assert_eq!(a, b);
    assert_eq!(a.fare(date(2025, 6, 22)), b.fare(date(2025, 6, 22)));
}

#[test]
fn fares_do_not_depend_on_series_start() {
    let mut rng = StdRng::seed_from_u64(42);
    let wide = FareSeriesGenerator::generate(date(2025, 1, 1), 364);

    for _ in 0..50 {
        let offset = rng.gen_range(0..300);
        let start = date(2025, 1, 1) + Duration::days(offset);
        let narrow = FareSeriesGenerator::generate(start, 30);
        for entry in narrow.iter() {
            assert_eq!(wide.fare(entry.date), entry.fare);
        }
    }
}
