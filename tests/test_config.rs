//! View options, builder validation, and display.

mod common;

use common::date;
use fare_calendar::config::{self, CalendarOptions, Direction, WeekStart};
use fare_calendar::{FareCalendar, FareCalendarError, SelectionMode};

#[test]
fn defaults() {
    let opts = CalendarOptions::default();
    assert_eq!(opts.mode, SelectionMode::Single);
    assert_eq!(opts.months_visible, config::DEFAULT_MONTHS_VISIBLE);
    assert_eq!(opts.strip_width, config::DEFAULT_STRIP_WIDTH);
    assert_eq!(opts.direction, Direction::Ltr);
    assert_eq!(opts.week_start, WeekStart::Sunday);
    assert_eq!(opts.initial_month, None);
}

#[test]
fn options_from_camel_case_json() {
    let opts = CalendarOptions::from_json_str(
        r#"{
            "mode": "range",
            "monthsVisible": 2,
            "initialMonth": "2025-07-01",
            "direction": "rtl",
            "weekStart": "monday",
            "stripWidth": 5
        }"#,
    )
    .unwrap();

    assert_eq!(opts.mode, SelectionMode::Range);
    assert_eq!(opts.months_visible, 2);
    assert_eq!(opts.initial_month, Some(date(2025, 7, 1)));
    assert_eq!(opts.direction, Direction::Rtl);
    assert_eq!(opts.week_start, WeekStart::Monday);
    assert_eq!(opts.strip_width, 5);
}

#[test]
fn zero_months_visible_is_rejected() {
    let err = CalendarOptions::from_json_str(r#"{"monthsVisible": 0}"#).unwrap_err();
    assert!(matches!(err, FareCalendarError::InvalidArgument(_)));

    let built = FareCalendar::builder().months_visible(0).build();
    assert!(matches!(built, Err(FareCalendarError::InvalidArgument(_))));
}

#[test]
fn zero_strip_width_is_rejected() {
    let built = FareCalendar::builder().strip_width(0).build();
    assert!(matches!(built, Err(FareCalendarError::InvalidArgument(_))));
}

#[test]
fn oversized_view_options_are_rejected() {
    let built = FareCalendar::builder().strip_width(usize::MAX).build();
    assert!(matches!(built, Err(FareCalendarError::InvalidArgument(_))));

    let built = FareCalendar::builder()
        .strip_width(config::MAX_STRIP_WIDTH + 1)
        .build();
    assert!(matches!(built, Err(FareCalendarError::InvalidArgument(_))));

    let built = FareCalendar::builder()
        .months_visible(config::MAX_MONTHS_VISIBLE + 1)
        .build();
    assert!(matches!(built, Err(FareCalendarError::InvalidArgument(_))));

    let err = CalendarOptions::from_json_str(r#"{"stripWidth": 100000}"#).unwrap_err();
    assert!(matches!(err, FareCalendarError::InvalidArgument(_)));
}

#[test]
fn largest_view_options_are_accepted() {
    let calendar = FareCalendar::builder()
        .strip_width(config::MAX_STRIP_WIDTH)
        .months_visible(config::MAX_MONTHS_VISIBLE)
        .today(date(2025, 6, 1))
        .build()
        .unwrap();
    assert_eq!(calendar.day_strip().len(), 91);
    assert_eq!(calendar.visible_months().len(), config::MAX_MONTHS_VISIBLE);
}

#[test]
fn builder_accepts_whole_options() {
    let opts = CalendarOptions {
        mode: SelectionMode::Range,
        months_visible: 3,
        ..CalendarOptions::default()
    };
    let calendar = FareCalendar::builder()
        .options(opts.clone())
        .today(date(2025, 6, 1))
        .build()
        .unwrap();

    assert_eq!(calendar.options(), &opts);
    assert_eq!(calendar.visible_months().len(), 3);
    assert_eq!(calendar.today(), date(2025, 6, 1));
}

#[test]
fn display_summarizes_view() {
    let mut calendar = FareCalendar::builder()
        .mode(SelectionMode::Range)
        .today(date(2025, 6, 1))
        .build()
        .unwrap();
    calendar.select(date(2025, 6, 4));

    assert_eq!(
        calendar.to_string(),
        "FareCalendar(mode=range, series=2025-06-01..2025-08-30, generated=true, month=2025-06, selection=2025-06-04..-)"
    );
}

#[test]
fn fixture_path_uses_json_extension() {
    let path = config::fixture_path(std::path::Path::new("/tmp/fares"), "icn-nrt");
    assert_eq!(path, std::path::PathBuf::from("/tmp/fares/icn-nrt.json"));
}
