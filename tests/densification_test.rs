// ABOUTME: Integration tests for turning aggregated points into a gap-free daily series
// ABOUTME: Covers completeness, zero-fill, last-wins deduplication, minimum data, and long spans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use common::assert_close;
use loadcast_core::errors::ForecastPipelineError;
use loadcast_core::models::AggregatedPoint;
use loadcast_intelligence::SeriesDensifier;

fn point(date: &str, average_load: f64) -> AggregatedPoint {
    AggregatedPoint {
        date: date.to_owned(),
        average_load,
    }
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_every_day_in_range_is_materialized() {
    let series = SeriesDensifier::densify(&[
        point("2024-02-27", 1.0),
        point("2024-03-02", 2.0),
        point("2024-02-28", 3.0),
    ])
    .unwrap();

    // 2024 is a leap year: 27, 28, 29 Feb, 1, 2 Mar
    assert_eq!(series.len(), 5);
    assert_eq!(series.start(), day(2024, 2, 27));
    assert_eq!(series.end(), day(2024, 3, 2));

    let dates: Vec<NaiveDate> = series.points().map(|p| p.date).collect();
    for pair in dates.windows(2) {
        assert_eq!(pair[1] - pair[0], chrono::Duration::days(1));
    }
}

#[test]
fn test_missing_days_are_exactly_zero() {
    let series = SeriesDensifier::densify(&[point("2024-01-01", 5.0), point("2024-01-04", 8.0)])
        .unwrap();

    assert_eq!(series.values(), &[5.0, 0.0, 0.0, 8.0]);
}

#[test]
fn test_last_same_day_point_wins() {
    let series = SeriesDensifier::densify(&[
        point("2024-01-01", 1.0),
        point("2024-01-02", 10.0),
        point("2024-01-01", 4.0),
        point("2024-01-02", 20.0),
    ])
    .unwrap();

    assert_eq!(series.values(), &[4.0, 20.0]);
}

#[test]
fn test_same_day_timestamps_collapse_to_one_day() {
    let series = SeriesDensifier::densify(&[
        point("2024-01-01T08:00:00Z", 1.0),
        point("2024-01-01 19:30:00", 2.0),
        point("2024-01-02", 3.0),
    ])
    .unwrap();

    assert_eq!(series.values(), &[2.0, 3.0]);
}

#[test]
fn test_empty_input_is_insufficient() {
    let result = SeriesDensifier::densify(&[]);
    assert!(matches!(
        result,
        Err(ForecastPipelineError::InsufficientData { actual: 0, .. })
    ));
}

#[test]
fn test_single_day_is_insufficient_even_when_repeated() {
    let points: Vec<_> = (0..10).map(|i| point("2024-05-05", f64::from(i))).collect();

    let result = SeriesDensifier::densify(&points);

    assert!(matches!(
        result,
        Err(ForecastPipelineError::InsufficientData {
            required: 2,
            actual: 1
        })
    ));
}

#[test]
fn test_two_distinct_days_are_enough() {
    let series =
        SeriesDensifier::densify(&[point("2024-05-06", 1.0), point("2024-05-05", 2.0)]).unwrap();
    assert_eq!(series.len(), 2);
}

#[test]
fn test_multi_year_sparse_input_expands_fully() {
    let series = SeriesDensifier::densify(&[
        point("2020-01-01", 1.0),
        point("2021-06-15", 2.0),
        point("2023-12-31", 3.0),
    ])
    .unwrap();

    let expected = (day(2023, 12, 31) - day(2020, 1, 1)).num_days() + 1;
    assert_eq!(i64::try_from(series.len()).unwrap(), expected);
    assert_eq!(series.len(), 1461);

    let non_zero = series.values().iter().filter(|v| **v != 0.0).count();
    assert_eq!(non_zero, 3);

    let mid = series
        .points()
        .find(|p| p.date == day(2021, 6, 15))
        .unwrap();
    assert_close(mid.average_load, 2.0, 0.0);
}

#[test]
fn test_unparseable_date_is_a_validation_error() {
    let result = SeriesDensifier::densify(&[point("2024-01-01", 1.0), point("yesterday", 2.0)]);

    match result {
        Err(ForecastPipelineError::Validation(message)) => assert!(message.contains("yesterday")),
        other => panic!("expected validation error, got {other:?}"),
    }
}
