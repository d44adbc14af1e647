// ABOUTME: End-to-end tests of the forecasting pipeline from raw records to response arrays
// ABOUTME: Covers the worked example, history/forecast layout, wire keys, and error short-circuiting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, record};
use loadcast_core::config::{MetricConfig, MuscleGroup};
use loadcast_core::errors::ForecastPipelineError;
use loadcast_core::models::ExerciseRecord;
use loadcast_intelligence::LoadForecastPipeline;

fn example_records() -> Vec<ExerciseRecord> {
    vec![
        ExerciseRecord::new("2024-01-01")
            .with_value("fieldA", Some(10.0))
            .with_value("fieldB", None),
        ExerciseRecord::new("2024-01-03")
            .with_value("fieldA", Some(20.0))
            .with_value("fieldB", Some(20.0)),
    ]
}

#[test]
fn test_worked_example() {
    let config = MetricConfig::new(["fieldA", "fieldB"]);

    let result = LoadForecastPipeline::default()
        .forecast(&example_records(), &config)
        .unwrap();

    assert_eq!(
        result.dates,
        vec![
            "2024-01-01",
            "2024-01-02",
            "2024-01-03",
            "2024-01-04",
            "2024-01-05",
            "2024-01-06",
            "2024-01-07",
            "2024-01-08",
        ]
    );
    assert_eq!(result.values.len(), result.dates.len());
    assert_close(result.values[0], 5.0, 1e-12);
    assert_close(result.values[1], 0.0, 0.0);
    assert_close(result.values[2], 20.0, 1e-12);

    let forecast = &result.values[3..];
    assert!(forecast.iter().all(|v| v.is_finite()));
    assert!(
        forecast[0] > 20.0,
        "first forecast {} should exceed the last observation",
        forecast[0]
    );
    assert!(
        forecast.windows(2).all(|pair| pair[1] > pair[0]),
        "forecast should keep rising: {forecast:?}"
    );
}

#[test]
fn test_response_serializes_with_legacy_keys() {
    let config = MetricConfig::new(["fieldA", "fieldB"]);
    let result = LoadForecastPipeline::default()
        .forecast(&example_records(), &config)
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["fechas"].as_array().unwrap().len(), 8);
    assert_eq!(json["pesos"].as_array().unwrap().len(), 8);
    assert_eq!(json["fechas"][0], "2024-01-01");
}

#[test]
fn test_unsorted_duplicated_history() {
    let records = vec![
        record("2024-04-03", "plank", 60.0),
        record("2024-04-01", "plank", 30.0),
        record("2024-04-03", "plank", 90.0),
    ];
    let config = MuscleGroup::Core.metric_config();

    let result = LoadForecastPipeline::default()
        .forecast(&records, &config)
        .unwrap();

    assert_eq!(&result.dates[..3], &["2024-04-01", "2024-04-02", "2024-04-03"]);
    assert_close(result.values[0], 30.0 / 6.0, 1e-12);
    assert_close(result.values[1], 0.0, 0.0);
    assert_close(result.values[2], 90.0 / 6.0, 1e-12);
    assert_eq!(result.len(), 3 + 5);
}

#[test]
fn test_history_precedes_forecast() {
    let records: Vec<_> = (1..=9)
        .map(|d| record(&format!("2024-06-0{d}"), "fieldA", f64::from(d)))
        .collect();

    let result = LoadForecastPipeline::default()
        .forecast(&records, &MetricConfig::new(["fieldA"]))
        .unwrap();

    assert_eq!(result.dates.first().unwrap(), "2024-06-01");
    assert_eq!(result.dates[8], "2024-06-09");
    assert_eq!(result.dates[9], "2024-06-10");
    assert_eq!(result.dates.last().unwrap(), "2024-06-14");
    assert!(result.dates.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_single_day_short_circuits() {
    let records = vec![record("2024-01-01", "fieldA", 1.0), record("2024-01-01", "fieldA", 2.0)];

    let result = LoadForecastPipeline::default().forecast(&records, &MetricConfig::new(["fieldA"]));

    assert!(matches!(
        result,
        Err(ForecastPipelineError::InsufficientData { actual: 1, .. })
    ));
}

#[test]
fn test_validation_precedes_densification() {
    let records = vec![
        record("2024-01-01", "fieldA", 1.0),
        ExerciseRecord {
            date: None,
            ..ExerciseRecord::default()
        },
    ];

    let result = LoadForecastPipeline::default().forecast(&records, &MetricConfig::new(["fieldA"]));

    assert!(matches!(result, Err(ForecastPipelineError::Validation(_))));
}
