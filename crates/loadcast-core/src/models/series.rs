// ABOUTME: Series types produced by the pipeline stages, from aggregated points to the final response
// ABOUTME: DailySeries is contiguous by construction: a start date plus one value per day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Average load of a single exercise record, before deduplication by date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedPoint {
    /// Raw date string carried over from the record
    pub date: String,
    /// Mean of the configured fields, nulls counted as zero
    pub average_load: f64,
}

/// One day of a [`DailySeries`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    /// Calendar day
    pub date: NaiveDate,
    /// Average load observed that day, zero when nothing was recorded
    pub average_load: f64,
}

/// Gap-free daily series.
///
/// Holds a start date and one value per consecutive calendar day, so dates are
/// strictly increasing by exactly one day and can never repeat.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySeries {
    start: NaiveDate,
    end: NaiveDate,
    values: Vec<f64>,
}

impl DailySeries {
    /// Build a series starting at `start` with one value per day.
    ///
    /// Returns `None` for an empty value list or when the last day would fall
    /// outside the representable calendar.
    #[must_use]
    pub fn new(start: NaiveDate, values: Vec<f64>) -> Option<Self> {
        let last_offset = values.len().checked_sub(1)?;
        let end = start.checked_add_days(Days::new(last_offset as u64))?;
        Some(Self { start, end, values })
    }

    /// First calendar day
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last calendar day (inclusive)
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with collections
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Daily values in date order
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over `(date, value)` pairs in date order
    pub fn points(&self) -> impl Iterator<Item = DailyPoint> + '_ {
        self.start
            .iter_days()
            .zip(self.values.iter())
            .map(|(date, &average_load)| DailyPoint { date, average_load })
    }
}

/// One projected day beyond the end of the history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Calendar day being predicted
    pub date: NaiveDate,
    /// Predicted average load
    pub predicted_load: f64,
}

/// Parallel date/value arrays: history first, then the forecast.
///
/// Serialized with the field names existing clients already consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// ISO 8601 calendar dates (`YYYY-MM-DD`), ascending
    #[serde(rename = "fechas")]
    pub dates: Vec<String>,
    /// Load values aligned with `dates`
    #[serde(rename = "pesos")]
    pub values: Vec<f64>,
}

impl PredictionResult {
    /// Number of entries (history plus forecast)
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the result holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_daily_series_dates_are_consecutive() {
        let series = DailySeries::new(date("2024-02-27"), vec![1.0, 2.0, 3.0, 4.0]).unwrap();

        let dates: Vec<NaiveDate> = series.points().map(|p| p.date).collect();
        assert_eq!(
            dates,
            vec![
                date("2024-02-27"),
                date("2024-02-28"),
                date("2024-02-29"),
                date("2024-03-01")
            ]
        );
        assert_eq!(series.end(), date("2024-03-01"));
    }

    #[test]
    fn test_daily_series_rejects_empty_values() {
        assert!(DailySeries::new(date("2024-01-01"), Vec::new()).is_none());
    }

    #[test]
    fn test_prediction_result_wire_names() {
        let result = PredictionResult {
            dates: vec!["2024-01-01".to_owned()],
            values: vec![5.0],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["fechas"][0], "2024-01-01");
        assert_eq!(json["pesos"][0], 5.0);
    }
}
