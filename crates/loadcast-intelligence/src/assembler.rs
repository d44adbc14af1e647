// ABOUTME: Response assembly concatenating the daily history with its forecast
// ABOUTME: Produces positionally aligned ISO date and value arrays, history first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

use loadcast_core::models::{DailySeries, ForecastPoint, PredictionResult};

/// ISO 8601 calendar-date layout used on the wire
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Merges history and forecast into the response shape
pub struct ResponseAssembler;

impl ResponseAssembler {
    /// Concatenate `history` (oldest to newest) with `forecast` (nearest to farthest).
    ///
    /// Pure structural merge: values are copied as-is.
    #[must_use]
    pub fn assemble(history: &DailySeries, forecast: &[ForecastPoint]) -> PredictionResult {
        let capacity = history.len() + forecast.len();
        let mut dates = Vec::with_capacity(capacity);
        let mut values = Vec::with_capacity(capacity);

        for point in history.points() {
            dates.push(point.date.format(DATE_FORMAT).to_string());
            values.push(point.average_load);
        }
        for point in forecast {
            dates.push(point.date.format(DATE_FORMAT).to_string());
            values.push(point.predicted_load);
        }

        PredictionResult { dates, values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_history_precedes_forecast() {
        let start = NaiveDate::from_ymd_opt(2023, 12, 30).unwrap();
        let history = DailySeries::new(start, vec![1.0, 2.0]).unwrap();
        let forecast = [ForecastPoint {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            predicted_load: 3.0,
        }];

        let result = ResponseAssembler::assemble(&history, &forecast);
        assert_eq!(result.dates, vec!["2023-12-30", "2023-12-31", "2024-01-01"]);
        assert_eq!(result.values, vec![1.0, 2.0, 3.0]);
    }
}
