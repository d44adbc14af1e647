// ABOUTME: Series densification turning sparse, duplicated dated points into a gap-free daily series
// ABOUTME: Parses dates, keeps the last point per day, sorts, and zero-fills every missing calendar day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use loadcast_core::constants::forecast::MIN_DAILY_POINTS;
use loadcast_core::errors::ForecastPipelineError;
use loadcast_core::models::{AggregatedPoint, DailySeries};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Naive timestamp layouts accepted in addition to plain dates and RFC 3339
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parse a provider date string at day granularity.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (date taken in UTC), and naive
/// `YYYY-MM-DD HH:MM:SS` timestamps. Time components are discarded.
///
/// # Errors
///
/// Returns `ForecastPipelineError::Validation` naming the value if no layout matches
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, ForecastPipelineError> {
    let value = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc).date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|timestamp| timestamp.date())
        .ok_or_else(|| ForecastPipelineError::validation(format!("unparseable date: {raw:?}")))
}

/// Builds gap-free daily series from aggregated points
pub struct SeriesDensifier;

impl SeriesDensifier {
    /// Densify `points` into one entry per calendar day between the earliest and
    /// latest date, inclusive.
    ///
    /// When several points share a date the last one in input order wins. Days with
    /// no point get a load of exactly zero.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for an unparseable date and `InsufficientData` when the
    /// resulting series would have fewer than two days
    pub fn densify(points: &[AggregatedPoint]) -> Result<DailySeries, ForecastPipelineError> {
        let mut by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for point in points {
            let date = parse_calendar_date(&point.date)?;
            if let Some(previous) = by_day.insert(date, point.average_load) {
                trace!(%date, previous, replacement = point.average_load, "Superseded same-day entry");
            }
        }

        let (Some((&first, _)), Some((&last, _))) =
            (by_day.first_key_value(), by_day.last_key_value())
        else {
            return Err(Self::insufficient(0));
        };

        let span = usize::try_from((last - first).num_days())
            .map_err(|_| ForecastPipelineError::validation("date range is inverted"))?
            + 1;
        if span < MIN_DAILY_POINTS {
            return Err(Self::insufficient(span));
        }

        let mut values = vec![0.0; span];
        for (date, load) in &by_day {
            let offset = (*date - first).num_days() as usize;
            values[offset] = *load;
        }

        debug!(
            raw_points = points.len(),
            distinct_days = by_day.len(),
            daily_points = span,
            start = %first,
            end = %last,
            "Densified daily series"
        );

        DailySeries::new(first, values).ok_or_else(|| {
            ForecastPipelineError::validation("date range exceeds the supported calendar")
        })
    }

    const fn insufficient(actual: usize) -> ForecastPipelineError {
        ForecastPipelineError::InsufficientData {
            required: MIN_DAILY_POINTS,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, average_load: f64) -> AggregatedPoint {
        AggregatedPoint {
            date: date.to_owned(),
            average_load,
        }
    }

    #[test]
    fn test_parse_accepts_common_layouts() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        for raw in [
            "2024-03-09",
            " 2024-03-09 ",
            "2024-03-09T10:15:00Z",
            "2024-03-09T10:15:00.000+00:00",
            "2024-03-09 10:15:00",
            "2024-03-09T10:15:00",
        ] {
            assert_eq!(parse_calendar_date(raw).unwrap(), expected, "{raw}");
        }
    }

    #[test]
    fn test_parse_converts_offsets_to_utc_date() {
        let parsed = parse_calendar_date("2024-03-09T23:30:00-02:00").unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_calendar_date("09/03/2024"),
            Err(ForecastPipelineError::Validation(_))
        ));
        assert!(parse_calendar_date("").is_err());
    }

    #[test]
    fn test_unsorted_input_is_ordered() {
        let series =
            SeriesDensifier::densify(&[point("2024-01-03", 3.0), point("2024-01-01", 1.0)])
                .unwrap();
        assert_eq!(series.values(), &[1.0, 0.0, 3.0]);
    }
}
