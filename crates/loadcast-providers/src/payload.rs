// ABOUTME: Decoding of the upstream exercise-history response into exercise records
// ABOUTME: Extracts the record date and every numeric or null column, skipping non-metric values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

//! Upstream body shape:
//!
//! ```json
//! { "data": { "user": [ { "fecha": "2024-01-01", "bicepCurl": 12.5, "hammerCurl": null } ] } }
//! ```

use loadcast_core::constants::upstream::{DATE_FIELD, DATE_FIELD_ALIAS, SERVICE_NAME};
use loadcast_core::errors::{ProviderError, ProviderResult};
use loadcast_core::models::ExerciseRecord;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct Envelope {
    data: EnvelopeData,
}

#[derive(Debug, Deserialize)]
struct EnvelopeData {
    user: Vec<Map<String, Value>>,
}

/// Decode a raw response body into records, preserving upstream order.
///
/// # Errors
///
/// Returns `ProviderError::MalformedPayload` if the body is not JSON or does not
/// contain a `data.user` array of objects
pub fn decode_records(body: &[u8]) -> ProviderResult<Vec<ExerciseRecord>> {
    let envelope: Envelope =
        serde_json::from_slice(body).map_err(|e| ProviderError::MalformedPayload {
            provider: SERVICE_NAME.to_owned(),
            message: e.to_string(),
        })?;

    Ok(envelope.data.user.into_iter().map(record_from_object).collect())
}

fn record_from_object(object: Map<String, Value>) -> ExerciseRecord {
    let date = [DATE_FIELD, DATE_FIELD_ALIAS]
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str))
        .map(str::to_owned);

    let values: HashMap<String, Option<f64>> = object
        .into_iter()
        .filter(|(key, _)| key != DATE_FIELD && key != DATE_FIELD_ALIAS)
        .filter_map(|(key, value)| metric_value(&value).map(|metric| (key, metric)))
        .collect();

    ExerciseRecord { date, values }
}

/// `Some(Some(x))` for a number or numeric string, `Some(None)` for null, `None`
/// for anything that is not a metric column
fn metric_value(value: &Value) -> Option<Option<f64>> {
    match value {
        Value::Null => Some(None),
        Value::Number(number) => number.as_f64().map(Some),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|parsed| parsed.is_finite())
            .map(Some),
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}
