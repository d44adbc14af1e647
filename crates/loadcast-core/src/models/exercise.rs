// ABOUTME: Raw exercise history record as delivered by the upstream provider
// ABOUTME: A date string plus a sparse map of nullable numeric exercise fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of exercise history.
///
/// The date is kept as the raw string the provider sent; it is parsed during
/// densification so that malformed dates surface as validation failures there.
/// Several records may share a date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    /// Calendar date of the session, `None` when the provider omitted it
    pub date: Option<String>,
    /// Exercise field name to measured value; `None` marks an explicit null
    pub values: HashMap<String, Option<f64>>,
}

impl ExerciseRecord {
    /// Create an empty record for the given date
    #[must_use]
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            values: HashMap::new(),
        }
    }

    /// Builder-style helper that sets one field value
    #[must_use]
    pub fn with_value(mut self, field: impl Into<String>, value: Option<f64>) -> Self {
        self.values.insert(field.into(), value);
        self
    }

    /// Value of `field`, treating absent and null alike as zero
    #[must_use]
    pub fn value_or_zero(&self, field: &str) -> f64 {
        self.values.get(field).copied().flatten().unwrap_or(0.0)
    }
}
