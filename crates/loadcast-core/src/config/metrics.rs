// ABOUTME: Muscle-group categories and the exercise fields that make up each category's load
// ABOUTME: Configuration-driven dispatch table replacing one handler per muscle group
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ARM_FIELDS: &[&str] = &[
    "bicepCurl",
    "hammerCurl",
    "barbellCurl",
    "skullcrusher",
    "dumbbellOverheadTricepsExtension",
    "tricepsPushdown",
    "pushPress",
    "closeGripBenchPress",
    "militaryPress",
    "lateralRaise",
    "frontRaise",
    "reverseFly",
    "shoulderPress",
];

const CORE_FIELDS: &[&str] = &[
    "russian_twist",
    "reps_russian_twist",
    "plank",
    "reps_plank",
    "crunch",
    "reps_crunch",
];

const CHEST_FIELDS: &[&str] = &[
    "barbellBenchPress",
    "reps_barbellBenchPress",
    "dumbellBenchPress",
    "reps_dumbellBenchPress",
    "inclineBenchPress",
    "reps_inclineBenchPress",
    "machineChestPress",
    "reps_machineChestPress",
    "declinePress",
    "reps_declinePress",
];

/// Supported muscle-group categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    /// Biceps, triceps, and shoulder lifts
    Arm,
    /// Abdominal work (twists, planks, crunches)
    Core,
    /// Bench and chest press variants
    Chest,
}

impl MuscleGroup {
    /// All supported categories
    pub const ALL: [Self; 3] = [Self::Arm, Self::Core, Self::Chest];

    /// Path segment and display name of the category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Arm => "arm",
            Self::Core => "core",
            Self::Chest => "chest",
        }
    }

    /// Exercise fields averaged for this category, in their canonical order
    #[must_use]
    pub const fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Arm => ARM_FIELDS,
            Self::Core => CORE_FIELDS,
            Self::Chest => CHEST_FIELDS,
        }
    }

    /// Metric configuration for this category
    #[must_use]
    pub fn metric_config(self) -> MetricConfig {
        MetricConfig::new(self.fields().iter().copied())
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuscleGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "arm" | "arms" => Ok(Self::Arm),
            "core" => Ok(Self::Core),
            "chest" => Ok(Self::Chest),
            other => Err(format!("Unknown muscle group: {other}")),
        }
    }
}

/// Ordered set of exercise fields averaged into one load value.
///
/// The denominator of the average is always the full field count, so a record
/// with missing fields is pulled towards zero rather than ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricConfig {
    fields: Vec<String>,
}

impl MetricConfig {
    /// Build a configuration from field names; duplicates are kept as given
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Field names in order
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of fields (the averaging denominator)
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields are configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
