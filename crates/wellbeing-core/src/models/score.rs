// ABOUTME: Wellbeing score newtype on the closed 0-30 scale
// ABOUTME: Clamps on construction and substitutes a neutral value for non-finite input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::status::StatusBand;
use crate::constants::scales::{PERCENT_MAX, WELLBEING_MAX, WELLBEING_MIN, WELLBEING_NEUTRAL};
use crate::errors::AnalysisError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A wellbeing score in `[0, 30]`.
///
/// Construction through [`WellbeingScore::new`] is total: out-of-range values
/// are clamped and NaN/infinite values become [`WellbeingScore::NEUTRAL`].
/// Use [`WellbeingScore::try_new`] where an escape from the domain indicates a
/// bug that must be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct WellbeingScore(f64);

impl WellbeingScore {
    /// Lowest possible score
    pub const MIN: Self = Self(WELLBEING_MIN);
    /// Highest possible score
    pub const MAX: Self = Self(WELLBEING_MAX);
    /// Neutral mid-range score for fallbacks and unavailable modalities
    pub const NEUTRAL: Self = Self(WELLBEING_NEUTRAL);

    /// Clamp `value` into range, replacing non-finite input with the neutral score
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(WELLBEING_MIN, WELLBEING_MAX))
        } else {
            tracing::warn!(value, "non-finite wellbeing score replaced with neutral value");
            Self::NEUTRAL
        }
    }

    /// Accept `value` only if it already lies inside `[0, 30]`
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::RangeViolation` for NaN, infinities and values
    /// outside the scale.
    pub fn try_new(value: f64) -> Result<Self, AnalysisError> {
        if value.is_finite() && (WELLBEING_MIN..=WELLBEING_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AnalysisError::RangeViolation {
                quantity: "wellbeing score",
                value,
            })
        }
    }

    /// Raw value on the 0-30 scale
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Linear mapping onto 0-100
    #[must_use]
    pub fn percentage(self) -> f64 {
        self.0 / WELLBEING_MAX * PERCENT_MAX
    }

    /// Status band for this score
    #[must_use]
    pub fn band(self) -> StatusBand {
        StatusBand::from_score(self)
    }

    /// Same score rounded to `decimals` places
    #[must_use]
    pub fn rounded(self, decimals: i32) -> Self {
        Self::new(round_to(self.0, decimals))
    }
}

impl Default for WellbeingScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl From<f64> for WellbeingScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<WellbeingScore> for f64 {
    fn from(score: WellbeingScore) -> Self {
        score.0
    }
}

impl fmt::Display for WellbeingScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}/30", self.0)
    }
}

/// Round half away from zero to `decimals` places
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
