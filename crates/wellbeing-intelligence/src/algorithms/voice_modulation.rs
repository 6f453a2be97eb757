// ABOUTME: Voice modulation score from acoustic feature summaries
// ABOUTME: Weighted combination of pitch, energy, tempo, spectral and zero-crossing variation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Voice Modulation
//!
//! Formula: `score = 100 * (0.30*P + 0.20*E + 0.20*T + 0.15*S + 0.15*Z)` where
//!
//! - `P = min(1, pitch_variability * 2)`
//! - `E = min(1, energy_range * 2)`
//! - `T = min(1, tempo_std / 50)`
//! - `S = min(1, spectral_range / 1000)`
//! - `Z = min(1, zcr_range * 2)`
//!
//! Each component is floored at zero and non-finite inputs count as zero.

use crate::collaborators::AcousticFeatureSummary;
use wellbeing_core::constants::scales::PERCENT_MAX;
use wellbeing_core::models::{round_to, VoiceModulation};

const PITCH_WEIGHT: f64 = 0.30;
const ENERGY_WEIGHT: f64 = 0.20;
const TEMPO_WEIGHT: f64 = 0.20;
const SPECTRAL_WEIGHT: f64 = 0.15;
const ZCR_WEIGHT: f64 = 0.15;

/// Tempo standard deviation that counts as full variation
const TEMPO_STD_FULL: f64 = 50.0;
/// Spectral centroid range (Hz) that counts as full variation
const SPECTRAL_RANGE_FULL: f64 = 1000.0;

fn component(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Modulation score in `[0, 100]`, rounded to two decimals
#[must_use]
pub fn score(features: &AcousticFeatureSummary) -> f64 {
    let weighted = PITCH_WEIGHT * component(features.pitch_variability * 2.0)
        + ENERGY_WEIGHT * component(features.energy_range * 2.0)
        + TEMPO_WEIGHT * component(features.tempo_std / TEMPO_STD_FULL)
        + SPECTRAL_WEIGHT * component(features.spectral_range / SPECTRAL_RANGE_FULL)
        + ZCR_WEIGHT * component(features.zcr_range * 2.0);
    round_to(weighted * PERCENT_MAX, 2)
}

/// Interpretation of a modulation score
#[must_use]
pub fn interpret(score: f64) -> &'static str {
    if score >= 80.0 {
        "Excellent voice modulation with clear variation in pitch, volume, and pace"
    } else if score >= 60.0 {
        "Good voice modulation with noticeable variation in speech patterns"
    } else if score >= 40.0 {
        "Moderate voice modulation with some variation in speech"
    } else if score >= 20.0 {
        "Limited voice modulation with minimal variation in speech patterns"
    } else {
        "Very limited voice modulation with little variation in speech"
    }
}

/// Score and interpret a feature summary
#[must_use]
pub fn assess(features: &AcousticFeatureSummary) -> VoiceModulation {
    let score = score(features);
    VoiceModulation {
        score,
        interpretation: interpret(score).to_owned(),
    }
}
