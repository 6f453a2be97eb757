// ABOUTME: Modality analyzer configuration: emotion weights, score ranges and neutral prior
// ABOUTME: One scoring profile per modality so text, audio and visual can be tuned separately
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Modality Analyzer Configuration
//!
//! Each modality turns an emotion vector into a wellbeing score with
//! `base + span * clamp01(0.5 + wh*h + wc*c - ws*s - wx*x - wa*a)`.
//! The weights and the `[base, base + span]` output range live here.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use wellbeing_core::constants::{neutral_emotions, scales};
use wellbeing_core::models::EmotionVector;

/// Analyzer configuration for every emotion-based modality
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Free-text scoring profile
    pub text: ScoringProfile,
    /// Audio scoring profile
    pub audio: ScoringProfile,
    /// Visual scoring profile
    pub visual: ScoringProfile,
    /// Distribution used for fallbacks and for labels a collaborator omitted
    pub neutral_emotions: NeutralEmotions,
}

/// Emotion weights plus output range for one modality
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringProfile {
    /// Emotion weights
    pub weights: EmotionWeights,
    /// Lowest score this modality can produce
    pub base: f64,
    /// Width of the output range above `base`
    pub span: f64,
}

/// Magnitudes of each emotion's contribution; sadness, anxiety and anger subtract
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionWeights {
    /// Happiness weight (positive contribution)
    pub happiness: f64,
    /// Calm weight (positive contribution)
    pub calm: f64,
    /// Sadness weight (negative contribution)
    pub sadness: f64,
    /// Anxiety weight (negative contribution)
    pub anxiety: f64,
    /// Anger weight (negative contribution)
    pub anger: f64,
}

/// Neutral emotion prior
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NeutralEmotions {
    /// Happiness prior
    pub happiness: f64,
    /// Sadness prior
    pub sadness: f64,
    /// Anxiety prior
    pub anxiety: f64,
    /// Anger prior
    pub anger: f64,
    /// Calm prior
    pub calm: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            text: ScoringProfile::bounded(),
            audio: ScoringProfile::full_scale(),
            visual: ScoringProfile::bounded(),
            neutral_emotions: NeutralEmotions::default(),
        }
    }
}

impl Default for EmotionWeights {
    fn default() -> Self {
        Self {
            happiness: 0.40,
            calm: 0.30,
            sadness: 0.20,
            anxiety: 0.10,
            anger: 0.10,
        }
    }
}

impl Default for NeutralEmotions {
    fn default() -> Self {
        Self {
            happiness: neutral_emotions::HAPPINESS,
            sadness: neutral_emotions::SADNESS,
            anxiety: neutral_emotions::ANXIETY,
            anger: neutral_emotions::ANGER,
            calm: neutral_emotions::CALM,
        }
    }
}

impl ScoringProfile {
    /// Range 5-25, used by text and visual analysis
    #[must_use]
    pub fn bounded() -> Self {
        Self {
            weights: EmotionWeights::default(),
            base: 5.0,
            span: 20.0,
        }
    }

    /// Range 0-30, used by audio analysis
    #[must_use]
    pub fn full_scale() -> Self {
        Self {
            weights: EmotionWeights::default(),
            base: 0.0,
            span: scales::WELLBEING_MAX,
        }
    }

    /// Check the weights and the output range
    ///
    /// # Errors
    ///
    /// Returns an error if a weight is negative or non-finite, or the output
    /// range leaves `[0, 30]`
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            self.weights.happiness,
            self.weights.calm,
            self.weights.sadness,
            self.weights.anxiety,
            self.weights.anger,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::InvalidWeights(
                "Emotion weights must be finite and non-negative",
            ));
        }
        if !self.span.is_finite() || self.span <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("Score span must be positive"));
        }
        if !self.base.is_finite()
            || self.base < scales::WELLBEING_MIN
            || self.base + self.span > scales::WELLBEING_MAX
        {
            return Err(ConfigError::InvalidRange(
                "Score range base..base+span must lie within 0-30",
            ));
        }
        Ok(())
    }
}

impl NeutralEmotions {
    /// The prior as an emotion vector
    #[must_use]
    pub fn vector(&self) -> EmotionVector {
        EmotionVector::new(
            self.happiness,
            self.sadness,
            self.anxiety,
            self.anger,
            self.calm,
        )
    }

    /// Check every prior lies in `[0, 1]`
    ///
    /// # Errors
    ///
    /// Returns an error if any prior is outside `[0, 1]`
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            self.happiness,
            self.sadness,
            self.anxiety,
            self.anger,
            self.calm,
        ];
        if values.iter().all(|v| (0.0..=1.0).contains(v)) {
            Ok(())
        } else {
            Err(ConfigError::ValueOutOfRange(
                "Neutral emotion priors must be between 0.0 and 1.0",
            ))
        }
    }
}
