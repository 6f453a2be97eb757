// ABOUTME: Score fusion configuration: modality weights and optional seeded jitter
// ABOUTME: Weights must sum to 1.0 so the fused score stays on the 0-30 scale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use wellbeing_core::constants::fusion_weights;

/// Tolerance on the weight sum
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Score fusion configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FusionConfig {
    /// Per-modality weights
    pub weights: FusionWeights,
    /// Optional reproducible jitter
    pub jitter: JitterConfig,
}

/// Per-modality fusion weights
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FusionWeights {
    /// Questionnaire weight
    pub questionnaire: f64,
    /// Free-text weight
    pub text: f64,
    /// Audio weight
    pub audio: f64,
    /// Visual weight
    pub visual: f64,
}

/// Jitter settings. Disabled unless a seed is configured.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JitterConfig {
    /// RNG seed; `None` disables jitter
    pub seed: Option<u64>,
    /// Maximum relative deviation of each component factor
    pub spread: f64,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            questionnaire: fusion_weights::QUESTIONNAIRE,
            text: fusion_weights::TEXT,
            audio: fusion_weights::AUDIO,
            visual: fusion_weights::VISUAL,
        }
    }
}

impl Default for JitterConfig {
    fn default() -> Self {
        Self {
            seed: None,
            spread: 0.2,
        }
    }
}

impl FusionWeights {
    /// Sum of all weights
    #[must_use]
    pub fn total(&self) -> f64 {
        self.questionnaire + self.text + self.audio + self.visual
    }

    /// Validate that weights are non-negative and sum to 1.0
    ///
    /// # Errors
    ///
    /// Returns an error if any weight is negative or the sum differs from 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [self.questionnaire, self.text, self.audio, self.visual];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::InvalidWeights(
                "Fusion weights must be finite and non-negative",
            ));
        }
        if (self.total() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights("Fusion weights must sum to 1.0"));
        }
        Ok(())
    }
}

impl JitterConfig {
    /// Validate the spread
    ///
    /// # Errors
    ///
    /// Returns an error if the spread is outside `[0, 1)`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spread.is_finite() && (0.0..1.0).contains(&self.spread) {
            Ok(())
        } else {
            Err(ConfigError::ValueOutOfRange(
                "Jitter spread must be in [0.0, 1.0)",
            ))
        }
    }
}
