// ABOUTME: Fixed-weight fusion of questionnaire, text, audio and visual scores
// ABOUTME: Produces the comprehensive 0-30 score, its percentage and the component scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Score Fusion
//!
//! Formula: `S = wq*Q + wt*T + wa*A + wv*V`, clamped to `[0, 30]`, with the
//! weights validated to sum to 1.0. Callers pass the neutral score for
//! modalities that were not collected; [`FusionInputs::from_partial`] does that.

use crate::config::intelligence::{ConfigError, FusionConfig, FusionWeights};
use crate::jitter::ScoreJitter;
use serde::{Deserialize, Serialize};
use tracing::debug;
use wellbeing_core::errors::{AnalysisError, AppResult};
use wellbeing_core::models::{round_to, ComponentScores, ComprehensiveScore, WellbeingScore};

/// Per-modality scores to fuse
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FusionInputs {
    /// Questionnaire score
    pub questionnaire: WellbeingScore,
    /// Free-text score
    pub text: WellbeingScore,
    /// Audio score
    pub audio: WellbeingScore,
    /// Visual score
    pub visual: WellbeingScore,
}

impl FusionInputs {
    /// Inputs from whichever modalities were analyzed; the rest are neutral
    #[must_use]
    pub fn from_partial(
        questionnaire: Option<WellbeingScore>,
        text: Option<WellbeingScore>,
        audio: Option<WellbeingScore>,
        visual: Option<WellbeingScore>,
    ) -> Self {
        Self {
            questionnaire: questionnaire.unwrap_or(WellbeingScore::NEUTRAL),
            text: text.unwrap_or(WellbeingScore::NEUTRAL),
            audio: audio.unwrap_or(WellbeingScore::NEUTRAL),
            visual: visual.unwrap_or(WellbeingScore::NEUTRAL),
        }
    }
}

/// Weighted multi-modal fusion
#[derive(Debug, Clone)]
pub struct ScoreFusion {
    weights: FusionWeights,
    jitter: Option<ScoreJitter>,
}

impl Default for ScoreFusion {
    fn default() -> Self {
        Self {
            weights: FusionWeights::default(),
            jitter: None,
        }
    }
}

impl ScoreFusion {
    /// Fusion configured from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the weights or the jitter spread fail validation
    pub fn new(config: &FusionConfig) -> Result<Self, ConfigError> {
        config.weights.validate()?;
        config.jitter.validate()?;
        Ok(Self {
            weights: config.weights,
            jitter: ScoreJitter::from_config(&config.jitter),
        })
    }

    /// Replace the jitter
    #[must_use]
    pub fn with_jitter(mut self, jitter: Option<ScoreJitter>) -> Self {
        self.jitter = jitter;
        self
    }

    /// Weights in use
    #[must_use]
    pub const fn weights(&self) -> &FusionWeights {
        &self.weights
    }

    /// Fuse four modality scores
    ///
    /// # Errors
    ///
    /// Returns an internal error if the fused value is not finite
    pub fn fuse(&self, inputs: &FusionInputs) -> AppResult<ComprehensiveScore> {
        let [fq, ft, fa, fv] = self.jitter.map_or([1.0; 4], |jitter| jitter.factors());
        let questionnaire = inputs.questionnaire.value() * fq;
        let text = inputs.text.value() * ft;
        let audio = inputs.audio.value() * fa;
        let visual = inputs.visual.value() * fv;

        let fused = self.weights.questionnaire * questionnaire
            + self.weights.text * text
            + self.weights.audio * audio
            + self.weights.visual * visual;
        if !fused.is_finite() {
            return Err(AnalysisError::RangeViolation {
                quantity: "comprehensive score",
                value: fused,
            }
            .into());
        }

        // The percentage follows the reported score, not the unrounded sum
        let score = WellbeingScore::new(fused).rounded(1);
        let comprehensive = ComprehensiveScore {
            score,
            percentage: round_to(score.percentage(), 1),
            components: ComponentScores {
                questionnaire_score: round_to(questionnaire, 1),
                text_score: round_to(text, 1),
                audio_score: round_to(audio, 1),
                visual_score: round_to(visual, 1),
            },
        };
        debug!(
            fused = comprehensive.score.value(),
            percentage = comprehensive.percentage,
            jittered = self.jitter.is_some(),
            "fused modality scores"
        );
        Ok(comprehensive)
    }
}
