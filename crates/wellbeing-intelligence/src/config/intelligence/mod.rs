// ABOUTME: Intelligence configuration for modality analyzers, fusion, recommendations and questionnaires
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Type-safe configuration for every stage of the assessment pipeline.
//!
//! # Module Structure
//!
//! - `analyzer` - Emotion weights, score ranges and the neutral prior
//! - `fusion` - Modality weights and optional seeded jitter
//! - `recommendation` - Priority tier thresholds and personalization triggers
//! - `questionnaire` - Keyword lists and insight cut-offs
//!
//! Configuration is resolved from defaults plus `WELLBEING_*` environment
//! overrides and is validated before use. There is no global instance: the
//! loaded value is passed to the components that need it.

pub mod analyzer;
pub mod error;
pub mod fusion;
pub mod questionnaire;
pub mod recommendation;

pub use analyzer::{AnalyzerConfig, EmotionWeights, NeutralEmotions, ScoringProfile};
pub use error::ConfigError;
pub use fusion::{FusionConfig, FusionWeights, JitterConfig};
pub use questionnaire::{CategoryKeywords, QuestionnaireConfig};
pub use recommendation::{PersonalizationConfig, PriorityThresholds, RecommendationEngineConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Text, audio and visual scoring
    pub analyzers: AnalyzerConfig,
    /// Multi-modal fusion
    pub fusion: FusionConfig,
    /// Recommendation tiers and personalization
    pub recommendation_engine: RecommendationEngineConfig,
    /// Questionnaire scoring
    pub questionnaire: QuestionnaireConfig,
}

impl IntelligenceConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analyzers.text.validate()?;
        self.analyzers.audio.validate()?;
        self.analyzers.visual.validate()?;
        self.analyzers.neutral_emotions.validate()?;
        self.fusion.weights.validate()?;
        self.fusion.jitter.validate()?;
        self.recommendation_engine.validate()?;
        self.questionnaire.validate()?;
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_profile_overrides(prefix: &str, profile: &mut ScoringProfile) -> Result<(), ConfigError> {
        Self::apply_env_var(&format!("WELLBEING_{prefix}_SCORE_BASE"), &mut profile.base)?;
        Self::apply_env_var(&format!("WELLBEING_{prefix}_SCORE_SPAN"), &mut profile.span)?;
        let weights = &mut profile.weights;
        Self::apply_env_var(
            &format!("WELLBEING_{prefix}_WEIGHT_HAPPINESS"),
            &mut weights.happiness,
        )?;
        Self::apply_env_var(&format!("WELLBEING_{prefix}_WEIGHT_CALM"), &mut weights.calm)?;
        Self::apply_env_var(
            &format!("WELLBEING_{prefix}_WEIGHT_SADNESS"),
            &mut weights.sadness,
        )?;
        Self::apply_env_var(
            &format!("WELLBEING_{prefix}_WEIGHT_ANXIETY"),
            &mut weights.anxiety,
        )?;
        Self::apply_env_var(&format!("WELLBEING_{prefix}_WEIGHT_ANGER"), &mut weights.anger)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Analyzer overrides
        Self::apply_profile_overrides("TEXT", &mut self.analyzers.text)?;
        Self::apply_profile_overrides("AUDIO", &mut self.analyzers.audio)?;
        Self::apply_profile_overrides("VISUAL", &mut self.analyzers.visual)?;

        let neutral = &mut self.analyzers.neutral_emotions;
        Self::apply_env_var("WELLBEING_NEUTRAL_HAPPINESS", &mut neutral.happiness)?;
        Self::apply_env_var("WELLBEING_NEUTRAL_SADNESS", &mut neutral.sadness)?;
        Self::apply_env_var("WELLBEING_NEUTRAL_ANXIETY", &mut neutral.anxiety)?;
        Self::apply_env_var("WELLBEING_NEUTRAL_ANGER", &mut neutral.anger)?;
        Self::apply_env_var("WELLBEING_NEUTRAL_CALM", &mut neutral.calm)?;

        // Fusion overrides
        let weights = &mut self.fusion.weights;
        Self::apply_env_var(
            "WELLBEING_FUSION_WEIGHT_QUESTIONNAIRE",
            &mut weights.questionnaire,
        )?;
        Self::apply_env_var("WELLBEING_FUSION_WEIGHT_TEXT", &mut weights.text)?;
        Self::apply_env_var("WELLBEING_FUSION_WEIGHT_AUDIO", &mut weights.audio)?;
        Self::apply_env_var("WELLBEING_FUSION_WEIGHT_VISUAL", &mut weights.visual)?;

        if let Ok(val) = env::var("WELLBEING_FUSION_JITTER_SEED") {
            let seed = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid WELLBEING_FUSION_JITTER_SEED".into()))?;
            self.fusion.jitter.seed = Some(seed);
        }
        Self::apply_env_var(
            "WELLBEING_FUSION_JITTER_SPREAD",
            &mut self.fusion.jitter.spread,
        )?;

        // Recommendation engine overrides
        let thresholds = &mut self.recommendation_engine.thresholds;
        Self::apply_env_var("WELLBEING_PRIORITY_HIGH_BELOW", &mut thresholds.high_below)?;
        Self::apply_env_var(
            "WELLBEING_PRIORITY_MEDIUM_BELOW",
            &mut thresholds.medium_below,
        )?;
        let personalization = &mut self.recommendation_engine.personalization;
        Self::apply_env_var(
            "WELLBEING_PERSONALIZATION_ANXIETY_TRIGGER",
            &mut personalization.anxiety_trigger,
        )?;
        Self::apply_env_var(
            "WELLBEING_PERSONALIZATION_DEPRESSION_TRIGGER",
            &mut personalization.depression_trigger,
        )?;

        // Questionnaire overrides
        Self::apply_env_var(
            "WELLBEING_QUESTIONNAIRE_FOCUS_BELOW",
            &mut self.questionnaire.focus_below,
        )?;
        Self::apply_env_var(
            "WELLBEING_QUESTIONNAIRE_STRENGTH_ABOVE",
            &mut self.questionnaire.strength_above,
        )?;

        Ok(self)
    }
}
