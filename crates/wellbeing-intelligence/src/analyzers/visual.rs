// ABOUTME: Facial image analyzer backed by an injected face emotion model
// ABOUTME: Converts percentage scores, reports the dominant label and behavioural indicators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ModalityAnalyzer;
use crate::collaborators::FaceEmotionModel;
use crate::config::intelligence::AnalyzerConfig;
use crate::label_mapping::{dominant_label, LabelTable};
use crate::scoring::WellbeingScorer;
use std::sync::Arc;
use tracing::debug;
use wellbeing_core::constants::scales::PERCENT_MAX;
use wellbeing_core::errors::AnalysisError;
use wellbeing_core::models::{
    BehaviouralIndicators, EmotionVector, FacialExpression, Modality, ModalityResult,
    NeutralReason,
};

/// Visual modality analyzer
#[derive(Clone)]
pub struct VisualAnalyzer {
    model: Arc<dyn FaceEmotionModel>,
    scorer: WellbeingScorer,
    neutral: EmotionVector,
}

impl VisualAnalyzer {
    /// Build an analyzer around a face model
    #[must_use]
    pub fn new(model: Arc<dyn FaceEmotionModel>, config: &AnalyzerConfig) -> Self {
        Self {
            model,
            scorer: WellbeingScorer::new(config.visual),
            neutral: config.neutral_emotions.vector(),
        }
    }
}

/// Valence of a dominant face label
fn facial_expression(dominant: &str) -> FacialExpression {
    match dominant {
        "sad" | "angry" | "disgust" | "fear" => FacialExpression::Negative,
        "happy" => FacialExpression::Positive,
        _ => FacialExpression::Neutral,
    }
}

impl ModalityAnalyzer for VisualAnalyzer {
    type Input = [u8];

    fn modality(&self) -> Modality {
        Modality::Visual
    }

    fn neutral_emotions(&self) -> EmotionVector {
        self.neutral
    }

    fn try_analyze(&self, image: &[u8]) -> Result<ModalityResult, AnalysisError> {
        if image.is_empty() {
            return Err(AnalysisError::malformed_input(
                Modality::Visual,
                "image payload is empty",
            ));
        }

        let detection = self.model.detect(image)?;
        let scores = || {
            detection
                .scores
                .iter()
                .map(|(label, score)| (label.as_str(), *score))
        };
        let mapped = LabelTable::SevenClass.map(scores(), PERCENT_MAX);
        let Some(dominant) = dominant_label(scores()).filter(|_| !mapped.is_empty()) else {
            debug!("no face detected, returning neutral result");
            return Ok(ModalityResult::fallback(
                NeutralReason::NoFaceDetected,
                self.neutral,
            ));
        };

        let emotions = EmotionVector::from_partial(&mapped, &self.neutral);
        let score = self.scorer.score(&emotions);
        debug!(score = score.value(), dominant = %dominant, "image analyzed");

        let indicators = BehaviouralIndicators {
            facial_expression: Some(facial_expression(&dominant)),
            eye_contact: detection.eye_contact,
        };
        Ok(ModalityResult::measured(emotions, score)
            .with_indicators(indicators)
            .with_dominant_emotion(dominant))
    }
}
