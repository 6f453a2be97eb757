// ABOUTME: Free-text analyzer backed by an injected emotion classifier
// ABOUTME: Maps joy/sadness/fear/anger/neutral onto the five emotion keys and scores on 5-25
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ModalityAnalyzer;
use crate::collaborators::EmotionClassifier;
use crate::config::intelligence::AnalyzerConfig;
use crate::label_mapping::LabelTable;
use crate::scoring::WellbeingScorer;
use std::sync::Arc;
use tracing::debug;
use wellbeing_core::errors::AnalysisError;
use wellbeing_core::models::{EmotionVector, Modality, ModalityResult, NeutralReason};

/// Text modality analyzer
#[derive(Clone)]
pub struct TextAnalyzer {
    classifier: Arc<dyn EmotionClassifier>,
    scorer: WellbeingScorer,
    neutral: EmotionVector,
}

impl TextAnalyzer {
    /// Build an analyzer around a classifier
    #[must_use]
    pub fn new(classifier: Arc<dyn EmotionClassifier>, config: &AnalyzerConfig) -> Self {
        Self {
            classifier,
            scorer: WellbeingScorer::new(config.text),
            neutral: config.neutral_emotions.vector(),
        }
    }
}

impl ModalityAnalyzer for TextAnalyzer {
    type Input = str;

    fn modality(&self) -> Modality {
        Modality::Text
    }

    fn neutral_emotions(&self) -> EmotionVector {
        self.neutral
    }

    fn try_analyze(&self, text: &str) -> Result<ModalityResult, AnalysisError> {
        if text.trim().is_empty() {
            debug!("empty text input, returning neutral result");
            return Ok(ModalityResult::fallback(NeutralReason::NoInput, self.neutral));
        }

        let labels = self.classifier.classify(text)?;
        let mapped = LabelTable::Text.map(
            labels.iter().map(|entry| (entry.label.as_str(), entry.score)),
            1.0,
        );
        if mapped.is_empty() {
            return Err(AnalysisError::model_unavailable(
                Modality::Text,
                "classifier returned no recognised emotion label",
            ));
        }
        let emotions = EmotionVector::from_partial(&mapped, &self.neutral);
        let score = self.scorer.score(&emotions);
        debug!(score = score.value(), labels = labels.len(), "text analyzed");
        Ok(ModalityResult::measured(emotions, score))
    }
}
