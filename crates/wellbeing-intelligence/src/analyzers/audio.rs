// ABOUTME: Speech analyzer combining an acoustic emotion model with an optional transcriber
// ABOUTME: Scores on the full 0-30 scale, reports the dominant label and voice modulation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ModalityAnalyzer;
use crate::algorithms::voice_modulation;
use crate::collaborators::{AcousticEmotionModel, AudioHandle, SpeechTranscriber};
use crate::config::intelligence::AnalyzerConfig;
use crate::label_mapping::{dominant_label, LabelTable};
use crate::scoring::WellbeingScorer;
use std::sync::Arc;
use tracing::{debug, warn};
use wellbeing_core::errors::AnalysisError;
use wellbeing_core::models::{EmotionVector, Modality, ModalityResult};

/// Audio modality analyzer
#[derive(Clone)]
pub struct AudioAnalyzer {
    acoustic: Arc<dyn AcousticEmotionModel>,
    transcriber: Option<Arc<dyn SpeechTranscriber>>,
    scorer: WellbeingScorer,
    neutral: EmotionVector,
}

impl AudioAnalyzer {
    /// Build an analyzer around an acoustic model, without transcription
    #[must_use]
    pub fn new(acoustic: Arc<dyn AcousticEmotionModel>, config: &AnalyzerConfig) -> Self {
        Self {
            acoustic,
            transcriber: None,
            scorer: WellbeingScorer::new(config.audio),
            neutral: config.neutral_emotions.vector(),
        }
    }

    /// Also transcribe recordings
    #[must_use]
    pub fn with_transcriber(mut self, transcriber: Arc<dyn SpeechTranscriber>) -> Self {
        self.transcriber = Some(transcriber);
        self
    }

    /// Transcription never fails the analysis; errors yield an empty transcript
    fn transcribe(&self, audio: &AudioHandle) -> Option<String> {
        let transcriber = self.transcriber.as_ref()?;
        match transcriber.transcribe(audio) {
            Ok(text) => Some(text),
            Err(error) => {
                warn!(error = %error, "transcription failed, continuing without transcript");
                Some(String::new())
            }
        }
    }
}

impl ModalityAnalyzer for AudioAnalyzer {
    type Input = AudioHandle;

    fn modality(&self) -> Modality {
        Modality::Audio
    }

    fn neutral_emotions(&self) -> EmotionVector {
        self.neutral
    }

    fn try_analyze(&self, audio: &AudioHandle) -> Result<ModalityResult, AnalysisError> {
        if audio.path().as_os_str().is_empty() {
            return Err(AnalysisError::malformed_input(
                Modality::Audio,
                "audio handle has an empty path",
            ));
        }

        let prediction = self.acoustic.predict(audio)?;
        let mapped = LabelTable::SevenClass.map(
            prediction
                .probabilities
                .iter()
                .map(|entry| (entry.label.as_str(), entry.score)),
            1.0,
        );
        if mapped.is_empty() {
            return Err(AnalysisError::model_unavailable(
                Modality::Audio,
                "acoustic model returned no recognised emotion label",
            ));
        }
        let emotions = EmotionVector::from_partial(&mapped, &self.neutral);
        let score = self.scorer.score(&emotions);
        debug!(score = score.value(), path = %audio.path().display(), "audio analyzed");

        let mut result = ModalityResult::measured(emotions, score);
        if let Some(dominant) = dominant_label(
            prediction
                .probabilities
                .iter()
                .map(|entry| (entry.label.as_str(), entry.score)),
        ) {
            result = result.with_dominant_emotion(dominant);
        }
        if let Some(transcript) = self.transcribe(audio) {
            result = result.with_transcription(transcript);
        }
        if let Some(features) = prediction.features {
            result = result.with_voice_modulation(voice_modulation::assess(&features));
        }
        Ok(result)
    }
}
