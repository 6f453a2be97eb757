// ABOUTME: Recorded collaborator outputs replayed through the pipeline without live models
// ABOUTME: Loads a JSON recording and implements every collaborator trait from it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Replay
//!
//! A recording is a JSON document holding what each external model answered
//! for one session:
//!
//! ```json
//! {
//!   "text": [{ "label": "joy", "score": 0.8 }],
//!   "transcript": "I feel fine today",
//!   "acoustic": { "probabilities": [{ "label": "happy", "score": 0.6 }] },
//!   "face": { "scores": { "happy": 70.0, "neutral": 30.0 }, "eye_contact": "good" },
//!   "sentiment": { "I sleep well": 0.6 },
//!   "default_polarity": 0.0
//! }
//! ```
//!
//! Every section is optional. A collaborator whose section is missing
//! reports itself unavailable, which the analyzers turn into a fallback.

use crate::pipeline::AssessmentPipeline;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use wellbeing_core::errors::{AnalysisError, AppError, AppResult, ErrorCode};
use wellbeing_core::models::Modality;
use wellbeing_intelligence::collaborators::{
    AcousticEmotionModel, AcousticPrediction, AudioHandle, EmotionClassifier, FaceDetection,
    FaceEmotionModel, LabelScore, SentimentScorer, SpeechTranscriber,
};

/// Recorded collaborator answers for one session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    /// Text classifier output
    #[serde(default)]
    pub text: Option<Vec<LabelScore>>,
    /// Speech transcript
    #[serde(default)]
    pub transcript: Option<String>,
    /// Acoustic model output
    #[serde(default)]
    pub acoustic: Option<AcousticPrediction>,
    /// Face model output
    #[serde(default)]
    pub face: Option<FaceDetection>,
    /// Polarity per exact answer text
    #[serde(default)]
    pub sentiment: BTreeMap<String, f64>,
    /// Polarity for answers not listed in `sentiment`
    #[serde(default)]
    pub default_polarity: Option<f64>,
}

impl Recording {
    /// Parse a recording from JSON text
    ///
    /// # Errors
    ///
    /// Returns an invalid-format error if the document does not parse
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            AppError::new(ErrorCode::InvalidFormat, format!("Invalid recording: {e}")).with_source(e)
        })
    }

    /// Read and parse a recording file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::invalid_input(format!("Cannot read recording {}: {e}", path.display()))
                .with_source(e)
        })?;
        let recording = Self::from_json(&raw)?;
        debug!(path = %path.display(), "loaded recording");
        Ok(recording)
    }
}

fn missing(modality: Modality, section: &str) -> AnalysisError {
    AnalysisError::model_unavailable(modality, format!("recording has no {section} section"))
}

/// Every collaborator trait backed by one shared recording
#[derive(Debug, Clone)]
pub struct RecordedCollaborators {
    recording: Arc<Recording>,
}

impl RecordedCollaborators {
    /// Share a recording
    #[must_use]
    pub fn new(recording: Recording) -> Self {
        Self {
            recording: Arc::new(recording),
        }
    }

    /// Recording being replayed
    #[must_use]
    pub fn recording(&self) -> &Recording {
        &self.recording
    }

    /// Attach every collaborator the recording has a section for
    #[must_use]
    pub fn attach(&self, mut pipeline: AssessmentPipeline) -> AssessmentPipeline {
        let shared = Arc::new(self.clone());
        if self.recording.text.is_some() {
            pipeline = pipeline.with_text_classifier(Arc::clone(&shared) as Arc<dyn EmotionClassifier>);
        }
        if self.recording.transcript.is_some() {
            pipeline = pipeline.with_transcriber(Arc::clone(&shared) as Arc<dyn SpeechTranscriber>);
        }
        if self.recording.acoustic.is_some() {
            pipeline =
                pipeline.with_acoustic_model(Arc::clone(&shared) as Arc<dyn AcousticEmotionModel>);
        }
        if self.recording.face.is_some() {
            pipeline = pipeline.with_face_model(Arc::clone(&shared) as Arc<dyn FaceEmotionModel>);
        }
        if !self.recording.sentiment.is_empty() || self.recording.default_polarity.is_some() {
            pipeline = pipeline.with_sentiment_scorer(shared as Arc<dyn SentimentScorer>);
        }
        pipeline
    }
}

impl EmotionClassifier for RecordedCollaborators {
    fn classify(&self, _text: &str) -> Result<Vec<LabelScore>, AnalysisError> {
        self.recording
            .text
            .clone()
            .ok_or_else(|| missing(Modality::Text, "text"))
    }
}

impl SpeechTranscriber for RecordedCollaborators {
    fn transcribe(&self, _audio: &AudioHandle) -> Result<String, AnalysisError> {
        self.recording
            .transcript
            .clone()
            .ok_or_else(|| missing(Modality::Audio, "transcript"))
    }
}

impl AcousticEmotionModel for RecordedCollaborators {
    fn predict(&self, _audio: &AudioHandle) -> Result<AcousticPrediction, AnalysisError> {
        self.recording
            .acoustic
            .clone()
            .ok_or_else(|| missing(Modality::Audio, "acoustic"))
    }
}

impl FaceEmotionModel for RecordedCollaborators {
    fn detect(&self, _image: &[u8]) -> Result<FaceDetection, AnalysisError> {
        self.recording
            .face
            .clone()
            .ok_or_else(|| missing(Modality::Visual, "face"))
    }
}

impl SentimentScorer for RecordedCollaborators {
    fn polarity(&self, text: &str) -> Result<f64, AnalysisError> {
        self.recording
            .sentiment
            .get(text)
            .copied()
            .or(self.recording.default_polarity)
            .ok_or_else(|| missing(Modality::Questionnaire, "sentiment"))
    }
}
