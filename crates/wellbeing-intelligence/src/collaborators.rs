// ABOUTME: Interfaces of the external models the analyzers depend on
// ABOUTME: Text classifier, speech transcriber, acoustic model, face model and sentiment scorer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # External Collaborators
//!
//! The analyzers never load models themselves. Callers construct them with
//! implementations of these traits, shared as `Arc<dyn Trait + Send + Sync>`
//! and never mutated after construction. Every method is synchronous; the
//! service layer moves calls onto a blocking pool and owns timeouts.
//!
//! Implementations report their own failures as
//! [`AnalysisError::ModelUnavailable`]; analyzers turn those into neutral
//! fallback results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use wellbeing_core::errors::AnalysisError;
use wellbeing_core::models::EyeContact;

/// One classifier output entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    /// Raw model label, e.g. `joy`
    pub label: String,
    /// Model confidence for the label
    pub score: f64,
}

impl LabelScore {
    /// Create a label/score pair
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Reference to a decoded audio recording on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioHandle {
    path: PathBuf,
}

impl AudioHandle {
    /// Wrap a path to decoded audio
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the recording
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Summary statistics of the recording used for voice modulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcousticFeatureSummary {
    /// Pitch standard deviation divided by mean pitch
    pub pitch_variability: f64,
    /// Max minus min RMS energy
    pub energy_range: f64,
    /// Standard deviation of the local tempo estimate
    pub tempo_std: f64,
    /// Max minus min spectral centroid, in Hz
    pub spectral_range: f64,
    /// Max minus min zero-crossing rate
    pub zcr_range: f64,
}

/// Output of the acoustic emotion model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcousticPrediction {
    /// Probabilities over `angry, disgust, fear, happy, neutral, sad, surprise`
    pub probabilities: Vec<LabelScore>,
    /// Feature summary, when the model computes one
    #[serde(default)]
    pub features: Option<AcousticFeatureSummary>,
}

/// Output of the facial emotion model for the most prominent face
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceDetection {
    /// Label to percentage (0-100); empty when no face was found
    pub scores: BTreeMap<String, f64>,
    /// Gaze quality, when the model estimates it
    #[serde(default)]
    pub eye_contact: Option<EyeContact>,
}

/// Text emotion classifier
pub trait EmotionClassifier: Send + Sync {
    /// Score `text` against the classifier's labels. Any subset or superset of
    /// the expected labels is tolerated.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ModelUnavailable` if the model cannot run
    fn classify(&self, text: &str) -> Result<Vec<LabelScore>, AnalysisError>;
}

/// Speech-to-text engine
pub trait SpeechTranscriber: Send + Sync {
    /// Transcribe a recording
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ModelUnavailable` if transcription fails
    fn transcribe(&self, audio: &AudioHandle) -> Result<String, AnalysisError>;
}

/// Seven-class acoustic emotion model
pub trait AcousticEmotionModel: Send + Sync {
    /// Predict emotion probabilities for a recording
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ModelUnavailable` if the model cannot run
    fn predict(&self, audio: &AudioHandle) -> Result<AcousticPrediction, AnalysisError>;
}

/// Facial emotion model
pub trait FaceEmotionModel: Send + Sync {
    /// Detect emotions on the most prominent face in an encoded image
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ModelUnavailable` if the model cannot run
    fn detect(&self, image: &[u8]) -> Result<FaceDetection, AnalysisError>;
}

/// Sentiment polarity scorer used by the questionnaire
pub trait SentimentScorer: Send + Sync {
    /// Polarity of `text` in `[-1, 1]`
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ModelUnavailable` if scoring fails
    fn polarity(&self, text: &str) -> Result<f64, AnalysisError>;
}
