// ABOUTME: Input modalities and the per-modality analysis result
// ABOUTME: ModalityResult is the immutable output of every analyzer, measured or fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::emotion::EmotionVector;
use super::indicators::{BehaviouralIndicators, VoiceModulation};
use super::score::WellbeingScore;
use super::status::{AssessmentStatus, NeutralReason, StatusBand};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Independent input channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    /// Ten-question self report
    Questionnaire,
    /// Free text
    Text,
    /// Speech recording
    Audio,
    /// Facial image
    Visual,
}

impl Modality {
    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Questionnaire => "questionnaire",
            Self::Text => "text",
            Self::Audio => "audio",
            Self::Visual => "visual",
        }
    }

    /// Status reason reported when analysis of this modality fails for any cause
    #[must_use]
    pub const fn failure_reason(self) -> NeutralReason {
        match self {
            Self::Visual => NeutralReason::NoFaceDetected,
            Self::Questionnaire | Self::Text | Self::Audio => NeutralReason::AnalysisError,
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of analyzing one modality.
///
/// Always structurally complete: when analysis fails the result carries the
/// neutral emotion distribution, the neutral score and a
/// [`AssessmentStatus::Neutral`] status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalityResult {
    /// Transcribed speech, for audio analysis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcription: Option<String>,
    /// Emotion intensities
    pub emotions: EmotionVector,
    /// Wellbeing score on the 0-30 scale
    #[serde(rename = "mental_health_score")]
    pub score: WellbeingScore,
    /// Band label or neutral fallback label
    #[serde(rename = "mental_health_status")]
    pub status: AssessmentStatus,
    /// Most intense raw label of the analyzed face or recording
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant_emotion: Option<String>,
    /// Behavioural indicators observed alongside emotions
    #[serde(
        rename = "mental_health_indicators",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub indicators: Option<BehaviouralIndicators>,
    /// Voice modulation, for audio analysis with acoustic features
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_modulation: Option<VoiceModulation>,
}

impl ModalityResult {
    /// Measured result; the status is classified from `score`
    #[must_use]
    pub fn measured(emotions: EmotionVector, score: WellbeingScore) -> Self {
        Self {
            transcription: None,
            emotions,
            score,
            status: AssessmentStatus::Band(StatusBand::from_score(score)),
            dominant_emotion: None,
            indicators: None,
            voice_modulation: None,
        }
    }

    /// Neutral fallback with the given emotion distribution
    #[must_use]
    pub const fn fallback(reason: NeutralReason, emotions: EmotionVector) -> Self {
        Self {
            transcription: None,
            emotions,
            score: WellbeingScore::NEUTRAL,
            status: AssessmentStatus::Neutral(reason),
            dominant_emotion: None,
            indicators: None,
            voice_modulation: None,
        }
    }

    /// Attach a transcription
    #[must_use]
    pub fn with_transcription(mut self, transcription: impl Into<String>) -> Self {
        self.transcription = Some(transcription.into());
        self
    }

    /// Attach the dominant raw emotion label
    #[must_use]
    pub fn with_dominant_emotion(mut self, label: impl Into<String>) -> Self {
        self.dominant_emotion = Some(label.into());
        self
    }

    /// Attach behavioural indicators, dropping an empty set
    #[must_use]
    pub fn with_indicators(mut self, indicators: BehaviouralIndicators) -> Self {
        self.indicators = (!indicators.is_empty()).then_some(indicators);
        self
    }

    /// Attach a voice modulation assessment
    #[must_use]
    pub fn with_voice_modulation(mut self, modulation: VoiceModulation) -> Self {
        self.voice_modulation = Some(modulation);
        self
    }

    /// Whether this result is a neutral fallback
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.status.is_fallback()
    }
}
