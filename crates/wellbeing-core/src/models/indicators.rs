// ABOUTME: Behavioural indicators and voice modulation attached to modality results
// ABOUTME: Optional signals consumed by the recommendation personalization layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Overall valence of the detected facial expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacialExpression {
    /// Happy face
    Positive,
    /// Neutral or surprised face
    Neutral,
    /// Sad, angry, disgusted or fearful face
    Negative,
}

/// Quality of eye contact reported by the visual collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeContact {
    /// Sustained gaze toward the camera
    Good,
    /// Intermittent gaze
    Moderate,
    /// Gaze mostly averted
    Poor,
}

/// Non-emotion signals observed during analysis. Every field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviouralIndicators {
    /// Valence of the facial expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facial_expression: Option<FacialExpression>,
    /// Eye contact quality
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eye_contact: Option<EyeContact>,
}

impl BehaviouralIndicators {
    /// Whether no indicator was observed
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.facial_expression.is_none() && self.eye_contact.is_none()
    }
}

/// Voice modulation assessment (0-100) derived from acoustic feature summaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceModulation {
    /// Modulation score, 0-100
    pub score: f64,
    /// Human-readable interpretation of the score
    pub interpretation: String,
}
