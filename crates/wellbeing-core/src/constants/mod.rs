// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Score scales, status band thresholds, fusion weights and fallback values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by the stage of the pipeline that owns them.

/// Wellbeing and priority scales
pub mod scales {
    /// Lower bound of every wellbeing score
    pub const WELLBEING_MIN: f64 = 0.0;
    /// Upper bound of every wellbeing score
    pub const WELLBEING_MAX: f64 = 30.0;
    /// Neutral mid-range score used for fallbacks and unavailable modalities
    pub const WELLBEING_NEUTRAL: f64 = 15.0;
    /// Upper bound of the percentage / priority scale
    pub const PERCENT_MAX: f64 = 100.0;
    /// Centre added to the weighted emotion sum before normalization
    pub const EMOTION_SUM_CENTER: f64 = 0.5;
}

/// Inclusive lower thresholds of the status bands (0-30 scale)
pub mod status_thresholds {
    /// Healthy band
    pub const HEALTHY: f64 = 22.0;
    /// Stable but vulnerable band
    pub const STABLE_BUT_VULNERABLE: f64 = 18.0;
    /// Mild imbalance band
    pub const MILD_IMBALANCE: f64 = 14.0;
    /// Moderate issues band
    pub const MODERATE_ISSUES: f64 = 10.0;
    /// Severe distress band
    pub const SEVERE_DISTRESS: f64 = 6.0;
}

/// Default fusion weights (sum to 1.0)
pub mod fusion_weights {
    /// Questionnaire weight
    pub const QUESTIONNAIRE: f64 = 0.40;
    /// Free-text weight
    pub const TEXT: f64 = 0.30;
    /// Audio weight
    pub const AUDIO: f64 = 0.15;
    /// Visual weight
    pub const VISUAL: f64 = 0.15;
}

/// Priority tier thresholds on the 0-100 scale
pub mod priority_thresholds {
    /// Below this value the tier is High
    pub const HIGH_BELOW: f64 = 30.0;
    /// Below this value (and at or above `HIGH_BELOW`) the tier is Medium
    pub const MEDIUM_BELOW: f64 = 60.0;
    /// Emotion intensity above which personalized lines are added
    pub const PERSONALIZATION_TRIGGER: f64 = 0.5;
}

/// Neutral emotion distribution used for fallbacks and imputation
pub mod neutral_emotions {
    /// Happiness prior
    pub const HAPPINESS: f64 = 0.5;
    /// Sadness prior
    pub const SADNESS: f64 = 0.3;
    /// Anxiety prior
    pub const ANXIETY: f64 = 0.2;
    /// Anger prior
    pub const ANGER: f64 = 0.1;
    /// Calm prior
    pub const CALM: f64 = 0.4;
}

/// Neutral status label text
pub mod status_labels {
    /// Text input was empty
    pub const NO_TEXT: &str = "Neutral - No text provided";
    /// Collaborator or computation failure
    pub const ANALYSIS_ERROR: &str = "Neutral - Error in analysis";
    /// No usable face in the image
    pub const NO_FACE: &str = "Neutral - Unable to analyze facial expressions";
}
