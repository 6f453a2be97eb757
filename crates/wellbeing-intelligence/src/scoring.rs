// ABOUTME: Weighted emotion-to-wellbeing score conversion shared by every emotion-based analyzer
// ABOUTME: Centres the weighted sum at 0.5, clamps to [0,1] and maps into the profile's range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::ScoringProfile;
use tracing::debug;
use wellbeing_core::constants::scales::EMOTION_SUM_CENTER;
use wellbeing_core::models::{EmotionVector, WellbeingScore};

/// Converts an emotion vector into a wellbeing score for one modality
///
/// Formula: `score = base + span * clamp01(0.5 + wh*h + wc*c - ws*s - wx*x - wa*a)`,
/// then clamped to `[0, 30]`.
#[derive(Debug, Clone, Copy)]
pub struct WellbeingScorer {
    profile: ScoringProfile,
}

impl WellbeingScorer {
    /// Scorer for a profile
    #[must_use]
    pub const fn new(profile: ScoringProfile) -> Self {
        Self { profile }
    }

    /// Weighted emotion sum normalized into `[0, 1]`
    #[must_use]
    pub fn normalized(&self, emotions: &EmotionVector) -> f64 {
        let w = &self.profile.weights;
        let weighted = EMOTION_SUM_CENTER
            + w.happiness * emotions.happiness()
            + w.calm * emotions.calm()
            - w.sadness * emotions.sadness()
            - w.anxiety * emotions.anxiety()
            - w.anger * emotions.anger();
        weighted.clamp(0.0, 1.0)
    }

    /// Wellbeing score for `emotions`
    #[must_use]
    pub fn score(&self, emotions: &EmotionVector) -> WellbeingScore {
        let normalized = self.normalized(emotions);
        let score = WellbeingScore::new(self.profile.base + self.profile.span * normalized);
        debug!(normalized, score = score.value(), "scored emotion vector");
        score
    }
}
