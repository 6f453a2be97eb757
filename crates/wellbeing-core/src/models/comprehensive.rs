// ABOUTME: Fused multi-modal wellbeing score with its percentage and component inputs
// ABOUTME: Produced once by score fusion and never mutated afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::score::WellbeingScore;
use serde::{Deserialize, Serialize};

/// Per-modality scores that fed the fusion, after any configured jitter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    /// Questionnaire component
    pub questionnaire_score: f64,
    /// Free-text component
    pub text_score: f64,
    /// Audio component
    pub audio_score: f64,
    /// Visual component
    pub visual_score: f64,
}

/// Fused wellbeing assessment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComprehensiveScore {
    /// Fused score on the 0-30 scale
    #[serde(rename = "comprehensive_score")]
    pub score: WellbeingScore,
    /// Fused score on the 0-100 scale
    pub percentage: f64,
    /// Inputs to the fusion
    #[serde(flatten)]
    pub components: ComponentScores,
}
