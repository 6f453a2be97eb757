// ABOUTME: Questionnaire categories and the questionnaire assessment result
// ABOUTME: Maps question identifiers onto ten wellbeing categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::score::WellbeingScore;
use super::status::{AssessmentStatus, NeutralReason};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Wellbeing dimension assessed by one questionnaire item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionnaireCategory {
    /// `question_1`
    EnergyLevel,
    /// `question_2`
    ThoughtPatterns,
    /// `question_3`
    SleepQuality,
    /// `question_4`
    SocialConnection,
    /// `question_5`
    SelfRelationship,
    /// `question_6`
    Motivation,
    /// `question_7`
    StressManagement,
    /// `question_8`
    Purpose,
    /// `question_9`
    SelfCare,
    /// `question_10`
    LifeSatisfaction,
}

impl QuestionnaireCategory {
    /// Every category, in question order
    pub const ALL: [Self; 10] = [
        Self::EnergyLevel,
        Self::ThoughtPatterns,
        Self::SleepQuality,
        Self::SocialConnection,
        Self::SelfRelationship,
        Self::Motivation,
        Self::StressManagement,
        Self::Purpose,
        Self::SelfCare,
        Self::LifeSatisfaction,
    ];

    /// Snake-case key
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::EnergyLevel => "energy_level",
            Self::ThoughtPatterns => "thought_patterns",
            Self::SleepQuality => "sleep_quality",
            Self::SocialConnection => "social_connection",
            Self::SelfRelationship => "self_relationship",
            Self::Motivation => "motivation",
            Self::StressManagement => "stress_management",
            Self::Purpose => "purpose",
            Self::SelfCare => "self_care",
            Self::LifeSatisfaction => "life_satisfaction",
        }
    }

    /// Category assessed by a question identifier such as `question_3`
    #[must_use]
    pub fn from_question_id(question_id: &str) -> Option<Self> {
        let index: usize = question_id.strip_prefix("question_")?.parse().ok()?;
        index
            .checked_sub(1)
            .and_then(|position| Self::ALL.get(position).copied())
    }

    /// Key with underscores replaced by spaces, for insight text
    #[must_use]
    pub fn words(self) -> String {
        self.key().replace('_', " ")
    }
}

impl fmt::Display for QuestionnaireCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Result of scoring a questionnaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireAssessment {
    /// Per-category scores in `[0, 1]`, for answered questions only
    pub category_scores: BTreeMap<QuestionnaireCategory, f64>,
    /// Mean category score scaled to 0-30
    pub overall_score: WellbeingScore,
    /// Band of the overall score
    pub mental_health_status: AssessmentStatus,
    /// Strengths and focus areas
    pub insights: Vec<String>,
    /// De-duplicated recommendations for weak categories
    pub recommendations: Vec<String>,
}

impl QuestionnaireAssessment {
    /// Assessment with no scored answers
    #[must_use]
    pub const fn unscored(reason: NeutralReason) -> Self {
        Self {
            category_scores: BTreeMap::new(),
            overall_score: WellbeingScore::MIN,
            mental_health_status: AssessmentStatus::Neutral(reason),
            insights: Vec::new(),
            recommendations: Vec::new(),
        }
    }
}
