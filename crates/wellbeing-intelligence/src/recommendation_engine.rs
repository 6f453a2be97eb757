// ABOUTME: Priority-tiered self-care recommendation engine with indicator-driven personalization
// ABOUTME: Selects category lists from a (category, tier) table and formats the outbound payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recommendation Engine
//!
//! 1. The 0-30 wellbeing score is converted once, by [`to_priority_scale`],
//!    onto the 0-100 priority scale.
//! 2. The priority value selects a [`PriorityTier`] (`< 30` High, `< 60`
//!    Medium, otherwise Low by default).
//! 3. Each [`RecommendationCategory`] contributes the list stored for that
//!    tier.
//! 4. Personalized lines are appended for each indicator that crosses its
//!    trigger. Absent indicators contribute nothing.

use crate::config::intelligence::RecommendationEngineConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;
use wellbeing_core::constants::scales::{PERCENT_MAX, WELLBEING_MAX};
use wellbeing_core::models::{
    BehaviouralIndicators, EmotionVector, EyeContact, FacialExpression, FormattedRecommendations,
    ModalityResult, PriorityTier, RecommendationBlock, RecommendationCategory, RecommendationSet,
    WellbeingScore,
};

/// Signals the engine selects and personalizes from. Every field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationInput {
    /// Wellbeing score; a missing score is treated as neutral
    #[serde(default)]
    pub score: Option<WellbeingScore>,
    /// Emotion intensities
    #[serde(default)]
    pub emotions: Option<EmotionVector>,
    /// Depression intensity in `[0, 1]`, from an upstream screener
    #[serde(default)]
    pub depression: Option<f64>,
    /// Behavioural indicators
    #[serde(default)]
    pub indicators: Option<BehaviouralIndicators>,
}

impl RecommendationInput {
    /// Input carrying only a score
    #[must_use]
    pub const fn from_score(score: WellbeingScore) -> Self {
        Self {
            score: Some(score),
            emotions: None,
            depression: None,
            indicators: None,
        }
    }

    /// Input derived from a modality result
    #[must_use]
    pub const fn from_result(result: &ModalityResult) -> Self {
        Self {
            score: Some(result.score),
            emotions: Some(result.emotions),
            depression: None,
            indicators: result.indicators,
        }
    }

    /// Attach a depression intensity
    #[must_use]
    pub const fn with_depression(mut self, depression: f64) -> Self {
        self.depression = Some(depression);
        self
    }
}

/// Convert a 0-30 wellbeing score onto the 0-100 priority scale
#[must_use]
pub fn to_priority_scale(score: WellbeingScore) -> f64 {
    score.value() * PERCENT_MAX / WELLBEING_MAX
}

type RecommendationTable = HashMap<(RecommendationCategory, PriorityTier), &'static [&'static str]>;

/// Recommendation engine over a static (category, tier) table
#[derive(Debug, Clone)]
pub struct WellbeingRecommendationEngine {
    config: RecommendationEngineConfig,
    table: RecommendationTable,
}

impl Default for WellbeingRecommendationEngine {
    fn default() -> Self {
        Self::new(RecommendationEngineConfig::default())
    }
}

impl WellbeingRecommendationEngine {
    /// Engine with the given thresholds
    #[must_use]
    pub fn new(config: RecommendationEngineConfig) -> Self {
        Self {
            config,
            table: build_table(),
        }
    }

    /// Tier for a score; `None` means neutral
    #[must_use]
    pub fn priority_for(&self, score: Option<WellbeingScore>) -> PriorityTier {
        let priority = to_priority_scale(score.unwrap_or(WellbeingScore::NEUTRAL));
        let thresholds = &self.config.thresholds;
        if priority < thresholds.high_below {
            PriorityTier::High
        } else if priority < thresholds.medium_below {
            PriorityTier::Medium
        } else {
            PriorityTier::Low
        }
    }

    /// Lines stored for a category and tier
    #[must_use]
    pub fn items(&self, category: RecommendationCategory, tier: PriorityTier) -> Vec<String> {
        self.table.get(&(category, tier)).map_or_else(Vec::new, |items| {
            items.iter().map(|item| (*item).to_owned()).collect()
        })
    }

    /// Build a fresh recommendation set for one request
    #[must_use]
    pub fn recommend(&self, input: &RecommendationInput) -> RecommendationSet {
        let priority = self.priority_for(input.score);
        let personalized = self.personalized(input);
        debug!(
            ?priority,
            personalized = personalized.len(),
            "selected recommendations"
        );
        RecommendationSet {
            priority,
            immediate_actions: self.items(RecommendationCategory::ImmediateActions, priority),
            lifestyle_changes: self.items(RecommendationCategory::LifestyleChanges, priority),
            professional_help: self.items(RecommendationCategory::ProfessionalHelp, priority),
            personalized,
        }
    }

    /// Lines triggered by indicators, in a fixed order
    #[must_use]
    pub fn personalized(&self, input: &RecommendationInput) -> Vec<String> {
        let triggers = &self.config.personalization;
        let indicators = input.indicators.unwrap_or_default();
        let anxiety = input.emotions.map(|emotions| emotions.anxiety());

        let mut lines: Vec<&'static str> = Vec::new();
        if indicators.facial_expression == Some(FacialExpression::Negative) {
            lines.extend([
                "Practice positive self-talk and affirmations",
                "Try smiling more, even if you don't feel like it",
            ]);
        }
        if indicators.eye_contact == Some(EyeContact::Poor) {
            lines.extend([
                "Practice maintaining eye contact in conversations",
                "Consider joining a social skills group",
            ]);
        }
        if anxiety.is_some_and(|value| value > triggers.anxiety_trigger) {
            lines.extend([
                "Try progressive muscle relaxation exercises",
                "Practice grounding techniques when feeling anxious",
            ]);
        }
        if input
            .depression
            .is_some_and(|value| value > triggers.depression_trigger)
        {
            lines.extend([
                "Set small, achievable daily goals",
                "Try to maintain a regular daily routine",
            ]);
        }
        lines.into_iter().map(str::to_owned).collect()
    }
}

/// `immediate_actions` becomes `Immediate Actions`
fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn block(key: &str, items: &[String]) -> Option<RecommendationBlock> {
    (!items.is_empty()).then(|| RecommendationBlock {
        title: title_case(key),
        items: items.to_vec(),
    })
}

/// Outbound shape: titled blocks keyed by category, empty categories omitted
#[must_use]
pub fn format_recommendations(set: &RecommendationSet) -> FormattedRecommendations {
    use RecommendationCategory as C;
    FormattedRecommendations {
        immediate_actions: block(C::ImmediateActions.key(), &set.immediate_actions),
        lifestyle_changes: block(C::LifestyleChanges.key(), &set.lifestyle_changes),
        professional_help: block(C::ProfessionalHelp.key(), &set.professional_help),
        personalized: block("personalized", &set.personalized),
    }
}

fn build_table() -> RecommendationTable {
    use PriorityTier::{High, Low, Medium};
    use RecommendationCategory::{ImmediateActions, LifestyleChanges, ProfessionalHelp};

    let entries: [((RecommendationCategory, PriorityTier), &'static [&'static str]); 9] = [
        (
            (ImmediateActions, High),
            &[
                "Consider scheduling an appointment with a mental health professional",
                "Reach out to a trusted friend or family member for support",
                "Contact a mental health crisis hotline if you're having thoughts of self-harm",
            ],
        ),
        (
            (ImmediateActions, Medium),
            &[
                "Practice deep breathing exercises",
                "Take a short walk or engage in light physical activity",
                "Write down your thoughts and feelings in a journal",
            ],
        ),
        (
            (ImmediateActions, Low),
            &[
                "Try a mindfulness meditation session",
                "Listen to calming music",
                "Take a break from screens and social media",
            ],
        ),
        (
            (LifestyleChanges, High),
            &[
                "Establish a regular sleep schedule",
                "Incorporate regular exercise into your routine",
                "Maintain a balanced diet with proper nutrition",
            ],
        ),
        (
            (LifestyleChanges, Medium),
            &[
                "Set aside time for hobbies and activities you enjoy",
                "Practice good sleep hygiene",
                "Stay hydrated throughout the day",
            ],
        ),
        (
            (LifestyleChanges, Low),
            &[
                "Try a new hobby or creative activity",
                "Spend more time in nature",
                "Practice gratitude by keeping a daily gratitude journal",
            ],
        ),
        (
            (ProfessionalHelp, High),
            &[
                "Schedule an appointment with a therapist or counselor",
                "Consider joining a support group",
                "Consult with a psychiatrist about medication options",
            ],
        ),
        (
            (ProfessionalHelp, Medium),
            &[
                "Research local mental health resources",
                "Look into online therapy options",
                "Consider talking to your primary care physician",
            ],
        ),
        (
            (ProfessionalHelp, Low),
            &[
                "Explore self-help books and resources",
                "Try meditation or mindfulness apps",
                "Join online mental health communities",
            ],
        ),
    ];
    entries.into_iter().collect()
}
