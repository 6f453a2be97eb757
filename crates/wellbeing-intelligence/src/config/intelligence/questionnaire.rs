// ABOUTME: Questionnaire scoring configuration: per-category keyword lists and insight cut-offs
// ABOUTME: Keywords are matched as lowercase substrings of each free-text answer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use wellbeing_core::models::QuestionnaireCategory;

/// Questionnaire analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireConfig {
    /// Keyword lists per category
    pub keywords: BTreeMap<QuestionnaireCategory, CategoryKeywords>,
    /// Category scores below this produce a "consider focusing on" insight
    pub focus_below: f64,
    /// Category scores above this produce a "doing well" insight
    pub strength_above: f64,
}

/// Signal words for one category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryKeywords {
    /// Each hit adds 1
    pub positive: Vec<String>,
    /// Each hit subtracts 1
    pub negative: Vec<String>,
    /// Each hit adds 0.5
    #[serde(default)]
    pub neutral: Vec<String>,
}

impl CategoryKeywords {
    fn from_static(positive: &[&str], negative: &[&str], neutral: &[&str]) -> Self {
        let owned = |words: &[&str]| words.iter().map(|w| (*w).to_owned()).collect();
        Self {
            positive: owned(positive),
            negative: owned(negative),
            neutral: owned(neutral),
        }
    }
}

impl Default for QuestionnaireConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            focus_below: 0.4,
            strength_above: 0.8,
        }
    }
}

impl QuestionnaireConfig {
    /// Keywords for a category; categories without an entry have none
    #[must_use]
    pub fn keywords_for(&self, category: QuestionnaireCategory) -> Option<&CategoryKeywords> {
        self.keywords.get(&category)
    }

    /// Validate insight cut-offs
    ///
    /// # Errors
    ///
    /// Returns an error if the cut-offs leave `[0, 1]` or are out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.focus_below) || !(0.0..=1.0).contains(&self.strength_above)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Questionnaire insight cut-offs must be between 0.0 and 1.0",
            ));
        }
        if self.focus_below >= self.strength_above {
            return Err(ConfigError::InvalidRange(
                "focus_below must be < strength_above",
            ));
        }
        Ok(())
    }
}

fn default_keywords() -> BTreeMap<QuestionnaireCategory, CategoryKeywords> {
    use QuestionnaireCategory as C;
    [
        (
            C::EnergyLevel,
            CategoryKeywords::from_static(
                &["energetic", "active", "refreshed", "motivated", "strong", "alert"],
                &["tired", "exhausted", "drained", "fatigued", "sluggish", "weak"],
                &["okay", "average", "normal"],
            ),
        ),
        (
            C::ThoughtPatterns,
            CategoryKeywords::from_static(
                &["positive", "hopeful", "optimistic", "clear", "focused", "calm"],
                &["negative", "worried", "overthinking", "hopeless", "racing", "doubt"],
                &["mixed", "sometimes"],
            ),
        ),
        (
            C::SleepQuality,
            CategoryKeywords::from_static(
                &["rested", "deep", "well", "peaceful", "sound", "enough"],
                &["insomnia", "restless", "awake", "nightmares", "poorly", "interrupted"],
                &["okay", "average"],
            ),
        ),
        (
            C::SocialConnection,
            CategoryKeywords::from_static(
                &["friends", "family", "connected", "supported", "close", "together"],
                &["lonely", "isolated", "alone", "withdrawn", "disconnected", "avoid"],
                &["few", "sometimes"],
            ),
        ),
        (
            C::SelfRelationship,
            CategoryKeywords::from_static(
                &["confident", "proud", "accept", "worthy", "kind", "love myself"],
                &["hate", "worthless", "ashamed", "failure", "critical", "guilty"],
                &["working on"],
            ),
        ),
        (
            C::Motivation,
            CategoryKeywords::from_static(
                &["driven", "excited", "eager", "goals", "inspired", "determined"],
                &["unmotivated", "lazy", "pointless", "stuck", "procrastinate", "bored"],
                &["sometimes", "depends"],
            ),
        ),
        (
            C::StressManagement,
            CategoryKeywords::from_static(
                &["manage", "cope", "relax", "breathe", "control", "balanced"],
                &["overwhelmed", "stressed", "pressure", "panic", "anxious", "tense"],
                &["manageable"],
            ),
        ),
        (
            C::Purpose,
            CategoryKeywords::from_static(
                &["meaning", "purpose", "direction", "fulfilled", "passion", "valued"],
                &["meaningless", "lost", "empty", "aimless", "useless", "no point"],
                &["searching", "figuring"],
            ),
        ),
        (
            C::SelfCare,
            CategoryKeywords::from_static(
                &["exercise", "healthy", "routine", "meditate", "eat well", "hobbies"],
                &["neglect", "skip", "junk", "no time", "ignore", "forget"],
                &["try", "occasionally"],
            ),
        ),
        (
            C::LifeSatisfaction,
            CategoryKeywords::from_static(
                &["happy", "satisfied", "grateful", "content", "good", "great"],
                &["unhappy", "dissatisfied", "miserable", "regret", "bad", "terrible"],
                &["fine", "okay"],
            ),
        ),
    ]
    .into_iter()
    .collect()
}
