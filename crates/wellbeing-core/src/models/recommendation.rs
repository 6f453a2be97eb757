// ABOUTME: Recommendation categories, priority tiers and per-request recommendation sets
// ABOUTME: Includes the titled wire format consumed by the web layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed recommendation domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    /// Things to do right now
    ImmediateActions,
    /// Habits to build over weeks
    LifestyleChanges,
    /// Clinical and community support
    ProfessionalHelp,
}

impl RecommendationCategory {
    /// Every category, in wire order
    pub const ALL: [Self; 3] = [
        Self::ImmediateActions,
        Self::LifestyleChanges,
        Self::ProfessionalHelp,
    ];

    /// Snake-case wire key
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ImmediateActions => "immediate_actions",
            Self::LifestyleChanges => "lifestyle_changes",
            Self::ProfessionalHelp => "professional_help",
        }
    }
}

impl fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Urgency of the surfaced recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityTier {
    /// Lowest wellbeing, most urgent lists
    High,
    /// Middle band
    Medium,
    /// Good wellbeing, maintenance lists
    Low,
}

impl PriorityTier {
    /// Every tier, most urgent first
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];
}

/// Recommendations selected for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    /// Tier the lists were selected for
    pub priority: PriorityTier,
    /// Immediate actions for the tier
    pub immediate_actions: Vec<String>,
    /// Lifestyle changes for the tier
    pub lifestyle_changes: Vec<String>,
    /// Professional help options for the tier
    pub professional_help: Vec<String>,
    /// Lines triggered by specific indicators
    pub personalized: Vec<String>,
}

impl RecommendationSet {
    /// Items for a fixed category
    #[must_use]
    pub fn category(&self, category: RecommendationCategory) -> &[String] {
        match category {
            RecommendationCategory::ImmediateActions => &self.immediate_actions,
            RecommendationCategory::LifestyleChanges => &self.lifestyle_changes,
            RecommendationCategory::ProfessionalHelp => &self.professional_help,
        }
    }
}

/// Titled list in the wire format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBlock {
    /// Display title, e.g. "Immediate Actions"
    pub title: String,
    /// Recommendation lines
    pub items: Vec<String>,
}

/// Wire format `{category: {title, items}}`; empty categories are omitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedRecommendations {
    /// Immediate actions block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub immediate_actions: Option<RecommendationBlock>,
    /// Lifestyle changes block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifestyle_changes: Option<RecommendationBlock>,
    /// Professional help block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professional_help: Option<RecommendationBlock>,
    /// Personalized block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personalized: Option<RecommendationBlock>,
}
