// ABOUTME: Recommendation engine configuration for priority tiers and personalization
// ABOUTME: Tier thresholds are on the 0-100 priority scale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Engine Configuration

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use wellbeing_core::constants::{priority_thresholds, scales};

/// Recommendation Engine Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationEngineConfig {
    /// Tier thresholds
    pub thresholds: PriorityThresholds,
    /// Indicator thresholds for personalized lines
    pub personalization: PersonalizationConfig,
}

/// Priority tier thresholds on the 0-100 scale
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriorityThresholds {
    /// Priority values below this are High
    pub high_below: f64,
    /// Priority values below this (and not High) are Medium
    pub medium_below: f64,
}

/// Personalization triggers
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PersonalizationConfig {
    /// Anxiety intensity above which anxiety lines are added
    pub anxiety_trigger: f64,
    /// Depression intensity above which depression lines are added
    pub depression_trigger: f64,
}

impl Default for PriorityThresholds {
    fn default() -> Self {
        Self {
            high_below: priority_thresholds::HIGH_BELOW,
            medium_below: priority_thresholds::MEDIUM_BELOW,
        }
    }
}

impl Default for PersonalizationConfig {
    fn default() -> Self {
        Self {
            anxiety_trigger: priority_thresholds::PERSONALIZATION_TRIGGER,
            depression_trigger: priority_thresholds::PERSONALIZATION_TRIGGER,
        }
    }
}

impl RecommendationEngineConfig {
    /// Validate thresholds
    ///
    /// # Errors
    ///
    /// Returns an error if tier thresholds are out of order or triggers leave `[0, 1]`
    pub fn validate(&self) -> Result<(), ConfigError> {
        let PriorityThresholds {
            high_below,
            medium_below,
        } = self.thresholds;
        if !(0.0..=scales::PERCENT_MAX).contains(&high_below)
            || !(0.0..=scales::PERCENT_MAX).contains(&medium_below)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Priority thresholds must be between 0 and 100",
            ));
        }
        if high_below >= medium_below {
            return Err(ConfigError::InvalidRange(
                "high_below must be < medium_below",
            ));
        }
        let triggers = [
            self.personalization.anxiety_trigger,
            self.personalization.depression_trigger,
        ];
        if !triggers.iter().all(|t| (0.0..=1.0).contains(t)) {
            return Err(ConfigError::ValueOutOfRange(
                "Personalization triggers must be between 0.0 and 1.0",
            ));
        }
        Ok(())
    }
}
