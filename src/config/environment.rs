// ABOUTME: Service-level configuration loaded from environment variables
// ABOUTME: Analysis timeout and worker settings for the async assessment service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::time::Duration;
use tracing::info;
use wellbeing_intelligence::config::{ConfigError, IntelligenceConfig};

/// Default caller-side timeout for a single analyzer call
pub const DEFAULT_ANALYSIS_TIMEOUT_MS: u64 = 30_000;

/// Settings of the async assessment service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Timeout applied to each analyzer call
    pub analysis_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            analysis_timeout: Duration::from_millis(DEFAULT_ANALYSIS_TIMEOUT_MS),
        }
    }
}

impl ServiceConfig {
    /// Load from `WELLBEING_ANALYSIS_TIMEOUT_MS`
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is set but is not a positive integer
    pub fn from_env() -> Result<Self, ConfigError> {
        let timeout_ms = match env::var("WELLBEING_ANALYSIS_TIMEOUT_MS") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::Parse("Invalid WELLBEING_ANALYSIS_TIMEOUT_MS".into())
            })?,
            Err(_) => DEFAULT_ANALYSIS_TIMEOUT_MS,
        };
        if timeout_ms == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "WELLBEING_ANALYSIS_TIMEOUT_MS must be greater than zero",
            ));
        }
        Ok(Self {
            analysis_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

/// Complete configuration of the assessor
#[derive(Debug, Clone, Default)]
pub struct AssessorConfig {
    /// Scoring, fusion and recommendation settings
    pub intelligence: IntelligenceConfig,
    /// Async service settings
    pub service: ServiceConfig,
}

impl AssessorConfig {
    /// Load every section from the environment
    ///
    /// # Errors
    ///
    /// Returns the first parse or validation failure
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading configuration from environment variables");
        Ok(Self {
            intelligence: IntelligenceConfig::load()?,
            service: ServiceConfig::from_env()?,
        })
    }
}
