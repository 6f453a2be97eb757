// ABOUTME: Configuration error types for wellbeing intelligence validation
// ABOUTME: Defines error variants for invalid ranges, weights and unparsable overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for wellbeing intelligence validation.

use thiserror::Error;
use wellbeing_core::errors::{AppError, ErrorCode};

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Ordered thresholds are not in order (e.g., high tier above medium tier)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Weights don't sum to the required total
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}
