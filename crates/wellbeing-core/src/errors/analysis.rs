// ABOUTME: Error taxonomy for modality analysis failures
// ABOUTME: Distinguishes unavailable models, malformed inputs, and out-of-domain values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::Modality;
use thiserror::Error;

/// Failures that can occur while analyzing a single modality
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalysisError {
    /// The underlying classifier failed to load or errored at call time
    #[error("{modality} model unavailable: {reason}")]
    ModelUnavailable {
        /// Modality whose collaborator failed
        modality: Modality,
        /// Collaborator-supplied reason
        reason: String,
    },

    /// Input failed the modality-specific precondition
    #[error("malformed {modality} input: {reason}")]
    MalformedInput {
        /// Modality whose input was rejected
        modality: Modality,
        /// Why the input was rejected
        reason: String,
    },

    /// A computation produced a value outside its declared domain
    #[error("{quantity} out of range: {value}")]
    RangeViolation {
        /// Name of the quantity that escaped its domain
        quantity: &'static str,
        /// Offending value
        value: f64,
    },
}

impl AnalysisError {
    /// Collaborator failure for `modality`
    pub fn model_unavailable(modality: Modality, reason: impl Into<String>) -> Self {
        Self::ModelUnavailable {
            modality,
            reason: reason.into(),
        }
    }

    /// Precondition failure for `modality`
    pub fn malformed_input(modality: Modality, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            modality,
            reason: reason.into(),
        }
    }

    /// Whether this failure comes from the caller's input rather than a model
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }
}
