// ABOUTME: Unified error handling with standard error codes and analysis error taxonomy
// ABOUTME: Defines AppError, ErrorCode, AppResult and the per-modality AnalysisError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Two layers of errors live here:
//!
//! - [`AnalysisError`] is the taxonomy of things that go wrong inside a modality
//!   analyzer (a model that is unavailable, an input that fails its precondition,
//!   or a computation that leaves its declared domain). Analyzers absorb the first
//!   two into a neutral fallback result and never hand them to callers.
//! - [`AppError`] is the crate-wide error carried across public APIs. Pure stages
//!   (fusion, recommendations) only produce it for contract violations.

mod analysis;

pub use analysis::AnalysisError;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Input could not be decoded
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,

    // External collaborators (5000-5999)
    /// External model could not be reached or loaded
    #[serde(rename = "MODEL_UNAVAILABLE")]
    ModelUnavailable = 5001,
    /// External model did not answer in time
    #[serde(rename = "MODEL_TIMEOUT")]
    ModelTimeout = 5002,

    // Configuration (6000-6999)
    /// Configuration failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Programming contract violation
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Payload serialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// HTTP status a web layer should use for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::InvalidFormat => 400,
            Self::ModelUnavailable => 502,
            Self::ModelTimeout => 504,
            Self::ConfigInvalid | Self::InternalError | Self::SerializationError => 500,
        }
    }

    /// User-facing description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::ModelUnavailable => "An analysis model is currently unavailable",
            Self::ModelTimeout => "An analysis model did not respond in time",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Internal contract violation
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Analysis model did not answer within its deadline
    pub fn model_timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ModelTimeout, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn StdError + 'static))
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<AnalysisError> for AppError {
    fn from(error: AnalysisError) -> Self {
        let code = match &error {
            AnalysisError::ModelUnavailable { .. } => ErrorCode::ModelUnavailable,
            AnalysisError::MalformedInput { .. } => ErrorCode::InvalidInput,
            AnalysisError::RangeViolation { .. } => ErrorCode::InternalError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// HTTP error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Details within an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
            },
        }
    }
}
