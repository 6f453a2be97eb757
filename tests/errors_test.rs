// ABOUTME: Tests for analysis errors and their mapping onto application error codes
// ABOUTME: Validates HTTP status mapping, error chaining and the error response body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::error::Error;
use wellbeing_assessor::config::ConfigError;
use wellbeing_assessor::errors::{AnalysisError, AppError, ErrorCode, ErrorResponse};
use wellbeing_assessor::models::{Modality, WellbeingScore};

#[test]
fn test_error_code_http_status() {
    assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
    assert_eq!(ErrorCode::InvalidFormat.http_status(), 400);
    assert_eq!(ErrorCode::ModelUnavailable.http_status(), 502);
    assert_eq!(ErrorCode::ModelTimeout.http_status(), 504);
    assert_eq!(ErrorCode::ConfigInvalid.http_status(), 500);
    assert_eq!(ErrorCode::InternalError.http_status(), 500);
}

#[test]
fn test_analysis_error_messages() {
    let error = AnalysisError::model_unavailable(Modality::Visual, "no weights on disk");
    assert_eq!(error.to_string(), "visual model unavailable: no weights on disk");
    assert!(!error.is_input_error());

    let error = AnalysisError::malformed_input(Modality::Audio, "empty path");
    assert_eq!(error.to_string(), "malformed audio input: empty path");
    assert!(error.is_input_error());
}

#[test]
fn test_analysis_errors_map_to_app_errors() {
    let app: AppError = AnalysisError::model_unavailable(Modality::Text, "offline").into();
    assert_eq!(app.code, ErrorCode::ModelUnavailable);
    assert_eq!(app.http_status(), 502);
    assert!(app.source().is_some());

    let app: AppError = AnalysisError::malformed_input(Modality::Text, "blank").into();
    assert_eq!(app.code, ErrorCode::InvalidInput);

    let app: AppError = WellbeingScore::try_new(31.0).unwrap_err().into();
    assert_eq!(app.code, ErrorCode::InternalError);
}

#[test]
fn test_serde_errors_map_to_serialization_code() {
    let parse_error = serde_json::from_str::<WellbeingScore>("\"high\"").unwrap_err();
    let app = AppError::from(parse_error);
    assert_eq!(app.code, ErrorCode::SerializationError);
}

#[test]
fn test_display_includes_description() {
    let error = AppError::model_timeout("no answer within 50 ms");
    assert_eq!(
        error.to_string(),
        "An analysis model did not respond in time: no answer within 50 ms"
    );
    assert!(error.source().is_none());
}

#[test]
fn test_error_response_body() {
    let body = ErrorResponse::from(AppError::invalid_input("text is required"));
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["error"]["code"], "INVALID_INPUT");
    assert_eq!(json["error"]["message"], "text is required");

    let body = ErrorResponse::from(AppError::internal("fusion produced NaN"));
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_config_errors_map_to_config_invalid() {
    let app = AppError::from(ConfigError::InvalidRange("tier thresholds out of order"));
    assert_eq!(app.code, ErrorCode::ConfigInvalid);
    assert_eq!(app.http_status(), 500);
    assert_eq!(app.message, "Invalid range: tier thresholds out of order");
    assert!(app.source().is_some());
}
