// ABOUTME: Error types for the wellbeing assessor, re-exported from the core crate
// ABOUTME: AppError, ErrorCode and AnalysisError share one definition across every crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Errors
//!
//! Library code returns [`AppResult`]; binaries wrap it in `anyhow`.

pub use wellbeing_core::errors::{
    AnalysisError, AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails,
};
