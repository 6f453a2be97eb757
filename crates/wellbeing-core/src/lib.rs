// ABOUTME: Core types and constants for the wellbeing assessment platform
// ABOUTME: Foundation crate with error handling, score scales, and shared affect models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Wellbeing Core
//!
//! Foundation crate providing the shared vocabulary of the wellbeing
//! assessment pipeline. Every modality analyzer, the fusion stage and the
//! recommendation engine speak in terms of the types defined here.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AnalysisError`
//! - **constants**: Score scales, status thresholds and fusion weights
//! - **models**: `EmotionVector`, `WellbeingScore`, `StatusBand`, modality results,
//!   comprehensive scores and recommendation sets

/// Unified error handling system with standard error codes
pub mod errors;

/// Score scales, thresholds and default weights
pub mod constants;

/// Shared affect and assessment models
pub mod models;
