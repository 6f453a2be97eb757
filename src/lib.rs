// ABOUTME: Main library entry point for the multi-modal wellbeing assessor
// ABOUTME: Wires analyzers, fusion and recommendations into a pipeline, an async service and a CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Wellbeing Assessor
//!
//! Ingests independent behavioural signals (free text, speech, facial imagery
//! and a ten-question questionnaire) and produces one interpretable wellbeing
//! assessment plus tiered self-care recommendations.
//!
//! ## Architecture
//!
//! - **`wellbeing-core`**: emotion vectors, scores, status bands, errors
//! - **`wellbeing-intelligence`**: analyzers, fusion, recommendation engine
//! - **Pipeline**: synchronous per-request orchestration over injected models
//! - **Service**: async facade with per-call timeouts and neutral fallbacks
//! - **Replay**: recorded model outputs for offline runs
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use wellbeing_assessor::config::AssessorConfig;
//! use wellbeing_assessor::intelligence::FusionInputs;
//! use wellbeing_assessor::models::WellbeingScore;
//! use wellbeing_assessor::pipeline::AssessmentPipeline;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = AssessorConfig::from_env()?;
//!     let pipeline = AssessmentPipeline::new(config.intelligence)?;
//!
//!     let inputs = FusionInputs::from_partial(
//!         Some(WellbeingScore::new(21.0)),
//!         Some(WellbeingScore::new(17.5)),
//!         None,
//!         None,
//!     );
//!     let assessment = pipeline.comprehensive(&inputs)?;
//!     println!("{}", serde_json::to_string_pretty(&assessment)?);
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Error types
pub mod errors;

/// Analyzers, fusion and recommendation engine
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Domain models
pub mod models;

/// Per-request orchestration
pub mod pipeline;

/// Recorded collaborator outputs
pub mod replay;

/// Async assessment service
pub mod service;

pub use pipeline::{
    AssessmentPipeline, AssessmentResponse, ComprehensiveAssessment, QuestionnaireResponse,
};
pub use service::AssessmentService;
