// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Scripted model collaborators and pipeline builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]
#![allow(
    clippy::must_use_candidate,
    clippy::missing_panics_doc,
    clippy::return_self_not_must_use
)]

pub mod collaborators;

use collaborators::{ScriptedAcoustic, ScriptedClassifier, ScriptedFace, ScriptedSentiment};
use std::sync::Arc;
use wellbeing_assessor::config::IntelligenceConfig;
use wellbeing_assessor::pipeline::AssessmentPipeline;

/// Absolute tolerance for floating point comparisons
pub const EPSILON: f64 = 1e-9;

/// Assert two floats are within `EPSILON`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Pipeline with default configuration and every collaborator answering a fixed script
pub fn scripted_pipeline() -> AssessmentPipeline {
    AssessmentPipeline::new(IntelligenceConfig::default())
        .unwrap()
        .with_text_classifier(Arc::new(ScriptedClassifier::joyful()))
        .with_acoustic_model(Arc::new(ScriptedAcoustic::calm()))
        .with_face_model(Arc::new(ScriptedFace::happy()))
        .with_sentiment_scorer(Arc::new(ScriptedSentiment::constant(0.5)))
}
