// ABOUTME: Wellbeing intelligence crate: modality analyzers, score fusion and recommendations
// ABOUTME: All stages are synchronous and pure apart from injected external collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Wellbeing Intelligence
//!
//! Turns raw behavioural signals into an interpretable wellbeing assessment.
//!
//! ## Pipeline
//!
//! 1. **Analyzers** map collaborator output (text classifier, acoustic model,
//!    face model, sentiment scorer) onto an `EmotionVector` and a 0-30 score
//! 2. **Fusion** combines the per-modality scores with fixed weights
//! 3. **Recommendations** pick tiered self-care lists for the fused score
//!
//! Nothing here performs I/O or holds mutable state; the collaborators are
//! the only boundary with the outside world.

/// Emotion-scoring algorithms that are not analyzers in their own right
pub mod algorithms;

/// Per-modality analyzers
pub mod analyzers;

/// Interfaces of injected external models
pub mod collaborators;

/// Configuration loading and validation
pub mod config;

/// Weighted multi-modal fusion
pub mod fusion;

/// Seeded, reproducible fusion jitter
pub mod jitter;

/// Collaborator label tables
pub mod label_mapping;

/// Priority-tiered recommendations
pub mod recommendation_engine;

/// Emotion-vector to wellbeing-score conversion
pub mod scoring;

pub use analyzers::{
    AudioAnalyzer, ModalityAnalyzer, QuestionnaireAnalyzer, QuestionnaireResponses, TextAnalyzer,
    VisualAnalyzer,
};
pub use config::{ConfigError, IntelligenceConfig};
pub use fusion::{FusionInputs, ScoreFusion};
pub use jitter::ScoreJitter;
pub use recommendation_engine::{
    format_recommendations, to_priority_scale, RecommendationInput, WellbeingRecommendationEngine,
};
pub use scoring::WellbeingScorer;
