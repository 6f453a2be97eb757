// ABOUTME: Analyzers, fusion and recommendation engine, re-exported from the intelligence crate
// ABOUTME: Collaborator traits and the intelligence types used by the pipeline and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence
//!
//! See [`wellbeing_intelligence`] for the scoring model.

pub use wellbeing_intelligence::{algorithms, collaborators, label_mapping};
pub use wellbeing_intelligence::{
    format_recommendations, to_priority_scale, AudioAnalyzer, FusionInputs, ModalityAnalyzer,
    QuestionnaireAnalyzer, QuestionnaireResponses, RecommendationInput, ScoreFusion, ScoreJitter,
    TextAnalyzer, VisualAnalyzer, WellbeingRecommendationEngine, WellbeingScorer,
};
