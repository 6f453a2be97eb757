// ABOUTME: Core data models for the wellbeing assessment pipeline
// ABOUTME: Re-exports emotion vectors, scores, status bands, results and recommendation types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The shared currency of the pipeline. Each modality analyzer produces a
//! [`ModalityResult`]; fusion produces a [`ComprehensiveScore`]; the
//! recommendation engine produces a [`RecommendationSet`].
//!
//! ## Design Principles
//!
//! - **Always well-formed**: constructors clamp and impute, so a value of these
//!   types never carries NaN or an out-of-range score
//! - **Immutable results**: results are created once per request and returned by value
//! - **Wire compatible**: serde names match the payload consumed by the web layer

mod comprehensive;
mod emotion;
mod indicators;
mod modality;
mod questionnaire;
mod recommendation;
mod score;
mod status;

pub use comprehensive::{ComponentScores, ComprehensiveScore};
pub use emotion::{EmotionKey, EmotionVector};
pub use indicators::{BehaviouralIndicators, EyeContact, FacialExpression, VoiceModulation};
pub use modality::{Modality, ModalityResult};
pub use questionnaire::{QuestionnaireAssessment, QuestionnaireCategory};
pub use recommendation::{
    FormattedRecommendations, PriorityTier, RecommendationBlock, RecommendationCategory,
    RecommendationSet,
};
pub use score::{round_to, WellbeingScore};
pub use status::{AssessmentStatus, NeutralReason, StatusBand};
