// ABOUTME: Domain models of the wellbeing assessment, re-exported from the core crate
// ABOUTME: Emotion vectors, scores, status bands, modality results and recommendation payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Defined in `wellbeing-core` so the intelligence crate and this crate share
//! one set of wire types.

pub use wellbeing_core::models::{
    round_to, AssessmentStatus, BehaviouralIndicators, ComponentScores, ComprehensiveScore,
    EmotionKey, EmotionVector, EyeContact, FacialExpression, FormattedRecommendations, Modality,
    ModalityResult, NeutralReason, PriorityTier, QuestionnaireAssessment, QuestionnaireCategory,
    RecommendationBlock, RecommendationCategory, RecommendationSet, StatusBand, VoiceModulation,
    WellbeingScore,
};
