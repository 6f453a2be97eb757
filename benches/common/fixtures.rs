// ABOUTME: Benchmark fixtures for generating emotion vectors, fusion inputs and questionnaires
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for assessment data.
//!
//! Values cycle through fixed strides so every run sees the same inputs.

use wellbeing_assessor::intelligence::{FusionInputs, QuestionnaireResponses};
use wellbeing_assessor::models::{EmotionVector, WellbeingScore};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum BatchSize {
    /// Small batch (10 items) - quick benchmarks
    Small,
    /// Medium batch (100 items) - typical request burst
    Medium,
    /// Large batch (1000 items) - stress
    Large,
}

impl BatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
            Self::Large => 1_000,
        }
    }
}

/// Intensity in `[0, 1]` derived from an index and a stride
#[allow(clippy::cast_precision_loss)]
fn intensity(index: usize, stride: usize) -> f64 {
    ((index * stride) % 101) as f64 / 100.0
}

/// Deterministic emotion vectors spanning the unit cube
#[must_use]
pub fn generate_emotions(size: BatchSize) -> Vec<EmotionVector> {
    (0..size.count())
        .map(|index| {
            EmotionVector::new(
                intensity(index, 7),
                intensity(index, 13),
                intensity(index, 17),
                intensity(index, 23),
                intensity(index, 31),
            )
        })
        .collect()
}

/// Deterministic per-modality score sets
#[must_use]
pub fn generate_fusion_inputs(size: BatchSize) -> Vec<FusionInputs> {
    (0..size.count())
        .map(|index| FusionInputs {
            questionnaire: WellbeingScore::new(intensity(index, 11) * 30.0),
            text: WellbeingScore::new(intensity(index, 19) * 30.0),
            audio: WellbeingScore::new(intensity(index, 29) * 30.0),
            visual: WellbeingScore::new(intensity(index, 37) * 30.0),
        })
        .collect()
}

/// A fully answered questionnaire mixing keyword-heavy and plain answers
#[must_use]
pub fn full_questionnaire() -> QuestionnaireResponses {
    [
        "I feel tired and drained most afternoons",
        "Mostly positive, sometimes worried about work",
        "I sleep well and wake up rested",
        "I see friends and family every weekend",
        "I am working on being kinder to myself",
        "I have goals but often procrastinate",
        "Work pressure leaves me stressed and tense",
        "Still searching for direction",
        "I exercise and try to eat well",
        "Generally happy and grateful",
    ]
    .iter()
    .enumerate()
    .map(|(index, answer)| (format!("question_{}", index + 1), (*answer).to_owned()))
    .collect()
}
