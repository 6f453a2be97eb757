// ABOUTME: Modality analyzers turning collaborator output into emotion vectors and wellbeing scores
// ABOUTME: Defines the ModalityAnalyzer trait and its never-failing analyze entry point
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Modality Analyzers
//!
//! One analyzer per input channel. Analyzers are stateless apart from their
//! injected collaborators and configuration, so a single instance serves
//! concurrent requests.
//!
//! Failure policy: [`ModalityAnalyzer::analyze`] never fails. A collaborator
//! error, a model answer with no recognised label, or a rejected input becomes
//! a structurally complete neutral fallback result, labelled with
//! [`Modality::failure_reason`]. [`ModalityAnalyzer::try_analyze`] exposes the underlying error for
//! callers and tests that need it.

mod audio;
mod questionnaire;
mod text;
mod visual;

pub use audio::AudioAnalyzer;
pub use questionnaire::{QuestionnaireAnalyzer, QuestionnaireResponses};
pub use text::TextAnalyzer;
pub use visual::VisualAnalyzer;

use tracing::warn;
use wellbeing_core::errors::AnalysisError;
use wellbeing_core::models::{EmotionVector, Modality, ModalityResult};

/// Analyzer for one emotion-bearing modality
pub trait ModalityAnalyzer: Send + Sync {
    /// Raw input accepted by this analyzer
    type Input: ?Sized;

    /// Modality this analyzer handles
    fn modality(&self) -> Modality;

    /// Distribution reported when analysis cannot run
    fn neutral_emotions(&self) -> EmotionVector;

    /// Analyze `input`, surfacing collaborator and precondition failures
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ModelUnavailable` when a collaborator fails and
    /// `AnalysisError::MalformedInput` when the input fails its precondition
    fn try_analyze(&self, input: &Self::Input) -> Result<ModalityResult, AnalysisError>;

    /// Analyze `input`, converting any failure into a neutral fallback
    fn analyze(&self, input: &Self::Input) -> ModalityResult {
        self.try_analyze(input).unwrap_or_else(|error| {
            warn!(
                modality = %self.modality(),
                error = %error,
                "analysis failed, returning neutral fallback"
            );
            ModalityResult::fallback(self.modality().failure_reason(), self.neutral_emotions())
        })
    }
}
