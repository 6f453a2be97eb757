// ABOUTME: Async facade over the assessment pipeline for request-serving hosts
// ABOUTME: Runs analyzers on the blocking pool with a per-call timeout and neutral fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Assessment Service
//!
//! Analyzer calls reach out to model collaborators that may block for a long
//! time. Each call runs on tokio's blocking pool under the configured
//! timeout. A call that times out or panics is logged with its error code and
//! answers with the same neutral fallback an analyzer produces for a model
//! error, so callers always get a complete payload.
//!
//! Every request runs inside an `assessment` span carrying a fresh request id.

use crate::config::ServiceConfig;
use crate::pipeline::{
    AssessmentPipeline, AssessmentResponse, ComprehensiveAssessment, QuestionnaireResponse,
};
use std::sync::Arc;
use tokio::task;
use tokio::time::timeout;
use tracing::{info_span, warn, Instrument, Span};
use uuid::Uuid;
use wellbeing_core::errors::{AppError, AppResult};
use wellbeing_core::models::{FormattedRecommendations, Modality, QuestionnaireAssessment};
use wellbeing_intelligence::collaborators::AudioHandle;
use wellbeing_intelligence::{FusionInputs, QuestionnaireResponses, RecommendationInput};

/// Shared async entry point; cheap to clone across request handlers
#[derive(Clone)]
pub struct AssessmentService {
    pipeline: Arc<AssessmentPipeline>,
    config: ServiceConfig,
}

impl AssessmentService {
    /// Wrap a pipeline
    #[must_use]
    pub fn new(pipeline: AssessmentPipeline, config: ServiceConfig) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            config,
        }
    }

    /// Underlying pipeline
    #[must_use]
    pub fn pipeline(&self) -> &AssessmentPipeline {
        &self.pipeline
    }

    /// Service settings
    #[must_use]
    pub const fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn request_span(modality: &str) -> Span {
        info_span!(
            "assessment",
            request_id = %Uuid::new_v4(),
            modality = %modality
        )
    }

    /// Run `job` against the pipeline on the blocking pool under the service deadline
    ///
    /// # Errors
    ///
    /// Returns a `ModelTimeout` error when the deadline passes and an internal
    /// error when the task panics or is cancelled
    pub async fn run<T, F>(&self, job: F) -> AppResult<T>
    where
        F: FnOnce(&AssessmentPipeline) -> T + Send + 'static,
        T: Send + 'static,
    {
        let pipeline = Arc::clone(&self.pipeline);
        let span = Span::current();
        let handle = task::spawn_blocking(move || span.in_scope(|| job(&pipeline)));

        match timeout(self.config.analysis_timeout, handle).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(join_error)) => Err(AppError::internal(format!(
                "analysis task failed: {join_error}"
            ))),
            Err(_) => Err(AppError::model_timeout(format!(
                "no answer within {} ms",
                self.config.analysis_timeout.as_millis()
            ))),
        }
    }

    async fn modality_response<F>(&self, modality: Modality, job: F) -> AssessmentResponse
    where
        F: FnOnce(&AssessmentPipeline) -> AssessmentResponse + Send + 'static,
    {
        match self.run(job).await {
            Ok(response) => response,
            Err(error) => {
                warn!(
                    %modality,
                    code = ?error.code,
                    error = %error,
                    "analysis did not complete, using neutral fallback"
                );
                self.pipeline
                    .respond(self.pipeline.fallback(modality.failure_reason()))
            }
        }
    }

    /// Analyze free text
    pub async fn analyze_text(&self, text: impl Into<String>) -> AssessmentResponse {
        let text = text.into();
        self.modality_response(Modality::Text, move |pipeline| {
            pipeline.analyze_text(&text)
        })
        .instrument(Self::request_span(Modality::Text.as_str()))
        .await
    }

    /// Analyze a speech recording
    pub async fn analyze_audio(&self, audio: AudioHandle) -> AssessmentResponse {
        self.modality_response(Modality::Audio, move |pipeline| {
            pipeline.analyze_audio(&audio)
        })
        .instrument(Self::request_span(Modality::Audio.as_str()))
        .await
    }

    /// Analyze an encoded facial image
    pub async fn analyze_visual(&self, image: Vec<u8>) -> AssessmentResponse {
        self.modality_response(Modality::Visual, move |pipeline| {
            pipeline.analyze_visual(&image)
        })
        .instrument(Self::request_span(Modality::Visual.as_str()))
        .await
    }

    /// Score a questionnaire
    pub async fn analyze_questionnaire(
        &self,
        responses: QuestionnaireResponses,
    ) -> QuestionnaireResponse {
        async move {
            match self
                .run(move |pipeline| pipeline.analyze_questionnaire(&responses))
                .await
            {
                Ok(response) => response,
                Err(error) => {
                    warn!(
                        code = ?error.code,
                        error = %error,
                        "questionnaire did not complete, using neutral fallback"
                    );
                    self.pipeline.respond_questionnaire(QuestionnaireAssessment::unscored(
                        Modality::Questionnaire.failure_reason(),
                    ))
                }
            }
        }
        .instrument(Self::request_span(Modality::Questionnaire.as_str()))
        .await
    }

    /// Fuse per-modality scores; fusion is pure and runs inline
    ///
    /// # Errors
    ///
    /// Returns an internal error if fusion produces a non-finite value
    pub async fn comprehensive(&self, inputs: FusionInputs) -> AppResult<ComprehensiveAssessment> {
        let span = Self::request_span("comprehensive");
        async move { self.pipeline.comprehensive(&inputs) }
            .instrument(span)
            .await
    }

    /// Recommendations for arbitrary signals
    #[must_use]
    pub fn recommend(&self, input: &RecommendationInput) -> FormattedRecommendations {
        Self::request_span("recommendation").in_scope(|| self.pipeline.recommend(input))
    }
}
