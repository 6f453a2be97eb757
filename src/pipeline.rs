// ABOUTME: Synchronous per-request orchestration of analyzers, fusion and recommendations
// ABOUTME: Builds the outbound payloads consumed by the web layer and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Assessment Pipeline
//!
//! Owns one analyzer per configured modality, the score fusion and the
//! recommendation engine. A modality without a configured collaborator
//! answers with the neutral fallback, exactly as if its model had failed.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use wellbeing_core::errors::AppResult;
use wellbeing_core::models::{
    AssessmentStatus, ComprehensiveScore, EmotionVector, FormattedRecommendations, Modality,
    ModalityResult, NeutralReason, PriorityTier, QuestionnaireAssessment, StatusBand,
};
use wellbeing_intelligence::collaborators::{
    AcousticEmotionModel, AudioHandle, EmotionClassifier, FaceEmotionModel, SentimentScorer,
    SpeechTranscriber,
};
use wellbeing_intelligence::config::IntelligenceConfig;
use wellbeing_intelligence::{
    format_recommendations, AudioAnalyzer, FusionInputs, ModalityAnalyzer, QuestionnaireAnalyzer,
    QuestionnaireResponses, RecommendationInput, ScoreFusion, TextAnalyzer, VisualAnalyzer,
    WellbeingRecommendationEngine,
};

/// Payload for a single-modality analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResponse {
    /// Modality result
    pub analysis: ModalityResult,
    /// Titled recommendation blocks
    pub recommendations: FormattedRecommendations,
}

/// Payload for a questionnaire analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireResponse {
    /// Questionnaire assessment
    pub analysis: QuestionnaireAssessment,
    /// Titled recommendation blocks
    pub recommendations: FormattedRecommendations,
}

/// Payload for a fused multi-modal assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprehensiveAssessment {
    /// Fused score, percentage and components
    #[serde(flatten)]
    pub score: ComprehensiveScore,
    /// Band of the fused score
    pub mental_health_status: AssessmentStatus,
    /// Tier the recommendations were selected for
    pub priority: PriorityTier,
    /// Titled recommendation blocks
    pub recommendations: FormattedRecommendations,
}

/// Per-request orchestration over injected collaborators
#[derive(Clone)]
pub struct AssessmentPipeline {
    config: IntelligenceConfig,
    neutral: EmotionVector,
    text: Option<TextAnalyzer>,
    audio: Option<AudioAnalyzer>,
    transcriber: Option<Arc<dyn SpeechTranscriber>>,
    visual: Option<VisualAnalyzer>,
    questionnaire: Option<QuestionnaireAnalyzer>,
    fusion: ScoreFusion,
    recommendations: WellbeingRecommendationEngine,
}

impl AssessmentPipeline {
    /// Pipeline with no collaborators; every modality falls back until one is attached
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if `config` fails validation
    pub fn new(config: IntelligenceConfig) -> AppResult<Self> {
        config.validate()?;
        let fusion = ScoreFusion::new(&config.fusion)?;
        let recommendations =
            WellbeingRecommendationEngine::new(config.recommendation_engine.clone());
        Ok(Self {
            neutral: config.analyzers.neutral_emotions.vector(),
            config,
            text: None,
            audio: None,
            transcriber: None,
            visual: None,
            questionnaire: None,
            fusion,
            recommendations,
        })
    }

    /// Attach the text emotion classifier
    #[must_use]
    pub fn with_text_classifier(mut self, classifier: Arc<dyn EmotionClassifier>) -> Self {
        self.text = Some(TextAnalyzer::new(classifier, &self.config.analyzers));
        self
    }

    /// Attach the acoustic emotion model
    #[must_use]
    pub fn with_acoustic_model(mut self, model: Arc<dyn AcousticEmotionModel>) -> Self {
        let analyzer = AudioAnalyzer::new(model, &self.config.analyzers);
        self.audio = Some(match &self.transcriber {
            Some(transcriber) => analyzer.with_transcriber(Arc::clone(transcriber)),
            None => analyzer,
        });
        self
    }

    /// Attach the speech transcriber
    #[must_use]
    pub fn with_transcriber(mut self, transcriber: Arc<dyn SpeechTranscriber>) -> Self {
        self.audio = self
            .audio
            .map(|analyzer| analyzer.with_transcriber(Arc::clone(&transcriber)));
        self.transcriber = Some(transcriber);
        self
    }

    /// Attach the facial emotion model
    #[must_use]
    pub fn with_face_model(mut self, model: Arc<dyn FaceEmotionModel>) -> Self {
        self.visual = Some(VisualAnalyzer::new(model, &self.config.analyzers));
        self
    }

    /// Attach the questionnaire sentiment scorer
    #[must_use]
    pub fn with_sentiment_scorer(mut self, scorer: Arc<dyn SentimentScorer>) -> Self {
        self.questionnaire = Some(QuestionnaireAnalyzer::new(
            scorer,
            self.config.questionnaire.clone(),
        ));
        self
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// Neutral fallback result under the configured prior
    #[must_use]
    pub const fn fallback(&self, reason: NeutralReason) -> ModalityResult {
        ModalityResult::fallback(reason, self.neutral)
    }

    fn unavailable(&self, modality: Modality) -> ModalityResult {
        warn!(%modality, "no collaborator configured, returning neutral fallback");
        self.fallback(modality.failure_reason())
    }

    /// Attach recommendations to a finished modality result
    #[must_use]
    pub fn respond(&self, analysis: ModalityResult) -> AssessmentResponse {
        let set = self
            .recommendations
            .recommend(&RecommendationInput::from_result(&analysis));
        AssessmentResponse {
            recommendations: format_recommendations(&set),
            analysis,
        }
    }

    /// Text analysis only, without recommendations
    #[must_use]
    pub fn text_result(&self, text: &str) -> ModalityResult {
        self.text.as_ref().map_or_else(
            || self.unavailable(Modality::Text),
            |analyzer| analyzer.analyze(text),
        )
    }

    /// Audio analysis only, without recommendations
    #[must_use]
    pub fn audio_result(&self, audio: &AudioHandle) -> ModalityResult {
        self.audio.as_ref().map_or_else(
            || self.unavailable(Modality::Audio),
            |analyzer| analyzer.analyze(audio),
        )
    }

    /// Visual analysis only, without recommendations
    #[must_use]
    pub fn visual_result(&self, image: &[u8]) -> ModalityResult {
        self.visual.as_ref().map_or_else(
            || self.unavailable(Modality::Visual),
            |analyzer| analyzer.analyze(image),
        )
    }

    /// Analyze free text and recommend from the result
    #[must_use]
    pub fn analyze_text(&self, text: &str) -> AssessmentResponse {
        self.respond(self.text_result(text))
    }

    /// Analyze a recording and recommend from the result
    #[must_use]
    pub fn analyze_audio(&self, audio: &AudioHandle) -> AssessmentResponse {
        self.respond(self.audio_result(audio))
    }

    /// Analyze a facial image and recommend from the result
    #[must_use]
    pub fn analyze_visual(&self, image: &[u8]) -> AssessmentResponse {
        self.respond(self.visual_result(image))
    }

    /// Score a questionnaire and recommend from its overall score
    #[must_use]
    pub fn analyze_questionnaire(&self, responses: &QuestionnaireResponses) -> QuestionnaireResponse {
        let analysis = self.questionnaire.as_ref().map_or_else(
            || {
                warn!("no sentiment scorer configured, questionnaire left unscored");
                QuestionnaireAssessment::unscored(NeutralReason::AnalysisError)
            },
            |analyzer| analyzer.analyze(responses),
        );
        self.respond_questionnaire(analysis)
    }

    /// Attach recommendations to a finished questionnaire assessment
    #[must_use]
    pub fn respond_questionnaire(&self, analysis: QuestionnaireAssessment) -> QuestionnaireResponse {
        // A fallback questionnaire carries no score worth tiering on
        let score = (!analysis.mental_health_status.is_fallback()).then_some(analysis.overall_score);
        let set = self.recommendations.recommend(&RecommendationInput {
            score,
            ..RecommendationInput::default()
        });
        QuestionnaireResponse {
            analysis,
            recommendations: format_recommendations(&set),
        }
    }

    /// Fuse per-modality scores and recommend from the fused score
    ///
    /// # Errors
    ///
    /// Returns an internal error if fusion produces a non-finite value
    pub fn comprehensive(&self, inputs: &FusionInputs) -> AppResult<ComprehensiveAssessment> {
        let score = self.fusion.fuse(inputs)?;
        let set = self
            .recommendations
            .recommend(&RecommendationInput::from_score(score.score));
        info!(
            comprehensive_score = score.score.value(),
            priority = ?set.priority,
            "comprehensive assessment complete"
        );
        Ok(ComprehensiveAssessment {
            mental_health_status: AssessmentStatus::Band(StatusBand::from_score(score.score)),
            priority: set.priority,
            recommendations: format_recommendations(&set),
            score,
        })
    }

    /// Recommendations for arbitrary signals
    #[must_use]
    pub fn recommend(&self, input: &RecommendationInput) -> FormattedRecommendations {
        format_recommendations(&self.recommendations.recommend(input))
    }
}
