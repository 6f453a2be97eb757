// ABOUTME: Integration tests for the synchronous assessment pipeline
// ABOUTME: Exercises per-modality responses, missing collaborators, fusion and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp, clippy::missing_panics_doc)]

mod helpers;

use helpers::collaborators::{ScriptedAcoustic, ScriptedTranscriber};
use helpers::{assert_close, scripted_pipeline};
use std::error::Error;
use std::sync::Arc;
use wellbeing_assessor::config::intelligence::{FusionConfig, FusionWeights};
use wellbeing_assessor::config::IntelligenceConfig;
use wellbeing_assessor::errors::ErrorCode;
use wellbeing_assessor::intelligence::collaborators::AudioHandle;
use wellbeing_assessor::intelligence::{
    FusionInputs, QuestionnaireResponses, RecommendationInput, WellbeingRecommendationEngine,
};
use wellbeing_assessor::models::{
    AssessmentStatus, EmotionVector, FormattedRecommendations, NeutralReason, PriorityTier,
    RecommendationCategory, StatusBand, WellbeingScore,
};
use wellbeing_assessor::AssessmentPipeline;

fn immediate_actions_for(tier: PriorityTier) -> Vec<String> {
    WellbeingRecommendationEngine::default().items(RecommendationCategory::ImmediateActions, tier)
}

fn assert_tier(recommendations: &FormattedRecommendations, tier: PriorityTier) {
    let block = recommendations.immediate_actions.as_ref().unwrap();
    assert_eq!(block.items, immediate_actions_for(tier));
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = IntelligenceConfig::default();
    config.fusion = FusionConfig {
        weights: FusionWeights {
            visual: 0.5,
            ..FusionWeights::default()
        },
        ..FusionConfig::default()
    };
    let Err(error) = AssessmentPipeline::new(config) else {
        panic!("unbalanced fusion weights must be rejected");
    };
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert_eq!(error.http_status(), 500);
    assert!(error.message.starts_with("Invalid weights"));
    assert!(error.source().is_some());
}

#[test]
fn test_text_response() {
    let response = scripted_pipeline().analyze_text("Today was wonderful");
    assert_close(response.analysis.score.value(), 25.0);
    assert_eq!(
        response.analysis.status,
        AssessmentStatus::Band(StatusBand::Healthy)
    );
    assert_tier(&response.recommendations, PriorityTier::Low);
}

#[test]
fn test_empty_text_answers_no_input_fallback() {
    let response = scripted_pipeline().analyze_text("  ");
    assert_eq!(
        response.analysis.status,
        AssessmentStatus::Neutral(NeutralReason::NoInput)
    );
    assert_eq!(response.analysis.score, WellbeingScore::NEUTRAL);
    assert_tier(&response.recommendations, PriorityTier::Medium);
}

#[test]
fn test_audio_response_with_transcriber_attached_first() {
    let pipeline = AssessmentPipeline::new(IntelligenceConfig::default())
        .unwrap()
        .with_transcriber(Arc::new(ScriptedTranscriber::saying("I am doing alright")))
        .with_acoustic_model(Arc::new(ScriptedAcoustic::calm()));
    let response = pipeline.analyze_audio(&AudioHandle::new("session.wav"));
    assert_close(response.analysis.score.value(), 23.1);
    assert_eq!(
        response.analysis.transcription.as_deref(),
        Some("I am doing alright")
    );
}

#[test]
fn test_visual_response_carries_indicators() {
    let response = scripted_pipeline().analyze_visual(b"jpeg bytes");
    assert_close(response.analysis.score.value(), 21.5);
    assert!(response.analysis.indicators.is_some());
    assert!(response.recommendations.personalized.is_none());
}

#[test]
fn test_missing_collaborators_fall_back() {
    let pipeline = AssessmentPipeline::new(IntelligenceConfig::default()).unwrap();
    let expected = pipeline.fallback(NeutralReason::AnalysisError);
    assert_eq!(expected.emotions, EmotionVector::neutral());

    assert_eq!(pipeline.text_result("hello"), expected);
    assert_eq!(pipeline.audio_result(&AudioHandle::new("a.wav")), expected);
    assert_eq!(
        pipeline.visual_result(b"img"),
        pipeline.fallback(NeutralReason::NoFaceDetected)
    );

    let response = pipeline.analyze_text("hello");
    assert_eq!(response.analysis.status.to_string(), "Neutral - Error in analysis");
    assert_tier(&response.recommendations, PriorityTier::Medium);
}

#[test]
fn test_fallback_uses_configured_prior() {
    let mut config = IntelligenceConfig::default();
    config.analyzers.neutral_emotions.calm = 0.9;
    let pipeline = AssessmentPipeline::new(config).unwrap();
    assert_eq!(pipeline.text_result("anything").emotions.calm(), 0.9);
}

#[test]
fn test_questionnaire_response() {
    let responses: QuestionnaireResponses =
        [("question_4".to_owned(), "Hard to say".to_owned())].into();
    let response = scripted_pipeline().analyze_questionnaire(&responses);
    // Sentiment 0.5 maps to 0.75, scaled to 22.5
    assert_close(response.analysis.overall_score.value(), 22.5);
    assert_tier(&response.recommendations, PriorityTier::Low);
}

#[test]
fn test_questionnaire_without_scorer_is_unscored() {
    let pipeline = AssessmentPipeline::new(IntelligenceConfig::default()).unwrap();
    let responses: QuestionnaireResponses =
        [("question_1".to_owned(), "I feel tired".to_owned())].into();
    let response = pipeline.analyze_questionnaire(&responses);
    assert_eq!(
        response.analysis.mental_health_status,
        AssessmentStatus::Neutral(NeutralReason::AnalysisError)
    );
    assert_eq!(response.analysis.overall_score, WellbeingScore::MIN);
    // The zero score is not tiered on
    assert_tier(&response.recommendations, PriorityTier::Medium);
}

#[test]
fn test_comprehensive_assessment() {
    let inputs = FusionInputs {
        questionnaire: WellbeingScore::new(20.0),
        text: WellbeingScore::new(10.0),
        audio: WellbeingScore::new(15.0),
        visual: WellbeingScore::new(15.0),
    };
    let assessment = scripted_pipeline().comprehensive(&inputs).unwrap();
    assert_close(assessment.score.score.value(), 15.5);
    assert_eq!(
        assessment.mental_health_status,
        AssessmentStatus::Band(StatusBand::MildImbalance)
    );
    assert_eq!(assessment.priority, PriorityTier::Medium);
    assert_tier(&assessment.recommendations, PriorityTier::Medium);

    let json = serde_json::to_value(&assessment).unwrap();
    assert_eq!(json["comprehensive_score"], 15.5);
    assert_eq!(json["questionnaire_score"], 20.0);
    assert!(json["recommendations"]["immediate_actions"].is_object());
}

#[test]
fn test_comprehensive_low_scores_are_high_priority() {
    let inputs = FusionInputs::from_partial(
        Some(WellbeingScore::new(2.0)),
        Some(WellbeingScore::new(3.0)),
        Some(WellbeingScore::new(1.0)),
        Some(WellbeingScore::new(4.0)),
    );
    let assessment = scripted_pipeline().comprehensive(&inputs).unwrap();
    assert_eq!(assessment.priority, PriorityTier::High);
    assert_eq!(
        assessment.mental_health_status,
        AssessmentStatus::Band(StatusBand::Critical)
    );
}

#[test]
fn test_recommend_for_arbitrary_signals() {
    let input = RecommendationInput::from_score(WellbeingScore::new(27.0)).with_depression(0.75);
    let formatted = scripted_pipeline().recommend(&input);
    assert_tier(&formatted, PriorityTier::Low);
    assert_eq!(formatted.personalized.unwrap().items.len(), 2);
}
