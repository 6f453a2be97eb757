// ABOUTME: Async tests for the assessment service facade
// ABOUTME: Covers every modality, concurrent requests and the timeout fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp, clippy::missing_panics_doc)]

mod helpers;

use helpers::collaborators::ScriptedClassifier;
use helpers::{assert_close, scripted_pipeline};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use wellbeing_assessor::config::{IntelligenceConfig, ServiceConfig};
use wellbeing_assessor::errors::{AnalysisError, ErrorCode};
use wellbeing_assessor::intelligence::collaborators::{
    AudioHandle, FaceDetection, FaceEmotionModel,
};
use wellbeing_assessor::intelligence::{FusionInputs, QuestionnaireResponses, RecommendationInput};
use wellbeing_assessor::models::{AssessmentStatus, NeutralReason, StatusBand, WellbeingScore};
use wellbeing_assessor::{AssessmentPipeline, AssessmentService};

struct SlowFace;

impl FaceEmotionModel for SlowFace {
    fn detect(&self, _image: &[u8]) -> Result<FaceDetection, AnalysisError> {
        thread::sleep(Duration::from_millis(300));
        Ok(FaceDetection::default())
    }
}

fn service() -> AssessmentService {
    AssessmentService::new(scripted_pipeline(), ServiceConfig::default())
}

#[tokio::test]
async fn test_text_analysis() {
    let response = service().analyze_text("What a lovely afternoon").await;
    assert_close(response.analysis.score.value(), 25.0);
    assert!(response.recommendations.immediate_actions.is_some());
}

#[tokio::test]
async fn test_audio_analysis() {
    let response = service()
        .analyze_audio(AudioHandle::new("recordings/session.wav"))
        .await;
    assert_close(response.analysis.score.value(), 23.1);
}

#[tokio::test]
async fn test_visual_analysis() {
    let response = service().analyze_visual(b"\xff\xd8\xff".to_vec()).await;
    assert_eq!(
        response.analysis.status,
        AssessmentStatus::Band(StatusBand::StableButVulnerable)
    );
}

#[tokio::test]
async fn test_questionnaire_analysis() {
    let responses: QuestionnaireResponses = [
        ("question_3".to_owned(), "Hard to say".to_owned()),
        ("question_8".to_owned(), "Hard to say".to_owned()),
    ]
    .into();
    let response = service().analyze_questionnaire(responses).await;
    assert_eq!(response.analysis.category_scores.len(), 2);
    assert_close(response.analysis.overall_score.value(), 22.5);
}

#[tokio::test]
async fn test_slow_model_times_out_to_fallback() {
    let classifier = Arc::new(ScriptedClassifier::joyful().with_delay(Duration::from_millis(300)));
    let pipeline = AssessmentPipeline::new(IntelligenceConfig::default())
        .unwrap()
        .with_text_classifier(classifier.clone());
    let service = AssessmentService::new(
        pipeline,
        ServiceConfig {
            analysis_timeout: Duration::from_millis(20),
        },
    );

    let response = service.analyze_text("Are you still there?").await;
    assert_eq!(
        response.analysis.status,
        AssessmentStatus::Neutral(NeutralReason::AnalysisError)
    );
    assert_eq!(response.analysis.score, WellbeingScore::NEUTRAL);
    assert_eq!(classifier.calls(), 1);
}

#[tokio::test]
async fn test_slow_face_model_reports_no_face() {
    let service = AssessmentService::new(
        AssessmentPipeline::new(IntelligenceConfig::default())
            .unwrap()
            .with_face_model(Arc::new(SlowFace)),
        ServiceConfig {
            analysis_timeout: Duration::from_millis(20),
        },
    );
    let response = service.analyze_visual(b"frame".to_vec()).await;
    assert_eq!(
        response.analysis.status,
        AssessmentStatus::Neutral(NeutralReason::NoFaceDetected)
    );
}

#[tokio::test]
async fn test_run_reports_timeout_code() {
    let service = AssessmentService::new(
        scripted_pipeline(),
        ServiceConfig {
            analysis_timeout: Duration::from_millis(20),
        },
    );
    let error = service
        .run(|_| thread::sleep(Duration::from_millis(300)))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ModelTimeout);
    assert_eq!(error.http_status(), 504);
    assert!(error.message.contains("20 ms"));
}

#[tokio::test]
async fn test_run_reports_panicking_job_as_internal() {
    let error = service()
        .run(|_| -> u8 { panic!("analyzer bug") })
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InternalError);
}

#[tokio::test]
async fn test_run_returns_job_output() {
    let score = service()
        .run(|pipeline| pipeline.text_result("Fine, thanks").score)
        .await
        .unwrap();
    assert_close(score.value(), 25.0);
}

#[tokio::test]
async fn test_concurrent_requests_share_one_pipeline() {
    let service = service();
    let other = service.clone();
    let (first, second) = tokio::join!(
        service.analyze_text("Feeling good"),
        other.analyze_text("Feeling good")
    );
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_comprehensive_assessment() {
    let inputs = FusionInputs::from_partial(None, Some(WellbeingScore::new(27.0)), None, None);
    let assessment = service().comprehensive(inputs).await.unwrap();
    // 0.30*27 + 0.70*15 = 18.6
    assert_close(assessment.score.score.value(), 18.6);
    assert_eq!(
        assessment.mental_health_status,
        AssessmentStatus::Band(StatusBand::StableButVulnerable)
    );
}

#[tokio::test]
async fn test_recommend_is_synchronous() {
    let service = service();
    let formatted = service.recommend(&RecommendationInput::default());
    assert!(formatted.lifestyle_changes.is_some());
    assert_eq!(
        service.config().analysis_timeout,
        ServiceConfig::default().analysis_timeout
    );
}
