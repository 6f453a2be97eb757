// ABOUTME: Tests for assessor configuration defaults, environment overrides and validation
// ABOUTME: Environment-mutating tests run serially and clean up after themselves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp, clippy::missing_panics_doc)]

use serial_test::serial;
use std::env;
use std::time::Duration;
use wellbeing_assessor::config::intelligence::{
    EmotionWeights, NeutralEmotions, ScoringProfile,
};
use wellbeing_assessor::config::{
    AssessorConfig, ConfigError, IntelligenceConfig, ServiceConfig, DEFAULT_ANALYSIS_TIMEOUT_MS,
};

fn clear(vars: &[&str]) {
    for var in vars {
        env::remove_var(var);
    }
}

#[test]
fn test_defaults_validate() {
    let config = IntelligenceConfig::default();
    assert!(config.validate().is_ok());

    assert_eq!(config.analyzers.text, ScoringProfile::bounded());
    assert_eq!(config.analyzers.audio, ScoringProfile::full_scale());
    assert_eq!(config.analyzers.visual, ScoringProfile::bounded());
    assert_eq!(config.fusion.jitter.seed, None);
    assert_eq!(config.recommendation_engine.thresholds.high_below, 30.0);
    assert_eq!(config.recommendation_engine.thresholds.medium_below, 60.0);
    assert_eq!(config.questionnaire.focus_below, 0.4);
    assert_eq!(config.questionnaire.strength_above, 0.8);
}

#[test]
fn test_default_emotion_weights() {
    let weights = EmotionWeights::default();
    assert_eq!(weights.happiness, 0.40);
    assert_eq!(weights.calm, 0.30);
    assert_eq!(weights.sadness, 0.20);
    assert_eq!(weights.anxiety, 0.10);
    assert_eq!(weights.anger, 0.10);
}

#[test]
fn test_profile_range_must_fit_wellbeing_scale() {
    let profile = ScoringProfile {
        base: 15.0,
        span: 20.0,
        ..ScoringProfile::bounded()
    };
    assert!(matches!(
        profile.validate(),
        Err(ConfigError::InvalidRange(_))
    ));

    let zero_span = ScoringProfile {
        span: 0.0,
        ..ScoringProfile::bounded()
    };
    assert!(matches!(
        zero_span.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_neutral_priors_must_be_probabilities() {
    let priors = NeutralEmotions {
        anxiety: 1.2,
        ..NeutralEmotions::default()
    };
    assert!(priors.validate().is_err());
    assert!(NeutralEmotions::default().validate().is_ok());
}

#[test]
#[serial]
fn test_environment_overrides() {
    env::set_var("WELLBEING_TEXT_SCORE_BASE", "0");
    env::set_var("WELLBEING_TEXT_SCORE_SPAN", "30");
    env::set_var("WELLBEING_NEUTRAL_CALM", "0.6");
    env::set_var("WELLBEING_FUSION_JITTER_SEED", "1234");
    env::set_var("WELLBEING_PRIORITY_HIGH_BELOW", "25");

    let config = IntelligenceConfig::load().unwrap();
    assert_eq!(config.analyzers.text.base, 0.0);
    assert_eq!(config.analyzers.text.span, 30.0);
    assert_eq!(config.analyzers.neutral_emotions.calm, 0.6);
    assert_eq!(config.fusion.jitter.seed, Some(1234));
    assert_eq!(config.recommendation_engine.thresholds.high_below, 25.0);

    clear(&[
        "WELLBEING_TEXT_SCORE_BASE",
        "WELLBEING_TEXT_SCORE_SPAN",
        "WELLBEING_NEUTRAL_CALM",
        "WELLBEING_FUSION_JITTER_SEED",
        "WELLBEING_PRIORITY_HIGH_BELOW",
    ]);
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    env::set_var("WELLBEING_FUSION_WEIGHT_TEXT", "thirty percent");
    let result = IntelligenceConfig::load();
    clear(&["WELLBEING_FUSION_WEIGHT_TEXT"]);

    match result {
        Err(ConfigError::Parse(message)) => {
            assert!(message.contains("WELLBEING_FUSION_WEIGHT_TEXT"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_override_failing_validation_is_rejected() {
    env::set_var("WELLBEING_FUSION_WEIGHT_QUESTIONNAIRE", "0.9");
    let result = IntelligenceConfig::load();
    clear(&["WELLBEING_FUSION_WEIGHT_QUESTIONNAIRE"]);
    assert!(matches!(result, Err(ConfigError::InvalidWeights(_))));

    env::set_var("WELLBEING_PRIORITY_HIGH_BELOW", "70");
    let result = IntelligenceConfig::load();
    clear(&["WELLBEING_PRIORITY_HIGH_BELOW"]);
    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
#[serial]
fn test_service_timeout_from_env() {
    clear(&["WELLBEING_ANALYSIS_TIMEOUT_MS"]);
    assert_eq!(
        ServiceConfig::from_env().unwrap().analysis_timeout,
        Duration::from_millis(DEFAULT_ANALYSIS_TIMEOUT_MS)
    );

    env::set_var("WELLBEING_ANALYSIS_TIMEOUT_MS", "250");
    assert_eq!(
        ServiceConfig::from_env().unwrap().analysis_timeout,
        Duration::from_millis(250)
    );

    env::set_var("WELLBEING_ANALYSIS_TIMEOUT_MS", "soon");
    assert!(matches!(
        ServiceConfig::from_env(),
        Err(ConfigError::Parse(_))
    ));

    env::set_var("WELLBEING_ANALYSIS_TIMEOUT_MS", "0");
    assert!(matches!(
        ServiceConfig::from_env(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    clear(&["WELLBEING_ANALYSIS_TIMEOUT_MS"]);
}

#[test]
#[serial]
fn test_assessor_config_from_env() {
    env::set_var("WELLBEING_ANALYSIS_TIMEOUT_MS", "1500");
    env::set_var("WELLBEING_QUESTIONNAIRE_FOCUS_BELOW", "0.3");

    let config = AssessorConfig::from_env().unwrap();
    assert_eq!(config.service.analysis_timeout, Duration::from_millis(1500));
    assert_eq!(config.intelligence.questionnaire.focus_below, 0.3);

    clear(&[
        "WELLBEING_ANALYSIS_TIMEOUT_MS",
        "WELLBEING_QUESTIONNAIRE_FOCUS_BELOW",
    ]);
}

#[test]
fn test_config_serializes() {
    let json = serde_json::to_value(IntelligenceConfig::default()).unwrap();
    assert_eq!(json["fusion"]["weights"]["questionnaire"], 0.4);
    assert!(json["fusion"]["jitter"]["seed"].is_null());
}
