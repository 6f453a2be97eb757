// ABOUTME: Tests for weighted multi-modal score fusion and seeded jitter
// ABOUTME: Validates extremes, weighting, rounding, reproducibility and weight validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp, clippy::missing_panics_doc)]

mod helpers;

use helpers::assert_close;
use wellbeing_assessor::config::intelligence::{FusionConfig, FusionWeights, JitterConfig};
use wellbeing_assessor::config::ConfigError;
use wellbeing_assessor::intelligence::{FusionInputs, ScoreFusion, ScoreJitter};
use wellbeing_assessor::models::WellbeingScore;

fn inputs(questionnaire: f64, text: f64, audio: f64, visual: f64) -> FusionInputs {
    FusionInputs {
        questionnaire: WellbeingScore::new(questionnaire),
        text: WellbeingScore::new(text),
        audio: WellbeingScore::new(audio),
        visual: WellbeingScore::new(visual),
    }
}

#[test]
fn test_default_weights_sum_to_one() {
    let weights = FusionWeights::default();
    assert_eq!(weights.questionnaire, 0.40);
    assert_eq!(weights.text, 0.30);
    assert_eq!(weights.audio, 0.15);
    assert_eq!(weights.visual, 0.15);
    assert_close(weights.total(), 1.0);
    assert!(weights.validate().is_ok());
}

#[test]
fn test_all_max_scores_fuse_to_max() {
    let fused = ScoreFusion::default()
        .fuse(&inputs(30.0, 30.0, 30.0, 30.0))
        .unwrap();
    assert_eq!(fused.score.value(), 30.0);
    assert_eq!(fused.percentage, 100.0);
}

#[test]
fn test_all_zero_scores_fuse_to_zero() {
    let fused = ScoreFusion::default()
        .fuse(&inputs(0.0, 0.0, 0.0, 0.0))
        .unwrap();
    assert_eq!(fused.score.value(), 0.0);
    assert_eq!(fused.percentage, 0.0);
}

#[test]
fn test_weighted_sum_and_rounding() {
    // 0.40*20 + 0.30*10 + 0.15*15 + 0.15*15 = 15.5
    let fused = ScoreFusion::default()
        .fuse(&inputs(20.0, 10.0, 15.0, 15.0))
        .unwrap();
    assert_close(fused.score.value(), 15.5);
    assert_close(fused.percentage, 51.7);
    assert_eq!(fused.components.questionnaire_score, 20.0);
    assert_eq!(fused.components.text_score, 10.0);
    assert_eq!(fused.components.audio_score, 15.0);
    assert_eq!(fused.components.visual_score, 15.0);
}

#[test]
fn test_percentage_follows_rounded_score() {
    // 5.96 rounds to 6.0; the unrounded sum would report 19.9 percent
    let fused = ScoreFusion::default()
        .fuse(&inputs(5.96, 5.96, 5.96, 5.96))
        .unwrap();
    assert_close(fused.score.value(), 6.0);
    assert_close(fused.percentage, 20.0);
    assert_close(fused.percentage, fused.score.value() / 30.0 * 100.0);
}

#[test]
fn test_missing_modalities_count_as_neutral() {
    let partial = FusionInputs::from_partial(Some(WellbeingScore::new(30.0)), None, None, None);
    assert_eq!(partial.text, WellbeingScore::NEUTRAL);
    assert_eq!(partial.audio, WellbeingScore::NEUTRAL);
    assert_eq!(partial.visual, WellbeingScore::NEUTRAL);

    // 0.40*30 + 0.60*15 = 21
    let fused = ScoreFusion::default().fuse(&partial).unwrap();
    assert_close(fused.score.value(), 21.0);
}

#[test]
fn test_fused_payload_shape() {
    let fused = ScoreFusion::default()
        .fuse(&inputs(18.0, 12.0, 21.0, 9.0))
        .unwrap();
    let json = serde_json::to_value(fused).unwrap();
    for field in [
        "comprehensive_score",
        "percentage",
        "questionnaire_score",
        "text_score",
        "audio_score",
        "visual_score",
    ] {
        assert!(json.get(field).is_some(), "missing {field}");
    }
}

#[test]
fn test_jitter_is_reproducible() {
    let jitter = ScoreJitter::new(42, 0.2);
    assert_eq!(jitter.factors(), jitter.factors());

    let fusion = ScoreFusion::default().with_jitter(Some(jitter));
    let sample = inputs(20.0, 18.0, 12.0, 25.0);
    let first = fusion.fuse(&sample).unwrap();
    let second = fusion.fuse(&sample).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_jitter_factors_stay_within_spread() {
    for seed in 0..64 {
        for factor in ScoreJitter::new(seed, 0.2).factors() {
            assert!((0.8..=1.2).contains(&factor), "factor {factor} out of range");
        }
    }
}

#[test]
fn test_jitter_result_stays_on_scale() {
    let fusion = ScoreFusion::default().with_jitter(Some(ScoreJitter::new(7, 0.5)));
    let fused = fusion.fuse(&inputs(30.0, 30.0, 30.0, 30.0)).unwrap();
    assert!((0.0..=30.0).contains(&fused.score.value()));
    assert!((0.0..=100.0).contains(&fused.percentage));
}

#[test]
fn test_zero_spread_jitter_is_identity() {
    let plain = ScoreFusion::default();
    let jittered = ScoreFusion::default().with_jitter(Some(ScoreJitter::new(9, 0.0)));
    let sample = inputs(11.0, 19.0, 23.0, 4.0);
    assert_eq!(plain.fuse(&sample).unwrap(), jittered.fuse(&sample).unwrap());
}

#[test]
fn test_jitter_from_config_requires_seed() {
    assert!(ScoreJitter::from_config(&JitterConfig::default()).is_none());
    let config = JitterConfig {
        seed: Some(3),
        spread: 0.1,
    };
    assert_eq!(ScoreJitter::from_config(&config).map(|j| j.seed()), Some(3));
}

#[test]
fn test_invalid_weights_rejected() {
    let config = FusionConfig {
        weights: FusionWeights {
            questionnaire: 0.5,
            ..FusionWeights::default()
        },
        ..FusionConfig::default()
    };
    assert!(matches!(
        ScoreFusion::new(&config),
        Err(ConfigError::InvalidWeights(_))
    ));

    let negative = FusionWeights {
        questionnaire: 0.7,
        text: -0.15,
        ..FusionWeights::default()
    };
    assert!(negative.validate().is_err());
}

#[test]
fn test_invalid_jitter_spread_rejected() {
    let config = FusionConfig {
        jitter: JitterConfig {
            seed: Some(1),
            spread: 1.0,
        },
        ..FusionConfig::default()
    };
    assert!(matches!(
        ScoreFusion::new(&config),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}
