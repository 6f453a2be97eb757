// ABOUTME: Score fusion and recommendation commands working on precomputed scores
// ABOUTME: Fuses up to four modality scores and prints tiered recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::print_json;
use anyhow::Result;
use clap::ValueEnum;
use std::collections::BTreeMap;
use tracing::info;
use wellbeing_assessor::intelligence::{FusionInputs, RecommendationInput};
use wellbeing_assessor::models::{
    BehaviouralIndicators, EmotionKey, EmotionVector, EyeContact, FacialExpression, WellbeingScore,
};
use wellbeing_assessor::AssessmentService;

/// Facial expression valence accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExpressionArg {
    /// Happy face
    Positive,
    /// Neutral face
    Neutral,
    /// Sad, angry, disgusted or fearful face
    Negative,
}

impl From<ExpressionArg> for FacialExpression {
    fn from(arg: ExpressionArg) -> Self {
        match arg {
            ExpressionArg::Positive => Self::Positive,
            ExpressionArg::Neutral => Self::Neutral,
            ExpressionArg::Negative => Self::Negative,
        }
    }
}

/// Eye contact quality accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EyeContactArg {
    /// Sustained gaze
    Good,
    /// Intermittent gaze
    Moderate,
    /// Mostly averted gaze
    Poor,
}

impl From<EyeContactArg> for EyeContact {
    fn from(arg: EyeContactArg) -> Self {
        match arg {
            EyeContactArg::Good => Self::Good,
            EyeContactArg::Moderate => Self::Moderate,
            EyeContactArg::Poor => Self::Poor,
        }
    }
}

/// Signals for the `recommend` command
#[derive(Debug, Clone, Default)]
pub struct RecommendArgs {
    /// Wellbeing score on the 0-30 scale
    pub score: Option<f64>,
    /// Anxiety intensity in `[0, 1]`
    pub anxiety: Option<f64>,
    /// Depression intensity in `[0, 1]`
    pub depression: Option<f64>,
    /// Facial expression valence
    pub facial_expression: Option<ExpressionArg>,
    /// Eye contact quality
    pub eye_contact: Option<EyeContactArg>,
}

fn checked(score: Option<f64>) -> Result<Option<WellbeingScore>> {
    Ok(score.map(WellbeingScore::try_new).transpose()?)
}

/// Fuse per-modality scores; missing scores count as neutral
pub async fn fuse(
    service: &AssessmentService,
    questionnaire: Option<f64>,
    text: Option<f64>,
    audio: Option<f64>,
    visual: Option<f64>,
    pretty: bool,
) -> Result<()> {
    let inputs = FusionInputs::from_partial(
        checked(questionnaire)?,
        checked(text)?,
        checked(audio)?,
        checked(visual)?,
    );
    info!(?inputs, "Fusing modality scores");
    let assessment = service.comprehensive(inputs).await?;
    print_json(&assessment, pretty)
}

/// Recommendations for a score and optional indicators
pub fn recommend(service: &AssessmentService, args: &RecommendArgs, pretty: bool) -> Result<()> {
    let prior = service
        .pipeline()
        .config()
        .analyzers
        .neutral_emotions
        .vector();
    let emotions = args.anxiety.map(|anxiety| {
        EmotionVector::from_partial(&BTreeMap::from([(EmotionKey::Anxiety, anxiety)]), &prior)
    });
    let indicators = BehaviouralIndicators {
        facial_expression: args.facial_expression.map(Into::into),
        eye_contact: args.eye_contact.map(Into::into),
    };

    let input = RecommendationInput {
        score: checked(args.score)?,
        emotions,
        depression: args.depression,
        indicators: (!indicators.is_empty()).then_some(indicators),
    };
    print_json(&service.recommend(&input), pretty)
}
