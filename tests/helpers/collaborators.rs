// ABOUTME: Scripted implementations of the external model traits for tests
// ABOUTME: Each returns a fixed answer, an error, or blocks for a configured delay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(
    clippy::must_use_candidate,
    clippy::missing_panics_doc,
    clippy::return_self_not_must_use
)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;
use wellbeing_assessor::errors::AnalysisError;
use wellbeing_assessor::intelligence::collaborators::{
    AcousticEmotionModel, AcousticFeatureSummary, AcousticPrediction, AudioHandle,
    EmotionClassifier, FaceDetection, FaceEmotionModel, LabelScore, SentimentScorer,
    SpeechTranscriber,
};
use wellbeing_assessor::models::{EyeContact, Modality};

fn labels(pairs: &[(&str, f64)]) -> Vec<LabelScore> {
    pairs
        .iter()
        .map(|(label, score)| LabelScore::new(*label, *score))
        .collect()
}

/// Text classifier returning a fixed label list
pub struct ScriptedClassifier {
    answer: Result<Vec<LabelScore>, AnalysisError>,
    delay: Duration,
    calls: AtomicUsize,
}

impl ScriptedClassifier {
    pub fn new(pairs: &[(&str, f64)]) -> Self {
        Self {
            answer: Ok(labels(pairs)),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn joyful() -> Self {
        Self::new(&[
            ("joy", 0.9),
            ("sadness", 0.05),
            ("fear", 0.02),
            ("anger", 0.01),
            ("neutral", 0.6),
        ])
    }

    pub fn failing() -> Self {
        Self {
            answer: Err(AnalysisError::model_unavailable(
                Modality::Text,
                "classifier not loaded",
            )),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EmotionClassifier for ScriptedClassifier {
    fn classify(&self, _text: &str) -> Result<Vec<LabelScore>, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        self.answer.clone()
    }
}

/// Transcriber returning a fixed transcript or failing
pub struct ScriptedTranscriber(pub Result<String, AnalysisError>);

impl ScriptedTranscriber {
    pub fn saying(text: &str) -> Self {
        Self(Ok(text.to_owned()))
    }

    pub fn failing() -> Self {
        Self(Err(AnalysisError::model_unavailable(
            Modality::Audio,
            "speech engine offline",
        )))
    }
}

impl SpeechTranscriber for ScriptedTranscriber {
    fn transcribe(&self, _audio: &AudioHandle) -> Result<String, AnalysisError> {
        self.0.clone()
    }
}

/// Acoustic model returning a fixed prediction
pub struct ScriptedAcoustic(pub Result<AcousticPrediction, AnalysisError>);

impl ScriptedAcoustic {
    pub fn new(pairs: &[(&str, f64)], features: Option<AcousticFeatureSummary>) -> Self {
        Self(Ok(AcousticPrediction {
            probabilities: labels(pairs),
            features,
        }))
    }

    pub fn calm() -> Self {
        Self::new(
            &[
                ("angry", 0.02),
                ("disgust", 0.01),
                ("fear", 0.03),
                ("happy", 0.3),
                ("neutral", 0.55),
                ("sad", 0.05),
                ("surprise", 0.04),
            ],
            None,
        )
    }

    pub fn failing() -> Self {
        Self(Err(AnalysisError::model_unavailable(
            Modality::Audio,
            "acoustic model missing",
        )))
    }
}

impl AcousticEmotionModel for ScriptedAcoustic {
    fn predict(&self, _audio: &AudioHandle) -> Result<AcousticPrediction, AnalysisError> {
        self.0.clone()
    }
}

/// Face model returning a fixed detection
pub struct ScriptedFace(pub Result<FaceDetection, AnalysisError>);

impl ScriptedFace {
    pub fn new(pairs: &[(&str, f64)], eye_contact: Option<EyeContact>) -> Self {
        Self(Ok(FaceDetection {
            scores: pairs
                .iter()
                .map(|(label, score)| ((*label).to_owned(), *score))
                .collect::<BTreeMap<_, _>>(),
            eye_contact,
        }))
    }

    pub fn happy() -> Self {
        Self::new(
            &[("happy", 80.0), ("neutral", 15.0), ("sad", 5.0)],
            Some(EyeContact::Good),
        )
    }

    pub fn no_face() -> Self {
        Self(Ok(FaceDetection::default()))
    }

    pub fn failing() -> Self {
        Self(Err(AnalysisError::model_unavailable(
            Modality::Visual,
            "face detector crashed",
        )))
    }
}

impl FaceEmotionModel for ScriptedFace {
    fn detect(&self, _image: &[u8]) -> Result<FaceDetection, AnalysisError> {
        self.0.clone()
    }
}

/// Sentiment scorer with per-answer polarities and a fallback
pub struct ScriptedSentiment {
    by_answer: BTreeMap<String, f64>,
    default: Result<f64, AnalysisError>,
}

impl ScriptedSentiment {
    pub fn constant(polarity: f64) -> Self {
        Self {
            by_answer: BTreeMap::new(),
            default: Ok(polarity),
        }
    }

    pub fn failing() -> Self {
        Self {
            by_answer: BTreeMap::new(),
            default: Err(AnalysisError::model_unavailable(
                Modality::Questionnaire,
                "sentiment model missing",
            )),
        }
    }

    pub fn with_answer(mut self, answer: &str, polarity: f64) -> Self {
        self.by_answer.insert(answer.to_owned(), polarity);
        self
    }
}

impl SentimentScorer for ScriptedSentiment {
    fn polarity(&self, text: &str) -> Result<f64, AnalysisError> {
        self.by_answer
            .get(text)
            .copied()
            .map_or_else(|| self.default.clone(), Ok)
    }
}
