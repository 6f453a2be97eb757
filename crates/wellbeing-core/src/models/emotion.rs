// ABOUTME: Five-dimension emotion vector shared by every modality analyzer
// ABOUTME: Guarantees all keys present with values in [0,1], imputing missing output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::neutral_emotions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The closed set of affect dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionKey {
    /// Positive affect
    Happiness,
    /// Low mood
    Sadness,
    /// Fear and worry
    Anxiety,
    /// Anger and disgust
    Anger,
    /// Neutral, settled affect
    Calm,
}

impl EmotionKey {
    /// Every key, in wire order
    pub const ALL: [Self; 5] = [
        Self::Happiness,
        Self::Sadness,
        Self::Anxiety,
        Self::Anger,
        Self::Calm,
    ];

    /// Wire name of this key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Happiness => "happiness",
            Self::Sadness => "sadness",
            Self::Anxiety => "anxiety",
            Self::Anger => "anger",
            Self::Calm => "calm",
        }
    }
}

impl fmt::Display for EmotionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emotion intensities, one per [`EmotionKey`], each in `[0, 1]`.
///
/// Values are derived independently and need not sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "PartialEmotions")]
pub struct EmotionVector {
    happiness: f64,
    sadness: f64,
    anxiety: f64,
    anger: f64,
    calm: f64,
}

impl Default for EmotionVector {
    fn default() -> Self {
        Self::neutral()
    }
}

impl EmotionVector {
    /// Neutral distribution used when a modality cannot be analyzed
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            happiness: neutral_emotions::HAPPINESS,
            sadness: neutral_emotions::SADNESS,
            anxiety: neutral_emotions::ANXIETY,
            anger: neutral_emotions::ANGER,
            calm: neutral_emotions::CALM,
        }
    }

    /// Build a vector from raw values.
    ///
    /// Finite values are clamped to `[0, 1]`; non-finite values fall back to the
    /// neutral distribution for that key.
    #[must_use]
    pub fn new(happiness: f64, sadness: f64, anxiety: f64, anger: f64, calm: f64) -> Self {
        let neutral = Self::neutral();
        Self {
            happiness: sanitize(happiness, neutral.happiness),
            sadness: sanitize(sadness, neutral.sadness),
            anxiety: sanitize(anxiety, neutral.anxiety),
            anger: sanitize(anger, neutral.anger),
            calm: sanitize(calm, neutral.calm),
        }
    }

    /// Build a vector from whichever keys a classifier produced, imputing the
    /// rest (and any non-finite value) from `prior`
    #[must_use]
    pub fn from_partial(values: &BTreeMap<EmotionKey, f64>, prior: &Self) -> Self {
        let mut vector = *prior;
        for key in EmotionKey::ALL {
            if let Some(value) = values.get(&key).filter(|value| value.is_finite()) {
                vector.set(key, *value);
            }
        }
        vector
    }

    /// Intensity of `key`
    #[must_use]
    pub const fn get(&self, key: EmotionKey) -> f64 {
        match key {
            EmotionKey::Happiness => self.happiness,
            EmotionKey::Sadness => self.sadness,
            EmotionKey::Anxiety => self.anxiety,
            EmotionKey::Anger => self.anger,
            EmotionKey::Calm => self.calm,
        }
    }

    /// Happiness intensity
    #[must_use]
    pub const fn happiness(&self) -> f64 {
        self.happiness
    }

    /// Sadness intensity
    #[must_use]
    pub const fn sadness(&self) -> f64 {
        self.sadness
    }

    /// Anxiety intensity
    #[must_use]
    pub const fn anxiety(&self) -> f64 {
        self.anxiety
    }

    /// Anger intensity
    #[must_use]
    pub const fn anger(&self) -> f64 {
        self.anger
    }

    /// Calm intensity
    #[must_use]
    pub const fn calm(&self) -> f64 {
        self.calm
    }

    /// Iterate `(key, value)` pairs in wire order
    pub fn iter(&self) -> impl Iterator<Item = (EmotionKey, f64)> + '_ {
        EmotionKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }

    /// Key with the highest intensity (earliest key wins ties)
    #[must_use]
    pub fn dominant(&self) -> EmotionKey {
        self.iter()
            .fold((EmotionKey::Happiness, f64::NEG_INFINITY), |best, (key, value)| {
                if value > best.1 {
                    (key, value)
                } else {
                    best
                }
            })
            .0
    }

    fn set(&mut self, key: EmotionKey, value: f64) {
        let fallback = Self::neutral().get(key);
        let slot = match key {
            EmotionKey::Happiness => &mut self.happiness,
            EmotionKey::Sadness => &mut self.sadness,
            EmotionKey::Anxiety => &mut self.anxiety,
            EmotionKey::Anger => &mut self.anger,
            EmotionKey::Calm => &mut self.calm,
        };
        *slot = sanitize(value, fallback);
    }
}

fn sanitize(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        fallback
    }
}

/// Deserialization shape; absent keys are imputed from the neutral distribution
#[derive(Deserialize)]
struct PartialEmotions {
    happiness: Option<f64>,
    sadness: Option<f64>,
    anxiety: Option<f64>,
    anger: Option<f64>,
    calm: Option<f64>,
}

impl From<PartialEmotions> for EmotionVector {
    fn from(raw: PartialEmotions) -> Self {
        let values: BTreeMap<EmotionKey, f64> = [
            (EmotionKey::Happiness, raw.happiness),
            (EmotionKey::Sadness, raw.sadness),
            (EmotionKey::Anxiety, raw.anxiety),
            (EmotionKey::Anger, raw.anger),
            (EmotionKey::Calm, raw.calm),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect();
        Self::from_partial(&values, &Self::neutral())
    }
}
