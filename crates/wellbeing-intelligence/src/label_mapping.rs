// ABOUTME: Fixed tables mapping raw collaborator labels onto emotion keys
// ABOUTME: Case-insensitive matching; labels sharing a key are averaged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use wellbeing_core::models::EmotionKey;

/// Which collaborator vocabulary to map from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelTable {
    /// Text classifier labels: joy, sadness, fear, anger, neutral
    Text,
    /// Seven-class labels shared by the acoustic and face models
    SevenClass,
}

impl LabelTable {
    /// Emotion key for a raw label, `None` for labels outside the table
    #[must_use]
    pub fn key_for(self, label: &str) -> Option<EmotionKey> {
        let label = label.trim().to_ascii_lowercase();
        match self {
            Self::Text => match label.as_str() {
                "joy" => Some(EmotionKey::Happiness),
                "sadness" => Some(EmotionKey::Sadness),
                "fear" => Some(EmotionKey::Anxiety),
                "anger" => Some(EmotionKey::Anger),
                "neutral" => Some(EmotionKey::Calm),
                _ => None,
            },
            Self::SevenClass => match label.as_str() {
                "happy" => Some(EmotionKey::Happiness),
                "sad" => Some(EmotionKey::Sadness),
                "fear" | "surprise" => Some(EmotionKey::Anxiety),
                "angry" | "disgust" => Some(EmotionKey::Anger),
                "neutral" => Some(EmotionKey::Calm),
                _ => None,
            },
        }
    }

    /// Map raw scores onto emotion keys.
    ///
    /// Each score is divided by `scale` (1 for probabilities, 100 for
    /// percentages). Unknown labels and non-finite scores are dropped; labels
    /// that share a key are averaged. Keys with no contributing label are
    /// absent from the result.
    pub fn map<'a>(
        self,
        scores: impl IntoIterator<Item = (&'a str, f64)>,
        scale: f64,
    ) -> BTreeMap<EmotionKey, f64> {
        let mut sums: BTreeMap<EmotionKey, (f64, u32)> = BTreeMap::new();
        for (label, score) in scores {
            let Some(key) = self.key_for(label) else {
                continue;
            };
            if !score.is_finite() {
                continue;
            }
            let entry = sums.entry(key).or_insert((0.0, 0));
            entry.0 += score / scale;
            entry.1 += 1;
        }
        sums.into_iter()
            .map(|(key, (sum, count))| (key, sum / f64::from(count)))
            .collect()
    }
}

/// Highest-scoring raw label, lowercased. Non-finite scores are ignored and
/// the earliest label wins ties.
pub fn dominant_label<'a>(scores: impl IntoIterator<Item = (&'a str, f64)>) -> Option<String> {
    scores
        .into_iter()
        .filter(|(_, score)| score.is_finite())
        .fold(None::<(&str, f64)>, |best, (label, score)| match best {
            Some((_, best_score)) if score <= best_score => best,
            _ => Some((label, score)),
        })
        .map(|(label, _)| label.trim().to_ascii_lowercase())
}
