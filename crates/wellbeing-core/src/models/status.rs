// ABOUTME: Ordered status bands over the wellbeing scale and neutral fallback statuses
// ABOUTME: Classification is a pure descending-threshold lookup, total over all reals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::score::WellbeingScore;
use crate::constants::{status_labels, status_thresholds};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative band attached to a wellbeing score.
///
/// Variants are declared worst to best so that `Ord` reads as "better than".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBand {
    /// Below 6
    Critical,
    /// 6 and above
    SevereDistress,
    /// 10 and above
    ModerateIssues,
    /// 14 and above
    MildImbalance,
    /// 18 and above
    StableButVulnerable,
    /// 22 and above
    Healthy,
}

/// Bands with an explicit lower threshold, highest first. Scores below the
/// last entry are `Critical`.
const THRESHOLDS: [(f64, StatusBand); 5] = [
    (status_thresholds::HEALTHY, StatusBand::Healthy),
    (
        status_thresholds::STABLE_BUT_VULNERABLE,
        StatusBand::StableButVulnerable,
    ),
    (status_thresholds::MILD_IMBALANCE, StatusBand::MildImbalance),
    (status_thresholds::MODERATE_ISSUES, StatusBand::ModerateIssues),
    (status_thresholds::SEVERE_DISTRESS, StatusBand::SevereDistress),
];

impl StatusBand {
    /// Every band, worst first
    pub const ALL: [Self; 6] = [
        Self::Critical,
        Self::SevereDistress,
        Self::ModerateIssues,
        Self::MildImbalance,
        Self::StableButVulnerable,
        Self::Healthy,
    ];

    /// Classify a raw score. The value is re-clamped first, so this is total.
    #[must_use]
    pub fn classify(score: f64) -> Self {
        Self::from_score(WellbeingScore::new(score))
    }

    /// Classify an already-validated score
    #[must_use]
    pub fn from_score(score: WellbeingScore) -> Self {
        let value = score.value();
        THRESHOLDS
            .iter()
            .find(|(threshold, _)| value >= *threshold)
            .map_or(Self::Critical, |(_, band)| *band)
    }

    /// Inclusive lower threshold of this band
    #[must_use]
    pub const fn lower_threshold(self) -> f64 {
        match self {
            Self::Healthy => status_thresholds::HEALTHY,
            Self::StableButVulnerable => status_thresholds::STABLE_BUT_VULNERABLE,
            Self::MildImbalance => status_thresholds::MILD_IMBALANCE,
            Self::ModerateIssues => status_thresholds::MODERATE_ISSUES,
            Self::SevereDistress => status_thresholds::SEVERE_DISTRESS,
            Self::Critical => 0.0,
        }
    }

    /// Wire label shown to users
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Healthy => "Mentally Healthy - Emotionally aware, good coping mechanisms",
            Self::StableButVulnerable => {
                "Stable but Vulnerable - Slight signs of worry, minor detachment"
            }
            Self::MildImbalance => "Mild Emotional Imbalance - Mood swings, early signs of stress",
            Self::ModerateIssues => "Moderate Issues Detected - Anxiety, emotional numbness",
            Self::SevereDistress => "Severe Mental Distress - Major depression, trauma, PTSD",
            Self::Critical => "Critical / Emergency - Severe emotional distress",
        }
    }
}

impl fmt::Display for StatusBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why an analyzer produced a neutral fallback instead of a measured score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeutralReason {
    /// The input carried nothing to analyze
    NoInput,
    /// A collaborator or computation failed
    AnalysisError,
    /// No usable face was found in the image
    NoFaceDetected,
}

impl NeutralReason {
    /// Wire label shown to users
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoInput => status_labels::NO_TEXT,
            Self::AnalysisError => status_labels::ANALYSIS_ERROR,
            Self::NoFaceDetected => status_labels::NO_FACE,
        }
    }
}

/// Status reported next to a score: a genuine band, or a neutral fallback
/// that is distinguishable from a real low score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum AssessmentStatus {
    /// Measured score classified into a band
    Band(StatusBand),
    /// Score is neutral because analysis could not run
    Neutral(NeutralReason),
}

impl AssessmentStatus {
    /// Wire label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Band(band) => band.label(),
            Self::Neutral(reason) => reason.label(),
        }
    }

    /// Whether this status marks a fallback
    #[must_use]
    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::Neutral(_))
    }

    /// Band, if the score was genuinely measured
    #[must_use]
    pub const fn band(self) -> Option<StatusBand> {
        match self {
            Self::Band(band) => Some(band),
            Self::Neutral(_) => None,
        }
    }
}

impl From<StatusBand> for AssessmentStatus {
    fn from(band: StatusBand) -> Self {
        Self::Band(band)
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<AssessmentStatus> for String {
    fn from(status: AssessmentStatus) -> Self {
        status.label().to_owned()
    }
}

impl TryFrom<String> for AssessmentStatus {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        StatusBand::ALL
            .into_iter()
            .map(Self::Band)
            .chain(
                [
                    NeutralReason::NoInput,
                    NeutralReason::AnalysisError,
                    NeutralReason::NoFaceDetected,
                ]
                .map(Self::Neutral),
            )
            .find(|status| status.label() == label)
            .ok_or_else(|| format!("unknown mental health status: {label}"))
    }
}
