// ABOUTME: Ten-question wellbeing questionnaire analyzer using keyword hits and sentiment polarity
// ABOUTME: Produces per-category scores, an overall 0-30 score, insights and category recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Questionnaire Analyzer
//!
//! Each answer is scored in `[0, 1]` from two signals:
//!
//! - keyword hits against the category's lists (positive +1, negative -1,
//!   neutral +0.5), normalized as `(score + matches) / (2 * matches)`
//! - sentiment polarity `p` from the injected scorer, mapped to `(p + 1) / 2`
//!
//! With at least one keyword hit the two are averaged, otherwise the
//! sentiment alone is used.

use crate::collaborators::SentimentScorer;
use crate::config::intelligence::{CategoryKeywords, QuestionnaireConfig};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tracing::{debug, warn};
use wellbeing_core::constants::scales::WELLBEING_MAX;
use wellbeing_core::models::{
    round_to, AssessmentStatus, NeutralReason, QuestionnaireAssessment, QuestionnaireCategory,
    StatusBand, WellbeingScore,
};

/// Free-text answers keyed by question identifier (`question_1` .. `question_10`)
pub type QuestionnaireResponses = BTreeMap<String, String>;

/// Questionnaire analyzer
#[derive(Clone)]
pub struct QuestionnaireAnalyzer {
    sentiment: Arc<dyn SentimentScorer>,
    config: QuestionnaireConfig,
}

impl QuestionnaireAnalyzer {
    /// Build an analyzer around a sentiment scorer
    #[must_use]
    pub fn new(sentiment: Arc<dyn SentimentScorer>, config: QuestionnaireConfig) -> Self {
        Self { sentiment, config }
    }

    /// Score every answered question and derive insights
    #[must_use]
    pub fn analyze(&self, responses: &QuestionnaireResponses) -> QuestionnaireAssessment {
        let category_scores: BTreeMap<QuestionnaireCategory, f64> = responses
            .iter()
            .filter(|(_, answer)| !answer.trim().is_empty())
            .filter_map(|(question_id, answer)| {
                let category = QuestionnaireCategory::from_question_id(question_id);
                if category.is_none() {
                    debug!(question_id = %question_id, "ignoring unknown question");
                }
                category.map(|category| (category, self.score_answer(category, answer)))
            })
            .collect();

        if category_scores.is_empty() {
            debug!("no answered questions, returning unscored assessment");
            return QuestionnaireAssessment::unscored(NeutralReason::NoInput);
        }

        let mean = category_scores.values().sum::<f64>() / category_scores.len() as f64;
        let overall_score = WellbeingScore::new(round_to(mean * WELLBEING_MAX, 2));

        let mut insights = Vec::new();
        let mut recommendations = Vec::new();
        let mut seen = HashSet::new();
        for (category, score) in &category_scores {
            if *score < self.config.focus_below {
                insights.push(format!("Consider focusing on {}", category.words()));
                for item in category_recommendations(*category) {
                    if seen.insert(*item) {
                        recommendations.push((*item).to_owned());
                    }
                }
            } else if *score > self.config.strength_above {
                insights.push(format!("You're doing well with {}", category.words()));
            }
        }

        debug!(
            answered = category_scores.len(),
            overall = overall_score.value(),
            "questionnaire analyzed"
        );
        QuestionnaireAssessment {
            category_scores,
            overall_score,
            mental_health_status: AssessmentStatus::Band(StatusBand::from_score(overall_score)),
            insights,
            recommendations,
        }
    }

    /// Score a single answer in `[0, 1]`, rounded to two decimals
    #[must_use]
    pub fn score_answer(&self, category: QuestionnaireCategory, answer: &str) -> f64 {
        let (keyword_score, matches) = self
            .config
            .keywords_for(category)
            .map_or((0.0, 0), |keywords| keyword_hits(keywords, answer));

        let polarity = match self.sentiment.polarity(answer) {
            Ok(p) if p.is_finite() => p.clamp(-1.0, 1.0),
            Ok(p) => {
                warn!(polarity = p, "non-finite sentiment polarity, using 0");
                0.0
            }
            Err(error) => {
                warn!(error = %error, category = %category, "sentiment scoring failed, using 0");
                0.0
            }
        };
        let sentiment = (polarity + 1.0) / 2.0;

        let combined = if matches > 0 {
            let matches = f64::from(matches);
            let keyword = (keyword_score + matches) / (2.0 * matches);
            (keyword + sentiment) / 2.0
        } else {
            sentiment
        };
        round_to(combined.clamp(0.0, 1.0), 2)
    }
}

/// Keyword score and number of hits for a lowercased answer
fn keyword_hits(keywords: &CategoryKeywords, answer: &str) -> (f64, u32) {
    let answer = answer.to_lowercase();
    let mut score = 0.0;
    let mut matches = 0;
    for (words, weight) in [
        (&keywords.positive, 1.0),
        (&keywords.negative, -1.0),
        (&keywords.neutral, 0.5),
    ] {
        for word in words {
            if answer.contains(&word.to_lowercase()) {
                score += weight;
                matches += 1;
            }
        }
    }
    (score, matches)
}

/// Suggestions surfaced when a category needs attention
const fn category_recommendations(category: QuestionnaireCategory) -> &'static [&'static str] {
    match category {
        QuestionnaireCategory::EnergyLevel => &[
            "Try to maintain a consistent sleep schedule",
            "Include regular physical activity in your routine",
            "Stay hydrated throughout the day",
            "Take short breaks during work",
        ],
        QuestionnaireCategory::ThoughtPatterns => &[
            "Practice mindfulness meditation",
            "Keep a thought journal",
            "Challenge negative thoughts with positive alternatives",
            "Consider talking to a therapist",
        ],
        QuestionnaireCategory::SleepQuality => &[
            "Establish a bedtime routine",
            "Create a sleep-friendly environment",
            "Avoid screens before bedtime",
            "Try relaxation techniques before sleep",
        ],
        QuestionnaireCategory::SocialConnection => &[
            "Join social groups or clubs",
            "Reach out to friends and family regularly",
            "Participate in community activities",
            "Consider volunteering",
        ],
        QuestionnaireCategory::SelfRelationship => &[
            "Practice self-compassion exercises",
            "Write positive affirmations",
            "Celebrate small achievements",
            "Treat yourself with kindness",
        ],
        QuestionnaireCategory::Motivation => &[
            "Set small, achievable goals",
            "Break tasks into smaller steps",
            "Try new activities or hobbies",
            "Create a reward system for accomplishments",
        ],
        QuestionnaireCategory::StressManagement => &[
            "Learn stress management techniques",
            "Practice deep breathing exercises",
            "Take regular breaks",
            "Consider time management strategies",
        ],
        QuestionnaireCategory::Purpose => &[
            "Set meaningful goals",
            "Explore your interests and passions",
            "Connect with like-minded people",
            "Volunteer for causes you care about",
        ],
        QuestionnaireCategory::SelfCare => &[
            "Create a daily self-care routine",
            "Plan balanced meals",
            "Schedule regular exercise",
            "Practice good sleep hygiene",
        ],
        QuestionnaireCategory::LifeSatisfaction => &[
            "Identify areas for improvement",
            "Set realistic goals for change",
            "Focus on gratitude",
            "Seek professional guidance if needed",
        ],
    }
}
