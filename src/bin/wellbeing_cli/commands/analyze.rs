// ABOUTME: Single-modality analysis commands replaying a recorded collaborator file
// ABOUTME: Text, audio, visual and questionnaire analysis through the async service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::print_json;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use wellbeing_assessor::config::AssessorConfig;
use wellbeing_assessor::intelligence::collaborators::AudioHandle;
use wellbeing_assessor::intelligence::QuestionnaireResponses;
use wellbeing_assessor::pipeline::AssessmentPipeline;
use wellbeing_assessor::replay::{RecordedCollaborators, Recording};
use wellbeing_assessor::AssessmentService;

/// Build a service whose collaborators replay `recording`
pub fn replay_service(config: &AssessorConfig, recording: &Path) -> Result<AssessmentService> {
    let recording = Recording::from_path(recording)?;
    let pipeline = AssessmentPipeline::new(config.intelligence.clone())?;
    let pipeline = RecordedCollaborators::new(recording).attach(pipeline);
    Ok(AssessmentService::new(pipeline, config.service))
}

/// Analyze free text given inline or read from a file
pub async fn text(
    service: &AssessmentService,
    text: Option<String>,
    file: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let text = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read text from {}", path.display()))?,
        (None, None) => String::new(),
    };
    info!(chars = text.chars().count(), "Analyzing text");
    let response = service.analyze_text(text).await;
    print_json(&response, pretty)
}

/// Analyze a recording on disk
pub async fn audio(service: &AssessmentService, audio: PathBuf, pretty: bool) -> Result<()> {
    info!(path = %audio.display(), "Analyzing audio");
    let response = service.analyze_audio(AudioHandle::new(audio)).await;
    print_json(&response, pretty)
}

/// Analyze a facial image on disk
pub async fn visual(service: &AssessmentService, image: &Path, pretty: bool) -> Result<()> {
    let bytes = fs::read(image)
        .with_context(|| format!("Failed to read image {}", image.display()))?;
    info!(path = %image.display(), bytes = bytes.len(), "Analyzing image");
    let response = service.analyze_visual(bytes).await;
    print_json(&response, pretty)
}

/// Score a questionnaire given as a JSON object of `question_N` to answer
pub async fn questionnaire(
    service: &AssessmentService,
    answers: &Path,
    pretty: bool,
) -> Result<()> {
    let raw = fs::read_to_string(answers)
        .with_context(|| format!("Failed to read answers from {}", answers.display()))?;
    let responses: QuestionnaireResponses =
        serde_json::from_str(&raw).context("Answers must be a JSON object of strings")?;
    info!(answers = responses.len(), "Analyzing questionnaire");
    let response = service.analyze_questionnaire(responses).await;
    print_json(&response, pretty)
}
