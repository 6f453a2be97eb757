// ABOUTME: Wellbeing CLI - offline driver for the assessment pipeline
// ABOUTME: Replays recorded model outputs, fuses scores and prints JSON payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Analyze text against a recorded classifier output
//! wellbeing-cli text --recording session.json --text "I had a rough week"
//!
//! # Analyze a recording and a face image
//! wellbeing-cli audio --recording session.json --audio clip.wav
//! wellbeing-cli visual --recording session.json --image face.jpg
//!
//! # Score a questionnaire
//! wellbeing-cli questionnaire --recording session.json --answers answers.json
//!
//! # Fuse per-modality scores (missing scores count as neutral)
//! wellbeing-cli fuse --questionnaire 21 --text 17.5 --seed 42
//!
//! # Recommendations for a score and indicators
//! wellbeing-cli recommend --score 8 --anxiety 0.7 --eye-contact poor
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::score::{ExpressionArg, EyeContactArg, RecommendArgs};
use std::path::PathBuf;
use tracing::info;
use wellbeing_assessor::config::AssessorConfig;
use wellbeing_assessor::logging::LoggingConfig;
use wellbeing_assessor::pipeline::AssessmentPipeline;
use wellbeing_assessor::AssessmentService;

#[derive(Parser)]
#[command(
    name = "wellbeing-cli",
    about = "Wellbeing assessment CLI",
    long_about = "Offline driver for the wellbeing assessment pipeline. Model outputs are replayed from recording files."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Analyze free text
    Text {
        /// Recorded collaborator outputs
        #[arg(long)]
        recording: PathBuf,

        /// Text to analyze
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,

        /// Read the text from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Analyze a speech recording
    Audio {
        /// Recorded collaborator outputs
        #[arg(long)]
        recording: PathBuf,

        /// Decoded audio file
        #[arg(long)]
        audio: PathBuf,
    },

    /// Analyze a facial image
    Visual {
        /// Recorded collaborator outputs
        #[arg(long)]
        recording: PathBuf,

        /// Encoded image file
        #[arg(long)]
        image: PathBuf,
    },

    /// Score the ten-question questionnaire
    Questionnaire {
        /// Recorded collaborator outputs
        #[arg(long)]
        recording: PathBuf,

        /// JSON object mapping `question_N` to the answer text
        #[arg(long)]
        answers: PathBuf,
    },

    /// Fuse per-modality scores on the 0-30 scale
    Fuse {
        /// Questionnaire score
        #[arg(long)]
        questionnaire: Option<f64>,

        /// Text score
        #[arg(long)]
        text: Option<f64>,

        /// Audio score
        #[arg(long)]
        audio: Option<f64>,

        /// Visual score
        #[arg(long)]
        visual: Option<f64>,

        /// Enable reproducible jitter with this seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Recommendations for a score and optional indicators
    Recommend {
        /// Wellbeing score on the 0-30 scale (neutral if omitted)
        #[arg(long)]
        score: Option<f64>,

        /// Anxiety intensity in [0, 1]
        #[arg(long)]
        anxiety: Option<f64>,

        /// Depression intensity in [0, 1]
        #[arg(long)]
        depression: Option<f64>,

        /// Facial expression valence
        #[arg(long, value_enum)]
        facial_expression: Option<ExpressionArg>,

        /// Eye contact quality
        #[arg(long, value_enum)]
        eye_contact: Option<EyeContactArg>,
    },
}

fn plain_service(config: &AssessorConfig) -> Result<AssessmentService> {
    let pipeline = AssessmentPipeline::new(config.intelligence.clone())?;
    Ok(AssessmentService::new(pipeline, config.service))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let mut config = AssessorConfig::from_env()?;
    info!("Wellbeing CLI");

    match cli.command {
        Command::Text {
            recording,
            text,
            file,
        } => {
            let service = commands::analyze::replay_service(&config, &recording)?;
            commands::analyze::text(&service, text, file, cli.pretty).await?;
        }
        Command::Audio { recording, audio } => {
            let service = commands::analyze::replay_service(&config, &recording)?;
            commands::analyze::audio(&service, audio, cli.pretty).await?;
        }
        Command::Visual { recording, image } => {
            let service = commands::analyze::replay_service(&config, &recording)?;
            commands::analyze::visual(&service, &image, cli.pretty).await?;
        }
        Command::Questionnaire { recording, answers } => {
            let service = commands::analyze::replay_service(&config, &recording)?;
            commands::analyze::questionnaire(&service, &answers, cli.pretty).await?;
        }
        Command::Fuse {
            questionnaire,
            text,
            audio,
            visual,
            seed,
        } => {
            if seed.is_some() {
                config.intelligence.fusion.jitter.seed = seed;
            }
            let service = plain_service(&config)?;
            commands::score::fuse(&service, questionnaire, text, audio, visual, cli.pretty)
                .await?;
        }
        Command::Recommend {
            score,
            anxiety,
            depression,
            facial_expression,
            eye_contact,
        } => {
            let service = plain_service(&config)?;
            let args = RecommendArgs {
                score,
                anxiety,
                depression,
                facial_expression,
                eye_contact,
            };
            commands::score::recommend(&service, &args, cli.pretty)?;
        }
    }

    Ok(())
}
