// ABOUTME: Re-exports command modules for wellbeing-cli
// ABOUTME: Provides modality analysis replay and score fusion/recommendation commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod analyze;
pub mod score;

use anyhow::Result;
use serde::Serialize;

/// Print a payload as JSON on stdout
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
