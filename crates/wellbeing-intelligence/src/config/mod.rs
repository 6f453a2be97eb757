// ABOUTME: Configuration module for wellbeing-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Intelligence module configuration (analyzers, fusion, recommendations, questionnaire)
pub mod intelligence;

pub use intelligence::{ConfigError, IntelligenceConfig};
