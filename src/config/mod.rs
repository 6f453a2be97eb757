// ABOUTME: Configuration module for the wellbeing assessor
// ABOUTME: Environment-only configuration for the service plus re-exported intelligence settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: service settings from environment variables
//! - **Intelligence**: analyzer, fusion, recommendation and questionnaire settings
//!
//! There are no configuration files; everything resolves from defaults plus
//! environment overrides.

/// Environment and service configuration
pub mod environment;

pub use environment::{AssessorConfig, ServiceConfig, DEFAULT_ANALYSIS_TIMEOUT_MS};
pub use wellbeing_intelligence::config::intelligence;
pub use wellbeing_intelligence::config::{ConfigError, IntelligenceConfig};
