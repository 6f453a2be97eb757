// ABOUTME: Standalone scoring algorithms used alongside the modality analyzers
// ABOUTME: Currently voice modulation from acoustic feature summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Voice modulation scoring and interpretation
pub mod voice_modulation;
