// ABOUTME: Optional reproducible jitter applied to fusion components
// ABOUTME: ChaCha RNG reseeded from a fixed seed on every call, so equal inputs give equal outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::JitterConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Bounded multiplicative factors for the four fusion components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreJitter {
    seed: u64,
    spread: f64,
}

impl ScoreJitter {
    /// Jitter with factors drawn from `[1 - spread, 1 + spread]`
    #[must_use]
    pub fn new(seed: u64, spread: f64) -> Self {
        let spread = if spread.is_finite() {
            spread.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { seed, spread }
    }

    /// Jitter described by configuration, `None` when no seed is set
    #[must_use]
    pub fn from_config(config: &JitterConfig) -> Option<Self> {
        config.seed.map(|seed| Self::new(seed, config.spread))
    }

    /// Seed in use
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Factors for questionnaire, text, audio and visual, in that order
    #[must_use]
    pub fn factors(&self) -> [f64; 4] {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let range = (1.0 - self.spread)..=(1.0 + self.spread);
        [
            rng.gen_range(range.clone()),
            rng.gen_range(range.clone()),
            rng.gen_range(range.clone()),
            rng.gen_range(range),
        ]
    }
}
