//! Injectable randomness for the simulation
//!
//! Every random branch in the handlers (which peer is picked, whether a
//! human replies, whether a call is accepted, whether an incoming call
//! arrives, how long a reply takes) draws from a [`RandomSource`] held by
//! `AppState`, so tests can force each outcome.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws
pub trait RandomSource: Send + std::fmt::Debug {
    /// Uniform draw in `[0, 1)`
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick from an empty range");
        ((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
    }

    /// True with the given probability
    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }
}

/// `rand`-backed source used at runtime
#[derive(Debug)]
pub struct ThreadRandom {
    rng: StdRng,
}

impl ThreadRandom {
    /// Seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of draws, then repeats a fallback value
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            fallback: 0.0,
        }
    }

    /// Value returned once the script runs out
    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    /// Append more draws to the script
    pub fn push(&mut self, draw: f64) {
        self.draws.push_back(draw);
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        self.draws.pop_front().unwrap_or(self.fallback)
    }
}
