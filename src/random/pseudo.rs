//! Pseudo-random sources
//!
//! Uses the `rand` crate. `ThreadRandom` backs the running server,
//! `SeededRandom` gives deterministic sequences for tests and the
//! `simulate --seed` command.

use crate::random::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Thread-local RNG source
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    /// Create a new thread RNG source
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn name(&self) -> &'static str {
        "thread"
    }

    fn int_in(&self, min: u32, max: u32) -> u32 {
        rand::thread_rng().gen_range(min..=max)
    }

    fn float_in(&self, min: f64, max: f64) -> f64 {
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Seeded pseudo-random source for deterministic testing
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Create a new seeded source
    ///
    /// Using the same seed will produce the same sequence of random values.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn name(&self) -> &'static str {
        "seeded"
    }

    fn int_in(&self, min: u32, max: u32) -> u32 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(min..=max)
    }

    fn float_in(&self, min: f64, max: f64) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(min..=max)
    }
}
