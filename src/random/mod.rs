//! Random sources
//!
//! This module defines the `RandomSource` trait used by the number endpoint
//! and the strike simulator. Production code draws from the thread RNG;
//! tests inject a seeded source to get reproducible batches.

pub mod pseudo;

use crate::constants::random::{MAX, MIN};

/// Trait for uniform random draws
///
/// Implementations must be thread-safe (Send + Sync) to work with async server.
pub trait RandomSource: Send + Sync {
    /// Returns the source name (e.g., "thread", "seeded")
    fn name(&self) -> &'static str;

    /// Uniform integer in `[min, max]` inclusive
    fn int_in(&self, min: u32, max: u32) -> u32;

    /// Uniform float in `[min, max]`
    fn float_in(&self, min: f64, max: f64) -> f64;
}

/// Draw the number served by `/api/random`, uniform in `[1, 99]`
pub fn random_number(rng: &dyn RandomSource) -> u32 {
    rng.int_in(MIN, MAX)
}
