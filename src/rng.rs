//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct provides the random source for population
//! initialization and position perturbation, using the `rand` crate.
//!
//! ## Example
//!
//! ```rust
//! use firefly::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let x = rng.uniform(-5.0, 5.0);
//! assert!((-5.0..5.0).contains(&x));
//!
//! let noise = rng.signed_unit();
//! assert!((-0.5..0.5).contains(&noise));
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng`.
///
/// Seeding is optional; `from_seed` exists so that tests and benchmarks can
/// replay a run.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// # Arguments
    ///
    /// * `seed` - The seed to use for the random number generator.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a number uniformly from the half-open interval `[from, to)`.
    ///
    /// Callers must ensure `from < to`; `SearchSpace` guarantees this for bounds.
    pub fn uniform(&mut self, from: f64, to: f64) -> f64 {
        self.rng.gen_range(from..to)
    }

    /// Draws a number uniformly from `[-0.5, 0.5)`.
    pub fn signed_unit(&mut self) -> f64 {
        self.rng.gen::<f64>() - 0.5
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
