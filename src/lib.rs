//! # firefly
//!
//! A firefly algorithm optimizer for scalar objectives over box-bounded,
//! real-valued search spaces.
//!
//! ```rust
//! use firefly::algorithm::{FireflyAlgorithm, FireflyOptions};
//! use firefly::benchmarks::SixHumpCamelBack;
//! use firefly::rng::RandomNumberGenerator;
//!
//! let options = FireflyOptions::builder().swarm_size(40).generations(15).build();
//! let result = FireflyAlgorithm::new(options, SixHumpCamelBack)
//!     .run(&mut RandomNumberGenerator::new())
//!     .unwrap();
//!
//! println!("f({:?}) = {}", result.best.position(), result.best.fitness());
//! ```
pub mod algorithm;
pub mod attraction;
pub mod benchmarks;
pub mod bounds;
pub mod distance;
pub mod error;
pub mod objective;
pub mod rng;
pub mod swarm;

// Re-export commonly used types for convenience
pub use algorithm::{FireflyAlgorithm, FireflyOptions, FireflyResult, Goal, LogLevel};
pub use error::{FireflyError, OptionExt, Result};
pub use objective::{Objective, TryObjective};
