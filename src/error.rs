//! # Error Types
//!
//! This module defines the error types for the firefly optimizer. Every failure
//! is fatal to the run it occurs in; nothing here is retried.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use firefly::error::{FireflyError, Result};
//!
//! fn check_swarm(size: usize) -> Result<()> {
//!     if size == 0 {
//!         return Err(FireflyError::InvalidConfiguration(
//!             "Swarm size cannot be zero".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_swarm(0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use firefly::error::{FireflyError, OptionExt};
//!
//! fn first_fitness(values: &[f64]) -> firefly::error::Result<f64> {
//!     values.first().copied().ok_or_else_firefly(|| FireflyError::EmptyPopulation)
//! }
//! ```

use std::error::Error as StdError;
use thiserror::Error;

/// Represents errors that can occur while configuring or running the optimizer.
#[derive(Error, Debug)]
pub enum FireflyError {
    /// The run configuration is unusable. Raised before any objective evaluation.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An operation was called with arguments that violate its contract, such as
    /// vectors of different dimensions or a firefly index outside the population.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The objective function failed or produced a value that cannot be compared.
    #[error("Objective function failure: {0}")]
    ObjectiveFunction(String),

    /// An operation required at least one firefly.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,
}

/// A specialized Result type for firefly operations.
pub type Result<T> = std::result::Result<T, FireflyError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, FireflyError>` using
    /// a closure to generate the error.
    fn ok_or_else_firefly<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> FireflyError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_firefly<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> FireflyError,
    {
        self.ok_or_else(err_fn)
    }
}

/// Converts a standard error into an objective failure, keeping its message.
///
/// ## Examples
///
/// ```rust
/// use firefly::error::{to_objective_error, FireflyError};
/// use std::io;
///
/// let err = to_objective_error(io::Error::new(io::ErrorKind::Other, "solver crashed"), "simulation");
/// assert!(matches!(err, FireflyError::ObjectiveFunction(_)));
/// ```
pub fn to_objective_error<E: StdError>(error: E, context: &str) -> FireflyError {
    FireflyError::ObjectiveFunction(format!("{}: {}", context, error))
}
