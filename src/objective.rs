//! # Objective Trait
//!
//! The `Objective` trait is the seam between the optimizer and the function it
//! optimizes. An objective maps a decision vector to a scalar fitness and is
//! expected to be deterministic and free of side effects.
//!
//! Any `Fn(&[f64]) -> f64` is an objective:
//!
//! ```rust
//! use firefly::objective::Objective;
//!
//! let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
//! assert_eq!(sphere.evaluate(&[1.0, 2.0]).unwrap(), 5.0);
//! ```
//!
//! Fallible functions are wrapped in [`TryObjective`], whose errors abort the run:
//!
//! ```rust
//! use firefly::objective::{Objective, TryObjective};
//!
//! let log_cost = TryObjective::new(|x: &[f64]| x[0].to_string().parse::<f64>().map(f64::ln_1p));
//! assert!(log_cost.evaluate(&[0.0]).is_ok());
//! ```
//!
//! Implementing the trait directly:
//!
//! ```rust
//! use firefly::error::Result;
//! use firefly::objective::Objective;
//!
//! struct Shifted {
//!     offset: f64,
//! }
//!
//! impl Objective for Shifted {
//!     fn evaluate(&self, position: &[f64]) -> Result<f64> {
//!         Ok(position.iter().map(|x| (x - self.offset).powi(2)).sum())
//!     }
//! }
//! ```

use std::error::Error as StdError;

use crate::error::{to_objective_error, FireflyError, Result};

/// A scalar function over decision vectors.
pub trait Objective {
    /// Evaluates the objective at `position`.
    ///
    /// An error aborts the run that requested the evaluation.
    fn evaluate(&self, position: &[f64]) -> Result<f64>;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, position: &[f64]) -> Result<f64> {
        Ok(self(position))
    }
}

/// Adapts a fallible function into an [`Objective`].
///
/// The wrapped function's error is surfaced as `FireflyError::ObjectiveFunction`.
#[derive(Debug, Clone)]
pub struct TryObjective<F> {
    function: F,
}

impl<F> TryObjective<F> {
    pub fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F, E> Objective for TryObjective<F>
where
    F: Fn(&[f64]) -> std::result::Result<f64, E>,
    E: StdError,
{
    fn evaluate(&self, position: &[f64]) -> Result<f64> {
        (self.function)(position).map_err(|e| to_objective_error(e, "Objective evaluation failed"))
    }
}

/// Evaluates `objective` and rejects values that cannot be compared.
pub(crate) fn checked_fitness<O>(objective: &O, position: &[f64]) -> Result<f64>
where
    O: Objective + ?Sized,
{
    let fitness = objective.evaluate(position)?;
    if !fitness.is_finite() {
        return Err(FireflyError::ObjectiveFunction(format!(
            "Non-finite fitness {} at position {:?}",
            fitness, position
        )));
    }
    Ok(fitness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::ParseFloatError;

    fn linear(x: &[f64]) -> f64 {
        x.iter().sum()
    }

    #[test]
    fn test_fn_item_is_objective() {
        assert_eq!(linear.evaluate(&[1.0, 2.0, 3.0]).unwrap(), 6.0);
    }

    #[test]
    fn test_try_objective_maps_error() {
        let failing = TryObjective::new(|_: &[f64]| "x".parse::<f64>());
        match failing.evaluate(&[0.0]) {
            Err(FireflyError::ObjectiveFunction(msg)) => {
                assert!(msg.contains("Objective evaluation failed"));
            }
            _ => panic!("Expected ObjectiveFunction error"),
        }
    }

    #[test]
    fn test_try_objective_passes_value() {
        let ok = TryObjective::new(|x: &[f64]| -> std::result::Result<f64, ParseFloatError> {
            Ok(x[0] * 2.0)
        });
        assert_eq!(ok.evaluate(&[1.5]).unwrap(), 3.0);
    }

    #[test]
    fn test_checked_fitness_rejects_nan() {
        let nan = |_: &[f64]| f64::NAN;
        assert!(matches!(
            checked_fitness(&nan, &[0.0]),
            Err(FireflyError::ObjectiveFunction(_))
        ));
        let inf = |_: &[f64]| f64::NEG_INFINITY;
        assert!(checked_fitness(&inf, &[0.0]).is_err());
    }
}
