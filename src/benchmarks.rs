//! Standard test functions with known minima.

use crate::error::{FireflyError, Result};
use crate::objective::Objective;

/// `f(x) = sum(x_i^2)`. Minimum 0 at the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sphere;

impl Objective for Sphere {
    fn evaluate(&self, position: &[f64]) -> Result<f64> {
        Ok(position.iter().map(|x| x * x).sum())
    }
}

/// Six-Hump Camel-Back, defined on two dimensions.
///
/// Two global minima `f ≈ -1.0316` at `(0.0898, -0.7126)` and `(-0.0898, 0.7126)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SixHumpCamelBack;

impl SixHumpCamelBack {
    pub const MINIMUM: f64 = -1.031_628_453_489_877;
}

impl Objective for SixHumpCamelBack {
    fn evaluate(&self, position: &[f64]) -> Result<f64> {
        let [x1, x2] = position else {
            return Err(FireflyError::InvalidArgument(format!(
                "Six-Hump Camel-Back is two-dimensional, got {} dimensions",
                position.len()
            )));
        };
        let (x1, x2) = (*x1, *x2);
        Ok(4.0 * x1.powi(2) - 2.1 * x1.powi(4) + x1.powi(6) / 3.0 + x1 * x2 - 4.0 * x2.powi(2)
            + 4.0 * x2.powi(4))
    }
}

/// Rosenbrock's valley. Minimum 0 at `(1, ..., 1)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rosenbrock;

impl Objective for Rosenbrock {
    fn evaluate(&self, position: &[f64]) -> Result<f64> {
        Ok(position
            .windows(2)
            .map(|w| 100.0 * (w[1] - w[0].powi(2)).powi(2) + (1.0 - w[0]).powi(2))
            .sum())
    }
}
