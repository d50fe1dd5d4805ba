//! Euclidean distance between decision vectors.

use crate::error::{FireflyError, Result};

/// Returns the Euclidean distance between `x` and `y`.
///
/// # Errors
///
/// Returns `InvalidArgument` if the vectors differ in length.
///
/// # Example
///
/// ```rust
/// use firefly::distance::euclidean_distance;
///
/// let d = euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
/// assert_eq!(d, 5.0);
/// ```
pub fn euclidean_distance(x: &[f64], y: &[f64]) -> Result<f64> {
    squared_distance(x, y).map(f64::sqrt)
}

/// Returns the squared Euclidean distance between `x` and `y`.
///
/// The attraction formulas decay on the squared distance, so they use this
/// directly instead of squaring a square root.
pub fn squared_distance(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(FireflyError::InvalidArgument(format!(
            "Cannot measure distance between vectors of dimension {} and {}",
            x.len(),
            y.len()
        )));
    }
    Ok(x.iter().zip(y).map(|(a, b)| (a - b).powi(2)).sum())
}
