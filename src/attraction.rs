//! # Attractiveness model
//!
//! Both quantities here are exponential decays of the squared distance between
//! two positions, controlled by the light-absorption coefficient `gamma`:
//!
//! - [`beta`] is the weight pulling one firefly toward another.
//! - [`light`] is the apparent brightness of a firefly with intrinsic brightness
//!   `light_0`, as perceived across the distance between `x` and `y`.
//!
//! At distance zero both collapse to their base value exactly. A very large
//! `gamma` can make both underflow to zero for every pair, after which no firefly
//! is considered brighter than another and the swarm stops moving.

use crate::distance::squared_distance;
use crate::error::Result;

/// Computes `beta_0 * exp(-gamma * r^2)` where `r` is the distance between `x` and `y`.
///
/// # Example
///
/// ```rust
/// use firefly::attraction::beta;
///
/// let x = [1.0, 1.0];
/// assert_eq!(beta(&x, &x, 1.0, 1.0).unwrap(), 1.0);
/// assert!(beta(&x, &[2.0, 1.0], 1.0, 1.0).unwrap() < 1.0);
/// ```
pub fn beta(x: &[f64], y: &[f64], gamma: f64, beta_0: f64) -> Result<f64> {
    Ok(beta_0 * decay(x, y, gamma)?)
}

/// Computes `light_0 * exp(-gamma * r^2)` where `r` is the distance between `x` and `y`.
pub fn light(light_0: f64, x: &[f64], y: &[f64], gamma: f64) -> Result<f64> {
    Ok(light_0 * decay(x, y, gamma)?)
}

/// The shared `exp(-gamma * r^2)` factor.
pub(crate) fn decay(x: &[f64], y: &[f64], gamma: f64) -> Result<f64> {
    Ok((-gamma * squared_distance(x, y)?).exp())
}
