//! # Search space bounds
//!
//! `Bounds` describes one dimension of the search space and `SearchSpace` the
//! per-dimension box every firefly lives in. A `SearchSpace` can only be built
//! from valid bounds, so code holding one may assume `min < max` everywhere.
//!
//! ## Example
//!
//! ```rust
//! use firefly::bounds::SearchSpace;
//!
//! let space = SearchSpace::new(&[-5.0, -5.0], &[5.0, 5.0]).unwrap();
//! assert_eq!(space.dimension(), 2);
//! assert_eq!(space.clamp(0, 7.5), 5.0);
//! ```

use crate::error::{FireflyError, Result};
use crate::rng::RandomNumberGenerator;

/// Bounds for a single dimension. Both ends are inclusive.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawBounds")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    /// Creates new bounds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if either end is not finite or `min >= max`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(FireflyError::InvalidConfiguration(format!(
                "Bounds must be finite, got [{}, {}]",
                min, max
            )));
        }
        if min >= max {
            return Err(FireflyError::InvalidConfiguration(format!(
                "Lower bound {} must be less than upper bound {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// The box-bounded domain of the decision vectors.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawSearchSpace")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSpace {
    bounds: Vec<Bounds>,
}

impl SearchSpace {
    /// Creates a search space from parallel lower and upper limit slices.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the slices are empty, differ in length,
    /// or any dimension has `min >= max`.
    pub fn new(min_values: &[f64], max_values: &[f64]) -> Result<Self> {
        if min_values.len() != max_values.len() {
            return Err(FireflyError::InvalidConfiguration(format!(
                "Bounds dimension mismatch: {} lower limits but {} upper limits",
                min_values.len(),
                max_values.len()
            )));
        }

        let bounds = min_values
            .iter()
            .zip(max_values)
            .enumerate()
            .map(|(j, (&min, &max))| Bounds::new(min, max).map_err(|e| in_dimension(j, e)))
            .collect::<Result<Vec<_>>>()?;

        Self::from_bounds(bounds)
    }

    /// Creates a search space from already validated per-dimension bounds.
    pub fn from_bounds(bounds: Vec<Bounds>) -> Result<Self> {
        if bounds.is_empty() {
            return Err(FireflyError::InvalidConfiguration(
                "Search space must have at least one dimension".to_string(),
            ));
        }
        Ok(Self { bounds })
    }

    /// Creates a search space with the same bounds in every dimension.
    pub fn uniform(min: f64, max: f64, dimension: usize) -> Result<Self> {
        let bound = Bounds::new(min, max)?;
        Self::from_bounds(vec![bound; dimension])
    }

    /// Re-checks the invariants the constructors establish.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the space has no dimensions or any
    /// dimension has non-finite limits or `min >= max`.
    pub fn validate(&self) -> Result<()> {
        if self.bounds.is_empty() {
            return Err(FireflyError::InvalidConfiguration(
                "Search space must have at least one dimension".to_string(),
            ));
        }
        for (j, b) in self.bounds.iter().enumerate() {
            Bounds::new(b.min, b.max).map_err(|e| in_dimension(j, e))?;
        }
        Ok(())
    }

    pub fn dimension(&self) -> usize {
        self.bounds.len()
    }

    pub fn bounds(&self) -> &[Bounds] {
        &self.bounds
    }

    /// Clamps `value` into the bounds of dimension `j`.
    ///
    /// # Panics
    ///
    /// Panics if `j >= self.dimension()`.
    pub fn clamp(&self, j: usize, value: f64) -> f64 {
        self.bounds[j].clamp(value)
    }

    /// Returns true if `position` has this space's dimension and lies inside it.
    pub fn contains(&self, position: &[f64]) -> bool {
        position.len() == self.bounds.len()
            && position
                .iter()
                .zip(&self.bounds)
                .all(|(&x, b)| b.contains(x))
    }

    /// Samples a position uniformly within the bounds, independently per dimension.
    pub fn sample(&self, rng: &mut RandomNumberGenerator) -> Vec<f64> {
        self.bounds
            .iter()
            .map(|b| rng.uniform(b.min, b.max))
            .collect()
    }
}

fn in_dimension(j: usize, error: FireflyError) -> FireflyError {
    match error {
        FireflyError::InvalidConfiguration(msg) => {
            FireflyError::InvalidConfiguration(format!("Dimension {}: {}", j, msg))
        }
        other => other,
    }
}

impl Default for SearchSpace {
    fn default() -> Self {
        Self {
            bounds: vec![Bounds { min: -5.0, max: 5.0 }; 2],
        }
    }
}

/// Unchecked wire form of [`Bounds`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBounds {
    min: f64,
    max: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBounds> for Bounds {
    type Error = FireflyError;

    fn try_from(raw: RawBounds) -> Result<Self> {
        Bounds::new(raw.min, raw.max)
    }
}

/// Unchecked wire form of [`SearchSpace`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSearchSpace {
    bounds: Vec<Bounds>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSearchSpace> for SearchSpace {
    type Error = FireflyError;

    fn try_from(raw: RawSearchSpace) -> Result<Self> {
        SearchSpace::from_bounds(raw.bounds)
    }
}
