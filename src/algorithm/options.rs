//! # FireflyOptions
//!
//! The `FireflyOptions` struct is the run configuration of the firefly algorithm:
//! swarm size, search space, generation count, the three model coefficients,
//! the optimization goal and the logging level. It is immutable for the
//! duration of a run.
//!
//! ## Example
//!
//! ```rust
//! use firefly::algorithm::options::{FireflyOptions, Goal, LogLevel};
//! use firefly::bounds::SearchSpace;
//!
//! let options = FireflyOptions::builder()
//!     .swarm_size(50)
//!     .search_space(SearchSpace::uniform(-5.0, 5.0, 2).unwrap())
//!     .generations(30)
//!     .alpha_0(0.2)
//!     .beta_0(1.0)
//!     .gamma(1.0)
//!     .goal(Goal::Minimize)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//!
//! assert!(options.validate().is_ok());
//! assert_eq!(options.total_generations(), 31);
//! ```
//!
//! ## Fields
//!
//! - `swarm_size`: The number of fireflies, fixed for the whole run.
//! - `search_space`: Per-dimension lower and upper limits.
//! - `generations`: The generation count `G`. The run performs `G + 1` sweeps.
//! - `alpha_0`: Scale of the random step added on every move.
//! - `beta_0`: Attractiveness at distance zero.
//! - `gamma`: Light-absorption coefficient.
//! - `goal`: Whether lower or higher objective values are better.
//! - `log_level`: How much progress is reported through `tracing`.

use crate::bounds::SearchSpace;
use crate::error::{FireflyError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

/// Which end of the objective's range the swarm is drawn to.
///
/// The pairwise comparison treats a firefly's comparison key as its light:
/// firefly `i` moves toward `j` when `i` appears brighter than `j` at their
/// shared distance. Under `Minimize` the key is the raw objective value, so
/// the higher-cost firefly moves toward the lower-cost one. Under `Maximize`
/// the key is the negated objective value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Goal {
    #[default]
    Minimize,
    Maximize,
}

impl Goal {
    /// Maps a raw fitness to the value used for light comparison and ranking.
    /// Smaller keys are better.
    pub fn key(&self, fitness: f64) -> f64 {
        match self {
            Goal::Minimize => fitness,
            Goal::Maximize => -fitness,
        }
    }

    /// Returns true if `candidate` is strictly better than `incumbent`.
    pub fn is_better(&self, candidate: f64, incumbent: f64) -> bool {
        self.key(candidate) < self.key(incumbent)
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FireflyOptions {
    swarm_size: usize,
    search_space: SearchSpace,
    generations: usize,
    alpha_0: f64,
    beta_0: f64,
    gamma: f64,
    goal: Goal,
    log_level: LogLevel,
}

impl FireflyOptions {
    pub fn new(
        swarm_size: usize,
        search_space: SearchSpace,
        generations: usize,
        alpha_0: f64,
        beta_0: f64,
        gamma: f64,
    ) -> Self {
        Self {
            swarm_size,
            search_space,
            generations,
            alpha_0,
            beta_0,
            gamma,
            goal: Goal::Minimize,
            log_level: LogLevel::None,
        }
    }

    pub fn get_swarm_size(&self) -> usize {
        self.swarm_size
    }

    pub fn get_search_space(&self) -> &SearchSpace {
        &self.search_space
    }

    pub fn get_dimension(&self) -> usize {
        self.search_space.dimension()
    }

    pub fn get_generations(&self) -> usize {
        self.generations
    }

    /// The number of sweeps a run performs: `generations + 1`.
    ///
    /// Generation counters run from `0` to `generations` inclusive.
    pub fn total_generations(&self) -> usize {
        self.generations + 1
    }

    pub fn get_alpha_0(&self) -> f64 {
        self.alpha_0
    }

    pub fn get_beta_0(&self) -> f64 {
        self.beta_0
    }

    pub fn get_gamma(&self) -> f64 {
        self.gamma
    }

    pub fn get_goal(&self) -> Goal {
        self.goal
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    /// Sets the optimization goal.
    pub fn set_goal(&mut self, goal: Goal) {
        self.goal = goal;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Checks every parameter that the model formulas depend on.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if:
    /// - the swarm size is zero
    /// - the search space is empty or has a dimension with `min >= max`
    /// - `alpha_0` is negative or not finite
    /// - `beta_0` or `gamma` is not strictly positive and finite
    pub fn validate(&self) -> Result<()> {
        if self.swarm_size == 0 {
            return Err(FireflyError::InvalidConfiguration(
                "Swarm size cannot be zero".to_string(),
            ));
        }

        self.search_space.validate()?;

        if !self.alpha_0.is_finite() || self.alpha_0 < 0.0 {
            return Err(FireflyError::InvalidConfiguration(format!(
                "alpha_0 must be a finite non-negative number, got {}",
                self.alpha_0
            )));
        }

        if !self.beta_0.is_finite() || self.beta_0 <= 0.0 {
            return Err(FireflyError::InvalidConfiguration(format!(
                "beta_0 must be a finite positive number, got {}",
                self.beta_0
            )));
        }

        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(FireflyError::InvalidConfiguration(format!(
                "gamma must be a finite positive number, got {}",
                self.gamma
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating a `FireflyOptions` instance.
    pub fn builder() -> FireflyOptionsBuilder {
        FireflyOptionsBuilder::default()
    }
}

impl Default for FireflyOptions {
    fn default() -> Self {
        Self {
            swarm_size: 3,
            search_space: SearchSpace::default(),
            generations: 50,
            alpha_0: 0.2,
            beta_0: 1.0,
            gamma: 1.0,
            goal: Goal::Minimize,
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `FireflyOptions`.
///
/// Unset fields fall back to the values of `FireflyOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct FireflyOptionsBuilder {
    swarm_size: Option<usize>,
    search_space: Option<SearchSpace>,
    generations: Option<usize>,
    alpha_0: Option<f64>,
    beta_0: Option<f64>,
    gamma: Option<f64>,
    goal: Option<Goal>,
    log_level: Option<LogLevel>,
}

impl FireflyOptionsBuilder {
    pub fn swarm_size(mut self, value: usize) -> Self {
        self.swarm_size = Some(value);
        self
    }

    pub fn search_space(mut self, value: SearchSpace) -> Self {
        self.search_space = Some(value);
        self
    }

    pub fn generations(mut self, value: usize) -> Self {
        self.generations = Some(value);
        self
    }

    pub fn alpha_0(mut self, value: f64) -> Self {
        self.alpha_0 = Some(value);
        self
    }

    pub fn beta_0(mut self, value: f64) -> Self {
        self.beta_0 = Some(value);
        self
    }

    pub fn gamma(mut self, value: f64) -> Self {
        self.gamma = Some(value);
        self
    }

    pub fn goal(mut self, value: Goal) -> Self {
        self.goal = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `FireflyOptions` instance. Validation happens at run start.
    pub fn build(self) -> FireflyOptions {
        let defaults = FireflyOptions::default();
        FireflyOptions {
            swarm_size: self.swarm_size.unwrap_or(defaults.swarm_size),
            search_space: self.search_space.unwrap_or(defaults.search_space),
            generations: self.generations.unwrap_or(defaults.generations),
            alpha_0: self.alpha_0.unwrap_or(defaults.alpha_0),
            beta_0: self.beta_0.unwrap_or(defaults.beta_0),
            gamma: self.gamma.unwrap_or(defaults.gamma),
            goal: self.goal.unwrap_or(defaults.goal),
            log_level: self.log_level.unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FireflyOptions::default();
        assert_eq!(options.get_swarm_size(), 3);
        assert_eq!(options.get_dimension(), 2);
        assert_eq!(options.get_generations(), 50);
        assert_eq!(options.total_generations(), 51);
        assert_eq!(options.get_alpha_0(), 0.2);
        assert_eq!(options.get_beta_0(), 1.0);
        assert_eq!(options.get_gamma(), 1.0);
        assert_eq!(options.get_goal(), Goal::Minimize);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let options = FireflyOptions::builder()
            .swarm_size(10)
            .generations(0)
            .gamma(0.5)
            .goal(Goal::Maximize)
            .build();
        assert_eq!(options.get_swarm_size(), 10);
        assert_eq!(options.total_generations(), 1);
        assert_eq!(options.get_gamma(), 0.5);
        assert_eq!(options.get_beta_0(), 1.0);
        assert_eq!(options.get_goal(), Goal::Maximize);
    }

    #[test]
    fn test_validate_rejects_zero_swarm() {
        let options = FireflyOptions::builder().swarm_size(0).build();
        match options.validate() {
            Err(FireflyError::InvalidConfiguration(msg)) => {
                assert!(msg.contains("Swarm size cannot be zero"));
            }
            _ => panic!("Expected InvalidConfiguration error"),
        }
    }

    #[test]
    fn test_validate_rejects_bad_coefficients() {
        assert!(FireflyOptions::builder().alpha_0(-0.1).build().validate().is_err());
        assert!(FireflyOptions::builder().alpha_0(f64::NAN).build().validate().is_err());
        assert!(FireflyOptions::builder().beta_0(0.0).build().validate().is_err());
        assert!(FireflyOptions::builder().gamma(0.0).build().validate().is_err());
        assert!(FireflyOptions::builder().gamma(f64::INFINITY).build().validate().is_err());
        assert!(FireflyOptions::builder().alpha_0(0.0).build().validate().is_ok());
    }

    #[test]
    fn test_goal_key() {
        assert!(Goal::Minimize.is_better(1.0, 2.0));
        assert!(Goal::Maximize.is_better(2.0, 1.0));
        assert!(!Goal::Minimize.is_better(1.0, 1.0));
        assert_eq!(Goal::Maximize.key(3.0), -3.0);
    }
}
