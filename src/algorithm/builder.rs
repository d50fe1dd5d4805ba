use crate::{
    error::{FireflyError, Result},
    objective::Objective,
};

use super::{FireflyAlgorithm, FireflyOptions};

/// Assembles a [`FireflyAlgorithm`] from its parts.
///
/// ```rust
/// use firefly::algorithm::{FireflyAlgorithmBuilder, FireflyOptions};
/// use firefly::benchmarks::Rosenbrock;
///
/// let algorithm = FireflyAlgorithmBuilder::new()
///     .with_options(FireflyOptions::builder().swarm_size(30).build())
///     .with_objective(Rosenbrock)
///     .build()
///     .unwrap();
///
/// assert_eq!(algorithm.options().get_swarm_size(), 30);
/// ```
pub struct FireflyAlgorithmBuilder<Obj>
where
    Obj: Objective,
{
    options: Option<FireflyOptions>,
    objective: Option<Obj>,
}

impl<Obj> FireflyAlgorithmBuilder<Obj>
where
    Obj: Objective,
{
    pub fn new() -> Self {
        Self {
            options: None,
            objective: None,
        }
    }

    pub fn with_options(mut self, options: FireflyOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_objective(mut self, objective: Obj) -> Self {
        self.objective = Some(objective);
        self
    }

    /// Builds the algorithm. Options default to `FireflyOptions::default()`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if no objective was given or the options
    /// fail validation.
    pub fn build(self) -> Result<FireflyAlgorithm<Obj>> {
        let objective = self.objective.ok_or_else(|| {
            FireflyError::InvalidConfiguration("Objective function not specified".to_string())
        })?;

        let options = self.options.unwrap_or_default();
        options.validate()?;

        Ok(FireflyAlgorithm::new(options, objective))
    }
}

impl<Obj> Default for FireflyAlgorithmBuilder<Obj>
where
    Obj: Objective,
{
    fn default() -> Self {
        Self::new()
    }
}
