use tracing::{debug, info, trace};

use super::options::{FireflyOptions, Goal, LogLevel};
use crate::{
    attraction::light,
    error::Result,
    objective::Objective,
    rng::RandomNumberGenerator,
    swarm::{update_position, Firefly, Population},
};

/// The outcome of a run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FireflyResult {
    /// The best firefly of the final population, ties broken by lowest index.
    pub best: Firefly,
    /// The best fitness observed so far, recorded after each generation.
    pub convergence: Vec<f64>,
    /// The number of sweeps performed: `generations + 1`.
    pub generations_run: usize,
    /// The number of objective evaluations, initialization included.
    pub evaluations: usize,
}

/// Runs the firefly algorithm against an objective.
#[derive(Debug, Clone)]
pub struct FireflyAlgorithm<Obj>
where
    Obj: Objective,
{
    options: FireflyOptions,
    objective: Obj,
}

impl<Obj> FireflyAlgorithm<Obj>
where
    Obj: Objective,
{
    /// Creates a new `FireflyAlgorithm` with the given run configuration and objective.
    pub fn new(options: FireflyOptions, objective: Obj) -> Self {
        Self { options, objective }
    }

    pub fn options(&self) -> &FireflyOptions {
        &self.options
    }

    pub fn objective(&self) -> &Obj {
        &self.objective
    }

    /// Optimizes the objective over the configured search space.
    ///
    /// The run initializes the population, then sweeps every ordered pair
    /// `(i, j)` with `i != j` (outer `i`, inner `j`, ascending) for generations
    /// `0..=generations`. When `i` appears brighter than `j` at their shared
    /// distance, `i` is moved toward `j`. Moves are applied immediately and are
    /// visible to every later pair in the same sweep.
    ///
    /// # Arguments
    ///
    /// * `rng` - The random source for initialization and perturbation.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options fail validation (checked before any objective evaluation)
    /// - The objective fails or returns a non-finite value
    ///
    /// # Example
    ///
    /// ```rust
    /// use firefly::algorithm::{FireflyAlgorithm, FireflyOptions};
    /// use firefly::benchmarks::Sphere;
    /// use firefly::rng::RandomNumberGenerator;
    ///
    /// let options = FireflyOptions::builder().swarm_size(20).generations(10).build();
    /// let algorithm = FireflyAlgorithm::new(options, Sphere);
    ///
    /// let result = algorithm.run(&mut RandomNumberGenerator::from_seed(3)).unwrap();
    /// assert_eq!(result.generations_run, 11);
    /// assert_eq!(result.best.dimension(), 2);
    /// ```
    pub fn run(&self, rng: &mut RandomNumberGenerator) -> Result<FireflyResult> {
        let options = &self.options;
        options.validate()?;

        let goal = options.get_goal();
        let swarm_size = options.get_swarm_size();

        let mut population =
            Population::initialize(swarm_size, options.get_search_space(), &self.objective, rng)?;
        let mut evaluations = swarm_size;
        let mut best_so_far = population.best(goal)?.fitness();
        let mut convergence = Vec::with_capacity(options.total_generations());

        for generation in 0..=options.get_generations() {
            self.log_generation(generation, &population, best_so_far);

            evaluations += self.sweep(generation, &mut population, &mut best_so_far, rng)?;

            convergence.push(best_so_far);
        }

        let best = population.best(goal)?.clone();

        if !matches!(options.get_log_level(), LogLevel::None) {
            info!(
                fitness = best.fitness(),
                position = ?best.position(),
                evaluations,
                "Optimization finished"
            );
        }

        Ok(FireflyResult {
            best,
            convergence,
            generations_run: options.total_generations(),
            evaluations,
        })
    }

    /// Compares every ordered pair once, moving the dimmer-appearing firefly
    /// of each pair. Returns the number of moves, one objective evaluation each.
    fn sweep(
        &self,
        generation: usize,
        population: &mut Population,
        best_so_far: &mut f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<usize> {
        let options = &self.options;
        let goal = options.get_goal();
        let gamma = options.get_gamma();
        let swarm_size = population.len();
        let mut moves = 0;

        for i in 0..swarm_size {
            for j in 0..swarm_size {
                if i == j {
                    continue;
                }

                let (firefly_i, fitness_i) = population.get(i)?.clone().into_parts();
                let (firefly_j, fitness_j) = population.get(j)?.clone().into_parts();

                let light_i = light(goal.key(fitness_i), &firefly_i, &firefly_j, gamma)?;
                let light_j = light(goal.key(fitness_j), &firefly_i, &firefly_j, gamma)?;

                if light_i > light_j {
                    let moved = update_position(
                        population,
                        i,
                        &firefly_i,
                        &firefly_j,
                        options,
                        &self.objective,
                        rng,
                    )?;
                    moves += 1;

                    if goal.is_better(moved.fitness(), *best_so_far) {
                        *best_so_far = moved.fitness();
                    }

                    if let LogLevel::Verbose = options.get_log_level() {
                        debug!(
                            generation,
                            from = i,
                            toward = j,
                            fitness = moved.fitness(),
                            "Firefly moved"
                        );
                    }
                }
            }
        }

        Ok(moves)
    }

    fn log_generation(&self, generation: usize, population: &Population, best_so_far: f64) {
        match self.options.get_log_level() {
            LogLevel::Minimal => {
                info!(generation, fitness = best_so_far, "Generation started");
            }
            LogLevel::Verbose => {
                info!(generation, fitness = best_so_far, "Generation started");
                population.iter().enumerate().for_each(|(index, firefly)| {
                    trace!(
                        generation,
                        index,
                        position = ?firefly.position(),
                        fitness = firefly.fitness(),
                        "Firefly"
                    );
                });
            }
            LogLevel::None => {}
        }
    }
}

impl<Obj> FireflyAlgorithm<Obj>
where
    Obj: Objective + Default,
{
    /// Creates a `FireflyAlgorithm` for a default-constructible objective.
    pub fn with_options(options: FireflyOptions) -> Self {
        Self::new(options, Obj::default())
    }
}

/// Returns true if `values` never gets worse for `goal`.
pub fn is_monotone(values: &[f64], goal: Goal) -> bool {
    values.windows(2).all(|w| !goal.is_better(w[0], w[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks::Sphere;
    use crate::bounds::SearchSpace;
    use crate::error::FireflyError;
    use std::cell::Cell;

    #[test]
    fn test_invalid_options_fail_before_evaluation() {
        let calls = Cell::new(0usize);
        let counting = |x: &[f64]| {
            calls.set(calls.get() + 1);
            x[0]
        };
        let options = FireflyOptions::builder().gamma(-1.0).build();
        let algorithm = FireflyAlgorithm::new(options, counting);

        let result = algorithm.run(&mut RandomNumberGenerator::from_seed(0));

        assert!(matches!(result, Err(FireflyError::InvalidConfiguration(_))));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_sweep_applies_moves_eagerly_in_pair_order() {
        // beta_0 = 0.5 with gamma near zero moves a firefly halfway to its target.
        let identity = |x: &[f64]| x[0];
        let options = FireflyOptions::builder()
            .swarm_size(3)
            .search_space(SearchSpace::uniform(-10.0, 10.0, 1).unwrap())
            .alpha_0(0.0)
            .beta_0(0.5)
            .gamma(1e-12)
            .build();
        let algorithm = FireflyAlgorithm::new(options, identity);
        let mut population =
            Population::from_positions(vec![vec![4.0], vec![2.0], vec![0.0]], &identity).unwrap();
        let mut best_so_far = 0.0;

        let moves = algorithm
            .sweep(0, &mut population, &mut best_so_far, &mut RandomNumberGenerator::from_seed(0))
            .unwrap();

        // (0,1): 4 -> 3, (0,2): 3 -> 1.5, (1,0) sees 1.5: 2 -> 1.75, (1,2): 1.75 -> 0.875.
        // Comparing against the sweep's starting positions would leave firefly 1 at 1.0.
        let expected = [1.5, 0.875, 0.0];
        assert_eq!(moves, 4);
        for (firefly, want) in population.iter().zip(expected) {
            assert!(
                (firefly.position()[0] - want).abs() < 1e-9,
                "got {:?}, expected {:?}",
                population.iter().map(|f| f.position()[0]).collect::<Vec<_>>(),
                expected
            );
            assert_eq!(firefly.fitness(), firefly.position()[0]);
        }
        assert_eq!(best_so_far, 0.0);
    }

    #[test]
    fn test_zero_generations_runs_one_sweep() {
        let options = FireflyOptions::builder().swarm_size(5).generations(0).build();
        let algorithm: FireflyAlgorithm<Sphere> = FireflyAlgorithm::with_options(options);

        let result = algorithm.run(&mut RandomNumberGenerator::from_seed(1)).unwrap();

        assert_eq!(result.generations_run, 1);
        assert_eq!(result.convergence.len(), 1);
    }

    #[test]
    fn test_evaluation_count() {
        let calls = Cell::new(0usize);
        let counting = |x: &[f64]| {
            calls.set(calls.get() + 1);
            x.iter().map(|v| v * v).sum::<f64>()
        };
        let options = FireflyOptions::builder().swarm_size(8).generations(4).build();
        let result = FireflyAlgorithm::new(options, &counting)
            .run(&mut RandomNumberGenerator::from_seed(2))
            .unwrap();

        assert_eq!(result.evaluations, calls.get());
        assert!(result.evaluations >= 8);
        // At most one move per ordered pair per sweep.
        assert!(result.evaluations <= 8 + 5 * 8 * 7);
    }

    #[test]
    fn test_single_firefly_never_moves() {
        let options = FireflyOptions::builder().swarm_size(1).generations(10).build();
        let result = FireflyAlgorithm::new(options, Sphere)
            .run(&mut RandomNumberGenerator::from_seed(3))
            .unwrap();

        assert_eq!(result.evaluations, 1);
        assert!(result.convergence.iter().all(|&f| f == result.best.fitness()));
    }

    #[test]
    fn test_same_seed_same_result() {
        let options = FireflyOptions::builder().swarm_size(10).generations(5).build();
        let algorithm = FireflyAlgorithm::new(options, Sphere);

        let a = algorithm.run(&mut RandomNumberGenerator::from_seed(77)).unwrap();
        let b = algorithm.run(&mut RandomNumberGenerator::from_seed(77)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_convergence_is_monotone() {
        let options = FireflyOptions::builder().swarm_size(15).generations(20).build();
        let result = FireflyAlgorithm::new(options, Sphere)
            .run(&mut RandomNumberGenerator::from_seed(4))
            .unwrap();

        assert!(is_monotone(&result.convergence, Goal::Minimize));
        assert_eq!(result.convergence.last().copied(), Some(result.best.fitness()));
    }

    #[test]
    fn test_is_monotone() {
        assert!(is_monotone(&[3.0, 2.0, 2.0, 1.0], Goal::Minimize));
        assert!(!is_monotone(&[3.0, 2.0, 2.5], Goal::Minimize));
        assert!(is_monotone(&[1.0, 2.0, 2.0], Goal::Maximize));
        assert!(is_monotone(&[], Goal::Maximize));
    }
}
