//! # Population
//!
//! An ordered collection of exactly `swarm_size` fireflies, owned by the run
//! that created it. Slots are overwritten in place; the population never grows
//! or shrinks.

use crate::{
    algorithm::options::Goal,
    bounds::SearchSpace,
    error::{FireflyError, OptionExt, Result},
    objective::{checked_fitness, Objective},
    rng::RandomNumberGenerator,
};

use super::Firefly;

#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    fireflies: Vec<Firefly>,
}

impl Population {
    /// Creates `swarm_size` fireflies at positions drawn uniformly within
    /// `search_space`, evaluating the objective once for each.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `swarm_size` is zero, or the objective's
    /// error if any evaluation fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use firefly::benchmarks::Sphere;
    /// use firefly::bounds::SearchSpace;
    /// use firefly::rng::RandomNumberGenerator;
    /// use firefly::swarm::Population;
    ///
    /// let space = SearchSpace::uniform(-5.0, 5.0, 3).unwrap();
    /// let mut rng = RandomNumberGenerator::from_seed(1);
    /// let population = Population::initialize(10, &space, &Sphere, &mut rng).unwrap();
    ///
    /// assert_eq!(population.len(), 10);
    /// assert!(population.iter().all(|f| space.contains(f.position())));
    /// ```
    pub fn initialize<O>(
        swarm_size: usize,
        search_space: &SearchSpace,
        objective: &O,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self>
    where
        O: Objective + ?Sized,
    {
        if swarm_size == 0 {
            return Err(FireflyError::InvalidConfiguration(
                "Swarm size cannot be zero".to_string(),
            ));
        }

        let mut fireflies = Vec::with_capacity(swarm_size);
        for _ in 0..swarm_size {
            let position = search_space.sample(rng);
            let fitness = checked_fitness(objective, &position)?;
            fireflies.push(Firefly::new(position, fitness));
        }

        Ok(Self { fireflies })
    }

    /// Creates a population at the given positions, evaluating the objective
    /// once for each.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `positions` is empty, `InvalidArgument`
    /// if the positions differ in dimension, or the objective's error.
    pub fn from_positions<O>(positions: Vec<Vec<f64>>, objective: &O) -> Result<Self>
    where
        O: Objective + ?Sized,
    {
        let dimension = positions
            .first()
            .map(Vec::len)
            .ok_or_else_firefly(|| {
                FireflyError::InvalidConfiguration("Swarm size cannot be zero".to_string())
            })?;

        let fireflies = positions
            .into_iter()
            .map(|position| {
                if position.len() != dimension {
                    return Err(FireflyError::InvalidArgument(format!(
                        "Expected positions of dimension {}, got {}",
                        dimension,
                        position.len()
                    )));
                }
                let fitness = checked_fitness(objective, &position)?;
                Ok(Firefly::new(position, fitness))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { fireflies })
    }

    pub fn len(&self) -> usize {
        self.fireflies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fireflies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Firefly> {
        self.fireflies.iter()
    }

    pub fn as_slice(&self) -> &[Firefly] {
        &self.fireflies
    }

    /// Returns the firefly at `index`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `index` is out of range.
    pub fn get(&self, index: usize) -> Result<&Firefly> {
        let len = self.fireflies.len();
        self.fireflies.get(index).ok_or_else_firefly(|| {
            FireflyError::InvalidArgument(format!(
                "Firefly index {} out of range for population of {}",
                index, len
            ))
        })
    }

    /// Overwrites slot `index` with `firefly`, position and fitness together.
    pub(crate) fn replace(&mut self, index: usize, firefly: Firefly) -> Result<&Firefly> {
        let len = self.fireflies.len();
        let slot = self.fireflies.get_mut(index).ok_or_else_firefly(|| {
            FireflyError::InvalidArgument(format!(
                "Firefly index {} out of range for population of {}",
                index, len
            ))
        })?;
        *slot = firefly;
        Ok(&*slot)
    }

    /// Returns the best firefly for `goal`. Ties go to the lowest index.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` if there are no fireflies.
    pub fn best(&self, goal: Goal) -> Result<&Firefly> {
        self.fireflies
            .iter()
            .reduce(|best, candidate| {
                if goal.is_better(candidate.fitness(), best.fitness()) {
                    candidate
                } else {
                    best
                }
            })
            .ok_or_else_firefly(|| FireflyError::EmptyPopulation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks::Sphere;
    use std::cell::Cell;

    fn population_of(fitness: &[f64]) -> Population {
        Population {
            fireflies: fitness
                .iter()
                .enumerate()
                .map(|(i, &f)| Firefly::new(vec![i as f64], f))
                .collect(),
        }
    }

    #[test]
    fn test_initialize_evaluates_once_per_firefly() {
        let calls = Cell::new(0usize);
        let counting = |x: &[f64]| {
            calls.set(calls.get() + 1);
            x.iter().sum::<f64>()
        };
        let space = SearchSpace::uniform(-1.0, 1.0, 4).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(9);

        let population = Population::initialize(25, &space, &counting, &mut rng).unwrap();

        assert_eq!(calls.get(), 25);
        for firefly in population.iter() {
            assert_eq!(firefly.dimension(), 4);
            assert!(space.contains(firefly.position()));
            assert_eq!(firefly.fitness(), firefly.position().iter().sum::<f64>());
        }
    }

    #[test]
    fn test_initialize_rejects_zero_swarm() {
        let space = SearchSpace::default();
        let mut rng = RandomNumberGenerator::from_seed(0);
        assert!(matches!(
            Population::initialize(0, &space, &Sphere, &mut rng),
            Err(FireflyError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_initialize_is_deterministic_for_seed() {
        let space = SearchSpace::default();
        let a = Population::initialize(5, &space, &Sphere, &mut RandomNumberGenerator::from_seed(4))
            .unwrap();
        let b = Population::initialize(5, &space, &Sphere, &mut RandomNumberGenerator::from_seed(4))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_positions() {
        let population =
            Population::from_positions(vec![vec![1.0, 2.0], vec![0.0, -3.0]], &Sphere).unwrap();
        assert_eq!(population.len(), 2);
        assert_eq!(population.get(1).unwrap().fitness(), 9.0);

        assert!(matches!(
            Population::from_positions(Vec::new(), &Sphere),
            Err(FireflyError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Population::from_positions(vec![vec![1.0], vec![1.0, 2.0]], &Sphere),
            Err(FireflyError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_best_breaks_ties_by_lowest_index() {
        let population = population_of(&[3.0, 1.0, 2.0, 1.0]);
        let best = population.best(Goal::Minimize).unwrap();
        assert_eq!(best.position(), &[1.0]);

        let population = population_of(&[3.0, 5.0, 5.0, 1.0]);
        let best = population.best(Goal::Maximize).unwrap();
        assert_eq!(best.position(), &[1.0]);
    }

    #[test]
    fn test_best_on_empty_population() {
        let population = population_of(&[]);
        assert!(matches!(
            population.best(Goal::Minimize),
            Err(FireflyError::EmptyPopulation)
        ));
    }

    #[test]
    fn test_get_and_replace_out_of_range() {
        let mut population = population_of(&[1.0, 2.0]);
        assert!(matches!(population.get(2), Err(FireflyError::InvalidArgument(_))));
        assert!(population.replace(5, Firefly::new(vec![0.0], 0.0)).is_err());
        assert_eq!(population, population_of(&[1.0, 2.0]));
    }
}
