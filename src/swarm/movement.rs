//! # Position update rule
//!
//! Moves one firefly toward a brighter one. For each dimension `j`:
//!
//! ```text
//! x'[j] = clamp(x[j] + beta(x, y) * (y[j] - x[j]) + alpha_0 * noise_j, min[j], max[j])
//! ```
//!
//! where `noise_j` is drawn fresh from `[-0.5, 0.5)` for every dimension. The
//! objective is then evaluated once at `x'` and the slot is overwritten with the
//! new position and fitness together.

use crate::{
    algorithm::options::FireflyOptions,
    attraction::beta,
    error::{FireflyError, Result},
    objective::{checked_fitness, Objective},
    rng::RandomNumberGenerator,
};

use super::{Firefly, Population};

/// Moves firefly `firefly` from `source` toward `target` and stores the result.
///
/// The new position is computed from `source` and `target` alone; the position
/// currently stored in slot `firefly` is not read. Callers moving a firefly of
/// the population pass a copy of that slot's position as `source` and a copy of
/// the brighter firefly's position as `target`, so the write cannot leak into
/// the values this update reads.
///
/// # Errors
///
/// Returns `InvalidArgument` if `firefly` is out of range or either vector does
/// not match the search space dimension, and the objective's error if the new
/// position cannot be evaluated. On error the population is left unchanged.
///
/// # Example
///
/// ```rust
/// use firefly::algorithm::FireflyOptions;
/// use firefly::benchmarks::Sphere;
/// use firefly::rng::RandomNumberGenerator;
/// use firefly::swarm::{update_position, Population};
///
/// let options = FireflyOptions::builder().swarm_size(2).alpha_0(0.0).build();
/// let mut rng = RandomNumberGenerator::from_seed(2);
/// let mut population =
///     Population::initialize(2, options.get_search_space(), &Sphere, &mut rng).unwrap();
///
/// let source = population.get(0).unwrap().position().to_vec();
/// let target = population.get(1).unwrap().position().to_vec();
/// let moved = update_position(&mut population, 0, &source, &target, &options, &Sphere, &mut rng)
///     .unwrap();
///
/// assert_eq!(moved.dimension(), 2);
/// ```
pub fn update_position<'p, O>(
    population: &'p mut Population,
    firefly: usize,
    source: &[f64],
    target: &[f64],
    options: &FireflyOptions,
    objective: &O,
    rng: &mut RandomNumberGenerator,
) -> Result<&'p Firefly>
where
    O: Objective + ?Sized,
{
    if firefly >= population.len() {
        return Err(FireflyError::InvalidArgument(format!(
            "Firefly index {} out of range for population of {}",
            firefly,
            population.len()
        )));
    }

    let space = options.get_search_space();
    if source.len() != space.dimension() || target.len() != space.dimension() {
        return Err(FireflyError::InvalidArgument(format!(
            "Expected vectors of dimension {}, got source {} and target {}",
            space.dimension(),
            source.len(),
            target.len()
        )));
    }

    // Constant across dimensions since both vectors are snapshots.
    let attraction = beta(source, target, options.get_gamma(), options.get_beta_0())?;
    let alpha_0 = options.get_alpha_0();

    let position: Vec<f64> = source
        .iter()
        .zip(target)
        .enumerate()
        .map(|(j, (&x, &y))| {
            let noise = rng.signed_unit();
            space.clamp(j, x + attraction * (y - x) + alpha_0 * noise)
        })
        .collect();

    let fitness = checked_fitness(objective, &position)?;
    population.replace(firefly, Firefly::new(position, fitness))
}
