/// A candidate solution: a position in the search space and the objective
/// value at that position.
///
/// Fireflies are only created by evaluating the objective, so the cached
/// fitness always belongs to the position it is stored with.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Firefly {
    position: Vec<f64>,
    fitness: f64,
}

impl Firefly {
    pub(crate) fn new(position: Vec<f64>, fitness: f64) -> Self {
        Self { position, fitness }
    }

    pub fn position(&self) -> &[f64] {
        &self.position
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn dimension(&self) -> usize {
        self.position.len()
    }

    /// Consumes the firefly, returning its position and fitness.
    pub fn into_parts(self) -> (Vec<f64>, f64) {
        (self.position, self.fitness)
    }
}
