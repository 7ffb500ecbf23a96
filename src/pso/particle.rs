//! Particle representation.

use rand::Rng;

/// A candidate solution: a point in `R^n` plus its velocity.
///
/// The position is a vector of random keys; its tour is obtained with
/// [`super::decode_tour`]. Lower fitness is better.
///
/// `Clone` produces an independent deep copy, which is how personal and
/// global bests are stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Random keys, one per city.
    pub position: Vec<f64>,

    /// Per-dimension displacement applied at the next position update.
    pub velocity: Vec<f64>,

    /// Cost of the decoded tour; `+inf` until first evaluated.
    pub fitness: f64,
}

impl Particle {
    /// Creates a particle with keys drawn uniformly from `[0, 1)` and zero
    /// velocity.
    pub fn random<R: Rng>(dimension: usize, rng: &mut R) -> Self {
        let position: Vec<f64> = (0..dimension).map(|_| rng.random::<f64>()).collect();
        Self {
            position,
            velocity: vec![0.0; dimension],
            fitness: f64::INFINITY,
        }
    }

    /// Creates the placeholder best that any evaluated particle replaces.
    pub fn sentinel(dimension: usize) -> Self {
        Self {
            position: vec![0.0; dimension],
            velocity: vec![0.0; dimension],
            fitness: f64::INFINITY,
        }
    }

    /// Number of dimensions.
    pub fn dimension(&self) -> usize {
        self.position.len()
    }
}
