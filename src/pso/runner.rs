//! PSO main loop.
//!
//! [`PsoRunner`] orchestrates a fixed number of iterations of
//! evaluate → track bests → update velocities → update positions,
//! then reports the best tour ever found. Positions produced by the
//! last update are not evaluated.

use super::best::BestTracker;
use super::config::PsoConfig;
use super::decoder::{decode_tour, position_cost};
use super::swarm::Swarm;
use crate::error::{TspPsoError, TspPsoResult};
use crate::matrix::DistanceMatrix;
use crate::random::rng_from_option;
use rand::Rng;
use std::fmt;
use std::time::{Duration, Instant};

/// Result of a PSO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoResult {
    /// Closed tour of the global best: `n + 1` indices, first repeated last.
    pub best_tour: Vec<usize>,

    /// Random keys of the global best.
    pub best_position: Vec<f64>,

    /// Cost of the best tour.
    pub best_cost: f64,

    /// Number of iterations executed.
    ///
    /// The swarm is evaluated once per iteration, and at least once: a run
    /// of 0 iterations still evaluates the initial positions.
    pub iterations: usize,

    /// Global best cost after each evaluation. Length is
    /// `max(iterations, 1)`.
    pub cost_history: Vec<f64>,

    /// Wall-clock time spent optimizing.
    pub elapsed: Duration,
}

impl PsoResult {
    /// Best tour as `", "`-separated city indices.
    pub fn tour_string(&self) -> String {
        self.best_tour
            .iter()
            .map(|city| city.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Three-line run report: elapsed milliseconds, best cost, best tour.
impl fmt::Display for PsoResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Elapsed runtime (ms): {}", self.elapsed.as_millis())?;
        writeln!(f, "Best fitness: {}", self.best_cost)?;
        write!(f, "Best found path: {}", self.tour_string())
    }
}

/// Executes the PSO algorithm on a distance matrix.
///
/// # Usage
///
/// ```
/// use tsp_pso::{DistanceMatrix, PsoConfig, PsoRunner};
///
/// let matrix = DistanceMatrix::parse("0,1,2\n1,0,3\n2,3,0").unwrap();
/// let config = PsoConfig::default().with_max_iterations(50).with_seed(42);
/// let result = PsoRunner::run(&matrix, &config).unwrap();
/// assert_eq!(result.best_tour.len(), 4);
/// assert_eq!(result.best_cost, 6.0);
/// ```
pub struct PsoRunner;

impl PsoRunner {
    /// Runs PSO with a generator seeded from `config.seed` (or from OS
    /// entropy when no seed is set).
    pub fn run(matrix: &DistanceMatrix, config: &PsoConfig) -> TspPsoResult<PsoResult> {
        let mut rng = rng_from_option(config.seed);
        Self::run_with_rng(matrix, config, &mut rng)
    }

    /// Runs PSO drawing every random number from `rng`.
    ///
    /// `config.seed` is ignored. Draw order is: initial keys particle by
    /// particle, then per iteration, per particle, per dimension the
    /// cognitive draw followed by the social draw.
    pub fn run_with_rng<R: Rng>(
        matrix: &DistanceMatrix,
        config: &PsoConfig,
        rng: &mut R,
    ) -> TspPsoResult<PsoResult> {
        config.validate().map_err(TspPsoError::InvalidConfig)?;

        let start = Instant::now();
        let dimension = matrix.dimension();

        let mut swarm = Swarm::random(config.swarm_size, dimension, rng);
        let mut bests = BestTracker::new(config.swarm_size, dimension);
        let mut cost_history = Vec::new();

        // Initial evaluation, shared with iteration 0.
        swarm.evaluate(matrix);
        bests.update(&swarm);
        cost_history.push(bests.global().fitness);

        for iteration in 0..config.max_iterations {
            if iteration > 0 {
                swarm.evaluate(matrix);
                bests.update(&swarm);
                cost_history.push(bests.global().fitness);
            }

            swarm.update_velocities(
                &bests,
                config.inertia_weight,
                config.acceleration,
                rng,
            );
            swarm.update_positions();
        }

        let best = bests.global();
        Ok(PsoResult {
            best_tour: decode_tour(&best.position),
            best_position: best.position.clone(),
            best_cost: best.fitness,
            iterations: config.max_iterations,
            cost_history,
            elapsed: start.elapsed(),
        })
    }

    /// Cost of the tour encoded by `position`, checking its dimension.
    pub fn evaluate_position(matrix: &DistanceMatrix, position: &[f64]) -> TspPsoResult<f64> {
        if position.len() != matrix.dimension() {
            return Err(TspPsoError::DimensionMismatch {
                expected: matrix.dimension(),
                found: position.len(),
            });
        }
        Ok(position_cost(position, matrix))
    }
}
