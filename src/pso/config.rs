//! PSO configuration.

/// Default number of particles.
pub const DEFAULT_SWARM_SIZE: usize = 50;

/// Default number of iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 2000;

/// Largest accepted `max_iterations`. A run keeps one history entry per
/// iteration.
pub const MAX_ITERATIONS_LIMIT: usize = 1_000_000_000;

/// Default inertia weight (Clerc constriction value).
pub const DEFAULT_INERTIA_WEIGHT: f64 = 0.729844;

/// Default acceleration coefficient, shared by the cognitive and social terms.
pub const DEFAULT_ACCELERATION: f64 = 1.49618;

/// Configuration for the PSO algorithm.
///
/// The problem dimension is not part of the configuration: it is always
/// the city count of the distance matrix being solved.
///
/// # Examples
///
/// ```
/// use tsp_pso::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_swarm_size(30)
///     .with_max_iterations(500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoConfig {
    /// Number of particles in the swarm. Fixed for the run.
    pub swarm_size: usize,

    /// Number of iterations. The only termination criterion; 0 evaluates
    /// the initial swarm and stops.
    pub max_iterations: usize,

    /// Fraction of the previous velocity kept in each update (`w`).
    pub inertia_weight: f64,

    /// Scale of both the pull toward the personal best and the pull toward
    /// the global best (`c`).
    pub acceleration: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            swarm_size: DEFAULT_SWARM_SIZE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            inertia_weight: DEFAULT_INERTIA_WEIGHT,
            acceleration: DEFAULT_ACCELERATION,
            seed: None,
        }
    }
}

impl PsoConfig {
    /// Sets the number of particles.
    pub fn with_swarm_size(mut self, n: usize) -> Self {
        self.swarm_size = n;
        self
    }

    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the inertia weight `w`.
    pub fn with_inertia_weight(mut self, w: f64) -> Self {
        self.inertia_weight = w;
        self
    }

    /// Sets the acceleration coefficient `c`.
    pub fn with_acceleration(mut self, c: f64) -> Self {
        self.acceleration = c;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.swarm_size == 0 {
            return Err("swarm_size must be at least 1".into());
        }
        if self.max_iterations > MAX_ITERATIONS_LIMIT {
            return Err(format!(
                "max_iterations must be at most {MAX_ITERATIONS_LIMIT}, got {}",
                self.max_iterations
            ));
        }
        if !self.inertia_weight.is_finite() {
            return Err(format!(
                "inertia_weight must be finite, got {}",
                self.inertia_weight
            ));
        }
        if !self.acceleration.is_finite() {
            return Err(format!(
                "acceleration must be finite, got {}",
                self.acceleration
            ));
        }
        Ok(())
    }
}
