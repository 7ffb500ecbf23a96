//! Traveling Salesman Problem solver based on Particle Swarm Optimization.
//!
//! Provides:
//!
//! - **Distance matrix input**: comma-separated `n × n` cost matrices,
//!   validated on load ([`DistanceMatrix`]).
//! - **PSO engine**: a swarm of real-valued particles whose positions are
//!   decoded into tours by random-key ranking ([`pso`]).
//! - **Seeded randomness**: explicit generators, so runs are reproducible
//!   ([`random`]).
//!
//! # Example
//!
//! ```
//! use tsp_pso::{DistanceMatrix, PsoConfig, PsoRunner};
//!
//! let matrix = DistanceMatrix::parse("0,2,9,10\n1,0,6,4\n15,7,0,8\n6,3,12,0").unwrap();
//! let config = PsoConfig::default().with_max_iterations(200).with_seed(42);
//! let result = PsoRunner::run(&matrix, &config).unwrap();
//!
//! assert_eq!(result.best_tour.first(), result.best_tour.last());
//! assert!(result.best_cost <= result.cost_history[0]);
//! ```

pub mod error;
pub mod matrix;
pub mod pso;
pub mod random;

pub use error::{TspPsoError, TspPsoResult};
pub use matrix::DistanceMatrix;
pub use pso::{PsoConfig, PsoResult, PsoRunner};
