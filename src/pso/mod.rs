//! Particle Swarm Optimization for the Traveling Salesman Problem.
//!
//! Each particle holds a real-valued position with one random key per
//! city. A position is turned into a tour by ranking its keys
//! ([`decode_tour`]), so the canonical continuous PSO update rule can
//! search the space of permutations without modification.
//!
//! The engine is single-threaded and fully determined by its generator:
//! a fixed seed reproduces a run bit for bit.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle swarm optimization"
//! - Clerc & Kennedy (2002), "The particle swarm: explosion, stability, and
//!   convergence in a multidimensional complex space"
//! - Bean (1994), "Genetic algorithms and random keys for sequencing and optimization"

mod best;
mod config;
mod decoder;
mod particle;
mod runner;
mod swarm;

pub use best::BestTracker;
pub use config::{
    PsoConfig, DEFAULT_ACCELERATION, DEFAULT_INERTIA_WEIGHT, DEFAULT_MAX_ITERATIONS,
    DEFAULT_SWARM_SIZE, MAX_ITERATIONS_LIMIT,
};
pub use decoder::{decode_tour, position_cost, tour_cost};
pub use particle::Particle;
pub use runner::{PsoResult, PsoRunner};
pub use swarm::Swarm;
