//! Swarm state and the PSO update equations.

use super::best::BestTracker;
use super::decoder::position_cost;
use super::particle::Particle;
use crate::matrix::DistanceMatrix;
use rand::Rng;

/// Fixed-size population of particles, updated in lockstep.
#[derive(Debug, Clone)]
pub struct Swarm {
    particles: Vec<Particle>,
}

impl Swarm {
    /// Creates `size` random particles of the given dimension.
    ///
    /// Keys are drawn particle by particle, dimension by dimension.
    pub fn random<R: Rng>(size: usize, dimension: usize, rng: &mut R) -> Self {
        let particles = (0..size)
            .map(|_| Particle::random(dimension, rng))
            .collect();
        Self { particles }
    }

    /// Wraps existing particles.
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Decodes every particle and stores the cost of its tour.
    pub fn evaluate(&mut self, matrix: &DistanceMatrix) {
        for particle in &mut self.particles {
            particle.fitness = position_cost(&particle.position, matrix);
        }
    }

    /// Recomputes every velocity from scratch:
    ///
    /// ```text
    /// v'[d] = w * v[d] + c * r1 * (pbest[d] - x[d]) + c * r2 * (gbest[d] - x[d])
    /// ```
    ///
    /// `r1` and `r2` are fresh uniform draws in `[0, 1)` for each particle
    /// and dimension, drawn in that order. No velocity limit is applied.
    pub fn update_velocities<R: Rng>(
        &mut self,
        bests: &BestTracker,
        inertia_weight: f64,
        acceleration: f64,
        rng: &mut R,
    ) {
        let global = &bests.global().position;

        for (particle, personal) in self.particles.iter_mut().zip(bests.personal()) {
            let personal = &personal.position;
            for d in 0..particle.position.len() {
                let x = particle.position[d];
                let r1: f64 = rng.random();
                let r2: f64 = rng.random();
                let cognitive = acceleration * r1 * (personal[d] - x);
                let social = acceleration * r2 * (global[d] - x);
                particle.velocity[d] = inertia_weight * particle.velocity[d] + cognitive + social;
            }
        }
    }

    /// Moves every particle by its velocity. Positions are not bounded.
    pub fn update_positions(&mut self) {
        for particle in &mut self.particles {
            for (x, v) in particle.position.iter_mut().zip(&particle.velocity) {
                *x += v;
            }
        }
    }
}
