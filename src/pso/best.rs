//! Personal and global best tracking.

use super::particle::Particle;
use super::swarm::Swarm;

/// Best-ever snapshots, one per particle index plus one for the swarm.
///
/// Snapshots are deep copies, so later moves of the live particles never
/// alter a stored best. Replacement requires a strictly lower fitness:
/// among equal fitness values the earliest found is kept.
#[derive(Debug, Clone)]
pub struct BestTracker {
    personal: Vec<Particle>,
    global: Particle,
}

impl BestTracker {
    /// Creates `swarm_size` personal bests and one global best, all
    /// sentinels with `+inf` fitness.
    pub fn new(swarm_size: usize, dimension: usize) -> Self {
        Self {
            personal: vec![Particle::sentinel(dimension); swarm_size],
            global: Particle::sentinel(dimension),
        }
    }

    pub fn personal(&self) -> &[Particle] {
        &self.personal
    }

    pub fn global(&self) -> &Particle {
        &self.global
    }

    /// Folds the swarm's current fitness values into the bests.
    ///
    /// # Panics
    /// Panics if the swarm size differs from the tracker size.
    pub fn update(&mut self, swarm: &Swarm) {
        assert_eq!(
            swarm.particles().len(),
            self.personal.len(),
            "swarm size changed during the run"
        );

        for (best, particle) in self.personal.iter_mut().zip(swarm.particles()) {
            if particle.fitness < best.fitness {
                *best = particle.clone();
            }
        }

        if let Some(min) = self
            .personal
            .iter()
            .min_by(|a, b| a.fitness.total_cmp(&b.fitness))
        {
            if min.fitness < self.global.fitness {
                self.global = min.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn swarm_with(fitness: &[f64]) -> Swarm {
        Swarm::from_particles(
            fitness
                .iter()
                .enumerate()
                .map(|(i, &f)| Particle {
                    position: vec![i as f64, -(i as f64)],
                    velocity: vec![0.1 * i as f64, 0.0],
                    fitness: f,
                })
                .collect(),
        )
    }

    #[test]
    fn test_first_update_replaces_sentinels() {
        let mut bests = BestTracker::new(3, 2);
        bests.update(&swarm_with(&[5.0, 2.0, 7.0]));
        let fits: Vec<f64> = bests.personal().iter().map(|p| p.fitness).collect();
        assert_eq!(fits, vec![5.0, 2.0, 7.0]);
        assert_eq!(bests.global().fitness, 2.0);
        assert_eq!(bests.global().position, vec![1.0, -1.0]);
        assert_eq!(bests.global().velocity, vec![0.1, 0.0]);
    }

    #[test]
    fn test_worse_fitness_keeps_personal_best() {
        let mut bests = BestTracker::new(2, 2);
        bests.update(&swarm_with(&[5.0, 2.0]));
        bests.update(&swarm_with(&[6.0, 3.0]));
        assert_eq!(bests.personal()[0].fitness, 5.0);
        assert_eq!(bests.personal()[1].fitness, 2.0);
        assert_eq!(bests.global().fitness, 2.0);
    }

    #[test]
    fn test_equal_fitness_keeps_earliest() {
        let mut bests = BestTracker::new(2, 2);
        bests.update(&swarm_with(&[4.0, 4.0]));
        // The first index with the minimum wins.
        assert_eq!(bests.global().position, vec![0.0, 0.0]);

        let mut later = swarm_with(&[4.0, 4.0]);
        let mut moved = later.particles().to_vec();
        moved[0].position = vec![9.0, 9.0];
        later = Swarm::from_particles(moved);
        bests.update(&later);
        assert_eq!(bests.global().position, vec![0.0, 0.0]);
        assert_eq!(bests.personal()[0].position, vec![0.0, 0.0]);
    }

    #[test]
    fn test_global_never_above_min_personal() {
        let mut bests = BestTracker::new(3, 2);
        for round in [[9.0, 8.0, 7.0], [3.0, 8.5, 7.5], [4.0, 1.0, 6.0], [5.0, 5.0, 5.0]] {
            bests.update(&swarm_with(&round));
            let min = bests
                .personal()
                .iter()
                .map(|p| p.fitness)
                .fold(f64::INFINITY, f64::min);
            assert_eq!(bests.global().fitness, min);
        }
        assert_eq!(bests.global().fitness, 1.0);
    }

    #[test]
    fn test_bests_survive_swarm_moves() {
        let mut swarm = swarm_with(&[3.0, 1.0, 2.0]);
        let mut bests = BestTracker::new(3, 2);
        bests.update(&swarm);

        let personal_before: Vec<Particle> = bests.personal().to_vec();
        let global_before = bests.global().clone();

        let mut rng = create_rng(5);
        for _ in 0..3 {
            swarm.update_velocities(&bests, 0.729844, 1.49618, &mut rng);
            swarm.update_positions();
        }
        assert_ne!(swarm.particles()[0].position, personal_before[0].position);

        for (stored, before) in bests.personal().iter().zip(&personal_before) {
            assert_eq!(stored.position, before.position);
            assert_eq!(stored.velocity, before.velocity);
            assert_eq!(stored.fitness, before.fitness);
        }
        assert_eq!(bests.global(), &global_before);
    }

    #[test]
    #[should_panic(expected = "swarm size changed")]
    fn test_size_mismatch_panics() {
        let mut bests = BestTracker::new(2, 2);
        bests.update(&swarm_with(&[1.0]));
    }
}
