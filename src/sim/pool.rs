//! The particle pool
//!
//! An owned, ordered, growable collection of live particles. The pool
//! exclusively owns every particle it holds; nothing else keeps a reference
//! across frames. Removal is a single retain pass over the backing vector,
//! so there is no splice-while-iterating bookkeeping to get wrong.

use serde::{Deserialize, Serialize};

use super::error::SimError;
use super::params::SimParams;
use super::particle::Particle;
use super::rng::SimRng;

/// The live particle population.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticlePool {
    particles: Vec<Particle>,
}

impl ParticlePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
        }
    }

    /// Live particle count
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// How many particles to spawn this frame: mean plus random variance,
    /// rounded, never negative.
    pub fn spawn_count(params: &SimParams, rng: &mut SimRng) -> usize {
        let n = params.new_particles_mean + rng.probability() * params.new_particles_variance;
        n.round().max(0.0) as usize
    }

    /// Remove every expired particle in one pass, preserving survivor order.
    /// Returns the number removed. A no-op on an empty pool.
    pub fn retire_expired(&mut self) -> usize {
        let before = self.particles.len();
        self.particles.retain(|p| !p.is_expired());
        before - self.particles.len()
    }

    /// Append a particle. If the allocator refuses to grow the pool, the
    /// pool keeps its prior state and the particle is dropped.
    pub fn insert(&mut self, particle: Particle) -> Result<(), SimError> {
        self.particles.try_reserve(1)?;
        self.particles.push(particle);
        Ok(())
    }

    /// Read-only view in pool order, for the renderer
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// In-order mutable traversal for the physics step
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn expired_particle() -> Particle {
        let mut p = Particle::spawn(&SimParams::default(), &mut SimRng::from_seed(0));
        p.age = p.lifespan + 1;
        p
    }

    #[test]
    fn test_retire_removes_every_expired_particle() {
        let params = SimParams::default();
        let mut rng = SimRng::from_seed(11);
        let mut pool = ParticlePool::new();

        // Interleave live and expired so a front-trim would miss some
        for i in 0..20 {
            let mut p = Particle::spawn(&params, &mut rng);
            if i % 3 == 0 {
                p.age = p.lifespan + 1;
            }
            pool.insert(p).unwrap();
        }

        let removed = pool.retire_expired();
        assert_eq!(removed, 7);
        assert!(pool.particles().iter().all(|p| !p.is_expired()));
    }

    #[test]
    fn test_retire_empties_fully_expired_pool() {
        let mut pool = ParticlePool::new();
        for _ in 0..10 {
            pool.insert(expired_particle()).unwrap();
        }
        assert_eq!(pool.retire_expired(), 10);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_retire_on_empty_pool_is_noop() {
        let mut pool = ParticlePool::new();
        assert_eq!(pool.retire_expired(), 0);
        assert_eq!(pool.retire_expired(), 0);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_retire_preserves_survivor_order() {
        let params = SimParams::default();
        let mut rng = SimRng::from_seed(23);
        let mut pool = ParticlePool::new();
        for i in 0..10 {
            let mut p = Particle::spawn(&params, &mut rng);
            p.age = if i % 2 == 0 { p.lifespan + 1 } else { i };
            pool.insert(p).unwrap();
        }
        pool.retire_expired();
        let ages: Vec<u32> = pool.particles().iter().map(|p| p.age).collect();
        assert_eq!(ages, vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_spawn_count_clamps_negative_to_zero() {
        let mut params = SimParams::default();
        params.new_particles_mean = -10.0;
        params.new_particles_variance = 0.0;
        let mut rng = SimRng::from_seed(1);
        assert_eq!(ParticlePool::spawn_count(&params, &mut rng), 0);
    }

    #[test]
    fn test_insert_appends_in_order() {
        let params = SimParams::default();
        let mut rng = SimRng::from_seed(2);
        let mut pool = ParticlePool::new();
        for i in 0..5 {
            let mut p = Particle::spawn(&params, &mut rng);
            p.age = i;
            pool.insert(p).unwrap();
        }
        let ages: Vec<u32> = pool.particles().iter().map(|p| p.age).collect();
        assert_eq!(ages, vec![0, 1, 2, 3, 4]);
    }

    proptest! {
        #[test]
        fn prop_spawn_count_within_bounds(
            mean in 0.0f32..200.0,
            variance in 0.0f32..50.0,
            seed in any::<u64>(),
        ) {
            let mut params = SimParams::default();
            params.new_particles_mean = mean;
            params.new_particles_variance = variance;
            let mut rng = SimRng::from_seed(seed);
            let n = ParticlePool::spawn_count(&params, &mut rng);
            prop_assert!(n >= mean.round() as usize);
            prop_assert!(n <= (mean + variance).round() as usize);
        }
    }
}
