//! Simulation random number generator
//!
//! One seeded PCG generator owned by the simulation. Seeding is explicit so
//! runs are reproducible in tests and replays; normal startup seeds from the
//! wall clock.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// The simulation's single random source.
#[derive(Debug, Clone)]
pub struct SimRng {
    rng: Pcg32,
    seed: u64,
}

impl SimRng {
    /// Generator with an explicit seed (reproducible)
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// Generator seeded from the wall clock, for a fresh run each process start
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x5eed);
        Self::from_seed(seed)
    }

    /// The seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform random value in [0, 1)
    #[inline]
    pub fn probability(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}
