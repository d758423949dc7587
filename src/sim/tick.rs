//! Per-frame simulation step
//!
//! Retire, spawn, advance, tick the clock - in that exact order. Spawning
//! before advancing means a droplet created this frame takes its first
//! physics step immediately and ends the frame at age 1; reordering these
//! phases visibly changes spawn timing, so the order is load-bearing.

use serde::{Deserialize, Serialize};

use super::error::SimError;
use super::params::SimParams;
use super::particle::Particle;
use super::pool::ParticlePool;
use super::rng::SimRng;

/// What a single frame step did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameStats {
    /// Particles created this frame
    pub spawned: usize,
    /// Particles retired this frame
    pub retired: usize,
    /// Live population after the step
    pub live: usize,
    /// Clock value after the step
    pub clock: u64,
}

/// A running waterfall: pool, tuning, RNG, and clock.
///
/// Everything is single-threaded and frame-driven. [`advance_frame`] takes
/// the simulation by `&mut`, so parameter tuning through [`params_mut`]
/// can only happen between frames - the borrow checker enforces the strict
/// alternation the model requires.
///
/// [`params_mut`]: Simulation::params_mut
#[derive(Debug, Clone)]
pub struct Simulation {
    params: SimParams,
    pool: ParticlePool,
    rng: SimRng,
    clock: u64,
}

impl Simulation {
    /// Simulation with an explicit RNG seed (reproducible)
    pub fn new(params: SimParams, seed: u64) -> Self {
        Self {
            params,
            pool: ParticlePool::new(),
            rng: SimRng::from_seed(seed),
            clock: 0,
        }
    }

    /// Simulation seeded from the wall clock
    pub fn from_time(params: SimParams) -> Self {
        let rng = SimRng::from_time();
        log::info!("Simulation seeded with {:#x}", rng.seed());
        Self {
            params,
            pool: ParticlePool::new(),
            rng,
            clock: 0,
        }
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Mutable tuning handle for input handling, usable only between frames
    pub fn params_mut(&mut self) -> &mut SimParams {
        &mut self.params
    }

    /// Read-only view of the live population, in pool order, for the renderer
    pub fn particles(&self) -> &[Particle] {
        self.pool.particles()
    }

    /// Live particle count
    pub fn live(&self) -> usize {
        self.pool.len()
    }

    /// Frames stepped since creation
    pub fn clock(&self) -> u64 {
        self.clock
    }
}

/// Advance the simulation by one frame.
///
/// On allocation failure the remaining spawns for the frame are abandoned
/// and the error propagates; particles already in the pool are untouched.
pub fn advance_frame(sim: &mut Simulation) -> Result<FrameStats, SimError> {
    let retired = sim.pool.retire_expired();

    let requested = ParticlePool::spawn_count(&sim.params, &mut sim.rng);
    let headroom = sim.params.max_particles.saturating_sub(sim.pool.len());
    let to_spawn = requested.min(headroom);
    for _ in 0..to_spawn {
        let particle = Particle::spawn(&sim.params, &mut sim.rng);
        sim.pool.insert(particle)?;
    }

    let gravity_direction = sim.params.gravity_direction;
    for particle in sim.pool.iter_mut() {
        particle.advance(gravity_direction);
    }

    sim.clock += 1;

    Ok(FrameStats {
        spawned: to_spawn,
        retired,
        live: sim.pool.len(),
        clock: sim.clock,
    })
}
