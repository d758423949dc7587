//! Deterministic simulation module
//!
//! All particle logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (pool order)
//! - No rendering or platform dependencies

pub mod error;
pub mod params;
pub mod particle;
pub mod pool;
pub mod rng;
pub mod tick;

pub use error::SimError;
pub use params::SimParams;
pub use particle::{Colour, Particle};
pub use pool::ParticlePool;
pub use rng::SimRng;
pub use tick::{FrameStats, Simulation, advance_frame};
