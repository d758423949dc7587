//! Waterfall - a falling-droplet particle simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (particle kinematics, pool lifecycle, tuning)
//!
//! Rendering is deliberately absent. A renderer sits outside the crate and
//! consumes [`sim::Simulation::particles`] read-only after each frame step.

pub mod sim;

pub use sim::{Colour, FrameStats, Particle, ParticlePool, SimError, SimParams, SimRng, Simulation};

use glam::Vec3;

/// Simulation tuning defaults (the classic waterfall configuration)
pub mod consts {
    use glam::Vec3;

    use crate::sim::Colour;

    /// Mean initial droplet direction (downward, away from the viewer)
    pub const INITIAL_DIRECTION: Vec3 = Vec3::new(0.0, -0.2, -1.0);
    /// Per-axis upper bound of the random perturbation added at spawn
    pub const DIRECTION_VARIANCE: Vec3 = Vec3::new(0.2, 0.3, 0.1);

    /// Droplet diameter mean/variance
    pub const DIAMETER_MEAN: f32 = 0.5;
    pub const DIAMETER_VARIANCE: f32 = 0.05;

    /// Droplets spawned per frame, mean/variance
    pub const NEW_PARTICLES_MEAN: f32 = 50.0;
    pub const NEW_PARTICLES_VARIANCE: f32 = 5.0;

    /// Initial droplet speed mean/variance
    pub const SPEED_MEAN: f32 = 0.4;
    pub const SPEED_VARIANCE: f32 = 0.05;

    /// Water blue
    pub const WATER_COLOUR: Colour = Colour::new(0, 153, 204);

    /// Droplet opacity mean/variance
    pub const OPACITY_MEAN: f32 = 0.7;
    pub const OPACITY_VARIANCE: f32 = 0.1;

    /// Frames a droplet lives before becoming eligible for retirement
    pub const MAX_AGE: u32 = 70;

    /// Gravity magnitude added to speed each frame
    pub const GRAVITY_ACCELERATION: f32 = 0.0098;
    /// Direction gravity bends the velocity toward each frame
    pub const GRAVITY_DIRECTION: Vec3 = Vec3::new(0.0, -0.1, 0.0);

    /// Wind vector = WIND_DIRECTION * WIND_SCALE (only used when wind
    /// blending is enabled on the parameters)
    pub const WIND_SCALE: f32 = 1000.0;
    pub const WIND_DIRECTION: Vec3 = Vec3::new(-1.0, 0.0, 0.0);

    /// Emission line endpoints
    pub const LINE_START: Vec3 = Vec3::new(0.0, 50.0, 0.0);
    pub const LINE_END: Vec3 = Vec3::new(100.0, 50.0, 0.0);

    /// Hard cap on the live population
    pub const MAX_PARTICLES: usize = 100_000;

    /// Tuning floors - live adjustments clamp here instead of failing
    pub const MIN_SPEED_MEAN: f32 = 0.001;
    pub const MIN_SPAWN_MEAN: f32 = 1.0;
    pub const MIN_DIAMETER_MEAN: f32 = 0.01;
    /// Opacity adjustment step; opacity mean is held in [0, 1]
    pub const OPACITY_STEP: f32 = 0.1;
}

/// Point on the segment [start, end] at fraction `t`
#[inline]
pub fn point_on_segment(start: Vec3, end: Vec3, t: f32) -> Vec3 {
    start + (end - start) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_on_segment_endpoints() {
        let a = Vec3::new(0.0, 50.0, 0.0);
        let b = Vec3::new(100.0, 50.0, 0.0);
        assert_eq!(point_on_segment(a, b, 0.0), a);
        assert_eq!(point_on_segment(a, b, 1.0), b);
        assert_eq!(point_on_segment(a, b, 0.5), Vec3::new(50.0, 50.0, 0.0));
    }
}
