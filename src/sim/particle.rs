//! Particle state and per-step kinematics
//!
//! A particle is spawned on the emission line with randomized attributes,
//! mutated in place once per frame, and retired once its age passes its
//! lifespan. The position update is a trapezoidal average of the pre- and
//! post-step velocity, which reads much smoother than plain Euler at the
//! frame rates this runs at.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::params::SimParams;
use super::rng::SimRng;
use crate::point_on_segment;

/// An RGB colour triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One falling droplet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// World-space location
    pub position: Vec3,
    /// Velocity direction. Accumulates gravity every step and is never
    /// re-normalized, so it is not unit-length after the first step.
    pub direction: Vec3,
    /// Scalar velocity magnitude
    pub speed: f32,
    /// Added to speed each step; gravity magnitude captured at spawn
    pub acceleration: f32,
    /// Steps since spawn
    pub age: u32,
    /// Steps after which the particle is eligible for retirement
    pub lifespan: u32,
    /// Rendering attributes, fixed at spawn
    pub colour: Colour,
    pub opacity: f32,
    pub diameter: f32,
}

impl Particle {
    /// Spawn a droplet at a random point on the emission line, with
    /// attributes drawn from the configured mean ± variance.
    ///
    /// The spawn position uses a single random fraction for all three axes,
    /// so droplets always start exactly on the line. The stored direction is
    /// the perturbed base direction added to itself - the doubling widens the
    /// initial spread; set [`SimParams::wind_enabled`] to blend the wind
    /// vector instead.
    pub fn spawn(params: &SimParams, rng: &mut SimRng) -> Self {
        let t = rng.probability();
        let position = point_on_segment(params.line_start, params.line_end, t);

        // One independent draw per axis, unlike the single draw for position
        let base = params.initial_direction
            + Vec3::new(
                rng.probability() * params.direction_variance.x,
                rng.probability() * params.direction_variance.y,
                rng.probability() * params.direction_variance.z,
            );
        let wind = params.wind_direction * params.wind_scale;
        let direction = if params.wind_enabled { base + wind } else { base + base };

        Self {
            position,
            direction,
            speed: params.speed_mean + rng.probability() * params.speed_variance,
            acceleration: params.gravity_acceleration,
            age: 0,
            lifespan: params.max_age,
            colour: params.colour,
            opacity: params.opacity_mean + rng.probability() * params.opacity_variance,
            // No negative-size droplets regardless of tuning
            diameter: (params.diameter_mean + rng.probability() * params.diameter_variance)
                .max(0.0),
        }
    }

    /// Advance by one simulation step.
    ///
    /// Gravity bends the direction, acceleration grows the speed, and the
    /// position moves by the average of the old and new velocity vectors.
    pub fn advance(&mut self, gravity_direction: Vec3) {
        let old_speed = self.speed;
        let old_direction = self.direction;
        self.direction += gravity_direction;
        self.speed += self.acceleration;
        self.position += (old_direction * old_speed + self.direction * self.speed) / 2.0;
        self.age += 1;
    }

    /// Retirement predicate: strictly older than the lifespan
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.age > self.lifespan
    }
}
