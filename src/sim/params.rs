//! Simulation tuning parameters
//!
//! Every tunable lives in one explicit struct that is passed into spawn and
//! frame-step calls. Input handling adjusts values between frames through
//! the clamped methods below; the frame step only ever reads.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::particle::Colour;
use crate::consts::*;

/// Tunable configuration for particle creation and motion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    /// Mean initial direction of a freshly spawned droplet
    pub initial_direction: Vec3,
    /// Per-axis upper bound of the random perturbation added at spawn
    pub direction_variance: Vec3,

    pub diameter_mean: f32,
    pub diameter_variance: f32,

    /// Droplets spawned per frame, mean/variance
    pub new_particles_mean: f32,
    pub new_particles_variance: f32,

    pub speed_mean: f32,
    pub speed_variance: f32,

    pub colour: Colour,
    pub opacity_mean: f32,
    pub opacity_variance: f32,

    /// Frames a droplet lives before becoming eligible for retirement
    pub max_age: u32,

    /// Gravity magnitude, captured by each droplet at spawn
    pub gravity_acceleration: f32,
    /// Direction gravity bends the velocity toward each frame
    pub gravity_direction: Vec3,

    /// Wind vector = wind_direction * wind_scale. Ignored at spawn unless
    /// `wind_enabled` is set.
    pub wind_scale: f32,
    pub wind_direction: Vec3,
    /// Blend wind into the spawn direction instead of doubling the base
    /// direction. Off by default to match the classic spread behavior.
    #[serde(default)]
    pub wind_enabled: bool,

    /// Emission line endpoints
    pub line_start: Vec3,
    pub line_end: Vec3,

    /// Hard cap on the live population; spawn requests are truncated to fit
    pub max_particles: usize,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            initial_direction: INITIAL_DIRECTION,
            direction_variance: DIRECTION_VARIANCE,
            diameter_mean: DIAMETER_MEAN,
            diameter_variance: DIAMETER_VARIANCE,
            new_particles_mean: NEW_PARTICLES_MEAN,
            new_particles_variance: NEW_PARTICLES_VARIANCE,
            speed_mean: SPEED_MEAN,
            speed_variance: SPEED_VARIANCE,
            colour: WATER_COLOUR,
            opacity_mean: OPACITY_MEAN,
            opacity_variance: OPACITY_VARIANCE,
            max_age: MAX_AGE,
            gravity_acceleration: GRAVITY_ACCELERATION,
            gravity_direction: GRAVITY_DIRECTION,
            wind_scale: WIND_SCALE,
            wind_direction: WIND_DIRECTION,
            wind_enabled: false,
            line_start: LINE_START,
            line_end: LINE_END,
            max_particles: MAX_PARTICLES,
        }
    }
}

impl SimParams {
    // Live tuning. Each adjustment clamps at its documented bound so user
    // input can never produce a crashing or degenerate configuration.

    /// Double the initial speed mean
    pub fn double_speed(&mut self) {
        self.speed_mean *= 2.0;
    }

    /// Halve the initial speed mean, floored at [`MIN_SPEED_MEAN`]
    pub fn halve_speed(&mut self) {
        self.speed_mean = (self.speed_mean * 0.5).max(MIN_SPEED_MEAN);
    }

    /// Double the gravity magnitude
    pub fn double_gravity(&mut self) {
        self.gravity_acceleration *= 2.0;
    }

    /// Halve the gravity magnitude
    pub fn halve_gravity(&mut self) {
        self.gravity_acceleration *= 0.5;
    }

    /// Increase the per-frame spawn mean by 20%
    pub fn raise_spawn_rate(&mut self) {
        self.new_particles_mean *= 1.2;
    }

    /// Decrease the per-frame spawn mean by 20%, floored at
    /// [`MIN_SPAWN_MEAN`] so the population cannot collapse
    pub fn lower_spawn_rate(&mut self) {
        self.new_particles_mean = (self.new_particles_mean / 1.2).max(MIN_SPAWN_MEAN);
    }

    /// Grow the diameter mean by 50%
    pub fn grow_diameter(&mut self) {
        self.diameter_mean *= 1.5;
    }

    /// Shrink the diameter mean by 50%, floored at [`MIN_DIAMETER_MEAN`]
    pub fn shrink_diameter(&mut self) {
        self.diameter_mean = (self.diameter_mean * 0.5).max(MIN_DIAMETER_MEAN);
    }

    /// Raise the opacity mean one step, held in [0, 1]
    pub fn raise_opacity(&mut self) {
        self.opacity_mean = (self.opacity_mean + OPACITY_STEP).min(1.0);
    }

    /// Lower the opacity mean one step, held in [0, 1]
    pub fn lower_opacity(&mut self) {
        self.opacity_mean = (self.opacity_mean - OPACITY_STEP).max(0.0);
    }

    /// Load parameters from a JSON file, falling back to defaults when the
    /// file is missing or unreadable
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(params) => {
                    log::info!("Loaded parameters from {}", path.display());
                    params
                }
                Err(e) => {
                    log::warn!("Ignoring malformed parameter file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default parameters");
                Self::default()
            }
        }
    }

    /// Save parameters to a JSON file (best-effort)
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("Failed to save parameters to {}: {e}", path.display());
                } else {
                    log::info!("Parameters saved to {}", path.display());
                }
            }
            Err(e) => log::warn!("Failed to serialize parameters: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_held_in_unit_interval() {
        let mut params = SimParams::default();
        for _ in 0..20 {
            params.raise_opacity();
        }
        assert_eq!(params.opacity_mean, 1.0);
        for _ in 0..40 {
            params.lower_opacity();
        }
        assert_eq!(params.opacity_mean, 0.0);
    }

    #[test]
    fn test_spawn_rate_floored() {
        let mut params = SimParams::default();
        for _ in 0..100 {
            params.lower_spawn_rate();
        }
        assert_eq!(params.new_particles_mean, MIN_SPAWN_MEAN);
    }

    #[test]
    fn test_diameter_never_negative() {
        let mut params = SimParams::default();
        for _ in 0..100 {
            params.shrink_diameter();
        }
        assert!(params.diameter_mean >= MIN_DIAMETER_MEAN);
    }

    #[test]
    fn test_speed_floored() {
        let mut params = SimParams::default();
        for _ in 0..100 {
            params.halve_speed();
        }
        assert_eq!(params.speed_mean, MIN_SPEED_MEAN);
    }

    #[test]
    fn test_json_round_trip() {
        let mut params = SimParams::default();
        params.wind_enabled = true;
        params.double_gravity();
        let json = serde_json::to_string(&params).unwrap();
        let back: SimParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let params = SimParams::load(Path::new("/nonexistent/waterfall-params.json"));
        assert_eq!(params, SimParams::default());
    }
}
