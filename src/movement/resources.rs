//! Movement domain: tuning, input, and controller settings resources.

use std::path::Path;

use bevy::prelude::*;

use crate::controller::{ControllerConfig, FloatyGravity, TaperedSlopeVelocity};

pub const CONTROLLER_CONFIG_PATH: &str = "assets/data/controller.ron";

#[derive(Resource, Debug, Clone)]
pub struct ControlTuning {
    pub max_speed: f32,
    pub crouch_speed: f32,
    pub jump_velocity: f32,
    pub gravity: FloatyGravity,
    pub slope_velocity: TaperedSlopeVelocity,
    /// Carry velocity applied while touching a conveyor.
    pub conveyor_velocity: f32,
    /// Horizontal velocity multiplier when bouncing off a springy wall.
    pub bounce_factor: f32,
    /// Steepest slope, in degrees, that still counts as a springy wall.
    pub bounce_min_slope: f32,
    /// Camera catch-up rate per second.
    pub camera_follow_rate: f32,
}

impl Default for ControlTuning {
    fn default() -> Self {
        Self {
            max_speed: 8.0,
            crouch_speed: 4.0,
            jump_velocity: 10.0,
            gravity: FloatyGravity::default(),
            slope_velocity: TaperedSlopeVelocity::default(),
            conveyor_velocity: -5.0,
            bounce_factor: 28.0,
            bounce_min_slope: 89.0,
            camera_follow_rate: 6.0,
        }
    }
}

impl ControlTuning {
    pub fn target_speed(&self, axis_x: f32, crouching: bool) -> f32 {
        let max = if crouching {
            self.crouch_speed
        } else {
            self.max_speed
        };
        axis_x * max
    }
}

#[derive(Resource, Debug, Default)]
pub struct ControlInput {
    pub axis_x: f32,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub crouch: bool,
    pub drop_through: bool,
    pub respawn: bool,
}

/// Controller options every spawned actor starts from.
#[derive(Resource, Debug, Clone, Default)]
pub struct ControllerSettings {
    pub config: ControllerConfig,
}

impl ControllerSettings {
    /// Read and validate the options at `path`, falling back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        let config = match ControllerConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("Using default controller config: {}", err);
                return Self::default();
            }
        };
        if let Err(err) = config.validate() {
            warn!(
                "Controller config {} rejected ({}), using defaults",
                path.display(),
                err
            );
            return Self::default();
        }
        info!("Loaded controller config from {}", path.display());
        Self { config }
    }
}
