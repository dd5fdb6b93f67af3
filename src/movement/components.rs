//! Movement domain: components attached to controlled actors and level geometry.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// New facing for a horizontal input axis; keeps the current one when idle.
    pub fn from_axis(self, axis_x: f32) -> Self {
        if axis_x > 0.1 {
            Facing::Right
        } else if axis_x < -0.1 {
            Facing::Left
        } else {
            self
        }
    }
}

/// Per-actor state driven by the surfaces the controller reports.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct SurfaceResponse {
    /// Horizontal velocity added to the player's target, e.g. from a conveyor.
    pub carry_velocity: f32,
    /// Acceleration restored when standing on plain terrain.
    pub base_acceleration: f32,
    /// Last checkpoint touched. Respawns land two units above it.
    pub checkpoint: Vec2,
    /// Realized horizontal velocity at the start of the latest tick.
    pub entry_velocity_x: f32,
}

impl SurfaceResponse {
    pub fn new(base_acceleration: f32, checkpoint: Vec2) -> Self {
        Self {
            carry_velocity: 0.0,
            base_acceleration,
            checkpoint,
            entry_velocity_x: 0.0,
        }
    }

    pub fn respawn_point(&self) -> Vec2 {
        self.checkpoint + Vec2::new(0.0, 2.0)
    }
}

/// Closed outline of a level piece, drawn with gizmos.
#[derive(Component, Debug, Clone)]
pub struct LevelOutline {
    pub points: Vec<Vec2>,
    pub color: Color,
}
