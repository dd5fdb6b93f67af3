//! World-space edges of the actor's box.

use bevy::math::Vec2;

/// Distances from the actor's position to each edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    pub left: f32,
    pub right: f32,
    pub up: f32,
    pub up_crouching: f32,
    pub down: f32,
}

/// Left/right/up/down edges derived from position and crouch state.
/// Recomputed whenever the position or crouch flag may have changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub up: f32,
    pub down: f32,
}

impl Bounds {
    pub fn compute(position: Vec2, extents: &Extents, crouching: bool) -> Self {
        let up = if crouching {
            extents.up_crouching
        } else {
            extents.up
        };
        Self {
            left: position.x - extents.left,
            right: position.x + extents.right,
            up: position.y + up,
            down: position.y - extents.down,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.up - self.down
    }

    pub fn bottom_left(&self) -> Vec2 {
        Vec2::new(self.left, self.down)
    }

    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.right, self.down)
    }
}
