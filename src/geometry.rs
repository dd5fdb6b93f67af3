//! Angle and scalar helpers shared by the resolvers.
//!
//! Slopes are expressed in signed degrees: 0 is flat ground, positive values
//! rise to the right, negative values rise to the left.

use bevy::math::Vec2;

pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;
pub const RAD_TO_DEG: f32 = 180.0 / std::f32::consts::PI;

/// Signed slope angle of the surface carrying `normal`.
///
/// The normal must be non-zero; scene queries always report unit normals.
pub fn slope_angle(normal: Vec2) -> f32 {
    let ratio = (-normal.x / normal.length()).clamp(-1.0, 1.0);
    ratio.asin() * RAD_TO_DEG
}

pub fn sin_deg(degrees: f32) -> f32 {
    (degrees * DEG_TO_RAD).sin()
}

pub fn cos_deg(degrees: f32) -> f32 {
    (degrees * DEG_TO_RAD).cos()
}

/// Direction sign with zero treated as positive.
pub fn sign(value: f32) -> f32 {
    if value >= 0.0 { 1.0 } else { -1.0 }
}

/// Unit normal of a surface inclined by `degrees`. Inverse of [`slope_angle`].
pub fn normal_from_slope(degrees: f32) -> Vec2 {
    Vec2::new(-sin_deg(degrees), cos_deg(degrees))
}

/// Unit vector running along a surface inclined by `degrees`, pointing right.
pub fn slope_direction(degrees: f32) -> Vec2 {
    Vec2::new(cos_deg(degrees), sin_deg(degrees))
}
