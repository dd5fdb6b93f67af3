//! Injected gravity and slope-speed policies.

use serde::{Deserialize, Serialize};

/// Downward acceleration magnitude for the current vertical velocity.
pub trait GravityPolicy: Send + Sync {
    fn acceleration(&self, velocity_y: f32, jump_held: bool) -> f32;
}

impl<F> GravityPolicy for F
where
    F: Fn(f32, bool) -> f32 + Send + Sync,
{
    fn acceleration(&self, velocity_y: f32, jump_held: bool) -> f32 {
        self(velocity_y, jump_held)
    }
}

/// Speed multiplier for travel along a slope. The argument is positive uphill
/// in the direction of travel.
pub trait SlopeVelocityPolicy: Send + Sync {
    fn multiplier(&self, slope: f32) -> f32;
}

impl<F> SlopeVelocityPolicy for F
where
    F: Fn(f32) -> f32 + Send + Sync,
{
    fn multiplier(&self, slope: f32) -> f32 {
        self(slope)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantGravity(pub f32);

impl GravityPolicy for ConstantGravity {
    fn acceleration(&self, _velocity_y: f32, _jump_held: bool) -> f32 {
        self.0
    }
}

pub const DEFAULT_GRAVITY: ConstantGravity = ConstantGravity(20.0);

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitSlopeVelocity;

impl SlopeVelocityPolicy for UnitSlopeVelocity {
    fn multiplier(&self, _slope: f32) -> f32 {
        1.0
    }
}

pub const DEFAULT_SLOPE_VELOCITY: UnitSlopeVelocity = UnitSlopeVelocity;

/// Variable-height jump curve.
///
/// Gravity softens in a band around the apex, tapers off linearly between
/// `taper_velocity` and `terminal_velocity` so falls settle at a terminal
/// speed, and gains `release_gravity` while the actor rises without the jump
/// button held (short hops).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatyGravity {
    pub gravity: f32,
    pub apex_gravity: f32,
    pub apex_band_min: f32,
    pub apex_band_max: f32,
    pub taper_velocity: f32,
    pub terminal_velocity: f32,
    pub release_gravity: f32,
    /// Below this vertical velocity releasing the button no longer matters.
    pub release_cutoff: f32,
}

impl Default for FloatyGravity {
    fn default() -> Self {
        Self {
            gravity: 20.0,
            apex_gravity: 10.0,
            apex_band_min: -1.0,
            apex_band_max: 1.0,
            taper_velocity: -9.0,
            terminal_velocity: -12.0,
            release_gravity: 25.0,
            release_cutoff: -1.0,
        }
    }
}

impl FloatyGravity {
    fn base(&self, velocity_y: f32) -> f32 {
        if velocity_y > self.apex_band_min && velocity_y < self.apex_band_max {
            return self.apex_gravity;
        }
        if velocity_y > self.taper_velocity {
            return self.gravity;
        }
        if velocity_y < self.terminal_velocity {
            return 0.0;
        }
        self.gravity * (velocity_y - self.terminal_velocity)
            / (self.taper_velocity - self.terminal_velocity)
    }

    fn release(&self, velocity_y: f32, jump_held: bool) -> f32 {
        if jump_held || velocity_y < self.release_cutoff {
            0.0
        } else {
            self.release_gravity
        }
    }
}

impl GravityPolicy for FloatyGravity {
    fn acceleration(&self, velocity_y: f32, jump_held: bool) -> f32 {
        self.base(velocity_y) + self.release(velocity_y, jump_held)
    }
}

/// Faster downhill, unchanged on gentle climbs, slower on steep climbs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaperedSlopeVelocity {
    /// Uphill slopes below this angle keep full speed.
    pub free_climb: f32,
    /// Fraction of speed gained or lost per degree outside the free band.
    pub per_degree: f32,
}

impl Default for TaperedSlopeVelocity {
    fn default() -> Self {
        Self {
            free_climb: 30.0,
            per_degree: 0.01,
        }
    }
}

impl SlopeVelocityPolicy for TaperedSlopeVelocity {
    fn multiplier(&self, slope: f32) -> f32 {
        if slope <= 0.0 {
            1.0 - slope * self.per_degree
        } else if slope < self.free_climb {
            1.0
        } else {
            1.0 - (slope - self.free_climb) * self.per_degree
        }
    }
}
