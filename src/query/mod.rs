//! Scene query port: the ray casts and platform lookups the resolvers consume.
//!
//! The controller never talks to a physics backend directly. Hosts implement
//! [`SceneQuery`] (and optionally [`PlatformLookup`]) against whatever spatial
//! index they own; `avian2d` is wired up in the `ecs` submodule and
//! [`SegmentScene`] provides a self-contained line-segment world.

mod ecs;
mod platforms;
mod recording;
mod segments;

#[cfg(test)]
mod tests;

pub use avian2d::prelude::LayerMask;
pub use platforms::{NoPlatforms, Platform, PlatformLookup, PlatformTable, SurfaceTag};
pub use recording::{RayRecord, RecordingQuery};
pub use segments::{Segment, SegmentScene};

use bevy::prelude::*;

use crate::error::QueryError;

/// Nearest intersection of a ray with scene geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Vec2,
    /// Unit surface normal at `point`, facing back toward the ray origin.
    pub normal: Vec2,
    /// Distance from the ray origin to `point`.
    pub distance: f32,
    /// Body that owns the hit collider. Lookup handle only.
    pub body: Entity,
}

/// Ray casts against the scene.
///
/// Implementations must not mutate actor state, must be deterministic for a
/// static scene, and must return the nearest hit along the ray. The resolvers
/// issue a few dozen casts per tick.
pub trait SceneQuery {
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Result<Option<RayHit>, QueryError>;
}

impl<Q: SceneQuery + ?Sized> SceneQuery for &Q {
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Result<Option<RayHit>, QueryError> {
        (**self).cast_ray(origin, direction, max_distance, mask)
    }
}
