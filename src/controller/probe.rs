//! Read-only context shared by the horizontal and vertical passes.

use bevy::prelude::*;

use super::config::ControllerConfig;
use super::contact::Contact;
use super::policy::SlopeVelocityPolicy;
use crate::error::QueryError;
use crate::query::{LayerMask, PlatformLookup, RayHit, SceneQuery};

pub(crate) struct Probe<'a, Q: ?Sized, P: ?Sized> {
    pub config: &'a ControllerConfig,
    pub scene: &'a Q,
    pub platforms: &'a P,
    pub slope_velocity: &'a dyn SlopeVelocityPolicy,
}

impl<Q, P> Probe<'_, Q, P>
where
    Q: SceneQuery + ?Sized,
    P: PlatformLookup + ?Sized,
{
    pub fn cast(
        &self,
        origin: Vec2,
        direction: Dir2,
        distance: f32,
        mask: LayerMask,
    ) -> Result<Option<RayHit>, QueryError> {
        self.scene.cast_ray(origin, direction, distance, mask)
    }

    /// Casts along an arbitrary vector. A zero vector has no direction and never hits.
    pub fn cast_along(
        &self,
        origin: Vec2,
        vector: Vec2,
        distance: f32,
        mask: LayerMask,
    ) -> Result<Option<RayHit>, QueryError> {
        match Dir2::new(vector) {
            Ok(direction) => self.cast(origin, direction, distance, mask),
            Err(_) => Ok(None),
        }
    }

    pub fn contact(&self, hit: &RayHit) -> Contact {
        Contact::from_hit(hit, self.platforms)
    }
}
