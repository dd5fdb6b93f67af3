//! `avian2d` and ECS implementations of the query port.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::{Platform, PlatformLookup, RayHit, SceneQuery};
use crate::error::QueryError;

impl SceneQuery for SpatialQuery<'_, '_> {
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Result<Option<RayHit>, QueryError> {
        // Solid casts report rays starting inside a collider at distance zero.
        let filter = SpatialQueryFilter::default().with_mask(mask);
        let hit = SpatialQuery::cast_ray(self, origin, direction, max_distance, true, &filter);

        Ok(hit.map(|hit| RayHit {
            point: origin + *direction * hit.distance,
            normal: hit.normal,
            distance: hit.distance,
            body: hit.entity,
        }))
    }
}

impl PlatformLookup for Query<'_, '_, &Platform> {
    fn platform(&self, body: Entity) -> Option<Platform> {
        self.get(body).ok().copied()
    }
}
