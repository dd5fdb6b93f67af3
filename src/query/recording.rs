//! Scene query decorator that keeps every cast of a tick for inspection.

use std::cell::RefCell;

use bevy::prelude::*;

use super::{LayerMask, RayHit, SceneQuery};
use crate::error::QueryError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayRecord {
    pub origin: Vec2,
    pub direction: Dir2,
    pub max_distance: f32,
    pub mask: LayerMask,
    pub hit: Option<RayHit>,
}

impl RayRecord {
    /// Where the ray stopped: the hit point, or the end of its reach.
    pub fn end(&self) -> Vec2 {
        match self.hit {
            Some(hit) => hit.point,
            None => self.origin + *self.direction * self.max_distance,
        }
    }
}

pub struct RecordingQuery<Q> {
    inner: Q,
    records: RefCell<Vec<RayRecord>>,
}

impl<Q: SceneQuery> RecordingQuery<Q> {
    pub fn new(inner: Q) -> Self {
        Self {
            inner,
            records: RefCell::new(Vec::new()),
        }
    }

    pub fn cast_count(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn records(&self) -> Vec<RayRecord> {
        self.records.borrow().clone()
    }

    pub fn into_records(self) -> Vec<RayRecord> {
        self.records.into_inner()
    }
}

impl<Q: SceneQuery> SceneQuery for RecordingQuery<Q> {
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Result<Option<RayHit>, QueryError> {
        let hit = self.inner.cast_ray(origin, direction, max_distance, mask)?;
        self.records.borrow_mut().push(RayRecord {
            origin,
            direction,
            max_distance,
            mask,
            hit,
        });
        Ok(hit)
    }
}
