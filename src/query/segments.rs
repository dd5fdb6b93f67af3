//! Line-segment scene usable without a physics backend.

use bevy::prelude::*;

use super::{LayerMask, RayHit, SceneQuery};
use crate::error::QueryError;

const PARALLEL_EPSILON: f32 = 1e-9;

/// A two-sided collision segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
    pub body: Entity,
    pub layers: LayerMask,
}

impl Segment {
    /// Distance along the ray and facing normal, if the ray crosses the segment
    /// within `max_distance`.
    fn intersect(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<(f32, Vec2)> {
        let edge = self.end - self.start;
        let denom = direction.perp_dot(edge);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let offset = self.start - origin;
        let distance = offset.perp_dot(edge) / denom;
        let along = offset.perp_dot(direction) / denom;
        if !(0.0..=max_distance).contains(&distance) || !(0.0..=1.0).contains(&along) {
            return None;
        }

        let mut normal = edge.perp().normalize();
        if normal.dot(direction) > 0.0 {
            normal = -normal;
        }
        Some((distance, normal))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SegmentScene {
    segments: Vec<Segment>,
}

impl SegmentScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn add_segment(
        &mut self,
        start: Vec2,
        end: Vec2,
        body: Entity,
        layers: LayerMask,
    ) -> &mut Self {
        self.segments.push(Segment {
            start,
            end,
            body,
            layers,
        });
        self
    }

    /// Closed outline through `points`.
    pub fn add_polygon(&mut self, points: &[Vec2], body: Entity, layers: LayerMask) -> &mut Self {
        for (index, &start) in points.iter().enumerate() {
            let end = points[(index + 1) % points.len()];
            self.add_segment(start, end, body, layers);
        }
        self
    }

    /// Axis-aligned box given by two opposite corners.
    pub fn add_box(&mut self, min: Vec2, max: Vec2, body: Entity, layers: LayerMask) -> &mut Self {
        self.add_polygon(
            &[
                min,
                Vec2::new(max.x, min.y),
                max,
                Vec2::new(min.x, max.y),
            ],
            body,
            layers,
        )
    }
}

impl SceneQuery for SegmentScene {
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Result<Option<RayHit>, QueryError> {
        let direction = *direction;
        let mut nearest: Option<RayHit> = None;

        for segment in &self.segments {
            if segment.layers.0 & mask.0 == 0 {
                continue;
            }
            let Some((distance, normal)) = segment.intersect(origin, direction, max_distance)
            else {
                continue;
            };
            if nearest.is_some_and(|hit| hit.distance <= distance) {
                continue;
            }
            nearest = Some(RayHit {
                point: origin + direction * distance,
                normal,
                distance,
                body: segment.body,
            });
        }

        Ok(nearest)
    }
}
