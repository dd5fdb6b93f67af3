//! Movement domain: probe ray overlay for development builds.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::query::RayRecord;

const HIT_COLOR: Color = Color::srgb(0.95, 0.2, 0.2);
const MISS_COLOR: Color = Color::srgb(0.2, 0.9, 0.3);

/// Probe rays cast during each actor's latest tick.
#[derive(Resource, Debug, Default)]
pub struct RayDebugLog {
    rays: HashMap<Entity, Vec<RayRecord>>,
}

impl RayDebugLog {
    pub fn replace(&mut self, entity: Entity, records: Vec<RayRecord>) {
        self.rays.insert(entity, records);
    }

    pub fn records(&self, entity: Entity) -> &[RayRecord] {
        self.rays.get(&entity).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &RayRecord> {
        self.rays.values().flatten()
    }
}

pub(crate) fn draw_probe_rays(log: Res<RayDebugLog>, mut gizmos: Gizmos) {
    for record in log.iter() {
        let color = if record.hit.is_some() {
            HIT_COLOR
        } else {
            MISS_COLOR
        };
        gizmos.line_2d(record.origin, record.end(), color);
    }
}
