//! Platform capability lookup keyed by body identity.

use std::collections::HashMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Semantic surface tag carried by a contact. `0` is plain terrain; higher
/// values are interpreted by whoever observes contacts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SurfaceTag(pub u32);

impl SurfaceTag {
    pub const PLAIN: SurfaceTag = SurfaceTag(0);

    pub fn is_plain(self) -> bool {
        self.0 == 0
    }
}

/// Surface descriptor attached to a body.
///
/// `go_down` only matters for bodies on the platform layer: it lets actors
/// drop through the platform on request.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub surface: SurfaceTag,
    pub go_down: bool,
}

impl Default for Platform {
    fn default() -> Self {
        Self {
            surface: SurfaceTag::PLAIN,
            go_down: true,
        }
    }
}

impl Platform {
    pub fn tagged(surface: u32) -> Self {
        Self {
            surface: SurfaceTag(surface),
            ..default()
        }
    }

    pub fn solid_underside(mut self) -> Self {
        self.go_down = false;
        self
    }
}

/// Answers "does this body carry platform semantics".
pub trait PlatformLookup {
    fn platform(&self, body: Entity) -> Option<Platform>;
}

impl<P: PlatformLookup + ?Sized> PlatformLookup for &P {
    fn platform(&self, body: Entity) -> Option<Platform> {
        (**self).platform(body)
    }
}

/// Lookup for scenes where every body is plain terrain.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPlatforms;

impl PlatformLookup for NoPlatforms {
    fn platform(&self, _body: Entity) -> Option<Platform> {
        None
    }
}

/// Explicit body -> descriptor table.
#[derive(Debug, Clone, Default)]
pub struct PlatformTable {
    entries: HashMap<Entity, Platform>,
}

impl PlatformTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, body: Entity, platform: Platform) -> Option<Platform> {
        self.entries.insert(body, platform)
    }

    pub fn remove(&mut self, body: Entity) -> Option<Platform> {
        self.entries.remove(&body)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PlatformLookup for PlatformTable {
    fn platform(&self, body: Entity) -> Option<Platform> {
        self.entries.get(&body).copied()
    }
}
