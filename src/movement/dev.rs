//! Movement domain: sandbox level for trying the controller by hand.

use avian2d::prelude::*;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::controller::ControllerConfig;
use crate::geometry::{cos_deg, sin_deg};
use crate::movement::{CONTROLLER_CONFIG_PATH, ControllerSettings, LevelOutline};
use crate::query::{Platform, PlatformTable, SegmentScene};

pub const LEVEL_SEED: u64 = 0x5EED_0001;
pub const SPAWN_POINT: Vec2 = Vec2::new(-5.0, 3.0);

/// Pixels per world unit on screen.
const PIXELS_PER_UNIT: f32 = 48.0;

const SCATTERED_PLATFORMS: usize = 6;
const SCATTER_MIN: Vec2 = Vec2::new(-24.0, 4.5);
const SCATTER_MAX: Vec2 = Vec2::new(24.0, 12.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PieceShape {
    Rect { min: Vec2, max: Vec2 },
    Triangle([Vec2; 3]),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LevelPiece {
    pub name: &'static str,
    pub shape: PieceShape,
    /// One-way platforms live on the platform layer.
    pub one_way: bool,
    pub platform: Option<Platform>,
}

impl LevelPiece {
    fn solid(name: &'static str, min: Vec2, max: Vec2) -> Self {
        Self {
            name,
            shape: PieceShape::Rect { min, max },
            one_way: false,
            platform: None,
        }
    }

    fn ramp(name: &'static str, corners: [Vec2; 3]) -> Self {
        Self {
            name,
            shape: PieceShape::Triangle(corners),
            one_way: false,
            platform: None,
        }
    }

    fn one_way(name: &'static str, min: Vec2, max: Vec2, platform: Platform) -> Self {
        Self {
            name,
            shape: PieceShape::Rect { min, max },
            one_way: true,
            platform: Some(platform),
        }
    }

    fn tagged(mut self, surface: u32) -> Self {
        self.platform = Some(Platform::tagged(surface));
        self
    }

    pub fn outline(&self) -> Vec<Vec2> {
        match self.shape {
            PieceShape::Rect { min, max } => vec![
                min,
                Vec2::new(max.x, min.y),
                max,
                Vec2::new(min.x, max.y),
            ],
            PieceShape::Triangle(corners) => corners.to_vec(),
        }
    }

    /// Collider and placement for the physics world.
    pub fn collider(&self) -> (Collider, Transform) {
        match self.shape {
            PieceShape::Rect { min, max } => {
                let size = max - min;
                let center = (min + max) * 0.5;
                (
                    Collider::rectangle(size.x, size.y),
                    Transform::from_translation(center.extend(0.0)),
                )
            }
            PieceShape::Triangle([a, b, c]) => (Collider::triangle(a, b, c), Transform::default()),
        }
    }

    pub fn layers(&self, config: &ControllerConfig) -> LayerMask {
        if self.one_way {
            config.platform_layers()
        } else {
            config.solid_layers()
        }
    }

    fn color(&self) -> Color {
        match (self.one_way, self.platform.map(|p| p.surface.0)) {
            (true, _) => Color::srgb(0.55, 0.42, 0.3),
            (false, Some(1)) => Color::srgb(0.3, 0.45, 0.85),
            (false, Some(2)) => Color::srgb(0.7, 0.9, 0.95),
            (false, Some(3)) => Color::srgb(0.9, 0.45, 0.7),
            (false, Some(4)) => Color::srgb(0.95, 0.85, 0.3),
            _ => Color::srgb(0.4, 0.5, 0.4),
        }
    }
}

/// Hand-built terrain plus one-way platforms scattered from `seed`.
///
/// The floor top sits at y = 0. Tagged patches are inset flush with it.
pub fn sandbox_layout(seed: u64) -> Vec<LevelPiece> {
    let ramp_rise = 6.0 * sin_deg(30.0) / cos_deg(30.0);
    let steep_rise = 2.0 * sin_deg(60.0) / cos_deg(60.0);

    let mut pieces = vec![
        LevelPiece::solid("floor_west", Vec2::new(-30.0, -1.0), Vec2::new(-4.0, 0.0)),
        LevelPiece::solid("checkpoint", Vec2::new(-4.0, -1.0), Vec2::new(-2.0, 0.0)).tagged(4),
        LevelPiece::solid("floor_middle", Vec2::new(-2.0, -1.0), Vec2::new(16.0, 0.0)),
        LevelPiece::solid("conveyor", Vec2::new(16.0, -1.0), Vec2::new(20.0, 0.0)).tagged(1),
        LevelPiece::solid("ice", Vec2::new(20.0, -1.0), Vec2::new(24.0, 0.0)).tagged(2),
        LevelPiece::solid("floor_east", Vec2::new(24.0, -1.0), Vec2::new(30.0, 0.0)),
        LevelPiece::solid("wall_west", Vec2::new(-31.0, -1.0), Vec2::new(-30.0, 16.0)),
        LevelPiece::solid("wall_east", Vec2::new(30.0, -1.0), Vec2::new(31.0, 16.0)).tagged(3),
        LevelPiece::ramp(
            "ramp_30",
            [
                Vec2::new(4.0, 0.0),
                Vec2::new(10.0, 0.0),
                Vec2::new(10.0, ramp_rise),
            ],
        ),
        LevelPiece::solid("plateau", Vec2::new(10.0, 0.0), Vec2::new(13.0, ramp_rise)),
        LevelPiece::ramp(
            "ramp_60",
            [
                Vec2::new(-8.0, 0.0),
                Vec2::new(-10.0, steep_rise),
                Vec2::new(-10.0, 0.0),
            ],
        ),
        LevelPiece::solid("crawlspace", Vec2::new(-20.0, 1.2), Vec2::new(-14.0, 2.2)),
        LevelPiece::one_way(
            "ledge",
            Vec2::new(-2.0, 2.25),
            Vec2::new(2.0, 2.5),
            Platform::default(),
        ),
        LevelPiece::one_way(
            "grate",
            Vec2::new(-27.0, 3.0),
            Vec2::new(-23.0, 3.25),
            Platform::default().solid_underside(),
        ),
    ];

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for _ in 0..SCATTERED_PLATFORMS {
        let width = rng.random_range(2.0..5.0);
        let x = rng.random_range(SCATTER_MIN.x..SCATTER_MAX.x - width);
        let y = rng.random_range(SCATTER_MIN.y..SCATTER_MAX.y);
        pieces.push(LevelPiece::one_way(
            "scattered",
            Vec2::new(x, y),
            Vec2::new(x + width, y + 0.25),
            Platform::default(),
        ));
    }

    pieces
}

/// Headless copy of a layout for driving controllers without a physics world.
pub fn layout_scene(
    pieces: &[LevelPiece],
    config: &ControllerConfig,
    world: &mut World,
) -> (SegmentScene, PlatformTable) {
    let mut scene = SegmentScene::new();
    let mut table = PlatformTable::new();
    for piece in pieces {
        let body = world.spawn(Name::new(piece.name)).id();
        scene.add_polygon(&piece.outline(), body, piece.layers(config));
        if let Some(platform) = piece.platform {
            table.insert(body, platform);
        }
    }
    (scene, table)
}

pub(crate) fn load_controller_settings(mut commands: Commands) {
    let path = std::path::Path::new(CONTROLLER_CONFIG_PATH);
    commands.insert_resource(ControllerSettings::load_or_default(path));
}

pub(crate) fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_translation(SPAWN_POINT.extend(0.0)),
    ));
}

pub(crate) fn spawn_sandbox_level(mut commands: Commands, settings: Res<ControllerSettings>) {
    let pieces = sandbox_layout(LEVEL_SEED);
    info!(
        "Spawning sandbox level: {} pieces, seed {:#x}",
        pieces.len(),
        LEVEL_SEED
    );

    for piece in &pieces {
        let (collider, transform) = piece.collider();
        let mut entity = commands.spawn((
            Name::new(piece.name),
            RigidBody::Static,
            collider,
            transform,
            CollisionLayers::new(piece.layers(&settings.config), LayerMask::ALL),
            LevelOutline {
                points: piece.outline(),
                color: piece.color(),
            },
        ));
        if let Some(platform) = piece.platform {
            entity.insert(platform);
        }
    }
}

pub(crate) fn draw_level_outlines(outlines: Query<&LevelOutline>, mut gizmos: Gizmos) {
    for outline in &outlines {
        let Some(&first) = outline.points.first() else {
            continue;
        };
        gizmos.linestrip_2d(
            outline.points.iter().copied().chain(std::iter::once(first)),
            outline.color,
        );
    }
}
