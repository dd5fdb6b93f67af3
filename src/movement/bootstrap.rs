//! Movement domain: player bootstrap from the loaded controller settings.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::{CharacterController2d, ControllerConfig};
use crate::movement::dev::SPAWN_POINT;
use crate::movement::systems::motion::body_rect;
use crate::movement::{ControlTuning, ControllerSettings, Facing, Player, SurfaceResponse};

/// Controller for a player at `position`, using the game's jump curve and
/// slope speeds.
pub fn player_controller(
    config: &ControllerConfig,
    tuning: &ControlTuning,
    position: Vec2,
) -> Result<CharacterController2d, crate::error::ControllerError> {
    Ok(CharacterController2d::new(config.clone(), position)?
        .with_gravity(tuning.gravity)
        .with_slope_velocity(tuning.slope_velocity))
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    settings: Res<ControllerSettings>,
    tuning: Res<ControlTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let config = &settings.config;
    let controller = match player_controller(config, &tuning, SPAWN_POINT) {
        Ok(controller) => controller,
        Err(err) => {
            error!("Cannot spawn player: {}", err);
            return;
        }
    };

    // Box relative to the actor position.
    let body = body_rect(&controller);

    info!(
        "Spawning player at {:?}: box {}x{}, {} jumps",
        SPAWN_POINT,
        body.width(),
        body.height(),
        config.jump_limit
    );

    commands
        .spawn((
            (
                Player,
                Facing::default(),
                SurfaceResponse::new(config.acceleration, SPAWN_POINT),
                controller,
            ),
            Transform::from_translation(SPAWN_POINT.extend(1.0)),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                Sprite {
                    color: Color::srgb(0.9, 0.9, 0.9),
                    custom_size: Some(body.size()),
                    ..default()
                },
                Transform::from_translation(body.center().extend(0.0)),
                // Member of the player layer only, which no probe mask includes.
                RigidBody::Kinematic,
                Collider::rectangle(body.width(), body.height()),
                Sensor,
                CollisionLayers::new(config.player_layers(), LayerMask::NONE),
            ));
        });
}
