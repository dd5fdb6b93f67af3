//! Movement domain: Bevy glue that drives `CharacterController2d` actors from
//! keyboard input, reacts to tagged surfaces, and hosts the sandbox level.

mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod debug;
mod dev;
mod messages;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use bootstrap::player_controller;
pub use components::{Facing, LevelOutline, Player, SurfaceResponse};
#[cfg(feature = "dev-tools")]
pub use debug::RayDebugLog;
pub use dev::{LEVEL_SEED, LevelPiece, PieceShape, SPAWN_POINT, layout_scene, sandbox_layout};
pub use messages::ContactMessage;
pub use resources::{CONTROLLER_CONFIG_PATH, ControlInput, ControlTuning, ControllerSettings};
pub use systems::{SurfaceEffect, follow_step};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::dev::{
    draw_level_outlines, load_controller_settings, spawn_camera, spawn_sandbox_level,
};
use crate::movement::systems::{
    apply_surface_responses, drive_controllers, follow_camera, read_input, respawn_players,
    update_body_sprites, update_facing,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlInput>()
            .init_resource::<ControlTuning>()
            .add_message::<ContactMessage>()
            .add_systems(
                Update,
                (
                    read_input,
                    drive_controllers,
                    apply_surface_responses,
                    respawn_players,
                    update_facing,
                    update_body_sprites,
                    follow_camera,
                )
                    .chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.init_resource::<RayDebugLog>().add_systems(
            Update,
            debug::draw_probe_rays.after(drive_controllers),
        );
    }
}

/// Camera, test level, and player for trying the controller by hand.
pub struct SandboxPlugin;

impl Plugin for SandboxPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                load_controller_settings,
                spawn_camera,
                spawn_sandbox_level,
                spawn_player,
            )
                .chain(),
        )
        .add_systems(Update, draw_level_outlines);
    }
}
