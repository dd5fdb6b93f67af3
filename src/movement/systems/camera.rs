//! Movement domain: camera follow.

use bevy::prelude::*;

use crate::movement::{ControlTuning, Player};

/// Move `camera` toward `target` by `rate * dt` of the remaining distance.
pub fn follow_step(camera: Vec2, target: Vec2, rate: f32, dt: f32) -> Vec2 {
    camera + (target - camera) * (rate * dt).clamp(0.0, 1.0)
}

pub(crate) fn follow_camera(
    time: Res<Time>,
    tuning: Res<ControlTuning>,
    players: Query<&Transform, With<Player>>,
    mut cameras: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok(player) = players.single() else {
        return;
    };
    let target = player.translation.truncate();
    for mut camera in &mut cameras {
        let next = follow_step(
            camera.translation.truncate(),
            target,
            tuning.camera_follow_rate,
            time.delta_secs(),
        );
        camera.translation.x = next.x;
        camera.translation.y = next.y;
    }
}
