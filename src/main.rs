use avian2d::prelude::*;
use bevy::prelude::*;

use olympia_kcc::movement::{MovementPlugin, SandboxPlugin};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Olympia KCC Sandbox".to_string(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default().with_length_unit(1.0))
        .add_plugins((MovementPlugin, SandboxPlugin))
        .run();
}
