//! Movement domain: input sampling for controlled actors.

use bevy::prelude::*;

use crate::movement::ControlInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<ControlInput>) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }
    input.axis_x = x;

    let jump_keys = [KeyCode::Space, KeyCode::ArrowUp, KeyCode::KeyW];
    input.jump_just_pressed = keyboard.any_just_pressed(jump_keys);
    input.jump_held = keyboard.any_pressed(jump_keys);
    input.crouch = keyboard.pressed(KeyCode::ShiftLeft);
    input.drop_through = keyboard.any_pressed([KeyCode::ArrowDown, KeyCode::KeyS]);
    input.respawn = keyboard.just_pressed(KeyCode::KeyR);
}
