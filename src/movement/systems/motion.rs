//! Movement domain: per-frame controller ticks against the physics world.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::controller::{CharacterController2d, ContactLog, TickInput};
use crate::movement::{
    ContactMessage, ControlInput, ControlTuning, Facing, Player, SurfaceResponse,
};
use crate::query::Platform;
#[cfg(feature = "dev-tools")]
use crate::{movement::RayDebugLog, query::RecordingQuery};

/// Frame inputs shared by every player tick.
#[derive(SystemParam)]
pub(crate) struct PlayerControls<'w> {
    time: Res<'w, Time>,
    input: Res<'w, ControlInput>,
    tuning: Res<'w, ControlTuning>,
}

/// Intent for one player tick.
pub(crate) fn player_intent(
    input: &ControlInput,
    tuning: &ControlTuning,
    crouching: bool,
    carry_velocity: f32,
) -> TickInput {
    TickInput {
        target_velocity_x: tuning.target_speed(input.axis_x, crouching) + carry_velocity,
        jump_held: input.jump_held,
        crouch: input.crouch,
        drop_through: input.drop_through,
    }
}

pub(crate) fn drive_controllers(
    controls: PlayerControls,
    spatial_query: SpatialQuery,
    platforms: Query<&Platform>,
    mut contact_messages: MessageWriter<ContactMessage>,
    #[cfg(feature = "dev-tools")] mut ray_log: ResMut<RayDebugLog>,
    mut players: Query<
        (
            Entity,
            &mut CharacterController2d,
            &mut SurfaceResponse,
            &mut Transform,
        ),
        With<Player>,
    >,
) {
    let PlayerControls {
        time,
        input,
        tuning,
    } = controls;
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    for (entity, mut controller, mut response, mut transform) in &mut players {
        if input.jump_just_pressed && controller.try_jump(tuning.jump_velocity) {
            debug!("Player jumped, {} jumps left", controller.state().jumps_remaining);
        }

        let intent = player_intent(
            &input,
            &tuning,
            controller.state().crouching,
            response.carry_velocity,
        );
        response.entry_velocity_x = controller.state().velocity.x;

        let mut log = ContactLog::default();
        #[cfg(feature = "dev-tools")]
        let result = {
            let recorder = RecordingQuery::new(&spatial_query);
            let result = controller.step(&recorder, &platforms, &intent, dt, &mut log);
            ray_log.replace(entity, recorder.into_records());
            result
        };
        #[cfg(not(feature = "dev-tools"))]
        let result = controller.step(&spatial_query, &platforms, &intent, dt, &mut log);

        if let Err(err) = result {
            warn!("Controller tick failed for {:?}: {}", entity, err);
            continue;
        }

        for contact in log.0 {
            contact_messages.write(ContactMessage { entity, contact });
        }

        let position = controller.state().position;
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}

/// Sprite rectangle of the actor's current box, relative to its position.
pub(crate) fn body_rect(controller: &CharacterController2d) -> Rect {
    let bounds = controller.bounds();
    let position = controller.state().position;
    Rect::new(
        bounds.left - position.x,
        bounds.down - position.y,
        bounds.right - position.x,
        bounds.up - position.y,
    )
}

pub(crate) fn update_facing(
    input: Res<ControlInput>,
    mut players: Query<(&mut Facing, &Children), With<Player>>,
    mut sprites: Query<&mut Sprite>,
) {
    for (mut facing, children) in &mut players {
        *facing = facing.from_axis(input.axis_x);
        for child in children.iter() {
            if let Ok(mut sprite) = sprites.get_mut(child) {
                sprite.flip_x = *facing == Facing::Left;
            }
        }
    }
}

/// Shrinks the body sprite while crouched.
pub(crate) fn update_body_sprites(
    players: Query<(&CharacterController2d, &Children), With<Player>>,
    mut sprites: Query<(&mut Sprite, &mut Transform)>,
) {
    for (controller, children) in &players {
        let body = body_rect(controller);
        for child in children.iter() {
            let Ok((mut sprite, mut transform)) = sprites.get_mut(child) else {
                continue;
            };
            if sprite.custom_size != Some(body.size()) {
                sprite.custom_size = Some(body.size());
                transform.translation.x = body.center().x;
                transform.translation.y = body.center().y;
            }
        }
    }
}
