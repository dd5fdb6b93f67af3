//! Movement domain: reactions to tagged surfaces and checkpoint respawns.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::controller::{CharacterController2d, Contact};
use crate::movement::{ContactMessage, ControlInput, ControlTuning, Player, SurfaceResponse};
use crate::query::SurfaceTag;

/// What a surface tag does to the player touching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEffect {
    Plain,
    Conveyor,
    Slippery,
    Bouncy,
    Checkpoint,
    /// Tags this game does not interpret.
    Other(u32),
}

impl SurfaceEffect {
    pub fn from_tag(tag: SurfaceTag) -> Self {
        match tag.0 {
            0 => SurfaceEffect::Plain,
            1 => SurfaceEffect::Conveyor,
            2 => SurfaceEffect::Slippery,
            3 => SurfaceEffect::Bouncy,
            4 => SurfaceEffect::Checkpoint,
            other => SurfaceEffect::Other(other),
        }
    }
}

/// Apply one contact notification. `body_position` is where the touched body
/// sits, used to capture checkpoints.
pub(crate) fn respond(
    response: &mut SurfaceResponse,
    controller: &mut CharacterController2d,
    contact: Option<&Contact>,
    body_position: Option<Vec2>,
    tuning: &ControlTuning,
) {
    response.carry_velocity = 0.0;
    let effect = contact.map_or(SurfaceEffect::Plain, |contact| {
        SurfaceEffect::from_tag(contact.surface)
    });

    match effect {
        SurfaceEffect::Plain => controller.set_acceleration(response.base_acceleration),
        SurfaceEffect::Conveyor => response.carry_velocity = tuning.conveyor_velocity,
        SurfaceEffect::Slippery => controller.set_acceleration(0.0),
        SurfaceEffect::Bouncy => {
            let steep = contact.is_some_and(|c| c.slope.abs() >= tuning.bounce_min_slope);
            if steep {
                controller.state_mut().velocity.x =
                    -response.entry_velocity_x * tuning.bounce_factor;
            }
        }
        SurfaceEffect::Checkpoint => {
            if let Some(position) = body_position
                && position != response.checkpoint
            {
                info!("Checkpoint captured at {:?}", position);
                response.checkpoint = position;
            }
        }
        SurfaceEffect::Other(_) => {}
    }
}

pub(crate) fn apply_surface_responses(
    tuning: Res<ControlTuning>,
    mut messages: MessageReader<ContactMessage>,
    bodies: Query<&GlobalTransform>,
    mut players: Query<(&mut CharacterController2d, &mut SurfaceResponse), With<Player>>,
) {
    for message in messages.read() {
        let Ok((mut controller, mut response)) = players.get_mut(message.entity) else {
            continue;
        };
        let contact = message.contact.as_ref();
        let body_position = contact
            .and_then(|contact| bodies.get(contact.body).ok())
            .map(|transform| transform.translation().truncate());
        respond(
            &mut response,
            &mut controller,
            contact,
            body_position,
            &tuning,
        );
    }
}

pub(crate) fn respawn_players(
    input: Res<ControlInput>,
    mut players: Query<
        (
            &mut CharacterController2d,
            &SurfaceResponse,
            &mut Transform,
        ),
        With<Player>,
    >,
) {
    if !input.respawn {
        return;
    }
    for (mut controller, response, mut transform) in &mut players {
        let point = response.respawn_point();
        let state = controller.state_mut();
        state.position = point;
        state.velocity = Vec2::ZERO;
        transform.translation.x = point.x;
        transform.translation.y = point.y;
        info!("Respawned player at {:?}", point);
    }
}
