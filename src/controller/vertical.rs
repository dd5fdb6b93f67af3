//! Vertical pass: floor and ceiling probes, walkable-slope classification,
//! one-way platforms, and jump bookkeeping.

use bevy::prelude::*;

use super::bounds::Bounds;
use super::contact::TickContacts;
use super::probe::Probe;
use super::state::ActorState;
use crate::error::QueryError;
use crate::geometry::{sign, slope_angle};
use crate::query::{PlatformLookup, SceneQuery};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct VerticalOutcome {
    /// Final vector of the pass. Its `y` is the realized vertical travel,
    /// its `x` any push off a steep slope.
    pub delta: Vec2,
    /// Everything translated during the pass, including skin corrections.
    pub displacement: Vec2,
}

/// Whether probe `index` of a `last`-indexed row should consider a one-way
/// platform with the given slope. On slopes only the probe at the platform's
/// lower side counts, so the actor does not catch on the rising edge.
pub(crate) fn samples_platform(slope: f32, index: u32, last: u32) -> bool {
    slope == 0.0 || (slope > 0.0 && index == last) || (slope < 0.0 && index == 0)
}

/// Resolves the vertical part of a tick and translates the actor.
pub(crate) fn resolve_vertical<Q, P>(
    probe: &Probe<'_, Q, P>,
    state: &mut ActorState,
    contacts: &mut TickContacts,
    delta: Vec2,
) -> Result<VerticalOutcome, QueryError>
where
    Q: SceneQuery + ?Sized,
    P: PlatformLookup + ?Sized,
{
    let config = probe.config;
    let skin = config.skin_width;
    let bounds = Bounds::compute(state.position, &config.extents(), state.crouching);

    // No vertical motion still probes the ground so a resting actor stays grounded.
    let dir = if delta.y > 0.0 { 1.0 } else { -1.0 };
    let direction = if dir > 0.0 { Dir2::Y } else { Dir2::NEG_Y };
    let mut travel = delta.y.abs();
    let mut lateral = delta.x;

    if state.leave_ground() {
        debug!(
            "Left ground at {:?}, jumps_remaining={}",
            state.position, state.jumps_remaining
        );
    }

    let edge = if dir < 0.0 { bounds.down } else { bounds.up };
    let last = config.horizontal_rays + 1;
    let mut ignore_platform_next = false;

    for index in 0..=last {
        let x = bounds.left + bounds.width() * index as f32 / last as f32;
        let origin = Vec2::new(x, edge - skin * dir);

        let reach = 2.0 * skin + config.ground_slack + travel;
        if let Some(hit) = probe.cast(origin, direction, reach, config.solid_layers())? {
            travel = travel.min(hit.distance - 2.0 * skin);
            contacts.offer_surface(probe.contact(&hit));
            if dir < 0.0 {
                let slope = slope_angle(hit.normal);
                if slope.abs() >= config.slope_limit {
                    lateral -= sign(slope) * config.steep_slope_push;
                    contacts.offer_obstruction(probe.contact(&hit));
                } else {
                    state.land(config.jump_limit);
                }
            }
        }

        if dir > 0.0 {
            continue;
        }
        let reach = 2.0 * skin + config.ground_slack + travel;
        let Some(hit) = probe.cast(origin, direction, reach, config.platform_layers())? else {
            continue;
        };
        let slope = slope_angle(hit.normal);
        if !samples_platform(slope, index, last) {
            continue;
        }
        let go_down = probe
            .platforms
            .platform(hit.body)
            .is_none_or(|platform| platform.go_down);
        if !state.ignore_platform || !go_down {
            travel = travel.min(hit.distance - 2.0 * skin);
            state.land(config.jump_limit);
            contacts.offer_surface(probe.contact(&hit));
        } else {
            ignore_platform_next = true;
        }
    }

    if state.ignore_platform && !ignore_platform_next {
        debug!("Cleared one-way platform at {:?}", state.position);
    }
    state.ignore_platform = ignore_platform_next;

    // A negative residual means the actor sits inside the skin; back it out now.
    let mut displacement = Vec2::ZERO;
    if travel < 0.0 {
        let correction = Vec2::new(0.0, travel * dir);
        state.translate(correction);
        displacement += correction;
        travel = 0.0;
    }

    let delta = Vec2::new(lateral, travel * dir);
    state.translate(delta);
    displacement += delta;

    Ok(VerticalOutcome {
        delta,
        displacement,
    })
}
