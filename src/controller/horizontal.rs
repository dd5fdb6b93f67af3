//! Horizontal pass: low-ceiling crouch, slope snapping, wall sweep, and the
//! bottom-corner check that keeps slope-adjusted moves out of corners.

use bevy::prelude::*;

use super::bounds::Bounds;
use super::contact::TickContacts;
use super::probe::Probe;
use super::state::ActorState;
use crate::error::QueryError;
use crate::geometry::{sign, slope_angle, slope_direction};
use crate::query::{PlatformLookup, SceneQuery};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Corner {
    BottomLeft,
    BottomRight,
}

/// Whether a corner probe hit should shorten the move.
///
/// Only upward-facing surfaces count. The trailing corner ignores slopes that
/// rise in the direction of travel, which is the surface being climbed.
pub(crate) fn corner_blocks(corner: Corner, dir: f32, normal: Vec2) -> bool {
    if normal.y <= 0.0 {
        return false;
    }
    let slope = slope_angle(normal);
    match corner {
        Corner::BottomLeft => !(dir > 0.0 && slope > 0.0),
        Corner::BottomRight => !(dir < 0.0 && slope < 0.0),
    }
}

/// Resolves the horizontal part of a tick and translates the actor.
/// Returns the displacement actually applied.
pub(crate) fn resolve_horizontal<Q, P>(
    probe: &Probe<'_, Q, P>,
    state: &mut ActorState,
    contacts: &mut TickContacts,
    delta: Vec2,
) -> Result<Vec2, QueryError>
where
    Q: SceneQuery + ?Sized,
    P: PlatformLookup + ?Sized,
{
    let config = probe.config;
    let extents = config.extents();
    let skin = config.skin_width;
    let dir = sign(delta.x);
    let mut bounds = Bounds::compute(state.position, &extents, state.crouching);

    // Stay crouched while something sits between crouch height and full height.
    if !state.crouching {
        let origin_y = state.position.y + extents.up_crouching;
        let clearance = extents.up - extents.up_crouching - skin;
        let left = probe.cast(
            Vec2::new(bounds.left + skin, origin_y),
            Dir2::Y,
            clearance,
            config.solid_layers(),
        )?;
        let right = probe.cast(
            Vec2::new(bounds.right - skin, origin_y),
            Dir2::Y,
            clearance,
            config.solid_layers(),
        )?;
        if left.is_some() || right.is_some() {
            debug!("Low ceiling above {:?}, forcing crouch", state.position);
            state.crouching = true;
            bounds = Bounds::compute(state.position, &extents, state.crouching);
        }
    }

    let mut delta = delta;
    state.slope = None;
    if state.grounded {
        let reach = skin + config.ground_slack;
        let left = probe.cast(
            bounds.bottom_left(),
            Dir2::NEG_Y,
            reach,
            config.walkable_layers(),
        )?;
        let right = probe.cast(
            bounds.bottom_right(),
            Dir2::NEG_Y,
            reach,
            config.walkable_layers(),
        )?;
        let (trailing, leading) = if dir < 0.0 {
            (right, left)
        } else {
            (left, right)
        };

        // Ground falling away ahead, then ground rising ahead. The leading probe wins.
        if let Some(hit) = trailing.filter(|hit| hit.normal.x * dir >= 0.0) {
            state.slope = Some(slope_angle(hit.normal));
            contacts.record_surface(probe.contact(&hit));
        }
        if let Some(hit) = leading.filter(|hit| hit.normal.x * dir <= 0.0) {
            state.slope = Some(slope_angle(hit.normal));
            contacts.record_surface(probe.contact(&hit));
        }

        if let Some(slope) = state.slope.filter(|slope| slope.abs() < config.slope_limit) {
            let speed = delta.length() * probe.slope_velocity.multiplier(slope * dir);
            delta = slope_direction(slope) * speed * dir;
            trace!("Snapped to {slope:.1} degree slope: {delta:?}");
        }
    }

    let heading = delta.normalize_or_zero();
    let mut travel = delta.length();

    // Walls, sampled from just above the feet up to the head.
    let leading_x = if dir < 0.0 { bounds.left } else { bounds.right };
    let stations = config.vertical_rays + 1;
    for station in 1..=stations {
        let height = bounds.down + bounds.height() * station as f32 / stations as f32;
        let Some(hit) = probe.cast_along(
            Vec2::new(leading_x, height),
            heading,
            travel.max(0.0) + skin,
            config.solid_layers(),
        )?
        else {
            continue;
        };
        travel = travel.min(hit.distance - skin);
        contacts.record_obstruction(probe.contact(&hit));
    }

    // The feet sample themselves: a diagonal slope move can clip a corner
    // that no wall ray crosses.
    for (corner, origin) in [
        (Corner::BottomLeft, bounds.bottom_left()),
        (Corner::BottomRight, bounds.bottom_right()),
    ] {
        let Some(hit) = probe.cast_along(
            origin,
            heading,
            travel.max(0.0) + skin,
            config.walkable_layers(),
        )?
        else {
            continue;
        };
        if corner_blocks(corner, dir, hit.normal) {
            travel = travel.min(hit.distance - skin);
        }
    }

    let applied = heading * travel;
    state.translate(applied);
    Ok(applied)
}
