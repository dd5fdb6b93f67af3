//! Movement domain: tests for surface responses, intents, camera follow, and the sandbox level.

use bevy::prelude::*;

use super::systems::motion::{body_rect, player_intent};
use super::systems::surfaces::respond;
use super::*;
use crate::controller::{CharacterController2d, Contact, ContactLog, ControllerConfig, TickInput};
use crate::query::SurfaceTag;

fn contact(surface: u32, slope: f32) -> Contact {
    let body = World::new().spawn_empty().id();
    Contact {
        body,
        point: Vec2::ZERO,
        normal: crate::geometry::normal_from_slope(slope),
        slope,
        surface: SurfaceTag(surface),
    }
}

fn player() -> (CharacterController2d, SurfaceResponse) {
    let config = ControllerConfig::default();
    let controller = player_controller(&config, &ControlTuning::default(), Vec2::ZERO)
        .expect("default config is valid");
    let response = SurfaceResponse::new(config.acceleration, Vec2::new(1.0, 1.0));
    (controller, response)
}

// -----------------------------------------------------------------------------
// Surface effects
// -----------------------------------------------------------------------------

#[test]
fn test_surface_effect_from_tag() {
    assert_eq!(SurfaceEffect::from_tag(SurfaceTag(0)), SurfaceEffect::Plain);
    assert_eq!(SurfaceEffect::from_tag(SurfaceTag(1)), SurfaceEffect::Conveyor);
    assert_eq!(SurfaceEffect::from_tag(SurfaceTag(2)), SurfaceEffect::Slippery);
    assert_eq!(SurfaceEffect::from_tag(SurfaceTag(3)), SurfaceEffect::Bouncy);
    assert_eq!(SurfaceEffect::from_tag(SurfaceTag(4)), SurfaceEffect::Checkpoint);
    assert_eq!(SurfaceEffect::from_tag(SurfaceTag(9)), SurfaceEffect::Other(9));
}

#[test]
fn test_conveyor_carry_resets_on_next_notification() {
    let tuning = ControlTuning::default();
    let (mut controller, mut response) = player();

    respond(&mut response, &mut controller, Some(&contact(1, 0.0)), None, &tuning);
    assert_eq!(response.carry_velocity, tuning.conveyor_velocity);

    respond(&mut response, &mut controller, None, None, &tuning);
    assert_eq!(response.carry_velocity, 0.0);
}

#[test]
fn test_slippery_surface_until_plain_ground() {
    let tuning = ControlTuning::default();
    let (mut controller, mut response) = player();

    respond(&mut response, &mut controller, Some(&contact(2, 0.0)), None, &tuning);
    assert_eq!(controller.config().acceleration, 0.0);

    // Other tagged surfaces keep the override.
    respond(&mut response, &mut controller, Some(&contact(1, 0.0)), None, &tuning);
    assert_eq!(controller.config().acceleration, 0.0);

    respond(&mut response, &mut controller, Some(&contact(0, 0.0)), None, &tuning);
    assert_eq!(controller.config().acceleration, response.base_acceleration);

    respond(&mut response, &mut controller, Some(&contact(2, 0.0)), None, &tuning);
    respond(&mut response, &mut controller, None, None, &tuning);
    assert_eq!(controller.config().acceleration, response.base_acceleration);
}

#[test]
fn test_bouncy_surface_only_reflects_off_walls() {
    let tuning = ControlTuning::default();
    let (mut controller, mut response) = player();
    response.entry_velocity_x = 2.0;
    controller.state_mut().velocity.x = 0.5;

    respond(&mut response, &mut controller, Some(&contact(3, 45.0)), None, &tuning);
    assert_eq!(controller.state().velocity.x, 0.5);

    respond(&mut response, &mut controller, Some(&contact(3, 90.0)), None, &tuning);
    assert_eq!(controller.state().velocity.x, -2.0 * tuning.bounce_factor);
}

#[test]
fn test_checkpoint_capture_moves_respawn_point() {
    let tuning = ControlTuning::default();
    let (mut controller, mut response) = player();

    // Without a body position there is nothing to capture.
    respond(&mut response, &mut controller, Some(&contact(4, 0.0)), None, &tuning);
    assert_eq!(response.checkpoint, Vec2::new(1.0, 1.0));

    let flag = Vec2::new(-3.0, -0.5);
    respond(&mut response, &mut controller, Some(&contact(4, 0.0)), Some(flag), &tuning);
    assert_eq!(response.checkpoint, flag);
    assert_eq!(response.respawn_point(), Vec2::new(-3.0, 1.5));
}

#[test]
fn test_unknown_tags_change_nothing() {
    let tuning = ControlTuning::default();
    let (mut controller, mut response) = player();
    respond(&mut response, &mut controller, Some(&contact(2, 0.0)), None, &tuning);

    respond(&mut response, &mut controller, Some(&contact(7, 0.0)), None, &tuning);
    assert_eq!(controller.config().acceleration, 0.0);
    assert_eq!(response.carry_velocity, 0.0);
}

#[test]
fn test_set_acceleration_is_clamped() {
    let (mut controller, _) = player();
    controller.set_acceleration(3.0);
    assert_eq!(controller.config().acceleration, 1.0);
    controller.set_acceleration(-1.0);
    assert_eq!(controller.config().acceleration, 0.0);
    controller.set_acceleration(f32::NAN);
    assert_eq!(controller.config().acceleration, 0.0);
}

// -----------------------------------------------------------------------------
// Intents, facing, camera
// -----------------------------------------------------------------------------

#[test]
fn test_player_intent_scales_axis_and_adds_carry() {
    let tuning = ControlTuning::default();
    let input = ControlInput {
        axis_x: 1.0,
        jump_held: true,
        drop_through: true,
        ..default()
    };

    let standing = player_intent(&input, &tuning, false, 0.0);
    assert_eq!(
        standing,
        TickInput {
            target_velocity_x: 8.0,
            jump_held: true,
            crouch: false,
            drop_through: true,
        }
    );

    let crouched_on_conveyor = player_intent(&input, &tuning, true, tuning.conveyor_velocity);
    assert_eq!(crouched_on_conveyor.target_velocity_x, 4.0 - 5.0);
}

#[test]
fn test_facing_follows_axis_and_holds_when_idle() {
    assert_eq!(Facing::Right.from_axis(-1.0), Facing::Left);
    assert_eq!(Facing::Left.from_axis(0.0), Facing::Left);
    assert_eq!(Facing::Left.from_axis(0.05), Facing::Left);
    assert_eq!(Facing::Left.from_axis(1.0), Facing::Right);
}

#[test]
fn test_body_rect_shrinks_while_crouched() {
    let (mut controller, _) = player();
    let config = controller.config().clone();

    let standing = body_rect(&controller);
    assert_eq!(standing.size(), Vec2::new(1.0, 1.6));
    assert_eq!(standing.center(), Vec2::ZERO);

    controller.state_mut().crouching = true;
    let crouched = body_rect(&controller);
    assert_eq!(crouched.size(), Vec2::new(1.0, config.lower_extent));
    assert_eq!(crouched.max.y, config.upper_extent_crouching);
    assert!((crouched.center().y + 0.4).abs() < 1e-6);
}

#[test]
fn test_camera_follow_step() {
    let next = follow_step(Vec2::ZERO, Vec2::new(10.0, -5.0), 6.0, 0.1);
    assert!((next - Vec2::new(6.0, -3.0)).length() < 1e-5);

    // Long frames never overshoot.
    let next = follow_step(Vec2::ZERO, Vec2::new(10.0, 0.0), 6.0, 1.0);
    assert_eq!(next, Vec2::new(10.0, 0.0));
}

// -----------------------------------------------------------------------------
// Sandbox level
// -----------------------------------------------------------------------------

#[test]
fn test_sandbox_layout_is_deterministic() {
    assert_eq!(sandbox_layout(LEVEL_SEED), sandbox_layout(LEVEL_SEED));
    assert_ne!(sandbox_layout(1), sandbox_layout(2));
}

#[test]
fn test_scattered_platforms_stay_inside_the_level() {
    for seed in 0..32 {
        for piece in sandbox_layout(seed).iter().filter(|p| p.name == "scattered") {
            assert!(piece.one_way);
            let PieceShape::Rect { min, max } = piece.shape else {
                panic!("scattered platforms are boxes");
            };
            assert!(min.x >= -24.0 && max.x <= 24.0, "seed {seed}: {min:?}..{max:?}");
            assert!(min.y >= 4.5 && max.y <= 12.25, "seed {seed}: {min:?}..{max:?}");
        }
    }
}

#[test]
fn test_player_settles_on_sandbox_floor() {
    let config = ControllerConfig::default();
    let tuning = ControlTuning::default();
    let mut world = World::new();
    let (scene, platforms) = layout_scene(&sandbox_layout(LEVEL_SEED), &config, &mut world);
    let mut controller =
        player_controller(&config, &tuning, SPAWN_POINT).expect("default config is valid");

    for _ in 0..120 {
        controller
            .step(&scene, &platforms, &TickInput::default(), 1.0 / 60.0, &mut ContactLog::default())
            .expect("segment scene never fails");
    }

    assert!(controller.state().grounded);
    assert_eq!(controller.state().jumps_remaining, config.jump_limit);
    let feet = controller.bounds().down;
    assert!((0.0..=config.skin_width + 1e-4).contains(&feet), "feet at {feet}");
}

#[test]
fn test_checkpoint_patch_reports_its_tag() {
    let config = ControllerConfig::default();
    let tuning = ControlTuning::default();
    let mut world = World::new();
    let (scene, platforms) = layout_scene(&sandbox_layout(LEVEL_SEED), &config, &mut world);
    let mut controller = player_controller(&config, &tuning, Vec2::new(-3.0, 1.5))
        .expect("default config is valid");

    let mut surfaces = Vec::new();
    for _ in 0..90 {
        let mut log = ContactLog::default();
        controller
            .step(&scene, &platforms, &TickInput::default(), 1.0 / 60.0, &mut log)
            .expect("segment scene never fails");
        surfaces.extend(log.0.into_iter().flatten().map(|c| SurfaceEffect::from_tag(c.surface)));
    }

    assert!(surfaces.contains(&SurfaceEffect::Checkpoint));
}

#[test]
fn test_controller_settings_fall_back_to_defaults() {
    let path = std::path::Path::new("missing/controller.ron");
    let settings = ControllerSettings::load_or_default(path);
    assert_eq!(settings.config, ControllerConfig::default());
}

#[cfg(feature = "dev-tools")]
#[test]
fn test_ray_debug_log_keeps_latest_tick_per_actor() {
    use crate::query::{NoPlatforms, RecordingQuery};

    let config = ControllerConfig::default();
    let mut world = World::new();
    let (scene, _) = layout_scene(&sandbox_layout(LEVEL_SEED), &config, &mut world);
    let actor = world.spawn_empty().id();
    let mut controller = player_controller(&config, &ControlTuning::default(), SPAWN_POINT)
        .expect("default config is valid");
    let mut log = RayDebugLog::default();

    for _ in 0..2 {
        let recorder = RecordingQuery::new(&scene);
        let mut contacts = ContactLog::default();
        controller
            .step(&recorder, &NoPlatforms, &TickInput::default(), 1.0 / 60.0, &mut contacts)
            .expect("segment scene never fails");
        log.replace(actor, recorder.into_records());
    }

    let records = log.records(actor);
    assert!(!records.is_empty());
    assert_eq!(log.iter().count(), records.len());
    assert!(log.records(world.spawn_empty().id()).is_empty());
}
