//! Query domain: tests for the segment scene, the recording decorator, and platform lookups.

use bevy::prelude::*;

use super::*;

const SOLID: LayerMask = LayerMask(1 << 0);
const PLATFORMS: LayerMask = LayerMask(1 << 9);

fn bodies(count: usize) -> Vec<Entity> {
    let mut world = World::new();
    (0..count).map(|_| world.spawn_empty().id()).collect()
}

#[test]
fn test_ray_reports_nearest_segment() {
    let ids = bodies(2);
    let mut scene = SegmentScene::new();
    scene
        .add_segment(Vec2::new(-1.0, -3.0), Vec2::new(1.0, -3.0), ids[0], SOLID)
        .add_segment(Vec2::new(-1.0, -1.0), Vec2::new(1.0, -1.0), ids[1], SOLID);

    let hit = scene
        .cast_ray(Vec2::ZERO, Dir2::NEG_Y, 10.0, SOLID)
        .expect("segment scene never fails")
        .expect("both segments are in reach");

    assert_eq!(hit.body, ids[1]);
    assert!((hit.distance - 1.0).abs() < 1e-6);
    assert!((hit.point - Vec2::new(0.0, -1.0)).length() < 1e-6);
}

#[test]
fn test_ray_skips_segments_outside_mask() {
    let ids = bodies(2);
    let mut scene = SegmentScene::new();
    scene
        .add_segment(Vec2::new(-1.0, -1.0), Vec2::new(1.0, -1.0), ids[0], PLATFORMS)
        .add_segment(Vec2::new(-1.0, -2.0), Vec2::new(1.0, -2.0), ids[1], SOLID);

    let solid = scene.cast_ray(Vec2::ZERO, Dir2::NEG_Y, 10.0, SOLID).unwrap();
    assert_eq!(solid.map(|hit| hit.body), Some(ids[1]));

    let platforms = scene.cast_ray(Vec2::ZERO, Dir2::NEG_Y, 10.0, PLATFORMS).unwrap();
    assert_eq!(platforms.map(|hit| hit.body), Some(ids[0]));

    let both = LayerMask(SOLID.0 | PLATFORMS.0);
    let nearest = scene.cast_ray(Vec2::ZERO, Dir2::NEG_Y, 10.0, both).unwrap();
    assert_eq!(nearest.map(|hit| hit.body), Some(ids[0]));

    let nothing = scene.cast_ray(Vec2::ZERO, Dir2::NEG_Y, 10.0, LayerMask(1 << 8)).unwrap();
    assert!(nothing.is_none());
}

#[test]
fn test_normal_faces_the_ray() {
    let body = bodies(1)[0];
    let mut scene = SegmentScene::new();
    // Wound both ways so the raw perpendicular points either side.
    scene.add_segment(Vec2::new(2.0, -1.0), Vec2::new(2.0, 1.0), body, SOLID);
    scene.add_segment(Vec2::new(-2.0, 1.0), Vec2::new(-2.0, -1.0), body, SOLID);

    let right = scene.cast_ray(Vec2::ZERO, Dir2::X, 5.0, SOLID).unwrap().unwrap();
    assert!((right.normal - Vec2::NEG_X).length() < 1e-6);

    let left = scene.cast_ray(Vec2::ZERO, Dir2::NEG_X, 5.0, SOLID).unwrap().unwrap();
    assert!((left.normal - Vec2::X).length() < 1e-6);
}

#[test]
fn test_ray_starting_on_segment_hits_at_zero() {
    let body = bodies(1)[0];
    let mut scene = SegmentScene::new();
    scene.add_segment(Vec2::new(-1.0, 0.5), Vec2::new(1.0, 0.5), body, SOLID);

    let hit = scene
        .cast_ray(Vec2::new(0.0, 0.5), Dir2::Y, 1.0, SOLID)
        .unwrap()
        .expect("origin lies on the segment");
    assert_eq!(hit.distance, 0.0);
}

#[test]
fn test_ray_misses_out_of_reach_and_parallel_segments() {
    let body = bodies(1)[0];
    let mut scene = SegmentScene::new();
    scene.add_segment(Vec2::new(-1.0, -2.0), Vec2::new(1.0, -2.0), body, SOLID);

    assert!(scene.cast_ray(Vec2::ZERO, Dir2::NEG_Y, 1.5, SOLID).unwrap().is_none());
    assert!(scene.cast_ray(Vec2::ZERO, Dir2::Y, 10.0, SOLID).unwrap().is_none());
    assert!(scene.cast_ray(Vec2::new(0.0, -2.0), Dir2::X, 10.0, SOLID).unwrap().is_none());
    // Past the segment's end.
    assert!(scene.cast_ray(Vec2::new(3.0, 0.0), Dir2::NEG_Y, 10.0, SOLID).unwrap().is_none());
}

#[test]
fn test_box_blocks_from_every_side() {
    let body = bodies(1)[0];
    let mut scene = SegmentScene::new();
    scene.add_box(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0), body, SOLID);
    assert_eq!(scene.segments().len(), 4);

    let cases = [
        (Vec2::new(0.0, 5.0), Dir2::NEG_Y, Vec2::Y),
        (Vec2::new(0.0, -5.0), Dir2::Y, Vec2::NEG_Y),
        (Vec2::new(5.0, 0.0), Dir2::NEG_X, Vec2::X),
        (Vec2::new(-5.0, 0.0), Dir2::X, Vec2::NEG_X),
    ];
    for (origin, direction, normal) in cases {
        let hit = scene
            .cast_ray(origin, direction, 10.0, SOLID)
            .unwrap()
            .expect("box is in reach");
        assert!((hit.distance - 4.0).abs() < 1e-6);
        assert!((hit.normal - normal).length() < 1e-6);
    }
}

#[test]
fn test_sloped_segment_reports_unit_normal() {
    let body = bodies(1)[0];
    let mut scene = SegmentScene::new();
    scene.add_segment(Vec2::new(-4.0, -4.0), Vec2::new(4.0, 4.0), body, SOLID);

    let hit = scene
        .cast_ray(Vec2::new(1.0, 3.0), Dir2::NEG_Y, 5.0, SOLID)
        .unwrap()
        .expect("ramp below origin");
    assert!((hit.distance - 2.0).abs() < 1e-5);
    assert!((hit.normal.length() - 1.0).abs() < 1e-6);
    assert!((hit.normal - Vec2::new(-1.0, 1.0).normalize()).length() < 1e-5);
}

#[test]
fn test_recording_query_keeps_every_cast() {
    let body = bodies(1)[0];
    let mut scene = SegmentScene::new();
    scene.add_segment(Vec2::new(-1.0, -1.0), Vec2::new(1.0, -1.0), body, SOLID);

    let recorder = RecordingQuery::new(&scene);
    let hit = recorder.cast_ray(Vec2::ZERO, Dir2::NEG_Y, 2.0, SOLID).unwrap();
    let miss = recorder.cast_ray(Vec2::ZERO, Dir2::Y, 2.0, SOLID).unwrap();
    assert!(hit.is_some());
    assert!(miss.is_none());
    assert_eq!(recorder.cast_count(), 2);

    let records = recorder.into_records();
    assert_eq!(records[0].hit, hit);
    assert!((records[0].end() - Vec2::new(0.0, -1.0)).length() < 1e-6);
    assert!(records[1].hit.is_none());
    assert!((records[1].end() - Vec2::new(0.0, 2.0)).length() < 1e-6);
    assert_eq!(records[1].mask, SOLID);
}

#[test]
fn test_platform_table_lookup() {
    let ids = bodies(2);
    let mut table = PlatformTable::new();
    assert!(table.is_empty());

    table.insert(ids[0], Platform::tagged(2).solid_underside());
    assert_eq!(table.len(), 1);

    let platform = table.platform(ids[0]).expect("registered");
    assert_eq!(platform.surface, SurfaceTag(2));
    assert!(!platform.go_down);
    assert!(table.platform(ids[1]).is_none());

    table.remove(ids[0]);
    assert!(table.platform(ids[0]).is_none());
    assert!(NoPlatforms.platform(ids[1]).is_none());
}

#[test]
fn test_default_platform_is_plain_and_passable() {
    let platform = Platform::default();
    assert!(platform.surface.is_plain());
    assert!(platform.go_down);
    assert_eq!(platform.surface, SurfaceTag::PLAIN);
}
