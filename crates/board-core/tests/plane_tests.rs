// Host-side tests for plane animation, camera easing and scrolling.

use board_core::{
    parallax_shift, plane_center, CameraRig, Catalog, CatalogSource, FloatParams, PlaneInstance,
    ScrollTrack, BASE_FOV_DEG, HOVER_SCALE, LAYER_COUNT, PRESSED_SCALE,
};
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn float_displacement_is_bounded_by_amplitude() {
    let mut rng = StdRng::seed_from_u64(9);
    for index in 0..16 {
        let params = FloatParams::generate(&mut rng, index);
        for step in 0..512 {
            let t = step as f32 * 0.173;
            let d = params.displacement(t);
            assert!(d.x.abs() <= params.amplitude + 1e-6);
            assert!(d.y.abs() <= params.amplitude + 1e-6);
            assert!(d.z.abs() <= params.amplitude + 1e-6);
        }
    }
}

#[test]
fn instances_get_distinct_phases() {
    // identical rng state, different index: phase separation comes from
    // the index itself
    let a = FloatParams::generate(&mut StdRng::seed_from_u64(5), 0);
    let b = FloatParams::generate(&mut StdRng::seed_from_u64(5), 1);
    assert!((a.phase - b.phase).abs() > 0.1);
}

#[test]
fn displayed_scale_eases_toward_hover_target() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut plane = PlaneInstance::new(FloatParams::generate(&mut rng, 0));
    plane.hovered = true;
    for _ in 0..200 {
        plane.ease_scale();
    }
    assert!((plane.display_scale - HOVER_SCALE).abs() < 1e-3);

    plane.pressed = true;
    for _ in 0..200 {
        plane.ease_scale();
    }
    assert!((plane.display_scale - PRESSED_SCALE).abs() < 1e-3);
}

#[test]
fn scale_easing_is_gradual_not_a_snap() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut plane = PlaneInstance::new(FloatParams::generate(&mut rng, 0));
    plane.hovered = true;
    plane.ease_scale();
    assert!(plane.display_scale > 1.0);
    assert!(plane.display_scale < HOVER_SCALE);
}

#[test]
fn texture_failure_is_permanent() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut plane = PlaneInstance::new(FloatParams::generate(&mut rng, 0));
    plane.mark_texture_failed();
    plane.hovered = true;
    plane.ease_scale();
    plane.hovered = false;
    plane.ease_scale();
    assert!(plane.texture_failed);
}

#[test]
fn parallax_is_linear_in_scroll_offset_and_grows_with_layer() {
    for index in 0..8 {
        let k = parallax_shift(index, 1.0);
        assert!((parallax_shift(index, 2.5) - 2.5 * k).abs() < 1e-4);
    }
    // deeper layers shift further for the same offset
    let shallow = parallax_shift(0, 1.0).abs();
    let deep = parallax_shift(LAYER_COUNT - 1, 1.0).abs();
    assert!(deep > shallow);
}

#[test]
fn plane_center_tracks_descriptor_plus_offsets() {
    let catalog = Catalog::build(&CatalogSource::Generated, 6, 3).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let params = FloatParams::generate(&mut rng, 2);
    let desc = &catalog.planes[2];
    let center = plane_center(desc, &params, 2, 1.25, 0.5);
    let expected =
        desc.position + params.displacement(1.25) + Vec3::X * parallax_shift(2, 0.5);
    assert!((center - expected).length() < 1e-5);
}

#[test]
fn camera_rig_converges_on_zoomed_fov_and_panned_position() {
    let mut rig = CameraRig::new();
    let target = Vec3::new(4.0, -2.0, 35.0);
    let pan = Vec2::new(1.5, 0.5);
    for _ in 0..400 {
        rig.tick(2.0, pan, target);
    }
    assert!((rig.fov_deg - BASE_FOV_DEG / 2.0).abs() < 1e-2);
    let goal = Vec3::new(target.x + pan.x, target.y + pan.y, target.z);
    assert!((rig.position - goal).length() < 1e-2);
}

#[test]
fn camera_rig_keeps_running_position_across_target_changes() {
    let mut rig = CameraRig::new();
    let first = Vec3::new(10.0, 0.0, 35.0);
    for _ in 0..5 {
        rig.tick(1.0, Vec2::ZERO, first);
    }
    let partway = rig.position;
    assert!(partway.x > 0.0 && partway.x < 10.0);

    // switching goals continues from the running value, no snap
    let second = Vec3::new(-10.0, 0.0, 35.0);
    rig.tick(1.0, Vec2::ZERO, second);
    let expected = partway + (second - partway) * 0.1;
    assert!((rig.position - expected).length() < 1e-5);
}

#[test]
fn scroll_track_wraps_and_reports_unit_progress() {
    let mut track = ScrollTrack::new(4);
    track.advance(9.5);
    assert!((track.offset() - 1.5).abs() < 1e-5);
    assert!((track.progress() - 0.375).abs() < 1e-5);

    track.advance(-3.0);
    assert!((track.offset() - 2.5).abs() < 1e-5);
    for _ in 0..1000 {
        track.advance(-0.77);
        let p = track.progress();
        assert!((0.0..1.0).contains(&p));
    }
}
