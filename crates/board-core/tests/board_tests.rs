// Host-side tests for the root interaction controller.

use board_core::{Board, BoardProfile, NavKey};
use glam::{Vec2, Vec3};

fn board() -> Board {
    Board::new(BoardProfile::refined()).expect("catalog")
}

#[test]
fn zoom_clamped_under_cumulative_wheel_input() {
    let mut b = board();
    for _ in 0..10_000 {
        b.wheel(0.0, -500.0);
    }
    assert_eq!(b.state.zoom, b.profile.zoom_max);

    for _ in 0..10_000 {
        b.wheel(0.0, 500.0);
    }
    assert_eq!(b.state.zoom, b.profile.zoom_min);
}

#[test]
fn wheel_uses_profile_zoom_speed() {
    let mut refined = board();
    refined.wheel(0.0, -100.0);
    assert!((refined.state.zoom - 1.2).abs() < 1e-6);

    let mut draft = Board::new(BoardProfile::draft()).expect("catalog");
    draft.wheel(0.0, -100.0);
    assert!((draft.state.zoom - 1.1).abs() < 1e-6);
}

#[test]
fn pan_is_scaled_delta_from_down_point() {
    let mut b = board();
    b.pointer_down(Vec2::new(100.0, 80.0));
    b.pointer_move(Vec2::new(160.0, 20.0));
    assert!((b.state.pan.x - 3.0).abs() < 1e-6);
    assert!((b.state.pan.y - 3.0).abs() < 1e-6);
}

#[test]
fn drag_origin_is_not_reanchored_between_moves() {
    let mut b = board();
    b.pointer_down(Vec2::new(10.0, 10.0));
    b.pointer_move(Vec2::new(30.0, 10.0));
    b.pointer_move(Vec2::new(50.0, 10.0));
    // offset relative to the original down point, not the previous move
    assert!((b.state.pan.x - 2.0).abs() < 1e-6);
    assert!((b.state.pan.y - 0.0).abs() < 1e-6);
}

#[test]
fn pointer_up_snaps_pan_to_zero() {
    let mut b = board();
    b.pointer_down(Vec2::new(0.0, 0.0));
    b.pointer_move(Vec2::new(400.0, -300.0));
    assert!(b.state.pan.length() > 0.0);
    b.pointer_up();
    assert_eq!(b.state.pan, Vec2::ZERO);
    assert!(!b.state.drag.active);
}

#[test]
fn pointer_move_without_drag_leaves_pan_untouched() {
    let mut b = board();
    b.pointer_move(Vec2::new(500.0, 500.0));
    assert_eq!(b.state.pan, Vec2::ZERO);
}

#[test]
fn space_resets_view_regardless_of_prior_state() {
    let mut b = board();
    for _ in 0..50 {
        b.wheel(0.0, -300.0);
        b.key_step(NavKey::Right);
        b.key_step(NavKey::Up);
    }
    b.reset_view();
    assert_eq!(b.state.target, Vec3::new(0.0, 0.0, 35.0));
    assert_eq!(b.state.zoom, 1.0);
}

#[test]
fn key_steps_translate_target_along_axes() {
    let mut b = board();
    let start = b.state.target;
    b.key_step(NavKey::Left);
    b.key_step(NavKey::Left);
    b.key_step(NavKey::Up);
    assert_eq!(b.state.target, start + Vec3::new(-4.0, 2.0, 0.0));
}

#[test]
fn scroll_progress_stays_in_unit_range() {
    let mut b = board();
    for i in 0..5_000 {
        let delta = if i % 3 == 0 { -900.0 } else { 700.0 };
        b.wheel(delta, 0.0);
        let p = b.scroll_progress();
        assert!((0.0..1.0).contains(&p), "progress {p} out of range");
    }
}

#[test]
fn fatal_transition_fires_exactly_once_and_never_reverts() {
    let mut b = board();
    assert!(b.mark_fatal());
    assert!(!b.mark_fatal());
    assert!(b.state.fatal);
    b.tick(1.0 / 60.0);
    b.reset_view();
    assert!(b.state.fatal);
}

#[test]
fn pointer_down_presses_only_the_hovered_plane() {
    let mut b = board();
    b.set_hovered(Some(3));
    b.pointer_down(Vec2::ZERO);
    for (i, plane) in b.planes.iter().enumerate() {
        assert_eq!(plane.pressed, i == 3);
    }
    b.pointer_up();
    assert!(b.planes.iter().all(|p| !p.pressed));
}

#[test]
fn profiles_differ_as_shipped() {
    let refined = BoardProfile::refined();
    let draft = BoardProfile::draft();
    assert!(refined.zoom_speed > draft.zoom_speed);
    assert!(refined.zoom_max > draft.zoom_max);
    assert_ne!(refined.pages, draft.pages);
}
