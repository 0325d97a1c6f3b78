// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec3;
use input::*;

#[test]
fn ray_sphere_intersection_basic() {
    let ray_origin = glam::Vec3::ZERO;
    let ray_dir = glam::Vec3::new(0.0, 0.0, 1.0);

    let center = glam::Vec3::new(0.0, 0.0, 5.0);
    let radius = 2.0;

    let result = ray_sphere(ray_origin, ray_dir, center, radius);
    assert!(result.is_some());

    let t = result.unwrap();
    assert!(t > 0.0);
    assert!(t < 10.0);
}

#[test]
fn ray_sphere_intersection_miss() {
    let ray_origin = glam::Vec3::ZERO;
    let ray_dir = glam::Vec3::new(1.0, 0.0, 0.0);

    // sphere sits off in Z while the ray travels along X
    let center = glam::Vec3::new(0.0, 0.0, 5.0);
    let radius = 2.0;

    assert!(ray_sphere(ray_origin, ray_dir, center, radius).is_none());
}

#[test]
fn ray_sphere_behind_origin_is_rejected() {
    let ray_origin = glam::Vec3::ZERO;
    let ray_dir = glam::Vec3::new(0.0, 0.0, 1.0);

    let center = glam::Vec3::new(0.0, 0.0, -5.0);
    assert!(ray_sphere(ray_origin, ray_dir, center, 2.0).is_none());
}

#[test]
fn screen_center_ray_points_down_negative_z() {
    let eye = Vec3::new(0.0, 0.0, 35.0);
    let (ro, rd) = screen_to_world_ray(800.0, 600.0, 400.0, 300.0, eye, 50f32.to_radians());
    assert_eq!(ro, eye);
    assert!(rd.z < 0.0);
    assert!(rd.x.abs() < 1e-4);
    assert!(rd.y.abs() < 1e-4);
}

#[test]
fn screen_edges_tilt_the_ray() {
    let eye = Vec3::new(0.0, 0.0, 35.0);
    let fov = 50f32.to_radians();
    let (_, right) = screen_to_world_ray(800.0, 600.0, 800.0, 300.0, eye, fov);
    assert!(right.x > 0.0);
    let (_, top) = screen_to_world_ray(800.0, 600.0, 400.0, 0.0, eye, fov);
    assert!(top.y > 0.0);
}

#[test]
fn pick_plane_prefers_the_nearest_hit() {
    let ro = Vec3::new(0.0, 0.0, 35.0);
    let rd = Vec3::new(0.0, 0.0, -1.0);
    let centers = vec![
        Vec3::new(0.0, 0.0, -10.0),
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::new(50.0, 0.0, 0.0), // off-ray
    ];
    let radii = vec![2.0, 2.0, 2.0];
    assert_eq!(pick_plane(ro, rd, &centers, &radii), Some(1));
}

#[test]
fn pick_plane_none_when_nothing_is_hit() {
    let ro = Vec3::new(0.0, 0.0, 35.0);
    let rd = Vec3::new(0.0, 0.0, -1.0);
    let centers = vec![Vec3::new(30.0, 0.0, 0.0), Vec3::new(-30.0, 0.0, 0.0)];
    let radii = vec![2.0, 2.0];
    assert_eq!(pick_plane(ro, rd, &centers, &radii), None);
}
