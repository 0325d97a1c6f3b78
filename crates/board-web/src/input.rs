use board_core::{Z_FAR, Z_NEAR};
use glam::{Mat4, Vec3, Vec4};

#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
}

#[inline]
/// Compute a world-space ray from canvas backing-store coordinates.
///
/// - `width`, `height`: canvas backing dimensions in pixels
/// - `sx`, `sy`: pixel coordinates in that space
/// - `eye`: current camera position (looking down -Z)
/// - `fovy_radians`: current eased field of view
///
/// Returns `(ray_origin, ray_direction)` in world space.
pub fn screen_to_world_ray(
    width: f32,
    height: f32,
    sx: f32,
    sy: f32,
    eye: Vec3,
    fovy_radians: f32,
) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
    let aspect = width / height.max(1.0);
    let proj = Mat4::perspective_rh(fovy_radians, aspect, Z_NEAR, Z_FAR);
    let view = Mat4::look_at_rh(eye, eye - Vec3::Z, Vec3::Y);
    let inv = (proj * view).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let rd = (p1 - eye).normalize();
    (eye, rd)
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Nearest plane hit by the ray, tested against per-plane bounding
/// spheres. Returns the index of the closest positive hit.
#[inline]
pub fn pick_plane(
    ray_origin: Vec3,
    ray_dir: Vec3,
    centers: &[Vec3],
    radii: &[f32],
) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, (center, radius)) in centers.iter().zip(radii.iter()).enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, *center, *radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}
