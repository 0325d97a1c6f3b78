//! Camera types shared with both frontends.
//!
//! These types avoid platform-specific APIs; the frontends consume them to
//! build view/projection matrices each frame.

use crate::constants::*;
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Smoothed camera state. Each frame the field of view eases toward
/// `BASE_FOV_DEG / zoom` and the position toward `target + pan`, from the
/// retained running values, so repeated target changes compose smoothly.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub fov_deg: f32,
    pub position: Vec3,
}

impl CameraRig {
    pub fn new() -> Self {
        Self {
            fov_deg: BASE_FOV_DEG,
            position: Vec3::from(DEFAULT_TARGET),
        }
    }

    /// One easing step. `zoom` is already clamped by the interaction layer.
    pub fn tick(&mut self, zoom: f32, pan: Vec2, target: Vec3) {
        let fov_goal = BASE_FOV_DEG / zoom;
        self.fov_deg += (fov_goal - self.fov_deg) * CAMERA_BLEND;
        let goal = Vec3::new(target.x + pan.x, target.y + pan.y, target.z);
        self.position += (goal - self.position) * CAMERA_BLEND;
    }

    /// Camera looking down -Z from the rig's current position.
    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.position,
            target: self.position - Vec3::Z,
            up: Vec3::Y,
            aspect,
            fovy_radians: self.fov_deg.to_radians(),
            znear: Z_NEAR,
            zfar: Z_FAR,
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}
