use crate::catalog::PlaneDescriptor;
use crate::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::prelude::*;

/// Floating-animation parameters, rolled once per plane instance and held
/// for its lifetime. The phase folds in the instance index so no two
/// planes ever move in sync.
#[derive(Clone, Copy, Debug)]
pub struct FloatParams {
    pub weights: Vec3,
    pub speed: f32,
    pub amplitude: f32,
    pub phase: f32,
}

impl FloatParams {
    pub fn generate(rng: &mut impl Rng, index: usize) -> Self {
        Self {
            weights: Vec3::new(
                0.4 + rng.gen::<f32>() * 0.6,
                0.4 + rng.gen::<f32>() * 0.6,
                0.2 + rng.gen::<f32>() * 0.4,
            ),
            speed: FLOAT_SPEED_MIN + rng.gen::<f32>() * (FLOAT_SPEED_MAX - FLOAT_SPEED_MIN),
            amplitude: FLOAT_AMPLITUDE_MIN
                + rng.gen::<f32>() * (FLOAT_AMPLITUDE_MAX - FLOAT_AMPLITUDE_MIN),
            phase: index as f32 * FLOAT_PHASE_STEP + rng.gen::<f32>() * 0.5,
        }
    }

    /// Displacement at elapsed time `t`. Each component stays within
    /// `amplitude` since the axis weights are at most 1.
    pub fn displacement(&self, t: f32) -> Vec3 {
        let p = t * self.speed + self.phase;
        Vec3::new(
            p.sin() * self.weights.x,
            (p * 1.3).cos() * self.weights.y,
            (p * 0.7).sin() * self.weights.z,
        ) * self.amplitude
    }
}

/// Mutable per-plane runtime state; the descriptor it accompanies never
/// changes after catalog build.
#[derive(Clone, Debug)]
pub struct PlaneInstance {
    pub float: FloatParams,
    pub hovered: bool,
    pub pressed: bool,
    pub texture_failed: bool,
    pub display_scale: f32,
}

impl PlaneInstance {
    pub fn new(float: FloatParams) -> Self {
        Self {
            float,
            hovered: false,
            pressed: false,
            texture_failed: false,
            display_scale: 1.0,
        }
    }

    pub fn scale_target(&self) -> f32 {
        if self.pressed {
            PRESSED_SCALE
        } else if self.hovered {
            HOVER_SCALE
        } else {
            1.0
        }
    }

    /// First-order smoothing of the displayed scale, one step per frame.
    pub fn ease_scale(&mut self) {
        self.display_scale += (self.scale_target() - self.display_scale) * SCALE_BLEND;
    }

    /// Opacity feedback survives texture failure unchanged.
    pub fn opacity(&self) -> f32 {
        if self.pressed {
            PRESSED_OPACITY
        } else if self.hovered {
            HOVER_OPACITY
        } else {
            IDLE_OPACITY
        }
    }

    /// One-way for the instance's lifetime; there is no reload path.
    pub fn mark_texture_failed(&mut self) {
        self.texture_failed = true;
    }
}

/// Horizontal shift from scroll position; deeper layers move faster.
#[inline]
pub fn parallax_shift(index: usize, scroll_offset_pages: f32) -> f32 {
    -scroll_offset_pages * (PARALLAX_BASE + (index % LAYER_COUNT) as f32 * PARALLAX_LAYER_STEP)
}

/// World-space center of plane `index` at time `t`.
pub fn plane_center(
    desc: &PlaneDescriptor,
    float: &FloatParams,
    index: usize,
    t: f32,
    scroll_offset_pages: f32,
) -> Vec3 {
    desc.position
        + float.displacement(t)
        + Vec3::X * parallax_shift(index, scroll_offset_pages)
}

/// Model matrix for plane `index`: fixed descriptor transform composed
/// with the per-frame float offset, parallax and eased display scale.
pub fn plane_model(
    desc: &PlaneDescriptor,
    inst: &PlaneInstance,
    index: usize,
    t: f32,
    scroll_offset_pages: f32,
) -> Mat4 {
    let translation = plane_center(desc, &inst.float, index, t, scroll_offset_pages);
    let rotation = Quat::from_euler(
        EulerRot::XYZ,
        desc.rotation.x,
        desc.rotation.y,
        desc.rotation.z,
    );
    let scale = Vec3::new(
        desc.scale.x * inst.display_scale,
        desc.scale.y * inst.display_scale,
        1.0,
    );
    Mat4::from_scale_rotation_translation(scale, rotation, translation)
}
