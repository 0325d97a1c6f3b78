use crate::camera::{Camera, CameraRig};
use crate::catalog::{Catalog, CatalogError, CatalogSource};
use crate::constants::*;
use crate::plane::{plane_center, plane_model, FloatParams, PlaneInstance};
use crate::scroll::ScrollTrack;
use glam::{Mat4, Vec2, Vec3};
use rand::prelude::*;

// Seed mix so layout and float parameters draw from independent streams
// even when built from the same profile seed.
const FLOAT_SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Behavior set for one rendition of the board. Two presets exist because
/// the component shipped twice with different tuning; both survive as
/// configuration rather than one guessing at the other.
#[derive(Clone, Debug)]
pub struct BoardProfile {
    pub zoom_speed: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
    pub pages: u32,
    pub plane_count: usize,
    pub source: CatalogSource,
    pub seed: u64,
}

impl BoardProfile {
    /// The refined tuning: local swatches, snappier zoom, wider range.
    pub fn refined() -> Self {
        Self {
            zoom_speed: 0.002,
            zoom_min: 0.3,
            zoom_max: 8.0,
            pages: 4,
            plane_count: PLANE_COUNT,
            source: CatalogSource::Generated,
            seed: 7,
        }
    }

    /// The earlier tuning: remote placeholder URLs, gentler zoom.
    pub fn draft() -> Self {
        Self {
            zoom_speed: 0.001,
            zoom_min: 0.1,
            zoom_max: 5.0,
            pages: 3,
            plane_count: PLANE_COUNT,
            source: CatalogSource::Remote {
                template: "https://picsum.photos/seed/board-{index}/600/400".into(),
            },
            seed: 7,
        }
    }
}

impl Default for BoardProfile {
    fn default() -> Self {
        Self::refined()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DragState {
    pub active: bool,
    pub origin: Vec2,
}

/// All interaction state owned by the root component.
#[derive(Clone, Debug)]
pub struct BoardState {
    pub zoom: f32,
    pub pan: Vec2,
    pub target: Vec3,
    pub scroll: ScrollTrack,
    pub drag: DragState,
    pub fatal: bool,
}

impl BoardState {
    fn new(profile: &BoardProfile) -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
            target: Vec3::from(DEFAULT_TARGET),
            scroll: ScrollTrack::new(profile.pages),
            drag: DragState::default(),
            fatal: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    Up,
    Down,
}

/// The root component: catalog, per-plane runtime state, camera rig and
/// interaction state, advanced by an explicit per-tick update.
pub struct Board {
    pub profile: BoardProfile,
    pub state: BoardState,
    pub catalog: Catalog,
    pub planes: Vec<PlaneInstance>,
    pub rig: CameraRig,
    clock: f32,
}

impl Board {
    pub fn new(profile: BoardProfile) -> Result<Self, CatalogError> {
        let catalog = Catalog::build(&profile.source, profile.plane_count, profile.seed)?;
        let mut rng = StdRng::seed_from_u64(profile.seed ^ FLOAT_SEED_MIX);
        let planes = (0..catalog.len())
            .map(|i| PlaneInstance::new(FloatParams::generate(&mut rng, i)))
            .collect();
        let state = BoardState::new(&profile);
        Ok(Self {
            profile,
            state,
            catalog,
            planes,
            rig: CameraRig::new(),
            clock: 0.0,
        })
    }

    /// Advance the scene by `dt` seconds: accumulate the clock, ease the
    /// camera toward its goals and every plane toward its scale target.
    /// Easing uses the fixed per-frame blend factors.
    pub fn tick(&mut self, dt: f32) {
        self.clock += dt;
        self.rig
            .tick(self.state.zoom, self.state.pan, self.state.target);
        for plane in &mut self.planes {
            plane.ease_scale();
        }
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        self.rig.camera(aspect)
    }

    pub fn scroll_progress(&self) -> f32 {
        self.state.scroll.progress()
    }

    pub fn plane_model(&self, index: usize) -> Mat4 {
        plane_model(
            &self.catalog.planes[index],
            &self.planes[index],
            index,
            self.clock,
            self.state.scroll.offset(),
        )
    }

    pub fn plane_center(&self, index: usize) -> Vec3 {
        plane_center(
            &self.catalog.planes[index],
            &self.planes[index].float,
            index,
            self.clock,
            self.state.scroll.offset(),
        )
    }

    // ---------------- input ----------------

    /// Pointer down: begin a drag from `at` and press the hovered plane.
    pub fn pointer_down(&mut self, at: Vec2) {
        self.state.drag = DragState {
            active: true,
            origin: at,
        };
        for plane in &mut self.planes {
            plane.pressed = plane.hovered;
        }
    }

    /// Pointer move while dragging: pan is a scaled delta from the
    /// original down point; the origin is never re-anchored.
    pub fn pointer_move(&mut self, at: Vec2) {
        if !self.state.drag.active {
            return;
        }
        let delta = at - self.state.drag.origin;
        self.state.pan = Vec2::new(delta.x * PAN_SCALE, -delta.y * PAN_SCALE);
    }

    /// Pointer up: end the drag and snap the pan back to zero.
    pub fn pointer_up(&mut self) {
        self.state.drag.active = false;
        self.state.pan = Vec2::ZERO;
        for plane in &mut self.planes {
            plane.pressed = false;
        }
    }

    pub fn set_hovered(&mut self, index: Option<usize>) {
        for (i, plane) in self.planes.iter_mut().enumerate() {
            plane.hovered = index == Some(i);
        }
    }

    /// Wheel input: vertical delta zooms (clamped to the profile range),
    /// horizontal delta advances the scroll track.
    pub fn wheel(&mut self, delta_x: f32, delta_y: f32) {
        let zoom = self.state.zoom - delta_y * self.profile.zoom_speed;
        self.state.zoom = zoom.clamp(self.profile.zoom_min, self.profile.zoom_max);
        if delta_x != 0.0 {
            self.state.scroll.advance(delta_x * SCROLL_WHEEL_SCALE);
        }
    }

    /// Arrow/WASD navigation translates the camera target.
    pub fn key_step(&mut self, key: NavKey) {
        match key {
            NavKey::Left => self.state.target.x -= KEY_STEP,
            NavKey::Right => self.state.target.x += KEY_STEP,
            NavKey::Up => self.state.target.y += KEY_STEP,
            NavKey::Down => self.state.target.y -= KEY_STEP,
        }
    }

    /// Space: back to defaults, independent of prior state.
    pub fn reset_view(&mut self) {
        self.state.target = Vec3::from(DEFAULT_TARGET);
        self.state.zoom = 1.0;
    }

    /// Record a terminal rendering failure. Returns true only on the
    /// transition; the flag never clears for this instance.
    pub fn mark_fatal(&mut self) -> bool {
        if self.state.fatal {
            return false;
        }
        self.state.fatal = true;
        true
    }

    pub fn mark_texture_failed(&mut self, index: usize) {
        if let Some(plane) = self.planes.get_mut(index) {
            plane.mark_texture_failed();
        }
    }
}
