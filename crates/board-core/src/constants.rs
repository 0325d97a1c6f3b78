// Shared layout/interaction tuning constants used by both web and native frontends.

// Scene layout
pub const PLANE_COUNT: usize = 20; // demo catalog size
pub const LAYER_COUNT: usize = 3; // depth layers for placement and parallax
pub const RING_RADIUS: f32 = 16.0; // innermost ring radius in world units
pub const RING_RADIUS_STEP: f32 = 3.0; // extra radius per depth layer
pub const RING_FLATTEN: f32 = 0.45; // vertical squash of the placement ring
pub const LAYER_DEPTH: f32 = 6.0; // world-space depth between layers

// Camera
pub const BASE_FOV_DEG: f32 = 50.0; // field of view at zoom 1
pub const DEFAULT_TARGET: [f32; 3] = [0.0, 0.0, 35.0]; // camera target after reset
pub const CAMERA_BLEND: f32 = 0.1; // per-frame easing toward camera goals
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 200.0;

// Interaction
pub const PAN_SCALE: f32 = 0.05; // drag delta to pan offset
pub const KEY_STEP: f32 = 2.0; // target translation per keypress
pub const SCROLL_WHEEL_SCALE: f32 = 0.0015; // horizontal wheel delta to pages

// Plane hover/press feedback
pub const SCALE_BLEND: f32 = 0.1; // per-frame easing of the displayed scale
pub const HOVER_SCALE: f32 = 1.15;
pub const PRESSED_SCALE: f32 = 0.92;
pub const IDLE_OPACITY: f32 = 0.92;
pub const HOVER_OPACITY: f32 = 1.0;
pub const PRESSED_OPACITY: f32 = 0.8;

// Floating animation parameter ranges (rolled once per instance)
pub const FLOAT_SPEED_MIN: f32 = 0.4;
pub const FLOAT_SPEED_MAX: f32 = 1.1;
pub const FLOAT_AMPLITUDE_MIN: f32 = 0.25;
pub const FLOAT_AMPLITUDE_MAX: f32 = 0.6;
pub const FLOAT_PHASE_STEP: f32 = 0.9; // base phase separation per index

// Scroll parallax
pub const PARALLAX_BASE: f32 = 4.0; // world units per scroll page
pub const PARALLAX_LAYER_STEP: f32 = 2.0; // extra units per depth layer

// Generated swatches
pub const SWATCH_WIDTH: u32 = 256;
pub const SWATCH_HEIGHT: u32 = 192;
pub const SWATCH_MIN_ALPHA: u8 = 64; // gradient alpha at the bottom edge
pub const SWATCH_HUE_STEP_DEG: f32 = 137.5; // golden-angle hue stepping
