pub mod board;
pub mod camera;
pub mod catalog;
pub mod constants;
pub mod plane;
pub mod scroll;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static BACKDROP_WGSL: &str = include_str!("../shaders/backdrop.wgsl");

pub use board::*;
pub use camera::*;
pub use catalog::*;
pub use constants::*;
pub use plane::*;
pub use scroll::*;
