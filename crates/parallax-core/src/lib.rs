pub mod camera;
pub mod color;
pub mod constants;
pub mod controller;
pub mod data;
pub mod glitch;
pub mod hover;
pub mod interpolate;
pub mod mesh;
pub mod pick;
pub mod scene;
pub mod spring;
pub mod stars;
pub mod text;

// Shaders bundled as string constants
pub static QUAD_WGSL: &str = include_str!("../shaders/quad.wgsl");
pub static STARS_WGSL: &str = include_str!("../shaders/stars.wgsl");
pub static GLITCH_WGSL: &str = include_str!("../shaders/glitch.wgsl");

pub use camera::{Camera, Ray, Viewport};
pub use color::{ColorError, Rgb};
pub use controller::Controller;
pub use scene::*;
pub use spring::{Spring, SpringConfig};
pub use stars::{StarField, StarsParams};
