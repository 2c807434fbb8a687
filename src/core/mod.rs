pub mod camera;
pub mod config;
pub mod constants;
pub mod field;
pub mod lifecycle;
pub mod motion;
pub mod particles;
pub mod pointer;
pub mod surface;

pub use camera::*;
pub use config::*;
pub use field::*;
pub use lifecycle::*;
pub use motion::*;
pub use particles::*;
pub use pointer::*;
pub use surface::*;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
