#[macro_use]
extern crate lazy_static;

pub mod bitmap;
pub mod camera;
pub mod core;
pub mod light;
pub mod loader;
pub mod material;
pub mod pixel_sampler;
pub mod primitive;
pub mod renderer;
pub mod variant;
