//! Camera and model-transform state.
//!
//! CPU-side matrix math only; matrices are handed to the renderer as plain
//! `glam::Mat4` values and uploaded from there.

mod camera;
mod spin;

pub use camera::Camera;
pub use spin::Spin;
