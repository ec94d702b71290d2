//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, wires them to the GPU layer, and
//! dispatches the lifecycle callbacks.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
