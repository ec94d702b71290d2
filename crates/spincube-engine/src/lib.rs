//! Spincube engine crate.
//!
//! This crate owns the platform + GPU runtime the hello-cube samples run on:
//! the window/event loop host, the wgpu device and surface, input tracking,
//! frame timing, and the renderers for the cube itself and the FPS overlay.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod mesh;
pub mod scene;
pub mod render;
