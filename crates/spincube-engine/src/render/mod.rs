//! GPU rendering.
//!
//! Renderers own their GPU resources (pipeline, buffers, textures) and create
//! them lazily on first use, keyed on the surface format. Each renderer
//! records its own render pass with `LoadOp::Load`; the frame context clears
//! color + depth once up front.

mod ctx;
mod cube;
mod overlay;
mod texture;

pub use ctx::{RenderCtx, RenderTarget};
pub use cube::CubeRenderer;
pub use overlay::FpsOverlay;
pub use texture::Texture2d;
