//! Static geometry.
//!
//! The samples draw exactly one mesh: a unit cube as a 36-vertex triangle
//! list with per-face texture coordinates.

mod cube;

pub use cube::{CUBE_VERTICES, Vertex};
