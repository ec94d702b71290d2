//! Input tracking.
//!
//! The public API is platform-agnostic; the window runtime translates winit
//! events into [`InputEvent`]s. The samples only need pointer position plus a
//! handful of keys, so the vocabulary here stays deliberately small.

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{ButtonState, InputEvent, Key, KeyState, PointerButton};
