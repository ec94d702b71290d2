use std::collections::HashSet;

use super::types::{InputEvent, Key, PointerButton};

/// Per-frame input deltas.
///
/// [`InputState`](super::InputState) answers "is it down right now"; this type
/// answers "did it go down this frame". The runtime clears it after each
/// `on_frame` call.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Keys pressed this frame.
    pub keys_pressed: HashSet<Key>,

    /// Keys released this frame.
    pub keys_released: HashSet<Key>,

    /// Pointer buttons pressed this frame.
    pub buttons_pressed: HashSet<PointerButton>,

    /// Pointer buttons released this frame.
    pub buttons_released: HashSet<PointerButton>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }
}
