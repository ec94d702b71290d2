/// Keys the samples react to.
///
/// Anything else arrives as `Unknown` with the platform keycode, so an app can
/// still match on keys this enum does not name.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Pointer button identifier.
///
/// `Primary` is the left mouse button or a touch contact.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// True when the event is a key repeat.
        repeat: bool,
    },

    /// Pointer moved; coordinates are logical pixels, window-relative.
    PointerMoved { x: f32, y: f32 },

    PointerButton {
        button: PointerButton,
        state: ButtonState,
        x: f32,
        y: f32,
    },

    /// Pointer left the window surface.
    PointerLeft,

    /// Window focus change.
    Focused(bool),
}
