use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Callback set the runtime invokes.
///
/// Callbacks run serially on the event-loop thread: `on_start` once before
/// the first frame, then `on_window_event`/`on_frame` as events arrive, then
/// `on_stop` exactly once at teardown.
pub trait App {
    /// Called once, after the window and GPU context exist.
    fn on_start(&mut self) {}

    /// Called once when the runtime shuts down.
    fn on_stop(&mut self) {}

    /// Called for raw window events, before the runtime's own handling.
    ///
    /// Input is already tracked by the runtime; most apps only need this to
    /// veto or observe events the input layer does not model.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
