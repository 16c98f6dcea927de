use crate::input::InputEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Contract between the host runtime and whatever it drives.
///
/// The runtime calls `on_input` for every translated event as it arrives and
/// `on_frame` once per display refresh. Both run on the event-loop thread, so
/// an event delivered between two frames is visible to the next `on_frame`.
pub trait App {
    fn on_input(&mut self, event: &InputEvent) {
        let _ = event;
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
