use winit::event::WindowEvent;

use super::ctx::TickCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by [`Host`](super::Host).
pub trait HostApp {
    /// Called for every window event before the host handles it.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per host tick (every redraw opportunity).
    ///
    /// Ticks arrive at the host's cadence, not the app's; route them through a
    /// [`PacedSurface`](crate::surface::PacedSurface) with [`TickCtx::present`].
    fn on_tick(&mut self, ctx: &mut TickCtx<'_, '_>) -> AppControl;
}
