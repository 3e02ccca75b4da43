use winit::window::Window;

use crate::coords::{ViewBounds, Viewport};
use crate::device::Gpu;
use crate::paint::Color;
use crate::render::FrameTarget;
use crate::surface::{PacedSurface, Painter, RenderOutcome};
use crate::time::{Clock, FrameTime};

/// Per-tick context passed to [`HostApp::on_tick`](super::HostApp::on_tick).
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct TickCtx<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
    pub time: FrameTime,
    pub(crate) fatal: bool,
}

impl<'a, 'w> TickCtx<'a, 'w> {
    pub(crate) fn new(window: &'a Window, gpu: &'a mut Gpu<'w>, time: FrameTime) -> Self {
        Self {
            window,
            gpu,
            time,
            fatal: false,
        }
    }

    /// Logical window size.
    pub fn viewport(&self) -> Viewport {
        let scale = self.window.scale_factor();
        let logical: winit::dpi::LogicalSize<f64> = self.window.inner_size().to_logical(scale);
        Viewport::new(logical.width as f32, logical.height as f32)
    }

    /// Pixel viewing volume for the current window size, `None` while the
    /// window has no drawable area.
    pub fn bounds(&self) -> Option<ViewBounds> {
        drawable_bounds(self.viewport())
    }

    /// Routes this tick through `surface`, drawing into the window when it
    /// decides to render.
    ///
    /// Returns `None` while the window has no drawable area (minimized). The
    /// surface is not consulted then, so its flag and stats stay untouched
    /// until the window comes back.
    pub fn present<P, C>(
        &mut self,
        surface: &mut PacedSurface<P, C>,
        clear: Color,
    ) -> Option<RenderOutcome>
    where
        P: for<'t> Painter<FrameTarget<'t, 'w>>,
        C: Clock,
    {
        let bounds = self.bounds()?;
        let mut target = FrameTarget::new(self.gpu, self.window, clear);
        let outcome = surface.on_tick(bounds, &mut target);

        if target.error_action().is_some_and(|a| a.is_fatal()) {
            log::error!("GPU surface failure is not recoverable");
            self.fatal = true;
        }

        Some(outcome)
    }
}

fn drawable_bounds(viewport: Viewport) -> Option<ViewBounds> {
    viewport.is_valid().then(|| ViewBounds::from_viewport(viewport))
}
