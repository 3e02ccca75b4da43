use winit::window::Window;

use crate::coords::ViewBounds;
use crate::device::{context_unavailable, Gpu, SurfaceErrorAction};
use crate::error::RenderError;
use crate::paint::Color;
use crate::projection::ProjectionMatrix;

use super::{RenderCtx, RenderTarget};

/// Render target handle a host passes to [`PacedSurface::on_tick`].
///
/// Nothing is acquired until a painter calls [`draw_frame`](Self::draw_frame),
/// so skipped ticks cost no swapchain image.
///
/// [`PacedSurface::on_tick`]: crate::surface::PacedSurface::on_tick
pub struct FrameTarget<'a, 'w> {
    gpu: &'a mut Gpu<'w>,
    window: &'a Window,
    clear: Color,
    error_action: Option<SurfaceErrorAction>,
}

impl<'a, 'w> FrameTarget<'a, 'w> {
    pub fn new(gpu: &'a mut Gpu<'w>, window: &'a Window, clear: Color) -> Self {
        Self {
            gpu,
            window,
            clear,
            error_action: None,
        }
    }

    /// How the host should react to the last acquisition failure, if any.
    pub fn error_action(&self) -> Option<SurfaceErrorAction> {
        self.error_action
    }

    /// Acquires a frame, clears it, runs `draw` and presents.
    ///
    /// Acquisition failures are reported as
    /// [`RenderError::RenderContextUnavailable`]; lost or outdated surfaces are
    /// reconfigured so the surface's retry on the next tick can succeed.
    pub fn draw_frame<F>(
        &mut self,
        projection: &ProjectionMatrix,
        bounds: ViewBounds,
        draw: F,
    ) -> Result<(), RenderError>
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let size = self.gpu.size();
        if size.width == 0 || size.height == 0 {
            return Err(RenderError::context_unavailable("drawable has zero area"));
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let action = self.gpu.handle_surface_error(&err);
                self.error_action = Some(action);
                return Err(context_unavailable(&err, action));
            }
        };

        // Clear pass; dropped before the encoder is lent to the painter.
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("pacer clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            *projection,
            bounds,
        );

        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&rctx, &mut target);
        }

        self.window.pre_present_notify();
        self.gpu.submit(frame);
        self.error_action = None;

        Ok(())
    }
}
