use crate::coords::ViewBounds;
use crate::projection::ProjectionMatrix;

/// Renderer-facing context for one frame.
///
/// Carries the projection the surface built for this tick; renderers upload it
/// as-is and submit geometry in `bounds` space.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub projection: ProjectionMatrix,
    pub bounds: ViewBounds,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        projection: ProjectionMatrix,
        bounds: ViewBounds,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            projection,
            bounds,
        }
    }
}

/// Target for drawing (encoder + color view).
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }
}
