/// A single acquired swapchain frame.
///
/// Short-lived: holding the surface texture blocks acquisition of the next frame.
/// Dropping it without [`Gpu::submit`](super::Gpu::submit) discards the frame.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
