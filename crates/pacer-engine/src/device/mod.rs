//! GPU context for the host window: device, swapchain policy and frame
//! acquisition.

mod error;
mod frame;
mod gpu;
mod surface;
mod swapchain;

pub(crate) use error::context_unavailable;
pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use swapchain::SwapchainConfig;
