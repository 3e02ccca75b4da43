//! GPU rendering for hosts built on [`crate::device::Gpu`].
//!
//! Convention:
//! - geometry is submitted in the tick's [`ViewBounds`](crate::coords::ViewBounds) space
//! - the vertex shader applies the surface's `ProjectionMatrix` uniform

mod ctx;
mod target;
mod trace;

pub use ctx::{RenderCtx, RenderTarget};
pub use target::FrameTarget;
pub use trace::TraceRenderer;
