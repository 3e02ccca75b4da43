//! Coordinate types shared by the projection builder, the surface and hosts.
//!
//! Host pixel space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! The projection maps a [`ViewBounds`] volume to NDC; the default host volume is
//! the pixel space above with a `[-1, 1]` depth range.

mod bounds;
mod viewport;

pub use bounds::ViewBounds;
pub use viewport::Viewport;
