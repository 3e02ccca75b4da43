//! Paced 2D render surface.
//!
//! The core is host-agnostic:
//! - [`projection`] builds the orthographic projection for a viewing volume
//! - [`surface`] gates rendering on a dirty flag and an optional frame-rate cap
//!
//! [`device`], [`render`] and [`host`] are a `winit` + `wgpu` host that drives a
//! surface from a window's redraw loop.

pub mod coords;
pub mod error;
pub mod projection;
pub mod surface;
pub mod time;

pub mod logging;
pub mod paint;

pub mod device;
pub mod host;
pub mod render;

pub use error::{Axis, ProjectionError, RenderError};
