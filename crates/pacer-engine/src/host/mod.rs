//! Window host.
//!
//! Owns the `winit` event loop and one window, wires them to the GPU layer, and
//! turns every redraw opportunity into a tick for the app.

mod app;
mod ctx;
mod runtime;

pub use app::{AppControl, HostApp};
pub use ctx::TickCtx;
pub use runtime::{Host, HostConfig};
