//! Paced render surface.
//!
//! A surface owns two independent flags (content is stale, rate limiting is on)
//! and the timestamp of its last render. Each host tick runs one render
//! decision; see [`PacedSurface::on_tick`].

mod config;
mod flags;
mod outcome;
mod paced;
mod stats;

pub use config::PacingConfig;
pub use flags::SurfaceHandle;
pub use outcome::RenderOutcome;
pub use paced::{PacedSurface, Painter};
pub use stats::SurfaceStats;
