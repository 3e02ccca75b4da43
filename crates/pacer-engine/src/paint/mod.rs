//! Colors shared between hosts and painters.

mod color;

pub use color::Color;
