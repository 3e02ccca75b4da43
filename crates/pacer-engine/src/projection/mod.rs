//! Orthographic projection construction.
//!
//! Only the one projection the surface needs is built here; this is not a
//! general matrix library.

mod matrix;
mod ortho;

pub use matrix::ProjectionMatrix;
pub use ortho::make_ortho;
