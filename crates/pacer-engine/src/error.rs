//! Error types shared by the projection builder and the paced surface.

use std::fmt;

/// Axis of a viewing volume.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x (left/right)",
            Axis::Y => "y (bottom/top)",
            Axis::Z => "z (near/far)",
        };
        f.write_str(name)
    }
}

/// Failure to build a projection from a viewing volume.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectionError {
    /// One of the three spans of the volume is zero.
    #[error("degenerate viewing volume: zero span on the {axis} axis")]
    DegenerateVolume { axis: Axis },

    /// A bound is NaN or infinite.
    #[error("viewing volume has a non-finite bound")]
    NonFinite,
}

/// Failure reported by a single render attempt.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    /// The graphics context could not be acquired or used for this frame.
    #[error("render context unavailable: {reason}")]
    RenderContextUnavailable { reason: String },

    /// The bounds supplied with the tick do not describe a usable volume.
    #[error(transparent)]
    InvalidVolume(#[from] ProjectionError),
}

impl RenderError {
    pub fn context_unavailable(reason: impl Into<String>) -> Self {
        Self::RenderContextUnavailable { reason: reason.into() }
    }
}
