use crate::coords::ViewBounds;
use crate::error::{Axis, ProjectionError};

use super::ProjectionMatrix;

/// Builds an OpenGL-style orthographic projection.
///
/// Eye space looks down -Z: a point at depth `-near` lands on NDC z = -1 and a
/// point at depth `-far` on z = +1, while X and Y map `[left, right]` and
/// `[bottom, top]` onto `[-1, 1]`.
///
/// Fails with [`ProjectionError::DegenerateVolume`] when any span is zero and
/// with [`ProjectionError::NonFinite`] when a bound, a span, or the resulting
/// scale is not finite.
pub fn make_ortho(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Result<ProjectionMatrix, ProjectionError> {
    let bounds = [left, right, bottom, top, near, far];
    if !bounds.iter().all(|v| v.is_finite()) {
        return Err(ProjectionError::NonFinite);
    }

    let rsl = right - left;
    let tsb = top - bottom;
    let fsn = far - near;

    // Finite bounds can still be too far apart for f32.
    if ![rsl, tsb, fsn].iter().all(|v| v.is_finite()) {
        return Err(ProjectionError::NonFinite);
    }

    for (span, axis) in [(rsl, Axis::X), (tsb, Axis::Y), (fsn, Axis::Z)] {
        if span == 0.0 {
            return Err(ProjectionError::DegenerateVolume { axis });
        }
    }

    let ral = right + left;
    let tab = top + bottom;
    let fan = far + near;

    #[rustfmt::skip]
    let m = [
        2.0 / rsl,  0.0,        0.0,         0.0,
        0.0,        2.0 / tsb,  0.0,         0.0,
        0.0,        0.0,        -2.0 / fsn,  0.0,
        -ral / rsl, -tab / tsb, -fan / fsn,  1.0,
    ];

    // Subnormal spans overflow the scale terms.
    if !m.iter().all(|v| v.is_finite()) {
        return Err(ProjectionError::NonFinite);
    }

    Ok(ProjectionMatrix::from_cols_array(m))
}

impl ProjectionMatrix {
    /// [`make_ortho`] over a [`ViewBounds`].
    #[inline]
    pub fn ortho(bounds: ViewBounds) -> Result<Self, ProjectionError> {
        make_ortho(
            bounds.left,
            bounds.right,
            bounds.bottom,
            bounds.top,
            bounds.near,
            bounds.far,
        )
    }
}
