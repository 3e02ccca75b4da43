//! Vectorscope-style Lissajous figure.

use std::f32::consts::TAU;

use pacer_engine::coords::ViewBounds;

/// Frequency ratio of the figure (x : y).
const RATIO: (f32, f32) = (3.0, 2.0);

/// Samples a closed Lissajous curve centered in `bounds`.
///
/// `phase` (radians) shifts the x oscillator, which is what animates the
/// figure. The radius is 40% of the smaller side, so the curve stays inside the
/// volume regardless of its orientation.
pub fn lissajous(bounds: ViewBounds, phase: f32, samples: usize) -> Vec<[f32; 2]> {
    let cx = (bounds.left + bounds.right) * 0.5;
    let cy = (bounds.bottom + bounds.top) * 0.5;
    let radius = bounds.width().abs().min(bounds.height().abs()) * 0.4;

    (0..=samples)
        .map(|i| {
            let t = i as f32 / samples.max(1) as f32 * TAU;
            [
                cx + radius * (RATIO.0 * t + phase).sin(),
                cy + radius * (RATIO.1 * t).sin(),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pacer_engine::coords::Viewport;

    fn bounds() -> ViewBounds {
        ViewBounds::from_viewport(Viewport::new(400.0, 200.0))
    }

    #[test]
    fn curve_is_closed() {
        let pts = lissajous(bounds(), 0.7, 128);
        assert_eq!(pts.len(), 129);
        let (first, last) = (pts[0], pts[128]);
        assert!((first[0] - last[0]).abs() < 1e-3);
        assert!((first[1] - last[1]).abs() < 1e-3);
    }

    #[test]
    fn curve_stays_inside_bounds() {
        for p in lissajous(bounds(), 1.3, 512) {
            assert!((120.0..=280.0).contains(&p[0]), "x {}", p[0]);
            assert!((20.0..=180.0).contains(&p[1]), "y {}", p[1]);
        }
    }

    #[test]
    fn phase_moves_the_figure() {
        assert_ne!(lissajous(bounds(), 0.0, 16), lissajous(bounds(), 0.5, 16));
    }
}
