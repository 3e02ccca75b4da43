use super::Viewport;

/// Orthographic viewing volume given by its six bounding planes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl ViewBounds {
    #[inline]
    pub const fn new(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        Self { left, right, bottom, top, near, far }
    }

    /// Pixel volume for a viewport: top-left origin, +Y down, depth `[-1, 1]`.
    ///
    /// `bottom` is the viewport height and `top` is zero, so the projection
    /// flips Y and logical pixel coordinates can be fed to it directly.
    #[inline]
    pub fn from_viewport(viewport: Viewport) -> Self {
        Self::new(0.0, viewport.width, viewport.height, 0.0, -1.0, 1.0)
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.top - self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_viewport_is_top_left_pixel_space() {
        let b = ViewBounds::from_viewport(Viewport::new(640.0, 480.0));
        assert_eq!(b, ViewBounds::new(0.0, 640.0, 480.0, 0.0, -1.0, 1.0));
        assert_eq!(b.width(), 640.0);
        assert_eq!(b.height(), -480.0);
    }
}
