use bytemuck::{Pod, Zeroable};

/// Column-major 4×4 projection matrix (OpenGL layout).
///
/// Element `(row, col)` lives at index `col * 4 + row`. The type is `Pod`, so it
/// can be written to a GPU uniform buffer as-is (64 bytes, WGSL `mat4x4<f32>`).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ProjectionMatrix {
    m: [f32; 16],
}

impl ProjectionMatrix {
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    #[inline]
    pub(crate) const fn from_cols_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// Returns the 16 elements in column-major order.
    #[inline]
    pub fn as_array(&self) -> &[f32; 16] {
        &self.m
    }

    /// Returns the four columns.
    #[inline]
    pub fn columns(&self) -> [[f32; 4]; 4] {
        let m = &self.m;
        [
            [m[0], m[1], m[2], m[3]],
            [m[4], m[5], m[6], m[7]],
            [m[8], m[9], m[10], m[11]],
            [m[12], m[13], m[14], m[15]],
        ]
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.m[col * 4 + row]
    }

    /// Applies the matrix to a homogeneous point.
    pub fn transform(&self, p: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        for (row, o) in out.iter_mut().enumerate() {
            *o = (0..4).map(|col| self.get(row, col) * p[col]).sum();
        }
        out
    }

    /// Applies the matrix to a 3D point (`w = 1`).
    #[inline]
    pub fn transform_point(&self, x: f32, y: f32, z: f32) -> [f32; 4] {
        self.transform([x, y, z, 1.0])
    }
}

impl Default for ProjectionMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}
