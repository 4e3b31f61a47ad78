use core::fmt;

use bytemuck::{Pod, Zeroable};

/// 4×4 matrix, binary-compatible with the render boundary's record.
///
/// Field names follow the boundary's column-major convention: memory order
/// is `m0 m4 m8 m12 m1 ...`, so each group of four consecutive floats holds
/// one row of the matrix. The boundary owns all matrix math; this type only
/// carries the values across.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Matrix {
    pub m0: f32,
    pub m4: f32,
    pub m8: f32,
    pub m12: f32,
    pub m1: f32,
    pub m5: f32,
    pub m9: f32,
    pub m13: f32,
    pub m2: f32,
    pub m6: f32,
    pub m10: f32,
    pub m14: f32,
    pub m3: f32,
    pub m7: f32,
    pub m11: f32,
    pub m15: f32,
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        m0: 1.0,
        m4: 0.0,
        m8: 0.0,
        m12: 0.0,
        m1: 0.0,
        m5: 1.0,
        m9: 0.0,
        m13: 0.0,
        m2: 0.0,
        m6: 0.0,
        m10: 1.0,
        m14: 0.0,
        m3: 0.0,
        m7: 0.0,
        m11: 0.0,
        m15: 1.0,
    };

    /// The sixteen floats in memory order (row by row).
    #[inline]
    pub fn to_array(self) -> [f32; 16] {
        bytemuck::cast(self)
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 16] {
        bytemuck::cast_ref(self)
    }
}

impl From<[f32; 16]> for Matrix {
    #[inline]
    fn from(a: [f32; 16]) -> Self {
        bytemuck::cast(a)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}] [{}, {}, {}, {}] [{}, {}, {}, {}] [{}, {}, {}, {}]",
            self.m0, self.m4, self.m8, self.m12,
            self.m1, self.m5, self.m9, self.m13,
            self.m2, self.m6, self.m10, self.m14,
            self.m3, self.m7, self.m11, self.m15,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_diagonal() {
        let m = Matrix::IDENTITY;
        assert_eq!(m.m0, 1.0);
        assert_eq!(m.m5, 1.0);
        assert_eq!(m.m10, 1.0);
        assert_eq!(m.m15, 1.0);
        assert_eq!(m.m12, 0.0);
    }

    #[test]
    fn layout_matches_sixteen_floats() {
        assert_eq!(core::mem::size_of::<Matrix>(), 64);
        let arr = Matrix::IDENTITY.to_array();
        // Memory order interleaves the diagonal at positions 0, 5, 10, 15.
        assert_eq!(arr[0], 1.0);
        assert_eq!(arr[5], 1.0);
        assert_eq!(arr[10], 1.0);
        assert_eq!(arr[15], 1.0);
        assert_eq!(arr.iter().sum::<f32>(), 4.0);
        assert_eq!(Matrix::from(arr), Matrix::IDENTITY);
    }

    #[test]
    fn display_renders_rows() {
        let shown = Matrix::IDENTITY.to_string();
        assert_eq!(shown, "[1, 0, 0, 0] [0, 1, 0, 0] [0, 0, 1, 0] [0, 0, 0, 1]");
    }
}
