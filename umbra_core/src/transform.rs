// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat 4×4 transform matrix.
//!
//! The sixteen cells are stored in the memory order Core Animation's
//! `CATransform3D` uses: cell `i` is row `i / 4`, column `i % 4` in the
//! row-vector convention, so translation lives in cells 12, 13 and 14.
//! Host codecs copy cells positionally and never normalize.

use core::ops::Mul;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::geometry::Float;

/// A 4×4 transform stored as sixteen cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Matrix cells, translation in `[12..15]`.
    pub matrix: [Float; 16],
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        matrix: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Creates a transform from its sixteen cells.
    #[inline]
    #[must_use]
    pub const fn from_matrix(matrix: [Float; 16]) -> Self {
        Self { matrix }
    }

    /// Returns cell `row * 4 + column`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= 4` or `column >= 4`.
    #[inline]
    #[must_use]
    pub const fn at(&self, row: usize, column: usize) -> Float {
        assert!(row < 4 && column < 4, "transform cell out of range");
        self.matrix[row * 4 + column]
    }

    /// Creates a pure translation.
    #[inline]
    #[must_use]
    pub const fn translate(x: Float, y: Float, z: Float) -> Self {
        let mut t = Self::IDENTITY;
        t.matrix[12] = x;
        t.matrix[13] = y;
        t.matrix[14] = z;
        t
    }

    /// Creates a non-uniform scale.
    #[inline]
    #[must_use]
    pub const fn scale(x: Float, y: Float, z: Float) -> Self {
        let mut t = Self::IDENTITY;
        t.matrix[0] = x;
        t.matrix[5] = y;
        t.matrix[10] = z;
        t
    }

    /// Creates a rotation around the Z axis (radians).
    #[inline]
    #[must_use]
    pub fn rotate_z(radians: Float) -> Self {
        #[cfg(feature = "std")]
        let (s, c) = radians.sin_cos();
        #[cfg(not(feature = "std"))]
        let (s, c) = (radians.sin(), radians.cos());
        let mut t = Self::IDENTITY;
        t.matrix[0] = c;
        t.matrix[1] = s;
        t.matrix[4] = -s;
        t.matrix[5] = c;
        t
    }

    /// Returns the translation cells `(x, y, z)`.
    #[inline]
    #[must_use]
    pub const fn translation(&self) -> (Float, Float, Float) {
        (self.matrix[12], self.matrix[13], self.matrix[14])
    }

    /// Is every cell [finite]?
    ///
    /// [finite]: f64::is_finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.matrix.iter().all(|v| v.is_finite())
    }

    /// Is any cell [NaN]?
    ///
    /// [NaN]: f64::is_nan
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.matrix.iter().any(|v| v.is_nan())
    }
}

impl Default for Transform {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Concatenation: `a * b` applies `a` first, then `b`.
///
/// This is Core Animation's `CATransform3DConcat(a, b)` in the row-vector
/// convention.
impl Mul for Transform {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let a = &self.matrix;
        let b = &rhs.matrix;
        let mut out = [0.0; 16];
        let mut row = 0;
        while row < 4 {
            let mut col = 0;
            while col < 4 {
                out[row * 4 + col] = a[row * 4] * b[col]
                    + a[row * 4 + 1] * b[4 + col]
                    + a[row * 4 + 2] * b[8 + col]
                    + a[row * 4 + 3] * b[12 + col];
                col += 1;
            }
            row += 1;
        }
        Self { matrix: out }
    }
}
