//! 2x2 matrix type.

use std::ops::{Index, Mul};

use crate::Vec2;

/// A 2x2 matrix, stored row-major, multiplying column vectors.
///
/// # Example
///
/// ```rust
/// use axle_math::{Mat2, Vec2};
///
/// let quarter_turn = Mat2::from_rotation(std::f32::consts::FRAC_PI_2);
/// let v = quarter_turn * Vec2::X;
/// assert!((v.y - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat2 {
    /// Matrix elements in row-major order: [row0, row1]
    pub m: [[f32; 2]; 2],
}

impl Mat2 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 2]; 2] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0], [0.0, 1.0]],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 2]; 2]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from column arrays.
    #[inline]
    pub const fn from_cols(cols: [[f32; 2]; 2]) -> Self {
        Self {
            m: [[cols[0][0], cols[1][0]], [cols[0][1], cols[1][1]]],
        }
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: f32, d1: f32) -> Self {
        Self::from_rows([[d0, 0.0], [0.0, d1]])
    }

    /// Creates a uniform scale matrix.
    #[inline]
    pub const fn scale(s: f32) -> Self {
        Self::diagonal(s, s)
    }

    /// Creates a counter-clockwise rotation by `radians`.
    #[inline]
    pub fn from_rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::from_rows([[cos, -sin], [sin, cos]])
    }

    /// Returns a row as [`Vec2`].
    #[inline]
    pub fn row(&self, i: usize) -> Vec2 {
        Vec2::from_array(self.m[i])
    }

    /// Returns a column as [`Vec2`].
    #[inline]
    pub fn col(&self, i: usize) -> Vec2 {
        Vec2::new(self.m[0][i], self.m[1][i])
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows([
            [self.m[0][0], self.m[1][0]],
            [self.m[0][1], self.m[1][1]],
        ])
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.m[0][0] * self.m[1][1] - self.m[0][1] * self.m[1][0]
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the matrix is singular (determinant is zero).
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < 1e-10 {
            return None;
        }

        let inv_det = 1.0 / det;
        Some(Self::from_rows([
            [self.m[1][1] * inv_det, -self.m[0][1] * inv_det],
            [-self.m[1][0] * inv_det, self.m[0][0] * inv_det],
        ]))
    }

    /// Transforms a [`Vec2`] by this matrix.
    #[inline]
    pub fn transform(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y,
            self.m[1][0] * v.x + self.m[1][1] * v.y,
        )
    }

    /// Multiplies two matrices.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..2 {
            for j in 0..2 {
                result.m[i][j] =
                    self.m[i][0] * other.m[0][j] + self.m[i][1] * other.m[1][j];
            }
        }
        result
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Converts to [`glam::Mat2`] (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat2 {
        glam::Mat2::from_cols_array_2d(&[
            [self.m[0][0], self.m[1][0]],
            [self.m[0][1], self.m[1][1]],
        ])
    }

    /// Creates from [`glam::Mat2`].
    #[inline]
    pub fn from_glam(m: glam::Mat2) -> Self {
        let cols = m.to_cols_array_2d();
        Self::from_cols(cols)
    }
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        self.transform(rhs)
    }
}

impl Mul for Mat2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl Mul<f32> for Mat2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_rows([
            [self.m[0][0] * rhs, self.m[0][1] * rhs],
            [self.m[1][0] * rhs, self.m[1][1] * rhs],
        ])
    }
}

impl Index<usize> for Mat2 {
    type Output = [f32; 2];

    #[inline]
    fn index(&self, i: usize) -> &[f32; 2] {
        &self.m[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat2_identity() {
        let v = Vec2::new(3.0, -2.0);
        assert_eq!(Mat2::IDENTITY * v, v);
    }

    #[test]
    fn test_mat2_rotation() {
        let m = Mat2::from_rotation(std::f32::consts::PI);
        let v = m * Vec2::X;
        assert!((v.x + 1.0).abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);
    }

    #[test]
    fn test_mat2_determinant_and_inverse() {
        let m = Mat2::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        assert_eq!(m.determinant(), 10.0);

        let inv = m.inverse().unwrap();
        let id = m * inv;
        for i in 0..2 {
            for j in 0..2 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((id.m[i][j] - expected).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_mat2_singular() {
        let m = Mat2::from_rows([[1.0, 2.0], [2.0, 4.0]]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_mat2_rotation_composes() {
        let eighth = Mat2::from_rotation(std::f32::consts::FRAC_PI_4);
        let quarter = Mat2::from_rotation(std::f32::consts::FRAC_PI_2);
        let composed = eighth * eighth;
        for i in 0..2 {
            for j in 0..2 {
                assert!((composed.m[i][j] - quarter.m[i][j]).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_mat2_glam_round_trip() {
        let m = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(Mat2::from_glam(m.to_glam()), m);
    }
}
