//! 4x4 matrix type for homogeneous 3D transforms.

use std::ops::{Index, Mul};

use crate::{Mat3, Vec3, Vec4};

/// A 4x4 matrix, stored row-major, multiplying column vectors.
///
/// Determinant and inverse delegate to [`glam::Mat4`], which carries the
/// SIMD-friendly cofactor machinery already.
///
/// # Example
///
/// ```rust
/// use axle_math::{Mat4, Vec3};
///
/// let move_up = Mat4::from_translation(Vec3::new(0.0, 5.0, 0.0));
/// let p = move_up.transform_point(Vec3::ZERO);
/// assert_eq!(p, Vec3::new(0.0, 5.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4 {
    /// Matrix elements in row-major order: [row0, row1, row2, row3]
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from column arrays.
    #[inline]
    pub const fn from_cols(cols: [[f32; 4]; 4]) -> Self {
        Self {
            m: [
                [cols[0][0], cols[1][0], cols[2][0], cols[3][0]],
                [cols[0][1], cols[1][1], cols[2][1], cols[3][1]],
                [cols[0][2], cols[1][2], cols[2][2], cols[3][2]],
                [cols[0][3], cols[1][3], cols[2][3], cols[3][3]],
            ],
        }
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: f32, d1: f32, d2: f32, d3: f32) -> Self {
        Self::from_rows([
            [d0, 0.0, 0.0, 0.0],
            [0.0, d1, 0.0, 0.0],
            [0.0, 0.0, d2, 0.0],
            [0.0, 0.0, 0.0, d3],
        ])
    }

    /// Creates a uniform scale of the 3D part (`w` stays 1).
    #[inline]
    pub const fn scale(s: f32) -> Self {
        Self::diagonal(s, s, s, 1.0)
    }

    /// Creates a translation matrix.
    #[inline]
    pub const fn from_translation(t: Vec3) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, t.x],
            [0.0, 1.0, 0.0, t.y],
            [0.0, 0.0, 1.0, t.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Embeds a [`Mat3`] as the upper-left 3x3 block.
    #[inline]
    pub fn from_mat3(r: Mat3) -> Self {
        let mut out = Self::IDENTITY;
        for i in 0..3 {
            out.m[i][..3].copy_from_slice(&r.m[i]);
        }
        out
    }

    /// Returns a row as [`Vec4`].
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::from_array(self.m[i])
    }

    /// Returns a column as [`Vec4`].
    #[inline]
    pub fn col(&self, i: usize) -> Vec4 {
        Vec4::new(self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i])
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        let mut out = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                out.m[i][j] = self.m[j][i];
            }
        }
        out
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.to_glam().determinant()
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the matrix is singular (determinant is zero).
    pub fn inverse(&self) -> Option<Self> {
        if self.determinant().abs() < 1e-10 {
            return None;
        }
        Some(Self::from_glam(self.to_glam().inverse()))
    }

    /// Transforms a [`Vec4`] by this matrix.
    #[inline]
    pub fn transform(&self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }

    /// Transforms a position (`w = 1`), returning the 3D part.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.transform(Vec4::point(p)).truncate()
    }

    /// Transforms a direction (`w = 0`), returning the 3D part.
    #[inline]
    pub fn transform_direction(&self, d: Vec3) -> Vec3 {
        self.transform(Vec4::direction(d)).truncate()
    }

    /// Multiplies two matrices.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j]
                    + self.m[i][3] * other.m[3][j];
            }
        }
        result
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Converts to [`glam::Mat4`] (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        glam::Mat4::from_cols_array_2d(&[
            [self.m[0][0], self.m[1][0], self.m[2][0], self.m[3][0]],
            [self.m[0][1], self.m[1][1], self.m[2][1], self.m[3][1]],
            [self.m[0][2], self.m[1][2], self.m[2][2], self.m[3][2]],
            [self.m[0][3], self.m[1][3], self.m[2][3], self.m[3][3]],
        ])
    }

    /// Creates from [`glam::Mat4`].
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform(rhs)
    }
}

impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl Mul<f32> for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        let mut out = self;
        for row in out.m.iter_mut() {
            for v in row.iter_mut() {
                *v *= rhs;
            }
        }
        out
    }
}

impl Index<usize> for Mat4 {
    type Output = [f32; 4];

    #[inline]
    fn index(&self, i: usize) -> &[f32; 4] {
        &self.m[i]
    }
}
