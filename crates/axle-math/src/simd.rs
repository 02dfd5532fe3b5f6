//! SIMD-accelerated kernels for small matrix products.
//!
//! These functions operate on flat **row-major** arrays rather than the
//! wrapper types, so hot loops can feed them straight from whatever storage
//! they already have. They use the `wide` crate for portable SIMD on stable
//! Rust; there is no `std::arch` and no per-target code.
//!
//! # Example
//!
//! ```rust
//! use axle_math::simd::mat2_mul;
//!
//! let flip_x = [-1.0, 0.0, 0.0, 1.0];
//! let flip_y = [1.0, 0.0, 0.0, -1.0];
//! let both = mat2_mul(&flip_x, &flip_y);
//! assert_eq!(both, [-1.0, 0.0, 0.0, -1.0]);
//! ```

use wide::{f32x4, i32x4};

/// Multiplies two 2x2 matrices (row-major).
///
/// The whole 2x2 product fits one 4-lane register: each operand is shuffled
/// so the four result elements come out of two multiplies and an add.
#[inline]
pub fn mat2_mul(a: &[f32; 4], b: &[f32; 4]) -> [f32; 4] {
    let lhs0 = f32x4::from([a[0], a[0], a[2], a[2]]);
    let lhs1 = f32x4::from([a[1], a[1], a[3], a[3]]);
    let rhs0 = f32x4::from([b[0], b[1], b[0], b[1]]);
    let rhs1 = f32x4::from([b[2], b[3], b[2], b[3]]);
    (lhs0 * rhs0 + lhs1 * rhs1).to_array()
}

/// Multiplies two 2x2 integer matrices (row-major).
#[inline]
pub fn mat2_mul_i32(a: &[i32; 4], b: &[i32; 4]) -> [i32; 4] {
    let lhs0 = i32x4::from([a[0], a[0], a[2], a[2]]);
    let lhs1 = i32x4::from([a[1], a[1], a[3], a[3]]);
    let rhs0 = i32x4::from([b[0], b[1], b[0], b[1]]);
    let rhs1 = i32x4::from([b[2], b[3], b[2], b[3]]);
    (lhs0 * rhs0 + lhs1 * rhs1).to_array()
}

/// Multiplies two 3x3 matrices (row-major).
///
/// Rows are padded into 4-lane registers; each result row is a sum of the
/// right-hand rows scaled by one left-hand element.
pub fn mat3_mul(a: &[f32; 9], b: &[f32; 9]) -> [f32; 9] {
    let br0 = f32x4::from([b[0], b[1], b[2], 0.0]);
    let br1 = f32x4::from([b[3], b[4], b[5], 0.0]);
    let br2 = f32x4::from([b[6], b[7], b[8], 0.0]);

    let mut out = [0.0; 9];
    for i in 0..3 {
        let row = br0 * f32x4::splat(a[3 * i])
            + br1 * f32x4::splat(a[3 * i + 1])
            + br2 * f32x4::splat(a[3 * i + 2]);
        let r = row.to_array();
        out[3 * i..3 * i + 3].copy_from_slice(&r[..3]);
    }
    out
}

/// Multiplies two 4x4 matrices (row-major).
pub fn mat4_mul(a: &[f32; 16], b: &[f32; 16]) -> [f32; 16] {
    let br0 = f32x4::from([b[0], b[1], b[2], b[3]]);
    let br1 = f32x4::from([b[4], b[5], b[6], b[7]]);
    let br2 = f32x4::from([b[8], b[9], b[10], b[11]]);
    let br3 = f32x4::from([b[12], b[13], b[14], b[15]]);

    let mut out = [0.0; 16];
    for i in 0..4 {
        let row = br0 * f32x4::splat(a[4 * i])
            + br1 * f32x4::splat(a[4 * i + 1])
            + br2 * f32x4::splat(a[4 * i + 2])
            + br3 * f32x4::splat(a[4 * i + 3]);
        out[4 * i..4 * i + 4].copy_from_slice(&row.to_array());
    }
    out
}

/// Transforms a 3-vector by a 3x3 matrix (row-major).
#[inline]
pub fn mat3_transform(m: &[f32; 9], v: [f32; 3]) -> [f32; 3] {
    let col0 = f32x4::from([m[0], m[3], m[6], 0.0]);
    let col1 = f32x4::from([m[1], m[4], m[7], 0.0]);
    let col2 = f32x4::from([m[2], m[5], m[8], 0.0]);

    let out = col0 * f32x4::splat(v[0]) + col1 * f32x4::splat(v[1]) + col2 * f32x4::splat(v[2]);
    let r = out.to_array();
    [r[0], r[1], r[2]]
}

/// Transforms a 4-vector by a 4x4 matrix (row-major).
#[inline]
pub fn mat4_transform(m: &[f32; 16], v: [f32; 4]) -> [f32; 4] {
    let col0 = f32x4::from([m[0], m[4], m[8], m[12]]);
    let col1 = f32x4::from([m[1], m[5], m[9], m[13]]);
    let col2 = f32x4::from([m[2], m[6], m[10], m[14]]);
    let col3 = f32x4::from([m[3], m[7], m[11], m[15]]);

    let out = col0 * f32x4::splat(v[0])
        + col1 * f32x4::splat(v[1])
        + col2 * f32x4::splat(v[2])
        + col3 * f32x4::splat(v[3]);
    out.to_array()
}

/// Transforms packed `x y z` triples in place by a 3x3 matrix (row-major).
///
/// Leftover components (`xyz.len() % 3`) are left untouched.
///
/// # Example
///
/// ```rust
/// use axle_math::simd::batch_transform3;
///
/// let double = [2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0];
/// let mut points = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// batch_transform3(&double, &mut points);
/// assert_eq!(points, vec![2.0, 4.0, 6.0, 8.0, 10.0, 12.0]);
/// ```
pub fn batch_transform3(m: &[f32; 9], xyz: &mut [f32]) {
    let col0 = f32x4::from([m[0], m[3], m[6], 0.0]);
    let col1 = f32x4::from([m[1], m[4], m[7], 0.0]);
    let col2 = f32x4::from([m[2], m[5], m[8], 0.0]);

    for p in xyz.chunks_exact_mut(3) {
        let out = col0 * f32x4::splat(p[0]) + col1 * f32x4::splat(p[1]) + col2 * f32x4::splat(p[2]);
        let r = out.to_array();
        p.copy_from_slice(&r[..3]);
    }
}
