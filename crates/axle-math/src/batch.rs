//! Parallel bulk transforms over point slices.
//!
//! Large point sets (meshes, particles, samples) are transformed with
//! [`rayon`] splitting the slice across the thread pool. For small inputs
//! the sequential loop wins; the parallel entry points are worth it from
//! roughly tens of thousands of points upward.

use rayon::prelude::*;

use crate::{Mat3, Mat4, Vec3, Vec4};

/// Transforms every vector in `points` by `m`, in place and in parallel.
///
/// # Example
///
/// ```rust
/// use axle_math::{batch, Mat3, Vec3};
///
/// let mut points = vec![Vec3::X; 8];
/// batch::par_transform3(&Mat3::scale(2.0), &mut points);
/// assert_eq!(points[7], Vec3::new(2.0, 0.0, 0.0));
/// ```
pub fn par_transform3(m: &Mat3, points: &mut [Vec3]) {
    points.par_iter_mut().for_each(|p| *p = *m * *p);
}

/// Transforms every vector in `points` by `m`, in place and in parallel.
pub fn par_transform4(m: &Mat4, points: &mut [Vec4]) {
    points.par_iter_mut().for_each(|p| *p = *m * *p);
}

/// Transforms every position in `points` as a homogeneous point (`w = 1`),
/// in place and in parallel.
pub fn par_transform_points(m: &Mat4, points: &mut [Vec3]) {
    points.par_iter_mut().for_each(|p| *p = m.transform_point(*p));
}

/// Interpolates `from` toward `to` element-wise, writing into `out`.
///
/// All three slices must have the same length.
///
/// # Panics
///
/// Panics if the slice lengths differ.
pub fn par_lerp3(from: &[Vec3], to: &[Vec3], t: f32, out: &mut [Vec3]) {
    assert_eq!(from.len(), to.len(), "par_lerp3: from/to length mismatch");
    assert_eq!(from.len(), out.len(), "par_lerp3: from/out length mismatch");

    out.par_iter_mut()
        .zip(from.par_iter().zip(to.par_iter()))
        .for_each(|(o, (a, b))| *o = a.lerp(*b, t));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_par_transform3_matches_sequential() {
        let m = Mat3::from_rotation_z(0.5);
        let points: Vec<Vec3> = (0..1000)
            .map(|i| Vec3::new(i as f32, -(i as f32), 0.5 * i as f32))
            .collect();

        let mut parallel = points.clone();
        par_transform3(&m, &mut parallel);

        for (p, source) in parallel.iter().zip(&points) {
            assert_eq!(*p, m * *source);
        }
    }

    #[test]
    fn test_par_transform_points_translates() {
        let m = Mat4::from_translation(Vec3::ONE);
        let mut points = vec![Vec3::ZERO; 100];
        par_transform_points(&m, &mut points);
        assert!(points.iter().all(|p| *p == Vec3::ONE));
    }

    #[test]
    fn test_par_lerp3_endpoints() {
        let from = vec![Vec3::ZERO; 64];
        let to = vec![Vec3::ONE; 64];
        let mut out = vec![Vec3::ZERO; 64];

        par_lerp3(&from, &to, 1.0, &mut out);
        assert!(out.iter().all(|p| *p == Vec3::ONE));

        par_lerp3(&from, &to, 0.25, &mut out);
        assert!(out.iter().all(|p| *p == Vec3::splat(0.25)));
    }

    #[test]
    #[should_panic]
    fn test_par_lerp3_length_mismatch_panics() {
        let from = vec![Vec3::ZERO; 2];
        let to = vec![Vec3::ONE; 3];
        let mut out = vec![Vec3::ZERO; 2];
        par_lerp3(&from, &to, 0.5, &mut out);
    }
}
