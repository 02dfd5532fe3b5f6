//! # axle-math
//!
//! Math types for the axle toolkit.
//!
//! This crate provides fixed-size `f32` vector and matrix types plus
//! SIMD-accelerated kernels for the small matrix products that dominate
//! real-time workloads:
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - plain-field vectors with the usual
//!   arithmetic surface
//! - [`Mat2`], [`Mat3`], [`Mat4`] - square row-major matrices
//! - [`simd`] - `wide`-based kernels over flat row-major arrays
//! - [`batch`] - rayon-parallel bulk transforms over point slices
//!
//! # Design
//!
//! All matrix types store **row-major** data and multiply **column
//! vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! The value types interoperate with [`glam`] (`to_glam`/`from_glam` and
//! `From` impls) so callers can reach for glam's wider surface when needed.
//!
//! # Usage
//!
//! ```rust
//! use axle_math::{Mat3, Vec3};
//!
//! let rotate_z = Mat3::from_rows([
//!     [0.0, -1.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [0.0, 0.0, 1.0],
//! ]);
//!
//! let v = Vec3::new(1.0, 0.0, 0.0);
//! let turned = rotate_z * v;
//! assert!((turned.y - 1.0).abs() < 1e-6);
//! ```
//!
//! # Feature Flags
//!
//! - `serde` - derive `Serialize`/`Deserialize` for the value types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat2;
mod mat3;
mod mat4;
mod vec2;
mod vec3;
mod vec4;

pub mod batch;
pub mod simd;

pub use mat2::*;
pub use mat3::*;
pub use mat4::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;
