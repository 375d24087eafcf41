//! Fixed-size linear algebra for the snake3d renderer.
//!
//! [`Matrix<N, M, T>`] is an `N`×`M` value type over `f32` or `f64` whose
//! shape is a compile-time constant; vectors are single-column matrices.
//! Shape contracts (square-only, vector-only, `N + 1` homogeneous sizes) are
//! checked at compile time.
//!
//! Vectors multiply matrices from the left, so transforms compose left to
//! right and translations live in the last row:
//!
//! ```
//! use snake3d_math::{transform, vector_multiply_homogeneous, Matrix4f, Vector3f};
//!
//! let m: Matrix4f = transform::translation(&Vector3f::new(5.0, 0.0, 0.0));
//! let p = vector_multiply_homogeneous(&Vector3f::new(1.0, 2.0, 3.0), &m);
//! assert_eq!(p, Vector3f::new(6.0, 2.0, 3.0));
//! ```

mod error;
mod matrix;
mod ops;
mod scalar;
#[cfg(feature = "serde")]
mod serde_impl;
mod shape;
mod vector;

pub mod transform;

pub use crate::{
    error::Error,
    matrix::{Matrix, Matrix2, Matrix3, Matrix4, Vector, Vector2, Vector3, Vector4},
    ops::{matrix_invert, matrix_is_identity, matrix_is_identity_eps, matrix_multiply},
    scalar::*,
    vector::{
        cross, distance, distance_sqr, dot, reflect, vector_multiply, vector_multiply_homogeneous,
    },
};

pub type Matrix2f = Matrix2<f32>;
pub type Matrix3f = Matrix3<f32>;
pub type Matrix4f = Matrix4<f32>;
pub type Vector2f = Vector2<f32>;
pub type Vector3f = Vector3<f32>;
pub type Vector4f = Vector4<f32>;
pub type Color3f = Vector3<f32>;
pub type Color4f = Vector4<f32>;
pub type TexCoordf = Vector2<f32>;

pub type Matrix2lf = Matrix2<f64>;
pub type Matrix3lf = Matrix3<f64>;
pub type Matrix4lf = Matrix4<f64>;
pub type Vector2lf = Vector2<f64>;
pub type Vector3lf = Vector3<f64>;
pub type Vector4lf = Vector4<f64>;
pub type Color3lf = Vector3<f64>;
pub type Color4lf = Vector4<f64>;
pub type TexCoordlf = Vector2<f64>;
