//! Free functions over column vectors.
//!
//! Vectors are applied to matrices from the left (row-vector convention):
//! `out[i] = Σ_j m(j, i) · v[j]`. Translations therefore live in the last
//! row of a transform, not the last column.

use crate::{
    matrix::{Matrix, Vector, Vector3},
    shape, Scalar,
};

/// Cross product of two 3-dimensional vectors.
pub fn cross<T: Scalar>(a: &Vector3<T>, b: &Vector3<T>) -> Vector3<T> {
    Vector3::new(
        a.y() * b.z() - a.z() * b.y(),
        a.z() * b.x() - a.x() * b.z(),
        a.x() * b.y() - a.y() * b.x(),
    )
}

/// Dot product.
pub fn dot<const N: usize, T: Scalar>(a: &Vector<N, T>, b: &Vector<N, T>) -> T {
    a.iter().zip(b.iter()).fold(T::zero(), |acc, (&x, &y)| acc + x * y)
}

/// Squared euclidean distance between two points.
pub fn distance_sqr<const N: usize, T: Scalar>(a: &Vector<N, T>, b: &Vector<N, T>) -> T {
    (*a - *b).magnitude_sqr()
}

/// Euclidean distance between two points.
pub fn distance<const N: usize, T: Scalar>(a: &Vector<N, T>, b: &Vector<N, T>) -> T {
    distance_sqr(a, b).sqrt()
}

/// Reflects `incident` about the plane with the given `normal`.
///
/// `normal` is expected to be unit length; it is not normalized here.
pub fn reflect<const N: usize, T: Scalar>(
    incident: &Vector<N, T>,
    normal: &Vector<N, T>,
) -> Vector<N, T> {
    *incident - normal.scale(T::lit(2.0) * dot(incident, normal))
}

/// Applies `m` to `v` using the row-vector convention.
pub fn vector_multiply<const N: usize, T: Scalar>(
    v: &Vector<N, T>,
    m: &Matrix<N, N, T>,
) -> Vector<N, T> {
    Matrix::from_fn(|i, _| {
        (0..N).fold(T::zero(), |acc, j| acc + m.data[j][i] * v.data[j][0])
    })
}

/// Applies an `H`×`H` transform to an `N`-dimensional point, where
/// `H == N + 1`.
///
/// The point is extended with a trailing 1, multiplied, and the first `N`
/// components are divided by the resulting last component. The divide is
/// skipped when that component is exactly 1, which keeps affine transforms
/// bit-exact.
pub fn vector_multiply_homogeneous<const N: usize, const H: usize, T: Scalar>(
    v: &Vector<N, T>,
    m: &Matrix<H, H, T>,
) -> Vector<N, T> {
    shape::assert_homogeneous::<N, H>();

    let out = vector_multiply(&v.extend::<H>(), m);
    let w = out.data[N][0];
    let point: Vector<N, T> = out.truncate();
    if w == T::one() {
        point
    } else {
        point.map(|c| c / w)
    }
}
