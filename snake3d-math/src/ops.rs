//! Whole-matrix operations: identity, transposition, products and
//! inversion.

use approx::AbsDiffEq;

use crate::{
    error::Error,
    matrix::{Matrix, Matrix3, Vector},
    shape,
    vector::cross,
    Scalar,
};

impl<const N: usize, const M: usize, T: Scalar> Matrix<N, M, T> {
    /// Returns the `M`×`N` transpose.
    pub fn transposed(&self) -> Matrix<M, N, T> {
        Matrix::from_fn(|row, col| self.data[col][row])
    }

    /// Matrix product `self · rhs`; see [`matrix_multiply`].
    pub fn matmul<const P: usize>(&self, rhs: &Matrix<M, P, T>) -> Matrix<N, P, T> {
        matrix_multiply(self, rhs)
    }
}

impl<const N: usize, T: Scalar> Matrix<N, N, T> {
    /// The identity matrix.
    pub fn identity() -> Self {
        let mut m = Self::zeros();
        m.set_identity();
        m
    }

    /// Overwrites the matrix with the identity.
    pub fn set_identity(&mut self) {
        shape::assert_square::<N, N>();
        for row in 0..N {
            for col in 0..N {
                self.data[row][col] = if row == col { T::one() } else { T::zero() };
            }
        }
    }

    /// Transposes the matrix in place.
    pub fn transpose(&mut self) {
        shape::assert_square::<N, N>();
        for i in 0..N {
            for j in (i + 1)..N {
                let upper = self.data[i][j];
                self.data[i][j] = self.data[j][i];
                self.data[j][i] = upper;
            }
        }
    }

    /// Returns the inverse, or [`Error::SingularMatrix`].
    pub fn inverse(&self) -> Result<Self, Error> {
        matrix_invert(self)
    }

    /// Returns the inverse, or `None` when the matrix is singular.
    pub fn try_inverse(&self) -> Option<Self> {
        matrix_invert(self).ok()
    }

    /// Exact identity check; see [`matrix_is_identity`].
    pub fn is_identity(&self) -> bool {
        matrix_is_identity(self)
    }

    /// Embeds the matrix in the upper-left corner of an `H`×`H` identity,
    /// where `H == N + 1`.
    pub fn embed<const H: usize>(&self) -> Matrix<H, H, T> {
        shape::assert_homogeneous::<N, H>();
        let mut out = Matrix::<H, H, T>::identity();
        for row in 0..N {
            out.data[row][..N].copy_from_slice(&self.data[row]);
        }
        out
    }

    /// Drops the last row and column, where `L == N - 1`.
    pub fn shrink<const L: usize>(&self) -> Matrix<L, L, T> {
        shape::assert_homogeneous::<L, N>();
        Matrix::from_fn(|row, col| self.data[row][col])
    }

    // Axis columns of a transform

    pub fn x_axis(&self) -> Vector<N, T> {
        self.column(0)
    }

    pub fn y_axis(&self) -> Vector<N, T> {
        shape::assert_min_dimension::<N, 2>();
        self.column(1)
    }

    pub fn z_axis(&self) -> Vector<N, T> {
        shape::assert_min_dimension::<N, 3>();
        self.column(2)
    }

    pub fn set_x_axis(&mut self, axis: &Vector<N, T>) {
        self.set_column(0, axis);
    }

    pub fn set_y_axis(&mut self, axis: &Vector<N, T>) {
        shape::assert_min_dimension::<N, 2>();
        self.set_column(1, axis);
    }

    pub fn set_z_axis(&mut self, axis: &Vector<N, T>) {
        shape::assert_min_dimension::<N, 3>();
        self.set_column(2, axis);
    }
}

impl<T: Scalar> Matrix3<T> {
    /// Re-orthonormalizes the column basis, keeping the direction of the
    /// X column and the plane spanned by X and Y.
    pub fn orthonormalize(&mut self) {
        let x = self.x_axis().normalized();
        let z = cross(&x, &self.y_axis());
        let y = cross(&z, &x).normalized();
        let z = z.normalized();
        *self = Self::from_columns(&x, &y, &z);
    }
}

/// Matrix product of an `N`×`M` and an `M`×`P` matrix.
pub fn matrix_multiply<const N: usize, const M: usize, const P: usize, T: Scalar>(
    lhs: &Matrix<N, M, T>,
    rhs: &Matrix<M, P, T>,
) -> Matrix<N, P, T> {
    let mut out = Matrix::zeros();
    for i in 0..N {
        for j in 0..P {
            let mut acc = T::zero();
            for k in 0..M {
                acc += lhs.data[i][k] * rhs.data[k][j];
            }
            out.data[i][j] = acc;
        }
    }
    out
}

/// Inverts a square matrix by Gauss-Jordan elimination with partial
/// pivoting.
///
/// For each column the row with the largest absolute value at or below the
/// diagonal becomes the pivot. A column without a non-zero candidate makes
/// the matrix singular and is reported as [`Error::SingularMatrix`]; no
/// tolerance is applied, so nearly singular input produces a numerically
/// poor but successful result.
pub fn matrix_invert<const N: usize, T: Scalar>(
    m: &Matrix<N, N, T>,
) -> Result<Matrix<N, N, T>, Error> {
    shape::assert_square::<N, N>();

    let mut work = *m;
    let mut inverse = Matrix::identity();

    for j in 0..N {
        let mut pivot_row = j;
        let mut max = T::zero();
        for r in j..N {
            let candidate = work.data[r][j].abs();
            if candidate > max {
                max = candidate;
                pivot_row = r;
            }
        }

        if max == T::zero() {
            log::trace!("no pivot in column {j} of {N}x{N} matrix");
            return Err(Error::singular(j));
        }

        if pivot_row != j {
            work.swap_rows(j, pivot_row);
            inverse.swap_rows(j, pivot_row);
        }

        let scale = T::one() / work.data[j][j];
        work.scale_row(j, scale);
        inverse.scale_row(j, scale);

        for r in 0..N {
            let factor = work.data[r][j];
            if r == j || factor == T::zero() {
                continue;
            }
            work.add_scaled_row(j, -factor, r);
            inverse.add_scaled_row(j, -factor, r);
        }
    }

    Ok(inverse)
}

/// True when `m` is exactly the identity.
///
/// The comparison has no tolerance, so products that are the identity up to
/// rounding report `false`. Use [`matrix_is_identity_eps`] for those.
pub fn matrix_is_identity<const N: usize, T: Scalar>(m: &Matrix<N, N, T>) -> bool {
    *m == Matrix::identity()
}

/// True when every element of `m` is within `epsilon` of the identity.
pub fn matrix_is_identity_eps<const N: usize, T: Scalar>(m: &Matrix<N, N, T>, epsilon: T) -> bool {
    m.abs_diff_eq(&Matrix::identity(), epsilon)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{Matrix2f, Matrix2lf, Matrix3f, Matrix3lf, Matrix4f, Vector3f};

    #[test]
    fn identity_and_transpose() {
        let id = Matrix3f::identity();
        assert!(id.is_identity());
        assert_eq!(id.transposed(), id);

        let mut m = Matrix3f::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        m.transpose();
        assert_eq!(m.to_rows(), [[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]]);

        m.set_identity();
        assert!(matrix_is_identity(&m));
    }

    #[test]
    fn transposed_changes_shape() {
        let m = Matrix::<2, 3, f32>::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let t: Matrix<3, 2, f32> = m.transposed();
        assert_eq!(t.to_rows(), [[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]);
    }

    #[test]
    fn multiply_rectangular() {
        let a = Matrix::<2, 3, f32>::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Matrix::<3, 2, f32>::from_rows([[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);
        assert_eq!(a.matmul(&b).to_rows(), [[58.0, 64.0], [139.0, 154.0]]);

        let v = Vector3f::new(1.0, 0.0, -1.0);
        assert_eq!(matrix_multiply(&a, &v).to_array(), [-2.0, -2.0]);
    }

    #[test]
    fn multiply_by_identity_is_noop() {
        let m = Matrix4f::from_fn(|r, c| (r * 4 + c) as f32);
        assert_eq!(matrix_multiply(&m, &Matrix4f::identity()), m);
        assert_eq!(matrix_multiply(&Matrix4f::identity(), &m), m);
    }

    #[test]
    fn invert_diagonal() {
        let m = Matrix2f::from_rows([[2.0, 0.0], [0.0, 4.0]]);
        let inv = matrix_invert(&m).unwrap();
        assert_eq!(inv.to_rows(), [[0.5, 0.0], [0.0, 0.25]]);
    }

    #[test]
    fn invert_needs_row_swap() {
        let m = Matrix3f::from_rows([[0.0, 2.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 4.0]]);
        let inv = m.inverse().unwrap();
        assert_eq!(inv.to_rows(), [[0.0, 1.0, 0.0], [0.5, 0.0, 0.0], [0.0, 0.0, 0.25]]);
    }

    #[test]
    fn invert_general() {
        let m = Matrix3lf::from_rows([[4.0, 7.0, 2.0], [3.0, 6.0, 1.0], [2.0, 5.0, 3.0]]);
        let inv = m.inverse().unwrap();
        assert!(matrix_is_identity_eps(&m.matmul(&inv), 1e-12));
        assert!(matrix_is_identity_eps(&inv.matmul(&m), 1e-12));
    }

    #[test]
    fn singular_matrix_reports_column() {
        let m = Matrix2lf::from_rows([[1.0, 2.0], [2.0, 4.0]]);
        assert_eq!(matrix_invert(&m), Err(Error::SingularMatrix { column: 1 }));

        assert_eq!(Matrix3f::zeros().inverse(), Err(Error::singular(0)));
        assert!(Matrix3f::zeros().try_inverse().is_none());
    }

    #[test]
    fn exact_identity_check_rejects_rounding() {
        let mut m = Matrix2f::identity();
        m[(0, 1)] = 1e-7;
        assert!(!matrix_is_identity(&m));
        assert!(matrix_is_identity_eps(&m, 1e-6));
    }

    #[test]
    fn embed_and_shrink() {
        let m = Matrix2f::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let e: Matrix3f = m.embed();
        assert_eq!(e.to_rows(), [[1.0, 2.0, 0.0], [3.0, 4.0, 0.0], [0.0, 0.0, 1.0]]);
        let s: Matrix2f = e.shrink();
        assert_eq!(s, m);
    }

    #[test]
    fn orthonormalize_repairs_skewed_basis() {
        let mut m = Matrix3f::from_columns(
            &Vector3f::new(2.0, 0.0, 0.0),
            &Vector3f::new(0.3, 1.0, 0.0),
            &Vector3f::new(0.0, 0.0, 5.0),
        );
        m.orthonormalize();
        assert_abs_diff_eq!(m, Matrix3f::identity(), epsilon = 1e-6);
    }
}
