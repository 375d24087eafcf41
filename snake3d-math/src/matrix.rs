use std::{
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{shape, Scalar};

/// An `N`×`M` matrix of floating-point elements, stored by value in
/// row-major order.
///
/// Vectors are the `M == 1` special case (see [`Vector`]). Whether a shape
/// counts as a *vector* or as *square* is decided at compile time: methods
/// that only make sense for one of them live in `impl` blocks restricted to
/// that shape, or carry an inline `const` assertion that fails the build
/// when instantiated with the wrong dimensions.
///
/// # Arithmetic
/// `+`, `-`, `*` and `/` are strictly componentwise, both between two
/// matrices and between a matrix and a scalar. In particular `*` is the
/// Hadamard product; the matrix product is [`matrix_multiply`].
///
/// # Construction
/// There is no uninitialized constructor: [`Default`] and [`Matrix::zeros`]
/// zero-fill the storage. The identity must be requested explicitly via
/// [`Matrix::identity`].
///
/// [`matrix_multiply`]: crate::matrix_multiply
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<const N: usize, const M: usize, T> {
    pub(crate) data: [[T; M]; N],
}

/// An `N`-dimensional column vector.
pub type Vector<const N: usize, T> = Matrix<N, 1, T>;

pub type Vector2<T> = Vector<2, T>;
pub type Vector3<T> = Vector<3, T>;
pub type Vector4<T> = Vector<4, T>;
pub type Matrix2<T> = Matrix<2, 2, T>;
pub type Matrix3<T> = Matrix<3, 3, T>;
pub type Matrix4<T> = Matrix<4, 4, T>;

impl<const N: usize, const M: usize, T: Scalar> Matrix<N, M, T> {
    /// Number of rows.
    pub const ROWS: usize = N;
    /// Number of columns.
    pub const COLUMNS: usize = M;
    /// True when the shape is a column vector.
    pub const IS_VECTOR: bool = M == 1;
    /// True when the shape is square and not a vector.
    pub const IS_SQUARE: bool = M != 1 && N == M;

    /// Creates a matrix from its rows.
    pub const fn from_rows(data: [[T; M]; N]) -> Self {
        Self { data }
    }

    /// Creates a matrix with every element set to zero.
    pub fn zeros() -> Self {
        Self::filled(T::zero())
    }

    /// Creates a matrix with every element set to `value`.
    pub fn filled(value: T) -> Self {
        Self { data: [[value; M]; N] }
    }

    /// Creates a matrix by calling `f(row, column)` for every element.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            data: std::array::from_fn(|row| std::array::from_fn(|col| f(row, col))),
        }
    }

    /// Returns a new matrix with `f` applied to every element.
    pub fn map(&self, mut f: impl FnMut(T) -> T) -> Self {
        Self::from_fn(|row, col| f(self.data[row][col]))
    }

    /// Returns the rows as nested arrays.
    pub fn to_rows(&self) -> [[T; M]; N] {
        self.data
    }

    /// Elements in row-major order.
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    /// Iterates over the elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter().flatten()
    }

    // Row/column transfer

    /// Returns a copy of row `row` as an `M`-dimensional vector.
    pub fn row(&self, row: usize) -> Vector<M, T> {
        debug_assert!(row < N, "row {row} out of range for {N}x{M} matrix");
        Matrix::from_fn(|col, _| self.data[row][col])
    }

    /// Returns a copy of column `col` as an `N`-dimensional vector.
    pub fn column(&self, col: usize) -> Vector<N, T> {
        debug_assert!(col < M, "column {col} out of range for {N}x{M} matrix");
        Matrix::from_fn(|row, _| self.data[row][col])
    }

    /// Overwrites row `row` with the components of `v`.
    pub fn set_row(&mut self, row: usize, v: &Vector<M, T>) {
        debug_assert!(row < N, "row {row} out of range for {N}x{M} matrix");
        for col in 0..M {
            self.data[row][col] = v.data[col][0];
        }
    }

    /// Overwrites column `col` with the components of `v`.
    pub fn set_column(&mut self, col: usize, v: &Vector<N, T>) {
        debug_assert!(col < M, "column {col} out of range for {N}x{M} matrix");
        for row in 0..N {
            self.data[row][col] = v.data[row][0];
        }
    }

    // Componentwise predicates. Each one holds only if it holds for every
    // pair of corresponding components.

    fn all(&self, rhs: &Self, pred: impl Fn(T, T) -> bool) -> bool {
        self.iter().zip(rhs.iter()).all(|(&a, &b)| pred(a, b))
    }

    /// Every component equals its counterpart. Same as `==`.
    pub fn all_eq(&self, rhs: &Self) -> bool {
        self.all(rhs, |a, b| a == b)
    }

    /// Every component differs from its counterpart.
    ///
    /// This is *not* the negation of [`all_eq`](Self::all_eq): two matrices
    /// sharing a single equal component are neither `all_eq` nor `all_ne`.
    pub fn all_ne(&self, rhs: &Self) -> bool {
        self.all(rhs, |a, b| a != b)
    }

    /// Every component is strictly greater than its counterpart.
    pub fn all_gt(&self, rhs: &Self) -> bool {
        self.all(rhs, |a, b| a > b)
    }

    /// Every component is strictly less than its counterpart.
    pub fn all_lt(&self, rhs: &Self) -> bool {
        self.all(rhs, |a, b| a < b)
    }

    /// Every component is greater than or equal to its counterpart.
    pub fn all_ge(&self, rhs: &Self) -> bool {
        self.all(rhs, |a, b| a >= b)
    }

    /// Every component is less than or equal to its counterpart.
    pub fn all_le(&self, rhs: &Self) -> bool {
        self.all(rhs, |a, b| a <= b)
    }

    // Reductions and elementwise helpers

    /// Multiplies every element by `t`.
    pub fn scale(self, t: T) -> Self {
        self.map(|v| v * t)
    }

    /// Sum of all elements.
    pub fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, &v| acc + v)
    }

    /// Replaces every element with its absolute value.
    pub fn absolute(&mut self) {
        *self = self.map(T::abs);
    }

    /// Rounds every element down to the nearest integral value.
    pub fn floor(&mut self) {
        *self = self.map(T::floor);
    }

    /// Largest element; `-T::max_value()` for an empty matrix.
    pub fn max(&self) -> T {
        self.iter().fold(-T::max_value(), |acc, &v| if v > acc { v } else { acc })
    }

    /// Smallest element; `T::max_value()` for an empty matrix.
    pub fn min(&self) -> T {
        self.iter().fold(T::max_value(), |acc, &v| if v < acc { v } else { acc })
    }

    // Elementary row operations

    /// Exchanges rows `a` and `b`.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        let tmp = self.row(a);
        self.set_row(a, &self.row(b));
        self.set_row(b, &tmp);
    }

    /// Multiplies every element of row `row` by `scalar`.
    pub fn scale_row(&mut self, row: usize, scalar: T) {
        let scaled = self.row(row).scale(scalar);
        self.set_row(row, &scaled);
    }

    /// Adds row `src` multiplied by `scalar` to row `dst`.
    pub fn add_scaled_row(&mut self, src: usize, scalar: T, dst: usize) {
        let sum = self.row(src).scale(scalar) + self.row(dst);
        self.set_row(dst, &sum);
    }
}

impl<const N: usize, const M: usize, T: Scalar> Default for Matrix<N, M, T> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize, const M: usize, T> From<[[T; M]; N]> for Matrix<N, M, T> {
    fn from(data: [[T; M]; N]) -> Self {
        Self { data }
    }
}

impl<const N: usize, T: Scalar> From<[T; N]> for Vector<N, T> {
    fn from(components: [T; N]) -> Self {
        Matrix::from_fn(|row, _| components[row])
    }
}

impl<const N: usize, T: Scalar> From<Vector<N, T>> for [T; N] {
    fn from(v: Vector<N, T>) -> Self {
        std::array::from_fn(|i| v.data[i][0])
    }
}

// Vector-only operations

impl<const N: usize, T: Scalar> Vector<N, T> {
    /// Returns the components as an array.
    pub fn to_array(&self) -> [T; N] {
        (*self).into()
    }

    /// First component.
    #[inline]
    pub fn x(&self) -> T {
        self.data[0][0]
    }

    /// Second component; requires `N >= 2`.
    #[inline]
    pub fn y(&self) -> T {
        shape::assert_min_dimension::<N, 2>();
        self.data[1][0]
    }

    /// Third component; requires `N >= 3`.
    #[inline]
    pub fn z(&self) -> T {
        shape::assert_min_dimension::<N, 3>();
        self.data[2][0]
    }

    /// Fourth component; requires `N >= 4`.
    #[inline]
    pub fn w(&self) -> T {
        shape::assert_min_dimension::<N, 4>();
        self.data[3][0]
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.data[0][0]
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        shape::assert_min_dimension::<N, 2>();
        &mut self.data[1][0]
    }

    #[inline]
    pub fn z_mut(&mut self) -> &mut T {
        shape::assert_min_dimension::<N, 3>();
        &mut self.data[2][0]
    }

    #[inline]
    pub fn w_mut(&mut self) -> &mut T {
        shape::assert_min_dimension::<N, 4>();
        &mut self.data[3][0]
    }

    /// Sum of the squared components.
    pub fn magnitude_sqr(&self) -> T {
        self.iter().fold(T::zero(), |acc, &v| acc + v * v)
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> T {
        self.magnitude_sqr().sqrt()
    }

    /// Rescales the vector so its length becomes `magnitude`.
    ///
    /// A zero-length vector divides by zero and ends up with infinite or
    /// NaN components; this is not reported as an error.
    pub fn set_magnitude(&mut self, magnitude: T) {
        let factor = magnitude / self.magnitude();
        *self = self.scale(factor);
    }

    /// Rescales the vector to unit length.
    pub fn normalize(&mut self) {
        self.set_magnitude(T::one());
    }

    /// Returns a unit-length copy of the vector.
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Returns the vector with a trailing component set to one, as used
    /// for homogeneous coordinates. `H` must be `N + 1`.
    pub fn extend<const H: usize>(&self) -> Vector<H, T> {
        shape::assert_homogeneous::<N, H>();
        Matrix::from_fn(|row, _| if row < N { self.data[row][0] } else { T::one() })
    }

    /// Returns the vector without its last component. `L` must be `N - 1`.
    pub fn truncate<const L: usize>(&self) -> Vector<L, T> {
        shape::assert_homogeneous::<L, N>();
        Matrix::from_fn(|row, _| self.data[row][0])
    }
}

impl<T: Scalar> Vector2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { data: [[x], [y]] }
    }
}

impl<T: Scalar> Vector3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { data: [[x], [y], [z]] }
    }
}

impl<T: Scalar> Vector4<T> {
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [[x], [y], [z], [w]] }
    }
}

impl<T: Scalar> Matrix3<T> {
    /// Builds a 3×3 matrix from its three columns.
    pub fn from_columns(x: &Vector3<T>, y: &Vector3<T>, z: &Vector3<T>) -> Self {
        let mut m = Self::zeros();
        m.set_column(0, x);
        m.set_column(1, y);
        m.set_column(2, z);
        m
    }
}

// Indexing

impl<const N: usize, const M: usize, T> Index<usize> for Matrix<N, M, T> {
    type Output = T;

    /// Row-major linear access.
    fn index(&self, i: usize) -> &T {
        debug_assert!(i < N * M, "index {i} out of range for {N}x{M} matrix");
        &self.data[i / M][i % M]
    }
}

impl<const N: usize, const M: usize, T> IndexMut<usize> for Matrix<N, M, T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        debug_assert!(i < N * M, "index {i} out of range for {N}x{M} matrix");
        &mut self.data[i / M][i % M]
    }
}

impl<const N: usize, const M: usize, T> Index<(usize, usize)> for Matrix<N, M, T> {
    type Output = T;

    /// `(row, column)` access; vectors must use linear indexing instead.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        shape::assert_not_vector::<M>();
        debug_assert!(row < N && col < M, "({row}, {col}) out of range for {N}x{M} matrix");
        &self.data[row][col]
    }
}

impl<const N: usize, const M: usize, T> IndexMut<(usize, usize)> for Matrix<N, M, T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        shape::assert_not_vector::<M>();
        debug_assert!(row < N && col < M, "({row}, {col}) out of range for {N}x{M} matrix");
        &mut self.data[row][col]
    }
}

// Componentwise arithmetic

macro_rules! impl_matrix_binop {
    ($op:ident, $fn:ident, $assign_op:ident, $assign_fn:ident, $sym:tt) => {
        impl<const N: usize, const M: usize, T: Scalar> $op for Matrix<N, M, T> {
            type Output = Self;

            #[inline]
            fn $fn(self, rhs: Self) -> Self {
                Self::from_fn(|row, col| self.data[row][col] $sym rhs.data[row][col])
            }
        }

        impl<const N: usize, const M: usize, T: Scalar> $assign_op for Matrix<N, M, T> {
            #[inline]
            fn $assign_fn(&mut self, rhs: Self) {
                *self = *self $sym rhs;
            }
        }
    };
}

impl_matrix_binop!(Add, add, AddAssign, add_assign, +);
impl_matrix_binop!(Sub, sub, SubAssign, sub_assign, -);
impl_matrix_binop!(Mul, mul, MulAssign, mul_assign, *);
impl_matrix_binop!(Div, div, DivAssign, div_assign, /);

impl<const N: usize, const M: usize, T: Scalar> Neg for Matrix<N, M, T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

// Matrix-scalar arithmetic is implemented per concrete element type; a
// blanket `impl Add<T>` would overlap with `impl Add<Matrix>`.
macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {$(
        impl<const N: usize, const M: usize> Add<$t> for Matrix<N, M, $t> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: $t) -> Self {
                self.map(|v| v + rhs)
            }
        }

        impl<const N: usize, const M: usize> Sub<$t> for Matrix<N, M, $t> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: $t) -> Self {
                self.map(|v| v - rhs)
            }
        }

        impl<const N: usize, const M: usize> Mul<$t> for Matrix<N, M, $t> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $t) -> Self {
                self.scale(rhs)
            }
        }

        impl<const N: usize, const M: usize> Mul<Matrix<N, M, $t>> for $t {
            type Output = Matrix<N, M, $t>;

            #[inline]
            fn mul(self, rhs: Matrix<N, M, $t>) -> Matrix<N, M, $t> {
                rhs.scale(self)
            }
        }

        impl<const N: usize, const M: usize> Div<$t> for Matrix<N, M, $t> {
            type Output = Self;

            /// Multiplies by the reciprocal of `rhs`.
            #[inline]
            fn div(self, rhs: $t) -> Self {
                self.scale(1.0 / rhs)
            }
        }

        impl<const N: usize, const M: usize> AddAssign<$t> for Matrix<N, M, $t> {
            #[inline]
            fn add_assign(&mut self, rhs: $t) {
                *self = *self + rhs;
            }
        }

        impl<const N: usize, const M: usize> SubAssign<$t> for Matrix<N, M, $t> {
            #[inline]
            fn sub_assign(&mut self, rhs: $t) {
                *self = *self - rhs;
            }
        }

        impl<const N: usize, const M: usize> MulAssign<$t> for Matrix<N, M, $t> {
            #[inline]
            fn mul_assign(&mut self, rhs: $t) {
                *self = *self * rhs;
            }
        }

        impl<const N: usize, const M: usize> DivAssign<$t> for Matrix<N, M, $t> {
            #[inline]
            fn div_assign(&mut self, rhs: $t) {
                *self = *self / rhs;
            }
        }
    )*};
}

impl_scalar_ops!(f32, f64);

// Tolerant comparison

impl<const N: usize, const M: usize, T: Scalar> AbsDiffEq for Matrix<N, M, T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const N: usize, const M: usize, T: Scalar> RelativeEq for Matrix<N, M, T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<const N: usize, const M: usize, T: Scalar> UlpsEq for Matrix<N, M, T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

impl<const N: usize, const M: usize, T: Scalar> fmt::Display for Matrix<N, M, T> {
    /// One row per line; honours the formatter's precision.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(4);
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v:>w$.p$}", w = precision + 4, p = precision)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{Matrix2f, Matrix3f, Vector3f, Vector4f};

    #[test]
    fn storage_is_row_major() {
        let m = Matrix::<2, 3, f32>::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m[4], 5.0);
        assert_eq!(m[(1, 1)], 5.0);
        assert_eq!(m[(0, 2)], 3.0);
    }

    #[test]
    fn copies_are_detached() {
        let a = Matrix2f::filled(1.0);
        let mut b = a;
        b[(0, 0)] = 7.0;
        assert_eq!(a[(0, 0)], 1.0);
        assert_eq!(b[(0, 0)], 7.0);
    }

    #[test]
    fn default_is_zero_filled() {
        let m = Matrix3f::default();
        assert!(m.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn named_accessors() {
        let mut v = Vector4f::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1.0, 2.0, 3.0, 4.0));
        *v.z_mut() = 9.0;
        assert_eq!(v[2], 9.0);
    }

    #[test]
    fn row_and_column_transfer() {
        let mut m = Matrix::<2, 3, f64>::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(m.row(1), Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(m.column(2), Vector2::new(3.0, 6.0));

        m.set_row(0, &Vector3::new(7.0, 8.0, 9.0));
        m.set_column(1, &Vector2::new(-1.0, -2.0));
        assert_eq!(m.to_rows(), [[7.0, -1.0, 9.0], [4.0, -2.0, 6.0]]);
    }

    #[test]
    fn from_columns_places_vectors_as_columns() {
        let m = Matrix3f::from_columns(
            &Vector3f::new(1.0, 2.0, 3.0),
            &Vector3f::new(4.0, 5.0, 6.0),
            &Vector3f::new(7.0, 8.0, 9.0),
        );
        assert_eq!(m.to_rows(), [[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]]);
    }

    #[test]
    fn arithmetic_is_componentwise() {
        let a = Matrix2f::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix2f::from_rows([[2.0, 2.0], [2.0, 8.0]]);

        assert_eq!((a + b).to_rows(), [[3.0, 4.0], [5.0, 12.0]]);
        assert_eq!((a - b).to_rows(), [[-1.0, 0.0], [1.0, -4.0]]);
        // Hadamard, not the matrix product
        assert_eq!((a * b).to_rows(), [[2.0, 4.0], [6.0, 32.0]]);
        assert_eq!((a / b).to_rows(), [[0.5, 1.0], [1.5, 0.5]]);
        assert_eq!((-a).to_rows(), [[-1.0, -2.0], [-3.0, -4.0]]);

        assert_eq!((a + 1.0).to_rows(), [[2.0, 3.0], [4.0, 5.0]]);
        assert_eq!((a - 1.0).to_rows(), [[0.0, 1.0], [2.0, 3.0]]);
        assert_eq!((a * 2.0).to_rows(), [[2.0, 4.0], [6.0, 8.0]]);
        assert_eq!((2.0 * a).to_rows(), [[2.0, 4.0], [6.0, 8.0]]);
        assert_eq!((a / 2.0).to_rows(), [[0.5, 1.0], [1.5, 2.0]]);

        let mut c = a;
        c += b;
        c -= 1.0;
        c *= 2.0;
        c /= b;
        assert_eq!(c.to_rows(), [[2.0, 3.0], [4.0, 2.75]]);
    }

    #[test]
    fn comparisons_require_every_component() {
        let a = Vector3f::new(1.0, 2.0, 3.0);
        let b = Vector3f::new(0.0, 1.0, 2.0);
        let mixed = Vector3f::new(2.0, 1.0, 3.0);

        assert!(a.all_gt(&b));
        assert!(b.all_lt(&a));
        assert!(a.all_ge(&a));
        assert!(a.all_le(&a));

        // one component fails, so the whole predicate fails
        assert!(!a.all_gt(&mixed));
        assert!(!a.all_lt(&mixed));
        assert!(!a.all_ge(&mixed));
        assert!(!a.all_le(&mixed));

        // neither equal nor entirely different
        assert!(!a.all_eq(&mixed));
        assert!(!a.all_ne(&mixed));
        assert!(a.all_ne(&b));
        assert!(a.all_eq(&a));
        assert!(a != mixed);
    }

    #[test]
    fn magnitude_operations() {
        let mut v = Vector3f::new(3.0, 4.0, 0.0);
        assert_eq!(v.magnitude_sqr(), 25.0);
        assert_eq!(v.magnitude(), 5.0);

        v.set_magnitude(10.0);
        assert_abs_diff_eq!(v, Vector3f::new(6.0, 8.0, 0.0), epsilon = 1e-6);

        v.normalize();
        assert_abs_diff_eq!(v.magnitude(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn normalizing_zero_vector_is_not_finite() {
        let v = Vector3f::zeros().normalized();
        assert!(v.iter().all(|c| !c.is_finite()));
    }

    #[test]
    fn extend_and_truncate() {
        let v = Vector3f::new(1.0, 2.0, 3.0);
        let h: Vector4f = v.extend();
        assert_eq!(h, Vector4f::new(1.0, 2.0, 3.0, 1.0));
        let back: Vector3f = h.truncate();
        assert_eq!(back, v);
    }

    #[test]
    fn reductions() {
        let mut m = Matrix2f::from_rows([[-1.5, 2.25], [3.75, -4.0]]);
        assert_eq!(m.sum(), 0.5);
        assert_eq!(m.max(), 3.75);
        assert_eq!(m.min(), -4.0);

        m.floor();
        assert_eq!(m.to_rows(), [[-2.0, 2.0], [3.0, -4.0]]);
        m.absolute();
        assert_eq!(m.to_rows(), [[2.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn row_operations() {
        let mut m = Matrix::<3, 2, f64>::from_rows([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        m.swap_rows(0, 2);
        assert_eq!(m.to_rows(), [[5.0, 6.0], [3.0, 4.0], [1.0, 2.0]]);
        m.scale_row(1, 2.0);
        assert_eq!(m.to_rows(), [[5.0, 6.0], [6.0, 8.0], [1.0, 2.0]]);
        m.add_scaled_row(2, -5.0, 0);
        assert_eq!(m.to_rows(), [[0.0, -4.0], [6.0, 8.0], [1.0, 2.0]]);
    }

    #[test]
    fn display_honours_precision() {
        let m = Matrix2f::from_rows([[1.0, 0.0], [0.0, 1.0]]);
        assert_eq!(format!("{m:.1}"), "[  1.0,   0.0]\n[  0.0,   1.0]");
    }
}
