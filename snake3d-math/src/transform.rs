//! Builders for geometric transforms.
//!
//! Every builder returns an `N`×`N` matrix meant to be applied with
//! [`vector_multiply`](crate::vector_multiply) or
//! [`vector_multiply_homogeneous`](crate::vector_multiply_homogeneous), i.e.
//! to row vectors. Only the upper-left block the transform needs is
//! written; any remaining dimensions are identity.
//!
//! Rotation builders take angles in radians. The Euler and arbitrary-axis
//! rotations negate their angles internally so that they agree with
//! [`rotation_x`], [`rotation_y`] and [`rotation_z`] for a single axis.

use crate::{
    matrix::{Matrix, Vector, Vector3},
    shape,
    vector::{cross, dot},
    Scalar,
};

#[inline(always)]
fn assert_transform<const N: usize>() {
    shape::assert_min_dimension::<N, 3>();
}

/// Translation by `offset`, stored in the last row. `D` must be `N - 1`.
pub fn translation<const N: usize, const D: usize, T: Scalar>(
    offset: &Vector<D, T>,
) -> Matrix<N, N, T> {
    assert_transform::<N>();
    shape::assert_homogeneous::<D, N>();

    let mut m = Matrix::identity();
    for i in 0..D {
        m.data[N - 1][i] = offset.data[i][0];
    }
    m
}

/// Non-uniform scaling along each axis. `D` must be `N - 1`; the trailing
/// diagonal entry stays 1.
pub fn scaling<const N: usize, const D: usize, T: Scalar>(
    factors: &Vector<D, T>,
) -> Matrix<N, N, T> {
    assert_transform::<N>();
    shape::assert_homogeneous::<D, N>();

    let mut m = Matrix::identity();
    for i in 0..D {
        m.data[i][i] = factors.data[i][0];
    }
    m
}

/// Rotation about the X axis.
pub fn rotation_x<const N: usize, T: Scalar>(angle: T) -> Matrix<N, N, T> {
    assert_transform::<N>();
    let (s, c) = angle.sin_cos();

    let mut m = Matrix::identity();
    m.data[1][1] = c;
    m.data[2][1] = s;
    m.data[1][2] = -s;
    m.data[2][2] = c;
    m
}

/// Rotation about the Y axis.
pub fn rotation_y<const N: usize, T: Scalar>(angle: T) -> Matrix<N, N, T> {
    assert_transform::<N>();
    let (s, c) = angle.sin_cos();

    let mut m = Matrix::identity();
    m.data[0][0] = c;
    m.data[0][2] = s;
    m.data[2][0] = -s;
    m.data[2][2] = c;
    m
}

/// Rotation about the Z axis.
pub fn rotation_z<const N: usize, T: Scalar>(angle: T) -> Matrix<N, N, T> {
    assert_transform::<N>();
    let (s, c) = angle.sin_cos();

    let mut m = Matrix::identity();
    m.data[0][0] = c;
    m.data[1][0] = s;
    m.data[0][1] = -s;
    m.data[1][1] = c;
    m
}

/// Combined rotation from Euler angles `(x, y, z)`, applied in Z, X, Y
/// order.
pub fn rotation_xyz<const N: usize, T: Scalar>(euler: &Vector3<T>) -> Matrix<N, N, T> {
    assert_transform::<N>();
    let (sx, cx) = (-euler.x()).sin_cos();
    let (sy, cy) = (-euler.y()).sin_cos();
    let (sz, cz) = (-euler.z()).sin_cos();

    let mut m = Matrix::identity();
    m.data[0][0] = cz * cy + sz * sx * sy;
    m.data[0][1] = sz * cx;
    m.data[0][2] = cz * -sy + sz * sx * cy;

    m.data[1][0] = -sz * cy + cz * sx * sy;
    m.data[1][1] = cz * cx;
    m.data[1][2] = sz * sy + cz * sx * cy;

    m.data[2][0] = cx * sy;
    m.data[2][1] = -sx;
    m.data[2][2] = cx * cy;
    m
}

/// Rotation by `angle` about an arbitrary `axis`.
///
/// `axis` must be unit length; it is not normalized here.
pub fn rotation_axis<const N: usize, T: Scalar>(axis: &Vector3<T>, angle: T) -> Matrix<N, N, T> {
    assert_transform::<N>();
    let (s, c) = (-angle).sin_cos();
    let t = T::one() - c;
    let (x, y, z) = (axis.x(), axis.y(), axis.z());

    let mut m = Matrix::identity();
    m.data[0][0] = c + t * x * x;
    m.data[0][1] = t * x * y + s * z;
    m.data[0][2] = t * x * z - s * y;

    m.data[1][0] = t * x * y - s * z;
    m.data[1][1] = c + t * y * y;
    m.data[1][2] = t * y * z + s * x;

    m.data[2][0] = t * x * z + s * y;
    m.data[2][1] = t * y * z - s * x;
    m.data[2][2] = c + t * z * z;
    m
}

/// World-to-camera transform for a camera at `position` looking along
/// `look`. Requires `N >= 4`.
///
/// `look` is expected to be unit length. The right vector is derived from
/// `up` and normalized; the up vector actually used is recomputed so the
/// basis is orthogonal.
pub fn view<const N: usize, T: Scalar>(
    position: &Vector3<T>,
    look: &Vector3<T>,
    up: &Vector3<T>,
) -> Matrix<N, N, T> {
    shape::assert_min_dimension::<N, 4>();

    let right = cross(up, look).normalized();
    let up = cross(look, &right);

    let mut m = Matrix::identity();
    for (col, axis) in [&right, &up, look].into_iter().enumerate() {
        for row in 0..3 {
            m.data[row][col] = axis.data[row][0];
        }
        m.data[3][col] = -dot(position, axis);
    }
    m
}

/// Left-handed perspective projection mapping depth `[near, far]` to
/// `[0, 1]`. `fov_y` is the vertical field of view in radians. Requires
/// `N >= 4`.
pub fn perspective<const N: usize, T: Scalar>(
    fov_y: T,
    aspect: T,
    near: T,
    far: T,
) -> Matrix<N, N, T> {
    shape::assert_min_dimension::<N, 4>();

    let y_scale = T::one() / (fov_y * T::lit(0.5)).tan();
    let depth = far / (far - near);

    let mut m = Matrix::identity();
    for row in 0..4 {
        for col in 0..4 {
            m.data[row][col] = T::zero();
        }
    }
    m.data[0][0] = y_scale / aspect;
    m.data[1][1] = y_scale;
    m.data[2][2] = depth;
    m.data[2][3] = T::one();
    m.data[3][2] = -near * depth;
    m
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        deg_to_rad, vector_multiply, vector_multiply_homogeneous, Matrix3f, Matrix3lf, Matrix4f,
        Matrix4lf, Vector3f, Vector3lf,
    };

    #[test]
    fn translation_sits_in_last_row() {
        let m: Matrix4f = translation(&Vector3f::new(5.0, 6.0, 7.0));
        assert_eq!(m.row(3).to_array(), [5.0, 6.0, 7.0, 1.0]);
        assert_eq!(m.shrink::<3>(), Matrix3f::identity());
    }

    #[test]
    fn scaling_keeps_trailing_one() {
        let m: Matrix4f = scaling(&Vector3f::new(2.0, 3.0, 4.0));
        let p = vector_multiply_homogeneous(&Vector3f::new(1.0, 1.0, 1.0), &m);
        assert_eq!(p, Vector3f::new(2.0, 3.0, 4.0));
        assert_eq!(m[(3, 3)], 1.0);
    }

    #[test]
    fn axis_rotations_by_quarter_turn() {
        let rx: Matrix3f = rotation_x(FRAC_PI_2);
        let ry: Matrix3f = rotation_y(FRAC_PI_2);
        let rz: Matrix3f = rotation_z(FRAC_PI_2);

        assert_abs_diff_eq!(
            vector_multiply(&Vector3f::new(0.0, 1.0, 0.0), &rx),
            Vector3f::new(0.0, 0.0, -1.0),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            vector_multiply(&Vector3f::new(0.0, 0.0, 1.0), &ry),
            Vector3f::new(-1.0, 0.0, 0.0),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            vector_multiply(&Vector3f::new(1.0, 0.0, 0.0), &rz),
            Vector3f::new(0.0, -1.0, 0.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn euler_rotation_agrees_with_single_axes() {
        let angle = deg_to_rad(37.0_f64);
        let x: Matrix4lf = rotation_xyz(&Vector3lf::new(angle, 0.0, 0.0));
        let y: Matrix4lf = rotation_xyz(&Vector3lf::new(0.0, angle, 0.0));
        let z: Matrix4lf = rotation_xyz(&Vector3lf::new(0.0, 0.0, angle));

        assert_abs_diff_eq!(x, rotation_x(angle), epsilon = 1e-12);
        assert_abs_diff_eq!(y, rotation_y(angle), epsilon = 1e-12);
        assert_abs_diff_eq!(z, rotation_z(angle), epsilon = 1e-12);
    }

    #[test]
    fn axis_rotation_agrees_with_principal_axes() {
        let angle = 1.2_f64;
        let x: Matrix3lf = rotation_axis(&Vector3lf::new(1.0, 0.0, 0.0), angle);
        let y: Matrix3lf = rotation_axis(&Vector3lf::new(0.0, 1.0, 0.0), angle);
        let z: Matrix3lf = rotation_axis(&Vector3lf::new(0.0, 0.0, 1.0), angle);

        assert_abs_diff_eq!(x, rotation_x(angle), epsilon = 1e-12);
        assert_abs_diff_eq!(y, rotation_y(angle), epsilon = 1e-12);
        assert_abs_diff_eq!(z, rotation_z(angle), epsilon = 1e-12);
    }

    #[test]
    fn view_moves_eye_to_origin() {
        let eye = Vector3f::new(1.0, 2.0, 3.0);
        let look = Vector3f::new(0.0, 0.0, 1.0);
        let up = Vector3f::new(0.0, 1.0, 0.0);
        let m: Matrix4f = view(&eye, &look, &up);

        assert_eq!(m.shrink::<3>(), Matrix3f::identity());
        assert_eq!(m.row(3).to_array(), [-1.0, -2.0, -3.0, 1.0]);
        assert_eq!(vector_multiply_homogeneous(&eye, &m), Vector3f::zeros());
    }

    #[test]
    fn perspective_layout() {
        let m: Matrix4f = perspective(FRAC_PI_2, 2.0, 1.0, 11.0);
        assert_abs_diff_eq!(m[(0, 0)], 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(m[(1, 1)], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(m[(2, 2)], 1.1, epsilon = 1e-6);
        assert_abs_diff_eq!(m[(3, 2)], -1.1, epsilon = 1e-6);
        assert_eq!(m[(2, 3)], 1.0);
        assert_eq!(m[(3, 3)], 0.0);
        assert_eq!(m[(0, 1)], 0.0);
        assert_eq!(m[(3, 0)], 0.0);

        // near plane maps to depth 0, far plane to depth 1
        let near = vector_multiply_homogeneous(&Vector3f::new(0.0, 0.0, 1.0), &m);
        let far = vector_multiply_homogeneous(&Vector3f::new(0.0, 0.0, 11.0), &m);
        assert_abs_diff_eq!(near.z(), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(far.z(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn larger_transforms_keep_extra_dimensions_identity() {
        let m: Matrix<5, 5, f32> = perspective(FRAC_PI_2, 1.0, 1.0, 10.0);
        assert_eq!(m.row(4).to_array(), [0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(m.column(4).to_array(), [0.0, 0.0, 0.0, 0.0, 1.0]);
    }
}
