use color_eyre::eyre::{ensure, eyre, Result, WrapErr};
use colored::Colorize;
use snake3d_math::{
    deg_to_rad, matrix_is_identity_eps, matrix_multiply, transform, vector_multiply_homogeneous,
    Matrix, Matrix4lf, Scalar, Vector3lf,
};

use crate::cli::{Cli, Command, TransformKind};

/// Tolerance for the `M · M⁻¹ = I` check printed after an inversion.
const IDENTITY_TOLERANCE: f64 = 1e-9;

/// Executes the parsed command, printing its results to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let precision = cli.precision;

    match &cli.command {
        Command::Invert { elements } => match elements.len() {
            4 => invert::<2>(elements, precision),
            9 => invert::<3>(elements, precision),
            16 => invert::<4>(elements, precision),
            n => Err(eyre!("Unsupported matrix with {n} elements")),
        },
        Command::Multiply { lhs, rhs } => match lhs.len() {
            4 => multiply::<2>(lhs, rhs, precision),
            9 => multiply::<3>(lhs, rhs, precision),
            16 => multiply::<4>(lhs, rhs, precision),
            n => Err(eyre!("Unsupported matrix with {n} elements")),
        },
        Command::Transform { kind, angle, vector, point } => {
            let m = build_transform(*kind, *angle, vector)?;
            print_matrix(&format!("{kind:?}"), &m, precision);

            if !point.is_empty() {
                let p = vector_multiply_homogeneous(&vector3(point)?, &m);
                print_vector("Transformed point", &p, precision);
            }
            Ok(())
        }
        Command::View { position, look, up } => {
            let look = vector3(look)?.normalized();
            let m: Matrix4lf = transform::view(&vector3(position)?, &look, &vector3(up)?);
            print_matrix("View", &m, precision);
            Ok(())
        }
        Command::Perspective { fov, aspect, near, far } => {
            let m: Matrix4lf = transform::perspective(deg_to_rad(*fov), *aspect, *near, *far);
            print_matrix("Perspective", &m, precision);
            Ok(())
        }
    }
}

fn invert<const N: usize>(elements: &[f64], precision: usize) -> Result<()> {
    let m = square_from_elements::<N>(elements)?;
    log::debug!("inverting {N}x{N} matrix");
    print_matrix("Input", &m, precision);

    let inverse = m.inverse().wrap_err("Matrix cannot be inverted")?;
    print_matrix("Inverse", &inverse, precision);

    if matrix_is_identity_eps(&matrix_multiply(&m, &inverse), IDENTITY_TOLERANCE) {
        println!("{}", "M · M⁻¹ = I".green());
    } else {
        println!("{}", "M · M⁻¹ deviates from I, matrix is ill-conditioned".yellow());
    }
    Ok(())
}

fn multiply<const N: usize>(lhs: &[f64], rhs: &[f64], precision: usize) -> Result<()> {
    let a = square_from_elements::<N>(lhs)?;
    let b = square_from_elements::<N>(rhs)?;
    log::debug!("multiplying two {N}x{N} matrices");

    print_matrix("Product", &matrix_multiply(&a, &b), precision);
    Ok(())
}

fn build_transform(kind: TransformKind, angle: f64, vector: &[f64]) -> Result<Matrix4lf> {
    let angle = deg_to_rad(angle);

    let m = match kind {
        TransformKind::RotationX => transform::rotation_x(angle),
        TransformKind::RotationY => transform::rotation_y(angle),
        TransformKind::RotationZ => transform::rotation_z(angle),
        TransformKind::Translation => transform::translation(&vector3(vector)?),
        TransformKind::Scaling => transform::scaling(&vector3(vector)?),
        TransformKind::RotationXyz => transform::rotation_xyz(&vector3(vector)?.map(deg_to_rad)),
        TransformKind::RotationAxis => {
            transform::rotation_axis(&vector3(vector)?.normalized(), angle)
        }
    };
    Ok(m)
}

fn square_from_elements<const N: usize>(elements: &[f64]) -> Result<Matrix<N, N, f64>> {
    ensure!(
        elements.len() == N * N,
        "Expected {} elements for a {N}x{N} matrix, got {}",
        N * N,
        elements.len()
    );
    Ok(Matrix::from_fn(|row, col| elements[row * N + col]))
}

fn vector3(components: &[f64]) -> Result<Vector3lf> {
    match components {
        &[x, y, z] => Ok(Vector3lf::new(x, y, z)),
        _ => Err(eyre!("Expected 3 components, got {}", components.len())),
    }
}

fn print_matrix<const N: usize, const M: usize, T: Scalar>(
    label: &str,
    m: &Matrix<N, M, T>,
    precision: usize,
) {
    println!("{}", format!("{label} ({N}x{M}):").bold());
    println!("{m:.precision$}");
    println!();
}

fn print_vector(label: &str, v: &Vector3lf, precision: usize) {
    let components: Vec<String> = v.iter().map(|c| format!("{c:.precision$}")).collect();
    println!("{} ({})", format!("{label}:").bold(), components.join(", ").cyan());
}
