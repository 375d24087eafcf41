//! Gauss-Jordan inversion and matrix products at the sizes the renderer uses.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use snake3d_math::{
    matrix_invert, matrix_multiply, transform, vector_multiply_homogeneous, Matrix3f, Matrix4f,
    Matrix4lf, Vector3f,
};

fn sample_transform() -> Matrix4f {
    let rotation: Matrix4f = transform::rotation_xyz(&Vector3f::new(0.3, 1.1, -0.7));
    let translation: Matrix4f = transform::translation(&Vector3f::new(4.0, -2.0, 9.5));
    matrix_multiply(&rotation, &translation)
}

fn bench_inversion(c: &mut Criterion) {
    let m4 = sample_transform();
    let m3: Matrix3f = m4.shrink();
    let m4lf = Matrix4lf::from_fn(|r, col| m4[(r, col)] as f64);

    let mut group = c.benchmark_group("matrix_invert");
    group.bench_function("3x3_f32", |b| b.iter(|| matrix_invert(black_box(&m3))));
    group.bench_function("4x4_f32", |b| b.iter(|| matrix_invert(black_box(&m4))));
    group.bench_function("4x4_f64", |b| b.iter(|| matrix_invert(black_box(&m4lf))));
    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let a = sample_transform();
    let b = transform::perspective(1.2, 16.0 / 9.0, 0.1, 1000.0);
    let p = Vector3f::new(1.0, 2.0, 3.0);

    let mut group = c.benchmark_group("matrix_multiply");
    group.bench_function("4x4_f32", |bencher| {
        bencher.iter(|| matrix_multiply(black_box(&a), black_box(&b)))
    });
    group.bench_function("point_homogeneous", |bencher| {
        bencher.iter(|| vector_multiply_homogeneous(black_box(&p), black_box(&a)))
    });
    group.finish();
}

criterion_group!(benches, bench_inversion, bench_multiply);
criterion_main!(benches);
