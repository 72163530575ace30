use criterion::{criterion_main, criterion_group, Criterion, black_box};

use tumble_math::*;

fn matrix_benchmark(c: &mut Criterion) {
    let m4 = Mat4::new(4.0f32, 0.0, 1.0, 2.0,
                       1.0, 3.0, 0.0, 1.0,
                       0.0, 2.0, 5.0, 0.0,
                       1.0, 0.0, 0.0, 2.0);
    let m3 = m4.upper_3x3();

    c.bench_function("mat3: inverse", |b| b.iter(|| black_box(m3).inverse()));
    c.bench_function("mat4: determinant", |b| b.iter(|| black_box(m4).determinant()));
    c.bench_function("mat4: inverse", |b| b.iter(|| black_box(m4).inverse()));
    c.bench_function("mat4: mul", |b| b.iter(|| black_box(m4) * black_box(m4)));
    c.bench_function("mat4: look at", |b| b.iter(|| {
        Mat4::create_look_at(black_box(Vec3::new(0.0f32, 5.0, 50.0)), Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, 1.0, 0.0))
    }));
}

fn quat_benchmark(c: &mut Criterion) {
    let axis = Vec3::new(1.0f32, 2.0, -1.0).normalized();
    let q = Quat::from_axis_angle(axis, Radians(1.2));
    let m = q.to_mat3();

    c.bench_function("quat: from axis angle", |b| b.iter(|| Quat::from_axis_angle(black_box(axis), Radians(1.2))));
    c.bench_function("quat: to mat3", |b| b.iter(|| black_box(q).to_mat3()));
    c.bench_function("quat: from matrix", |b| b.iter(|| Quat::from_matrix(black_box(m))));
    c.bench_function("quat: mul", |b| b.iter(|| black_box(q) * black_box(q)));
    c.bench_function("mat3: interpolate", |b| b.iter(|| Mat3::interpolate(black_box(Mat3::identity()), black_box(m), 0.5)));
}

criterion_group!(math, matrix_benchmark, quat_benchmark);
criterion_main!(math);
