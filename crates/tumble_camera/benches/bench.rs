use criterion::{criterion_main, criterion_group, Criterion, black_box};

use tumble_camera::Camera;
use tumble_math::*;

fn camera_benchmark(c: &mut Criterion) {
    c.bench_function("camera: tumble yaw", |b| {
        let mut cam = Camera::<f32>::default();
        b.iter(|| cam.tumble_yaw(black_box(Degrees(1.5))))
    });

    c.bench_function("camera: orbit pitch", |b| {
        let mut cam = Camera::<f32>::default();
        b.iter(|| cam.orbit_pitch(black_box(Degrees(-0.5))))
    });

    c.bench_function("camera: look at", |b| {
        let mut cam = Camera::<f32>::default();
        cam.orbit_yaw(Degrees(30.0));
        b.iter(|| black_box(&cam).look_at())
    });
}

criterion_group!(camera, camera_benchmark);
criterion_main!(camera);
