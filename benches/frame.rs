use cg_algorithms::{DemoConfig, Event, MouseButton, TransformDemo, TransformParams};
use cg_algorithms::line_bresenham::LineBresenham;
use cg_algorithms::transform::{transform_points, ReflectPivot};
use cg_algorithms::PointI;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn star(n: i32) -> Vec<PointI> {
    (0..n)
        .map(|i| {
            let a = i as f64 * 2.399_963;
            let r = if i % 2 == 0 { 300.0 } else { 120.0 };
            PointI::new(640 + (a.cos() * r) as i32, 360 + (a.sin() * r) as i32)
        })
        .collect()
}

fn params() -> TransformParams {
    TransformParams {
        tx: 25,
        ty: -40,
        angle: 33.0,
        sx: 1.25,
        sy: 0.8,
        reflect_x: false,
        reflect_y: false,
    }
}

fn bench_transform(c: &mut Criterion) {
    let points = star(256);
    let params = params();
    let mut out = Vec::with_capacity(points.len());
    c.bench_function("transform_points 256", |b| {
        b.iter(|| {
            transform_points(black_box(&points), &params, ReflectPivot::Origin, &mut out);
            black_box(out.len())
        })
    });
}

fn bench_bresenham(c: &mut Criterion) {
    c.bench_function("bresenham 1000px diagonal", |b| {
        b.iter(|| {
            LineBresenham::new(black_box(PointI::new(0, 0)), black_box(PointI::new(1000, 700)))
                .count()
        })
    });
}

fn bench_frame(c: &mut Criterion) {
    let mut demo = TransformDemo::new(DemoConfig::default()).unwrap();
    demo.set_params(&params());
    let clicks: Vec<Event> = star(64)
        .into_iter()
        .map(|p| Event::MouseDown {
            x: p.x,
            y: p.y,
            button: MouseButton::Left,
        })
        .collect();
    let mut buf = vec![0u8; demo.frame_len()];
    demo.frame_into(clicks, &mut buf).unwrap();

    c.bench_function("frame 1280x720 64 points", |b| {
        b.iter(|| demo.frame_into(std::iter::empty(), black_box(&mut buf)).unwrap())
    });
}

criterion_group!(benches, bench_transform, bench_bresenham, bench_frame);
criterion_main!(benches);
