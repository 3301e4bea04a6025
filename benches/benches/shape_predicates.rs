// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sylva_geom::{
    Circle, Ellipse, OrientedRectangle, Path, Point2, Rectangle, Segment, Shape, Shape2D, Vector2,
};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
    fn point(&mut self) -> Point2 {
        Point2::new(self.next_f64() * 100.0, self.next_f64() * 100.0)
    }
}

fn gen_shapes(count: usize) -> Vec<Shape> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let c = rng.point();
        let r = 1.0 + rng.next_f64() * 10.0;
        let shape = match i % 5 {
            0 => Shape::from(Rectangle::from_corners(c, rng.point())),
            1 => Circle::new(c, r).map(Shape::from).unwrap(),
            2 => Ellipse::from_center(c, r, r * 0.5).map(Shape::from).unwrap(),
            3 => Shape::from(Segment::new(c, rng.point())),
            _ => OrientedRectangle::new(c, Vector2::new(1.0, 1.0), r, r * 0.25)
                .map(Shape::from)
                .unwrap(),
        };
        out.push(shape);
    }
    out
}

fn star() -> Path {
    let mut path = Path::new();
    path.move_to(Point2::new(50.0, 0.0));
    for k in 1..10 {
        let angle = core::f64::consts::PI * k as f64 / 5.0;
        let radius = if k % 2 == 0 { 50.0 } else { 20.0 };
        let _ = path.line_to(Point2::new(
            50.0 + radius * angle.sin(),
            50.0 - radius * angle.cos(),
        ));
    }
    path.close_path();
    path
}

fn bench_intersects(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersects");
    let shapes = gen_shapes(200);
    group.bench_function("all_pairs", |b| {
        b.iter(|| {
            let mut hits = 0_usize;
            for a in &shapes {
                for s in &shapes {
                    hits += usize::from(a.intersects(s));
                }
            }
            black_box(hits)
        });
    });
    let path = Shape::from(star());
    group.bench_function("path_vs_shapes", |b| {
        b.iter(|| {
            black_box(shapes.iter().filter(|s| path.intersects(s)).count())
        });
    });
    group.finish();
}

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");
    let shapes = gen_shapes(200);
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    let points: Vec<Point2> = (0..64).map(|_| rng.point()).collect();
    group.bench_function("closest_point", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for s in &shapes {
                for p in &points {
                    total += s.distance(*p);
                }
            }
            black_box(total)
        });
    });
    let path = star();
    group.bench_function("path_contains", |b| {
        b.iter(|| black_box(points.iter().filter(|p| path.contains(**p)).count()));
    });
    group.finish();
}

criterion_group!(benches, bench_intersects, bench_distance);
criterion_main!(benches);
