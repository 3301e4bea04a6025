// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sylva_geom::{AlignedBox3, Point2, Point3, Rectangle};
use sylva_tree::{BinaryZone, DataPolicy, OctZone, QuadZone, SpatialConfig, SpatialTree};

const WORLD: f64 = 2000.0;

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
}

fn gen_grid_rects(n: usize, cell: f64) -> Vec<Rectangle> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Rectangle::new(x0, y0, x0 + cell, y0 + cell));
        }
    }
    out
}

fn gen_random_rects(count: usize, size: f64) -> Vec<Rectangle> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let x0 = rng.next_f64() * (WORLD - size);
        let y0 = rng.next_f64() * (WORLD - size);
        out.push(Rectangle::new(x0, y0, x0 + size, y0 + size));
    }
    out
}

/// Rectangles that all cross the root's split lines and land in icosep buckets.
fn gen_straddling_rects(count: usize) -> Vec<Rectangle> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let mid = WORLD / 2.0;
    for _ in 0..count {
        let r = 1.0 + rng.next_f64() * 40.0;
        out.push(Rectangle::new(mid - r, mid - r, mid + r, mid + r));
    }
    out
}

fn gen_random_boxes(count: usize, size: f64) -> Vec<AlignedBox3> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    for _ in 0..count {
        let p = Point3::new(
            rng.next_f64() * (WORLD - size),
            rng.next_f64() * (WORLD - size),
            rng.next_f64() * (WORLD - size),
        );
        out.push(AlignedBox3::from_corners(
            p,
            Point3::new(p.x + size, p.y + size, p.z + size),
        ));
    }
    out
}

fn world() -> Rectangle {
    Rectangle::new(0.0, 0.0, WORLD, WORLD)
}

fn bench_quad_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("quad_insert");
    for &n in &[32usize, 64, 128] {
        let rects = gen_grid_rects(n, WORLD / n as f64);
        group.throughput(Throughput::Elements((n * n) as u64));
        for policy in [DataPolicy::Array, DataPolicy::Linked] {
            let config = SpatialConfig {
                data_policy: policy,
                ..SpatialConfig::default()
            };
            group.bench_function(format!("grid_n{}_{:?}", n, policy), |b| {
                b.iter_batched(
                    || SpatialTree::<u32, QuadZone>::new(world(), config),
                    |mut index| {
                        for (i, r) in rects.iter().copied().enumerate() {
                            let _ = index.insert(r, i as u32);
                        }
                        black_box(index.len());
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    let rects = gen_straddling_rects(4096);
    group.bench_function("straddling", |b| {
        b.iter_batched(
            || SpatialTree::<u32, QuadZone>::new(world(), SpatialConfig::default()),
            |mut index| {
                for (i, r) in rects.iter().copied().enumerate() {
                    let _ = index.insert(r, i as u32);
                }
                black_box(index.len());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    let rects = gen_random_rects(8192, 12.0);

    let mut quad = SpatialTree::<u32, QuadZone>::new(world(), SpatialConfig::default());
    let mut binary = SpatialTree::<u32, BinaryZone>::new(world(), SpatialConfig::default());
    for (i, r) in rects.iter().copied().enumerate() {
        let _ = quad.insert(r, i as u32);
        let _ = binary.insert(r, i as u32);
    }
    let window = Rectangle::new(800.0, 800.0, 1200.0, 1200.0);

    group.bench_function("quad_rect", |b| {
        b.iter(|| black_box(quad.query_intersecting(black_box(&window)).count()));
    });
    group.bench_function("binary_rect", |b| {
        b.iter(|| black_box(binary.query_intersecting(black_box(&window)).count()));
    });
    group.bench_function("quad_point", |b| {
        let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
        b.iter(|| {
            let p = Point2::new(rng.next_f64() * WORLD, rng.next_f64() * WORLD);
            black_box(quad.query_point(p).count())
        });
    });
    group.bench_function("brute_force_rect", |b| {
        b.iter(|| {
            black_box(
                rects
                    .iter()
                    .filter(|r| {
                        r.min_x() <= window.max_x()
                            && window.min_x() <= r.max_x()
                            && r.min_y() <= window.max_y()
                            && window.min_y() <= r.max_y()
                    })
                    .count(),
            )
        });
    });
    group.finish();
}

fn bench_oct(c: &mut Criterion) {
    let mut group = c.benchmark_group("oct");
    let boxes = gen_random_boxes(4096, 20.0);
    let space =
        AlignedBox3::from_corners(Point3::new(0.0, 0.0, 0.0), Point3::new(WORLD, WORLD, WORLD));
    group.throughput(Throughput::Elements(boxes.len() as u64));
    group.bench_function("insert", |b| {
        b.iter_batched(
            || SpatialTree::<u32, OctZone>::new(space, SpatialConfig::default()),
            |mut index| {
                for (i, r) in boxes.iter().copied().enumerate() {
                    let _ = index.insert(r, i as u32);
                }
                black_box(index.len());
            },
            BatchSize::SmallInput,
        );
    });
    let mut index = SpatialTree::<u32, OctZone>::new(space, SpatialConfig::default());
    for (i, r) in boxes.iter().copied().enumerate() {
        let _ = index.insert(r, i as u32);
    }
    let window = AlignedBox3::from_corners(
        Point3::new(500.0, 500.0, 500.0),
        Point3::new(900.0, 900.0, 900.0),
    );
    group.bench_function("query", |b| {
        b.iter(|| black_box(index.query_intersecting(black_box(&window)).count()));
    });
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    let rects = gen_random_rects(4096, 12.0);
    group.throughput(Throughput::Elements(rects.len() as u64));
    group.bench_function("drain_quad", |b| {
        b.iter_batched(
            || {
                let mut index =
                    SpatialTree::<u32, QuadZone>::new(world(), SpatialConfig::default());
                for (i, r) in rects.iter().copied().enumerate() {
                    let _ = index.insert(r, i as u32);
                }
                index
            },
            |mut index| {
                for (i, r) in rects.iter().enumerate() {
                    let _ = index.remove(r, &(i as u32));
                }
                black_box(index.is_empty());
            },
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_quad_insert, bench_queries, bench_oct, bench_remove);
criterion_main!(benches);
