// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_quadtree::{Quadtree, QuadtreeConfig, Region};

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

fn domain() -> Region {
    Region::from_corners(Point::ZERO, Point::new(2000.0, 2000.0)).unwrap()
}

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point::new(x as f64 * cell + 0.5, y as f64 * cell + 0.5));
        }
    }
    out
}

fn gen_random_points(count: usize, max_w: f64, max_h: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * max_w, rng.next_f64() * max_h))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((
            spread + rng.next_f64() * (2000.0 - 2.0 * spread),
            spread + rng.next_f64() * (2000.0 - 2.0 * spread),
        ));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

fn build(points: &[Point], capacity: usize) -> Quadtree<u32> {
    let mut qt = Quadtree::new(domain(), QuadtreeConfig::with_capacity(capacity)).unwrap();
    for (i, p) in points.iter().copied().enumerate() {
        let _ = qt.insert(p, i as u32);
    }
    qt
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_insert");
    let points = gen_random_points(16_384, 2000.0, 2000.0);
    group.throughput(Throughput::Elements(points.len() as u64));
    for &capacity in &[1usize, 4, 16] {
        group.bench_function(format!("random_cap{}", capacity), |b| {
            b.iter_batched(
                || Quadtree::<u32>::new(domain(), QuadtreeConfig::with_capacity(capacity)).unwrap(),
                |mut qt| {
                    for (i, p) in points.iter().copied().enumerate() {
                        let _ = qt.insert(p, i as u32);
                    }
                    black_box(qt.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_query_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_query_grid");
    for &n in &[64usize, 128] {
        let points = gen_grid_points(n, 10.0);
        for &capacity in &[1usize, 8] {
            let qt = build(&points, capacity);
            group.bench_function(format!("window_n{}_cap{}", n, capacity), |b| {
                b.iter(|| {
                    let window = Region::from_corners(
                        Point::new(100.0, 100.0),
                        Point::new(500.0, 500.0),
                    )
                    .unwrap();
                    black_box(qt.query_range(&window).count())
                })
            });
        }
    }
    group.finish();
}

fn bench_query_neighbourhoods(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_query_neighbourhoods");
    let points = gen_clustered_points(16, 256, 128.0);
    group.throughput(Throughput::Elements(points.len() as u64));
    for &capacity in &[1usize, 4, 16] {
        let qt = build(&points, capacity);
        group.bench_function(format!("square20_cap{}", capacity), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for p in &points {
                    let range = Region::square(*p, 20.0).unwrap();
                    qt.query_range_with(&range, |_, _| total += 1);
                }
                black_box(total)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_query_grid,
    bench_query_neighbourhoods,
);
criterion_main!(benches);
