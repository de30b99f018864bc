// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_quadtree::{Quadtree, QuadtreeConfig, Region};

use rstar::{AABB, RTree};

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point::new(x as f64 * cell + 0.5, y as f64 * cell + 0.5));
        }
    }
    out
}

fn bench_point_window_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_window_compare");
    let domain = Region::from_corners(Point::ZERO, Point::new(1280.0, 1280.0)).unwrap();
    for &n in &[64usize, 128] {
        let points = gen_grid_points(n, 10.0);
        let window =
            Region::from_corners(Point::new(100.0, 100.0), Point::new(500.0, 500.0)).unwrap();
        group.throughput(Throughput::Elements((n * n) as u64));

        for &capacity in &[1usize, 8] {
            group.bench_function(format!("understory_build_query_n{}_cap{}", n, capacity), |b| {
                b.iter_batched(
                    || {
                        Quadtree::<u32>::new(domain, QuadtreeConfig::with_capacity(capacity))
                            .unwrap()
                    },
                    |mut qt| {
                        for (i, p) in points.iter().copied().enumerate() {
                            let _ = qt.insert(p, i as u32);
                        }
                        let hits: usize = qt.query_range(&window).count();
                        black_box(hits);
                    },
                    BatchSize::SmallInput,
                )
            });
        }

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || points.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
                |coords| {
                    let tree = RTree::bulk_load(coords);
                    let aabb = AABB::from_corners(
                        [window.min().x, window.min().y],
                        [window.max().x, window.max().y],
                    );
                    let hits: usize = tree.locate_in_envelope(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_point_window_compare);
criterion_main!(benches);
