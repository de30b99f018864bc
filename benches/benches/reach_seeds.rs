// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_quadtree::Region;
use understory_reach::{Metric, ReachConfig, Site, build_index, find_connected_regions_with};

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

/// Scatter sites over an 800×600 field with roughly one seed in ten.
fn gen_sites(count: usize) -> Vec<Site> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    (0..count)
        .map(|_| {
            let p = Point::new(10.0 + rng.next_f64() * 780.0, 10.0 + rng.next_f64() * 590.0);
            Site::with_seed(p, rng.next_u64() % 10 == 1)
        })
        .collect()
}

fn domain() -> Region {
    Region::from_corners(Point::ZERO, Point::new(800.0, 600.0)).unwrap()
}

fn bench_build_and_reach(c: &mut Criterion) {
    let mut group = c.benchmark_group("reach_build_and_flood");
    for &count in &[500usize, 4_000] {
        let sites = gen_sites(count);
        group.throughput(Throughput::Elements(count as u64));
        for &radius in &[10.0_f64, 20.0] {
            group.bench_function(format!("n{}_r{}", count, radius), |b| {
                b.iter(|| {
                    let index = build_index(&sites, domain());
                    let reach =
                        find_connected_regions_with(&index, &sites, ReachConfig::new(radius))
                            .unwrap();
                    black_box(reach.visited_count())
                })
            });
        }
    }
    group.finish();
}

fn bench_metric(c: &mut Criterion) {
    let mut group = c.benchmark_group("reach_metric");
    let sites = gen_sites(4_000);
    let index = build_index(&sites, domain());
    for metric in [Metric::Chebyshev, Metric::Euclidean] {
        group.bench_function(format!("{:?}", metric), |b| {
            b.iter_batched(
                || ReachConfig::new(20.0).metric(metric),
                |config| {
                    let reach = find_connected_regions_with(&index, &sites, config).unwrap();
                    black_box(reach.hops().len())
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_and_reach, bench_metric);
criterion_main!(benches);
