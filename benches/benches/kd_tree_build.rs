// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_kd_tree::{BuildOptions, KdTree, Point, Point3};

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

fn gen_uniform_points(count: usize, extent: f64) -> Vec<Point3<f64>> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            Point::new([
                rng.next_f64() * extent,
                rng.next_f64() * extent,
                rng.next_f64() * extent,
            ])
        })
        .collect()
}

fn gen_uniform_points_f32(count: usize, extent: f32) -> Vec<Point3<f32>> {
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    (0..count)
        .map(|_| {
            Point::new([
                rng.next_f64() as f32 * extent,
                rng.next_f64() as f32 * extent,
                rng.next_f64() as f32 * extent,
            ])
        })
        .collect()
}

fn gen_lattice_points_i64(n: usize) -> Vec<Point3<i64>> {
    let mut out = Vec::with_capacity(n * n * n);
    for z in 0..n {
        for y in 0..n {
            for x in 0..n {
                out.push(Point::new([x as i64, y as i64, z as i64]));
            }
        }
    }
    out
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point3<f64>> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push([
            rng.next_f64() * 2000.0,
            rng.next_f64() * 2000.0,
            rng.next_f64() * 2000.0,
        ]);
    }
    for c in centers {
        for _ in 0..per_cluster {
            out.push(Point::new(
                c.map(|v| v + (rng.next_f64() - 0.5) * spread),
            ));
        }
    }
    out
}

fn bench_build_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_f64");
    for &n in &[1_000usize, 10_000, 100_000] {
        let points = gen_uniform_points(n, 1000.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("uniform_n{}", n), |b| {
            b.iter(|| {
                let tree = KdTree::build(&points, 3).unwrap();
                black_box(tree.depth());
            })
        });
    }
    let points = gen_clustered_points(16, 4096, 40.0);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("clustered", |b| {
        b.iter(|| {
            let tree = KdTree::build(&points, 3).unwrap();
            black_box(tree.depth());
        })
    });
    group.finish();
}

fn bench_build_f32(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_f32");
    for &n in &[1_000usize, 10_000, 100_000] {
        let points = gen_uniform_points_f32(n, 1000.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("uniform_n{}", n), |b| {
            b.iter(|| {
                let tree = KdTree::build(&points, 3).unwrap();
                black_box(tree.depth());
            })
        });
    }
    group.finish();
}

fn bench_build_i64(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_i64");
    for &n in &[16usize, 32] {
        // Lattices tie on every axis, exercising the tie-break path.
        let points = gen_lattice_points_i64(n);
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(format!("lattice_n{}", n), |b| {
            b.iter(|| {
                let tree = KdTree::build(&points, 3).unwrap();
                black_box(tree.depth());
            })
        });
    }
    group.finish();
}

fn bench_build_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_parallel_f64");
    let points = gen_uniform_points(200_000, 1000.0);
    group.throughput(Throughput::Elements(points.len() as u64));
    for &threshold in &[usize::MAX, 65_536, 4_096] {
        let opts = BuildOptions::new(3).with_parallel_threshold(threshold);
        group.bench_function(format!("threshold_{}", threshold), |b| {
            b.iter(|| {
                let tree = KdTree::build_with(&points, opts).unwrap();
                black_box(tree.depth());
            })
        });
    }
    group.finish();
}

fn bench_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("nodes_at_level_f64");
    let points = gen_uniform_points(100_000, 1000.0);
    let tree = KdTree::build(&points, 3).unwrap();
    for &level in &[0usize, 4, 8, 12] {
        group.bench_function(format!("level_{}", level), |b| {
            b.iter(|| black_box(tree.nodes_at_level(black_box(level)).len()))
        });
    }
    group.bench_function("all_levels", |b| {
        b.iter(|| {
            let total: usize = tree.levels().map(|(_, nodes)| nodes.len()).sum();
            black_box(total);
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build_f64,
    bench_build_f32,
    bench_build_i64,
    bench_build_parallel,
    bench_levels,
);
criterion_main!(benches);
