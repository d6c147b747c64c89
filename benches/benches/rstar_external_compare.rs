// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_kd_tree::{KdTree, Point, Point3};

use rstar::RTree;

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point3<f64>> {
    let mut out = Vec::with_capacity(n * n * n);
    for z in 0..n {
        for y in 0..n {
            for x in 0..n {
                // Jitter off the lattice so few coordinates tie.
                let j = ((x * 31 + y * 17 + z * 7) % 13) as f64 * 0.01;
                out.push(Point::new([
                    x as f64 * cell + j,
                    y as f64 * cell - j,
                    z as f64 * cell + 2.0 * j,
                ]));
            }
        }
    }
    out
}

fn to_rstar_points(v: &[Point3<f64>]) -> Vec<[f64; 3]> {
    v.iter().map(|p| p.coords).collect()
}

fn bench_bulk_build_compare_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_build_compare_f64");
    for &n in &[16usize, 32, 48] {
        let points = gen_grid_points(n, 10.0);
        group.throughput(Throughput::Elements(points.len() as u64));

        group.bench_function(format!("understory_kd_tree_n{}", n), |b| {
            b.iter(|| {
                let tree = KdTree::build(&points, 3).unwrap();
                black_box(tree.nodes_at_level(tree.depth()).len());
            })
        });

        group.bench_function(format!("rstar_bulk_load_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |pts| {
                    let tree = RTree::bulk_load(pts);
                    black_box(tree.size());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_bulk_build_compare_f64);
criterion_main!(benches);
