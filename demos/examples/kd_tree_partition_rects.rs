// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partition rectangles per level.
//!
//! Build a tree over a 3D point cloud, project each level's boxes onto the
//! x/y plane, and print them as Kurbo rectangles the way drawing code would
//! consume them. Split points become Kurbo points for markers.
//!
//! Run:
//! - `cargo run -p understory_demos --example kd_tree_partition_rects`

use kurbo::{Point as KPoint, Rect};
use tracing_subscriber::EnvFilter;
use understory_kd_tree::{KdTree, Point, Point3};

fn cloud(count: usize) -> Vec<Point3<f64>> {
    // Golden-angle spiral, lifted along z.
    let golden = std::f64::consts::PI * (3.0 - 5.0_f64.sqrt());
    (0..count)
        .map(|i| {
            let t = i as f64;
            let r = 10.0 * t.sqrt();
            Point::new([r * (golden * t).cos(), r * (golden * t).sin(), t * 0.1])
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let points = cloud(64);
    let tree = KdTree::build(&points, 3).expect("3 axes are valid for 3D points");

    for (level, nodes) in tree.levels().take(4) {
        let rects: Vec<Rect> = nodes.iter().map(|n| n.bbox().project(0, 1).into()).collect();
        let markers: Vec<KPoint> = nodes
            .iter()
            .map(|n| {
                let p = n.split_point();
                Point::new([p.coord(0), p.coord(1)]).into()
            })
            .collect();
        let area: f64 = rects.iter().map(Rect::area).sum();
        println!(
            "level {level}: {} rect(s), total area {area:.1}",
            rects.len()
        );
        for (rect, marker) in rects.iter().zip(&markers) {
            println!(
                "  [{:>7.2}, {:>7.2}] .. [{:>7.2}, {:>7.2}]  split at ({:.2}, {:.2})",
                rect.x0, rect.y0, rect.x1, rect.y1, marker.x, marker.y
            );
        }
    }
}
