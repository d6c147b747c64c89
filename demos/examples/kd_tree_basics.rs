// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! K-d tree basics.
//!
//! Build a tree over a handful of 3D points, inspect the root, and walk the
//! partition level by level.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example kd_tree_basics`

use tracing_subscriber::EnvFilter;
use understory_kd_tree::{BuildError, KdTree, Point};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let points = [
        Point::new([2.0, 3.0, 1.0]),
        Point::new([5.0, 4.0, 0.5]),
        Point::new([9.0, 6.0, 2.0]),
        Point::new([4.0, 7.0, -1.0]),
        Point::new([8.0, 1.0, 3.0]),
        Point::new([7.0, 2.0, 0.0]),
        Point::new([1.0, 9.0, 4.0]),
    ];

    let tree = KdTree::build(&points, 3).expect("3 axes are valid for 3D points");
    tracing::info!(depth = tree.depth(), nodes = tree.len(), "tree ready");
    println!("{tree:?}");

    let root = tree.root().expect("non-empty input has a root");
    println!(
        "root splits axis {} at {:?}, bounds {:?}",
        root.axis(),
        root.split_point().coords,
        root.bbox()
    );

    for (level, nodes) in tree.levels() {
        println!("level {level}: {} node(s)", nodes.len());
        for node in nodes {
            println!(
                "  axis {} split {:?} holds {} point(s)",
                node.axis(),
                node.split_point().coords,
                node.len()
            );
        }
    }

    // Past the deepest leaf there is simply nothing to draw.
    assert!(tree.nodes_at_level(tree.depth() + 1).is_empty());

    match KdTree::build(&points, 0) {
        Err(BuildError::InvalidDimensions { dimensions, max }) => {
            println!("rejected dimensions={dimensions} (max {max})");
        }
        other => panic!("expected an error, got {other:?}"),
    }
}
