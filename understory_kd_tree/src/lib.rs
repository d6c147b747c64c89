// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_kd_tree --heading-base-level=0

//! Understory KD Tree: a static, median-split k-d tree.
//!
//! Understory KD Tree partitions a fixed set of points in `N`-dimensional space
//! by alternating, axis-aligned median splits.
//!
//! - Build once from a slice of points with [`KdTree::build`]; the tree never changes afterwards.
//! - Every [`Node`] keeps its split axis, level, median [`Point`] and the exact [`Aabb`] of its subtree.
//! - Query the nodes at any recursion depth with [`KdTree::nodes_at_level`], e.g. to draw how the
//!   space was partitioned step by step.
//!
//! It is generic over the scalar type `T` (`f32`, `f64`, `i64`) and the coordinate count `N`.
//! A tree may split on fewer axes than its points carry: a tree over 3D points built with
//! `dimensions = 2` only cycles through x and y, while its boxes still bound z.
//!
//! Nodes live in a pre-order arena owned by the tree and refer to their children by
//! [`NodeId`]. A built tree is immutable and can be shared between threads for reading.
//!
//! ## Features
//!
//! - `std` *(default)*: enables timing in diagnostics and forwards `std` to dependencies.
//! - `libm`: forwards `libm` to Kurbo for `no_std` builds with the `kurbo` feature.
//! - `kurbo`: conversions between 2D points/boxes and [`kurbo`] types for drawing code.
//! - `parallel`: builds large subtrees in parallel with `rayon`; see [`BuildOptions`].
//!
//! ## Diagnostics
//!
//! Construction runs inside a `kd_tree_build` [`tracing`] span and reports the depth, node
//! count and (with `std`) the elapsed time at `DEBUG`. Dropping a tree reports at `TRACE`.
//!
//! # Example
//!
//! ```rust
//! use understory_kd_tree::{KdTree, Point};
//!
//! let points = [
//!     Point::new([2.0, 3.0, 1.0]),
//!     Point::new([5.0, 4.0, 0.5]),
//!     Point::new([9.0, 6.0, 2.0]),
//!     Point::new([4.0, 7.0, -1.0]),
//!     Point::new([8.0, 1.0, 3.0]),
//! ];
//! let tree = KdTree::build(&points, 3).unwrap();
//!
//! // The root splits on x at the median.
//! let root = tree.root().unwrap();
//! assert_eq!(root.axis(), 0);
//! assert_eq!(root.split_point().coord(0), 5.0);
//!
//! // Walk the partition level by level.
//! for (level, nodes) in tree.levels() {
//!     for node in nodes {
//!         assert_eq!(node.level(), level);
//!         assert!(node.bbox().contains_point(node.split_point()));
//!     }
//! }
//! ```
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates. Debug builds assert.

#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

mod build;
mod error;
#[cfg(feature = "kurbo")]
mod kurbo_interop;
mod node;
mod tree;
mod types;
mod util;

pub use build::BuildOptions;
pub use error::BuildError;
pub use node::{Node, NodeId};
pub use tree::KdTree;
pub use types::{Aabb, Point, Point2, Point3, Scalar, ScalarAcc};
