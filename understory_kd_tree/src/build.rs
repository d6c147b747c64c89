// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Median-split construction.
//!
//! Nodes are written straight into a pre-order arena. A subset of `n` points
//! produces exactly `n` nodes, so the subtree rooted at slot `i` occupies
//! `i..i + n`: the left child sits at `i + 1` and the right child right after
//! the left subtree. Every recursive call therefore owns disjoint `&mut` slices
//! of both the working points and the arena, which is what lets the `parallel`
//! feature hand siblings to `rayon::join`.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::node::{Node, NodeId};
use crate::types::{Aabb, Point, Scalar};

/// Construction parameters for [`KdTree::build_with`](crate::KdTree::build_with).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    /// Number of axes to cycle through when splitting, `1..=N`.
    pub dimensions: usize,
    /// Subsets with at least this many points build their two subtrees in
    /// parallel. Ignored unless the `parallel` feature is enabled.
    pub parallel_threshold: usize,
}

impl BuildOptions {
    /// Default for [`parallel_threshold`](Self::parallel_threshold).
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

    /// Options splitting on `dimensions` axes.
    pub const fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Set the subset size at which subtrees are built in parallel.
    #[must_use]
    pub const fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Order on `axis`, ties broken by the following axes (wrapping), so that the
/// partition does not depend on input order.
fn cmp_on_axis<T: Scalar, const N: usize>(
    a: &Point<T, N>,
    b: &Point<T, N>,
    axis: usize,
) -> Ordering {
    (0..N)
        .map(|i| (axis + i) % N)
        .map(|i| {
            a.coords[i]
                .partial_cmp(&b.coords[i])
                .unwrap_or(Ordering::Equal)
        })
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Build the arena for `points`. Returns the nodes in pre-order and the tree depth.
///
/// `opts.dimensions` must already be validated.
pub(crate) fn build<T: Scalar, const N: usize>(
    opts: &BuildOptions,
    points: &[Point<T, N>],
) -> (Vec<Node<T, N>>, usize) {
    if points.is_empty() {
        return (Vec::new(), 0);
    }
    debug_assert!(
        points.iter().all(|p| !p.has_nan()),
        "k-d tree coordinates must not be NaN"
    );

    let mut work = points.to_vec();
    let mut slots: Vec<Option<Node<T, N>>> = Vec::with_capacity(points.len());
    slots.resize_with(points.len(), || None);

    let depth = make_node(opts, &mut work, &mut slots, 0, 0);

    let arena: Vec<_> = slots.into_iter().flatten().collect();
    debug_assert_eq!(arena.len(), points.len(), "every arena slot is filled");
    (arena, depth)
}

/// Partition `points` into the subtree whose root lives at `slots[0]` (global slot `base`).
/// Returns the deepest level reached.
fn make_node<T: Scalar, const N: usize>(
    opts: &BuildOptions,
    points: &mut [Point<T, N>],
    slots: &mut [Option<Node<T, N>>],
    base: usize,
    level: usize,
) -> usize {
    debug_assert_eq!(points.len(), slots.len(), "one slot per point");
    let Some((slot, child_slots)) = slots.split_first_mut() else {
        return level;
    };

    let len = points.len();
    let axis = level % opts.dimensions;
    let median = len / 2;
    points.select_nth_unstable_by(median, |a, b| cmp_on_axis(a, b, axis));
    let split_point = points[median];
    let bbox = points
        .iter()
        .fold(Aabb::from_point(&split_point), |acc, p| acc.union_point(p));

    let (left_points, rest) = points.split_at_mut(median);
    let right_points = &mut rest[1..];
    let (left_slots, right_slots) = child_slots.split_at_mut(median);

    let left = (!left_points.is_empty()).then(|| NodeId::new(base + 1));
    let right = (!right_points.is_empty()).then(|| NodeId::new(base + 1 + median));

    let mut build_left = move || {
        if left_points.is_empty() {
            level
        } else {
            make_node(opts, left_points, left_slots, base + 1, level + 1)
        }
    };
    let mut build_right = move || {
        if right_points.is_empty() {
            level
        } else {
            make_node(opts, right_points, right_slots, base + 1 + median, level + 1)
        }
    };

    #[cfg(feature = "parallel")]
    let (level_left, level_right) = if len >= opts.parallel_threshold {
        rayon::join(build_left, build_right)
    } else {
        (build_left(), build_right())
    };
    #[cfg(not(feature = "parallel"))]
    let (level_left, level_right) = (build_left(), build_right());

    *slot = Some(Node {
        split_point,
        bbox,
        axis,
        level,
        len,
        left,
        right,
    });

    level_left.max(level_right)
}
