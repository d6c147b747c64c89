// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The public `KdTree` API.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::build::{self, BuildOptions};
use crate::error::BuildError;
use crate::node::{Node, NodeId};
use crate::types::{Point, Scalar};
use crate::util::Stopwatch;

/// A median-split k-d tree over a fixed set of points.
///
/// The tree is built once by [`KdTree::build`] and never changes afterwards.
/// It borrows the caller's points for reporting through [`KdTree::points`] and
/// partitions its own copy of them, so the caller's slice is left untouched.
pub struct KdTree<'a, T: Scalar, const N: usize> {
    points: &'a [Point<T, N>],
    arena: Vec<Node<T, N>>,
    dimensions: usize,
    depth: usize,
}

impl<'a, T: Scalar, const N: usize> KdTree<'a, T, N> {
    /// Build a tree splitting on the first `dimensions` axes in turn.
    ///
    /// Fails if `dimensions` is zero or larger than `N`. An empty `points`
    /// slice yields an empty tree with depth `0`.
    ///
    /// ```
    /// use understory_kd_tree::{KdTree, Point};
    ///
    /// let points = [Point::new([1.0]), Point::new([5.0]), Point::new([9.0])];
    /// let tree = KdTree::build(&points, 1).unwrap();
    /// assert_eq!(tree.depth(), 1);
    /// assert_eq!(tree.root().unwrap().split_point(), &Point::new([5.0]));
    /// ```
    pub fn build(points: &'a [Point<T, N>], dimensions: usize) -> Result<Self, BuildError> {
        Self::build_with(points, BuildOptions::new(dimensions))
    }

    /// Build a tree with explicit [`BuildOptions`].
    pub fn build_with(points: &'a [Point<T, N>], opts: BuildOptions) -> Result<Self, BuildError> {
        if opts.dimensions == 0 || opts.dimensions > N {
            return Err(BuildError::InvalidDimensions {
                dimensions: opts.dimensions,
                max: N,
            });
        }

        let _span = tracing::debug_span!(
            "kd_tree_build",
            points = points.len(),
            dimensions = opts.dimensions
        )
        .entered();
        let watch = Stopwatch::start();
        let (arena, depth) = build::build(&opts, points);
        tracing::debug!(
            depth,
            nodes = arena.len(),
            elapsed_us = ?watch.elapsed_us(),
            "built k-d tree"
        );

        Ok(Self {
            points,
            arena,
            dimensions: opts.dimensions,
            depth,
        })
    }

    /// The points the tree was built from, in the caller's order.
    #[inline]
    pub fn points(&self) -> &'a [Point<T, N>] {
        self.points
    }

    /// Number of axes the tree cycles through.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Maximum level reached by any leaf. `0` for empty and single-point trees.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of nodes, which equals the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the tree has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Handle of the root node, if any.
    #[inline]
    pub fn root_id(&self) -> Option<NodeId> {
        (!self.arena.is_empty()).then_some(NodeId::ROOT)
    }

    /// The root node, if any.
    #[inline]
    pub fn root(&self) -> Option<&Node<T, N>> {
        self.arena.first()
    }

    /// Resolve a handle. Returns `None` if it is out of range for this tree.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node<T, N>> {
        self.arena.get(id.index())
    }

    /// Left child of `node`.
    #[inline]
    pub fn left(&self, node: &Node<T, N>) -> Option<&Node<T, N>> {
        node.left().and_then(|id| self.node(id))
    }

    /// Right child of `node`.
    #[inline]
    pub fn right(&self, node: &Node<T, N>) -> Option<&Node<T, N>> {
        node.right().and_then(|id| self.node(id))
    }

    /// Existing children of `node`, left first.
    pub fn children<'t>(&'t self, node: &Node<T, N>) -> impl Iterator<Item = &'t Node<T, N>> {
        self.left(node).into_iter().chain(self.right(node))
    }

    /// All nodes in pre-order (left before right).
    #[inline]
    pub fn nodes(&self) -> &[Node<T, N>] {
        &self.arena
    }

    /// Iterate all nodes in pre-order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Node<T, N>> {
        self.arena.iter()
    }

    /// Nodes of the subtree rooted at `id`, in pre-order, starting with the node itself.
    pub fn subtree(&self, id: NodeId) -> Option<&[Node<T, N>]> {
        let start = id.index();
        let len = self.arena.get(start)?.len();
        self.arena.get(start..start + len)
    }

    /// Every point in the subtree rooted at `id`.
    ///
    /// This is exactly the subset that was partitioned when the node was built.
    pub fn subtree_points(&self, id: NodeId) -> impl Iterator<Item = &Point<T, N>> {
        self.subtree(id)
            .unwrap_or_default()
            .iter()
            .map(Node::split_point)
    }

    /// All nodes whose level is `level`, in pre-order (left before right).
    ///
    /// Level `0` is the root. Levels deeper than [`depth`](Self::depth) yield an
    /// empty result.
    ///
    /// ```
    /// use understory_kd_tree::{KdTree, Point};
    ///
    /// let points: Vec<_> = (0..7_i64).map(|i| Point::new([i, 6 - i, i * i])).collect();
    /// let tree = KdTree::build(&points, 3).unwrap();
    /// assert_eq!(tree.nodes_at_level(0).len(), 1);
    /// assert_eq!(tree.nodes_at_level(1).len(), 2);
    /// assert_eq!(tree.nodes_at_level(2).len(), 4);
    /// assert!(tree.nodes_at_level(3).is_empty());
    /// ```
    pub fn nodes_at_level(&self, level: usize) -> Vec<&Node<T, N>> {
        let mut out = Vec::new();
        if level > self.depth {
            return out;
        }
        let Some(root) = self.root_id() else {
            return out;
        };
        let mut stack = vec![(root, level)];
        while let Some((id, remaining)) = stack.pop() {
            let node = &self.arena[id.index()];
            if remaining == 0 {
                out.push(node);
                continue;
            }
            // Right first so the left subtree is visited first.
            if let Some(right) = node.right() {
                stack.push((right, remaining - 1));
            }
            if let Some(left) = node.left() {
                stack.push((left, remaining - 1));
            }
        }
        out
    }

    /// Nodes grouped by level, from the root down to [`depth`](Self::depth).
    ///
    /// Yields nothing for an empty tree.
    pub fn levels(&self) -> impl Iterator<Item = (usize, Vec<&Node<T, N>>)> {
        let count = if self.is_empty() { 0 } else { self.depth + 1 };
        (0..count).map(move |level| (level, self.nodes_at_level(level)))
    }
}

impl<'t, T: Scalar, const N: usize> IntoIterator for &'t KdTree<'_, T, N> {
    type Item = &'t Node<T, N>;
    type IntoIter = core::slice::Iter<'t, Node<T, N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Scalar, const N: usize> Drop for KdTree<'_, T, N> {
    fn drop(&mut self) {
        let watch = Stopwatch::start();
        let nodes = core::mem::take(&mut self.arena);
        let count = nodes.len();
        drop(nodes);
        tracing::trace!(nodes = count, elapsed_us = ?watch.elapsed_us(), "dropped k-d tree");
    }
}

impl<T: Scalar, const N: usize> Debug for KdTree<'_, T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KdTree")
            .field("points", &self.points.len())
            .field("nodes", &self.arena.len())
            .field("dimensions", &self.dimensions)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}
