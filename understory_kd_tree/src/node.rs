// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree nodes and their handles.

use crate::types::{Aabb, Point};

/// Identifier for a node in a [`KdTree`](crate::KdTree).
///
/// Nodes are stored in pre-order, so the identifier is also the node's position
/// in [`KdTree::nodes`](crate::KdTree::nodes). The root is always at position `0`.
/// An identifier is only meaningful for the tree that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const ROOT: Self = Self(0);

    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx)
    }

    /// Position of the node in pre-order.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A partition record of a k-d tree.
///
/// Each node splits its input points on [`axis`](Self::axis) at the median,
/// keeps the median as its [`split_point`](Self::split_point), and hands the
/// points before and after it to the left and right children.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<T, const N: usize> {
    pub(crate) split_point: Point<T, N>,
    pub(crate) bbox: Aabb<T, N>,
    pub(crate) axis: usize,
    pub(crate) level: usize,
    pub(crate) len: usize,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T, const N: usize> Node<T, N> {
    /// The median point this node splits on.
    #[inline]
    pub fn split_point(&self) -> &Point<T, N> {
        &self.split_point
    }

    /// Exact bounds of every point in this node's subtree.
    #[inline]
    pub fn bbox(&self) -> &Aabb<T, N> {
        &self.bbox
    }

    /// Split axis, `level % dimensions`.
    #[inline]
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// Distance from the root. The root is level `0`.
    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Number of points in this node's subtree, including its own split point.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the subtree holds no points. Pairs with [`len`](Self::len); a built
    /// node always holds at least its split point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Left child, holding points at or below the split on [`axis`](Self::axis).
    #[inline]
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Right child, holding points at or above the split on [`axis`](Self::axis).
    #[inline]
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Whether the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
