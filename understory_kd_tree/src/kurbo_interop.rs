// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions to and from Kurbo 2D geometry, for drawing partitions.
//!
//! A 3D tree can be drawn from any side by projecting its boxes with
//! [`Aabb::project`] first.

use kurbo::Rect;

use crate::types::{Aabb, Point2};

impl From<kurbo::Point> for Point2<f64> {
    #[inline]
    fn from(p: kurbo::Point) -> Self {
        Self::new([p.x, p.y])
    }
}

impl From<Point2<f64>> for kurbo::Point {
    #[inline]
    fn from(p: Point2<f64>) -> Self {
        Self::new(p.coords[0], p.coords[1])
    }
}

impl From<Aabb<f64, 2>> for Rect {
    #[inline]
    fn from(b: Aabb<f64, 2>) -> Self {
        Self::new(b.min[0], b.min[1], b.max[0], b.max[1])
    }
}

impl From<Rect> for Aabb<f64, 2> {
    /// Normalizes the rectangle so that `min <= max` on both axes.
    #[inline]
    fn from(r: Rect) -> Self {
        let r = r.abs();
        Self::new([r.x0, r.y0], [r.x1, r.y1])
    }
}
