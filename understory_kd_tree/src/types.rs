// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;
use core::fmt::Debug;

/// Numeric scalar abstraction for point coordinates.
///
/// This trait provides the minimal set of operations needed to build bounding
/// boxes and measure them, and an associated widened accumulator type for
/// volumes (e.g., f32→f64, i64→i128).
pub trait Scalar: Copy + PartialOrd + Debug + Send + Sync {
    /// Widened accumulator type suitable for volume computations.
    type Acc: Copy + PartialOrd + core::ops::Mul<Output = Self::Acc> + Debug;

    /// Subtract two scalar values: a - b.
    fn sub(a: Self, b: Self) -> Self;

    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// Midpoint between a and b.
    fn mid(a: Self, b: Self) -> Self;

    /// Convert a scalar to the accumulator type.
    fn widen(v: Self) -> Self::Acc;

    /// Convert a `usize` to the accumulator type.
    fn acc_from_usize(n: usize) -> Self::Acc;

    /// Whether the value is NaN. Always `false` for integers.
    fn is_nan(self) -> bool;
}

impl Scalar for f32 {
    type Acc = f64;

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline(always)]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        0.5 * (a + b)
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v as f64
    }

    #[inline]
    fn acc_from_usize(n: usize) -> Self::Acc {
        n as f64
    }

    #[inline]
    fn is_nan(self) -> bool {
        self.is_nan()
    }
}

impl Scalar for f64 {
    type Acc = Self;

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline(always)]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        0.5 * (a + b)
    }

    #[inline(always)]
    fn widen(v: Self) -> Self::Acc {
        v
    }

    #[inline]
    fn acc_from_usize(n: usize) -> Self::Acc {
        n as Self::Acc
    }

    #[inline]
    fn is_nan(self) -> bool {
        self.is_nan()
    }
}

impl Scalar for i64 {
    type Acc = i128;

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a.saturating_sub(b)
    }

    #[inline(always)]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        // Average without overflow: (a & b) + ((a ^ b) >> 1)
        (a & b) + ((a ^ b) >> 1)
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v as i128
    }

    #[inline]
    fn acc_from_usize(n: usize) -> Self::Acc {
        n as i128
    }

    #[inline(always)]
    fn is_nan(self) -> bool {
        false
    }
}

/// Helper alias for the widened accumulator type `Scalar::Acc` associated with a `T: Scalar`.
pub type ScalarAcc<T> = <T as Scalar>::Acc;

/// A point in `N`-dimensional space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point<T, const N: usize> {
    /// Coordinates, one per axis.
    pub coords: [T; N],
}

/// A point in 2D.
pub type Point2<T> = Point<T, 2>;

/// A point in 3D.
pub type Point3<T> = Point<T, 3>;

impl<T, const N: usize> Point<T, N> {
    /// Create a point from its coordinates.
    #[inline(always)]
    pub const fn new(coords: [T; N]) -> Self {
        Self { coords }
    }
}

impl<T: Copy, const N: usize> Point<T, N> {
    /// The coordinate on `axis`.
    ///
    /// Panics if `axis >= N`.
    #[inline]
    pub fn coord(&self, axis: usize) -> T {
        self.coords[axis]
    }
}

impl<T: Scalar, const N: usize> Point<T, N> {
    pub(crate) fn has_nan(&self) -> bool {
        self.coords.iter().any(|c| c.is_nan())
    }
}

impl<T, const N: usize> From<[T; N]> for Point<T, N> {
    #[inline]
    fn from(coords: [T; N]) -> Self {
        Self { coords }
    }
}

/// Axis-aligned bounding box in `N` dimensions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Aabb<T, const N: usize> {
    /// Minimum corner.
    pub min: [T; N],
    /// Maximum corner.
    pub max: [T; N],
}

impl<T, const N: usize> Aabb<T, N> {
    /// Create a new AABB from min/max corners.
    #[inline(always)]
    pub const fn new(min: [T; N], max: [T; N]) -> Self {
        Self { min, max }
    }
}

impl<T: Copy + PartialOrd, const N: usize> Aabb<T, N> {
    /// A degenerate AABB enclosing exactly one point.
    #[inline]
    pub fn from_point(p: &Point<T, N>) -> Self {
        Self {
            min: p.coords,
            max: p.coords,
        }
    }

    /// The smallest AABB enclosing every point, or `None` if `points` is empty.
    ///
    /// ```
    /// use understory_kd_tree::{Aabb, Point};
    ///
    /// let pts = [Point::new([1.0, 4.0]), Point::new([3.0, -2.0])];
    /// let bbox = Aabb::from_points(&pts).unwrap();
    /// assert_eq!(bbox, Aabb::new([1.0, -2.0], [3.0, 4.0]));
    /// assert!(Aabb::<f64, 2>::from_points(&[]).is_none());
    /// ```
    pub fn from_points(points: &[Point<T, N>]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(
            rest.iter()
                .fold(Self::from_point(first), |acc, p| acc.union_point(p)),
        )
    }

    /// Whether this AABB contains the point. Boundaries are inclusive.
    #[inline]
    pub fn contains_point(&self, p: &Point<T, N>) -> bool {
        (0..N).all(|i| self.min[i] <= p.coords[i] && p.coords[i] <= self.max[i])
    }

    /// Determines whether this AABB overlaps with another in any way.
    ///
    /// Boxes that only share a face are considered to overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        (0..N).all(|i| self.min[i] <= other.max[i] && self.max[i] >= other.min[i])
    }

    /// The smallest AABB enclosing two AABBs.
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        let mut out = *self;
        for i in 0..N {
            out.min[i] = min_t(out.min[i], other.min[i]);
            out.max[i] = max_t(out.max[i], other.max[i]);
        }
        out
    }

    /// The smallest AABB enclosing this one and `p`.
    #[inline]
    pub fn union_point(&self, p: &Point<T, N>) -> Self {
        self.union(&Self::from_point(p))
    }

    /// Project onto the plane spanned by axes `a` and `b`.
    ///
    /// Useful to draw a 3D partition from one side. Panics if either axis is out of range.
    #[inline]
    pub fn project(&self, a: usize, b: usize) -> Aabb<T, 2> {
        Aabb {
            min: [self.min[a], self.min[b]],
            max: [self.max[a], self.max[b]],
        }
    }
}

impl<T: Scalar, const N: usize> Aabb<T, N> {
    /// Length of the box along `axis`, clamped at zero for inverted boxes.
    #[inline]
    pub fn extent(&self, axis: usize) -> T {
        max_t(T::sub(self.max[axis], self.min[axis]), T::zero())
    }

    /// Center of the box.
    #[inline]
    pub fn center(&self) -> Point<T, N> {
        let mut coords = self.min;
        for (c, hi) in coords.iter_mut().zip(self.max) {
            *c = T::mid(*c, hi);
        }
        Point { coords }
    }

    /// Compute the N-dimensional volume using the scalar's widened accumulator type.
    #[inline]
    pub fn volume(&self) -> ScalarAcc<T> {
        (0..N).fold(T::acc_from_usize(1), |acc, i| acc * T::widen(self.extent(i)))
    }

    /// Return true if the box has zero extent on some axis (e.g. a single point).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        (0..N).any(|i| self.max[i] <= self.min[i])
    }
}

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}
