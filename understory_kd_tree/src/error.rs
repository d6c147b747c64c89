// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by tree construction.

/// Error returned by [`KdTree::build`](crate::KdTree::build).
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    /// The requested dimensionality is zero or exceeds the coordinates a point carries.
    #[error("invalid dimensions {dimensions}: expected a value in 1..={max}")]
    InvalidDimensions {
        /// Requested number of split axes.
        dimensions: usize,
        /// Coordinates per point.
        max: usize,
    },
}
