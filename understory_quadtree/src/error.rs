// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised when constructing regions or quadtrees.

/// Invalid geometry or configuration passed to a constructor.
///
/// Inserting a point outside the root region is *not* an error; see
/// [`Quadtree::insert`](crate::Quadtree::insert).
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum QuadtreeError {
    /// A region was given a negative half-extent on at least one axis.
    #[error("region half-extent must be non-negative, got ({x}, {y})")]
    NegativeExtent {
        /// Requested half-extent along x.
        x: f64,
        /// Requested half-extent along y.
        y: f64,
    },
    /// A region was given a NaN or infinite coordinate.
    #[error("region coordinates must be finite")]
    NonFinite,
    /// A quadtree was configured with a leaf capacity of zero.
    #[error("quadtree leaf capacity must be at least 1")]
    ZeroCapacity,
    /// A quadtree was configured with a depth limit past
    /// [`MAX_DEPTH_LIMIT`](crate::config::MAX_DEPTH_LIMIT).
    #[error("quadtree max_depth {max_depth} exceeds the limit of {limit}")]
    DepthTooLarge {
        /// Requested depth limit.
        max_depth: usize,
        /// Largest accepted depth limit.
        limit: usize,
    },
}
