// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised before a traversal starts.

use understory_quadtree::QuadtreeError;

/// Invalid traversal input.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ReachError {
    /// The hop radius was negative, NaN, or infinite.
    #[error("hop radius must be finite and non-negative, got {0}")]
    InvalidRadius(f64),
    /// Building the index failed.
    #[error(transparent)]
    Index(#[from] QuadtreeError),
}
