// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction parameters for [`Quadtree`](crate::Quadtree).

use crate::error::QuadtreeError;

/// Default number of points a leaf holds before it subdivides.
pub const DEFAULT_CAPACITY: usize = 1;

/// Default subdivision depth limit.
///
/// Sixteen levels split an 800×600 domain into cells of roughly 0.01×0.01.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Largest accepted `max_depth`.
///
/// Insertion recurses once per level. Sixty-four halvings already go below
/// `f64` resolution for any finite domain.
pub const MAX_DEPTH_LIMIT: usize = 64;

/// Quadtree tuning knobs.
///
/// `capacity` is the leaf bucket size: a leaf accepts points until it holds
/// `capacity` of them, and the next insertion subdivides it.
///
/// `max_depth` bounds subdivision. A leaf at that depth never splits and keeps
/// accepting points past `capacity`, so many coincident points cannot drive
/// the tree arbitrarily deep.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct QuadtreeConfig {
    /// Maximum points held by a leaf below `max_depth`. Must be non-zero.
    pub capacity: usize,
    /// Depth (root = 0) at which leaves stop subdividing. At most
    /// [`MAX_DEPTH_LIMIT`].
    pub max_depth: usize,
}

impl QuadtreeConfig {
    /// Configuration with the given leaf capacity and the default depth limit.
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replace the depth limit.
    #[must_use]
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), QuadtreeError> {
        if self.capacity == 0 {
            return Err(QuadtreeError::ZeroCapacity);
        }
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(QuadtreeError::DepthTooLarge {
                max_depth: self.max_depth,
                limit: MAX_DEPTH_LIMIT,
            });
        }
        Ok(())
    }
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}
