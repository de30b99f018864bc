// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traversal-owned visited state.

use fixedbitset::FixedBitSet;

use crate::types::SiteId;

/// Set of sites expanded so far in one traversal run.
///
/// Grows monotonically: sites can be added but never removed, so its size
/// never decreases during a run.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    bits: FixedBitSet,
    count: usize,
}

impl VisitedSet {
    /// An empty set able to hold ids for `len` sites.
    pub fn with_len(len: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(len),
            count: 0,
        }
    }

    /// Whether `id` has been visited. Ids past the end are never visited.
    pub fn contains(&self, id: SiteId) -> bool {
        self.bits.contains(id.index())
    }

    /// Mark `id` visited; returns `true` if it was not visited before.
    pub(crate) fn insert(&mut self, id: SiteId) -> bool {
        debug_assert!(id.index() < self.bits.len(), "site id out of range");
        let was_set = self.bits.put(id.index());
        if !was_set {
            self.count += 1;
        }
        !was_set
    }

    /// Number of visited sites.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether nothing has been visited yet.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of sites the set covers, visited or not.
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Visited ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = SiteId> + '_ {
        self.bits.ones().map(SiteId::new)
    }
}
