// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: site identifiers, classification flags, sites, and hops.

use kurbo::Point;

/// Identifier for a site: its index in the caller's site slice.
///
/// The index built by [`build_index`](crate::build_index) stores these as
/// payloads, and every result refers back to sites through them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SiteId(usize);

impl SiteId {
    /// The identifier of the site at `index` in the site slice.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the site in the site slice.
    pub const fn index(self) -> usize {
        self.0
    }
}

bitflags::bitflags! {
    /// Classification of a site.
    ///
    /// A [`Site`] only ever carries [`SiteFlags::SEED`]; [`SiteFlags::VISITED`]
    /// is added by a traversal and reported through [`Reach::flags`](crate::Reach::flags).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SiteFlags: u8 {
        /// The site is a traversal origin.
        const SEED    = 0b0000_0001;
        /// The site was expanded by some seed's traversal.
        const VISITED = 0b0000_0010;
    }
}

/// A point to be connected, with its seed classification.
///
/// Both the position and the classification are fixed at creation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Site {
    position: Point,
    flags: SiteFlags,
}

impl Site {
    /// A plain (non-seed) site.
    pub const fn new(position: Point) -> Self {
        Self {
            position,
            flags: SiteFlags::empty(),
        }
    }

    /// A seed site: traversal starts from here.
    pub const fn seed(position: Point) -> Self {
        Self {
            position,
            flags: SiteFlags::SEED,
        }
    }

    /// A site that is a seed iff `is_seed`.
    pub const fn with_seed(position: Point, is_seed: bool) -> Self {
        if is_seed {
            Self::seed(position)
        } else {
            Self::new(position)
        }
    }

    /// Where the site is.
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Whether the site is a traversal origin.
    pub const fn is_seed(&self) -> bool {
        self.flags.contains(SiteFlags::SEED)
    }

    /// Classification the site was created with.
    pub const fn flags(&self) -> SiteFlags {
        self.flags
    }
}

/// A hop between two sites found while expanding `from`.
///
/// Hops are recorded for every neighbour returned by the neighbourhood query,
/// except `from` itself. `discovered` is set when the hop led to the first
/// expansion of `to`; those hops form a spanning forest of the reached sites,
/// the others point back at sites that were already visited.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hop {
    /// Site being expanded.
    pub from: SiteId,
    /// Neighbour found within the hop radius.
    pub to: SiteId,
    /// Whether this hop first reached `to`.
    pub discovered: bool,
}
