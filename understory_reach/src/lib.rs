// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_reach --heading-base-level=0

//! Understory Reach: multi-seed proximity flood fill over an Understory quadtree.
//!
//! Given a set of [`Site`]s, some of them seeds, this crate finds every site reachable from a
//! seed through a chain of hops no longer than a hop radius. The proximity graph is never
//! built; each expansion asks the index for the square neighbourhood of a site instead.
//!
//! ## Workflow
//!
//! 1) Build an index over your sites with [`build_index`]. Payloads are [`SiteId`]s, the
//!    positions of the sites in your slice.
//! 2) Run [`find_connected_regions`] (or [`Traversal`] directly for step-by-step control).
//!    [`find_connected_regions_in`] does both steps in one call.
//! 3) Read the [`Reach`]: per-site [`SiteFlags`], the [`Hop`]s in discovery order, and which
//!    seed first reached each site.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_quadtree::Region;
//! use understory_reach::{Site, SiteId, build_index, find_connected_regions};
//!
//! let sites = [
//!     Site::seed(Point::new(0.0, 0.0)),
//!     Site::new(Point::new(10.0, 0.0)),
//!     Site::new(Point::new(20.0, 0.0)),
//!     Site::new(Point::new(80.0, 80.0)),
//! ];
//! let domain = Region::from_corners(Point::new(-100.0, -100.0), Point::new(100.0, 100.0)).unwrap();
//! let index = build_index(&sites, domain);
//!
//! let reach = find_connected_regions(&index, &sites, 10.0).unwrap();
//! assert_eq!(reach.visited_count(), 3);
//! assert!(!reach.is_visited(SiteId::new(3)));
//!
//! // The hops that first reached each site form a path here.
//! let path: Vec<_> = reach.discovery_hops().map(|h| (h.from.index(), h.to.index())).collect();
//! assert_eq!(path, [(0, 1), (1, 2)]);
//! ```
//!
//! ## Semantics
//!
//! - The neighbourhood of a site is the axis-aligned square of half side `hop_radius` around
//!   it, edges included, so by default reachability is measured in L∞ distance.
//!   [`Metric::Euclidean`] narrows it to the inscribed disc.
//! - Visited state is owned by the traversal and shared across seeds: a site is expanded at
//!   most once per run, and a seed already reached by an earlier seed does not start its own
//!   expansion.
//! - Expansion is depth first and recorded in that order. It runs on an explicit stack, so
//!   the depth of a chain is not limited by the call stack.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod build;
pub mod config;
pub mod error;
pub mod traversal;
pub mod types;
pub mod visited;

pub use build::{build_index, build_index_reporting, build_index_with};
pub use config::{Metric, ReachConfig};
pub use error::ReachError;
pub use traversal::{
    Reach, Traversal, find_connected_regions, find_connected_regions_in,
    find_connected_regions_with,
};
pub use types::{Hop, Site, SiteFlags, SiteId};
pub use visited::VisitedSet;
