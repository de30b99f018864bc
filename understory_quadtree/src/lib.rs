// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a Kurbo-native point quadtree.
//!
//! Understory Quadtree is a small building block for proximity queries over 2D points.
//!
//! - Insert points with a `Copy` payload; leaves subdivide into four quadrants once full.
//! - Query every point inside an axis-aligned [`Region`], pruning subtrees that cannot overlap.
//! - Look up a point by exact position and walk node regions for debug drawing.
//!
//! Capacity and the subdivision depth limit are explicit [`QuadtreeConfig`] values threaded
//! through construction, so trees with different tuning can coexist.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_quadtree::{Quadtree, QuadtreeConfig, Region};
//!
//! let domain = Region::from_corners(Point::new(0.0, 0.0), Point::new(100.0, 100.0)).unwrap();
//! let mut qt: Quadtree<u32> = Quadtree::new(domain, QuadtreeConfig::with_capacity(1)).unwrap();
//!
//! assert!(qt.insert(Point::new(10.0, 10.0), 0));
//! assert!(qt.insert(Point::new(10.0, 20.0), 1));
//! assert!(qt.insert(Point::new(90.0, 90.0), 2));
//! // Outside the root region: reported, not an error.
//! assert!(!qt.insert(Point::new(120.0, 10.0), 3));
//!
//! let window = Region::from_corners(Point::new(0.0, 0.0), Point::new(50.0, 50.0)).unwrap();
//! let mut hits: Vec<u32> = qt.query_range(&window).map(|(_, id)| id).collect();
//! hits.sort();
//! assert_eq!(hits, [0, 1]);
//! ```
//!
//! ## Regions and edges
//!
//! [`Region`] containment and intersection are inclusive on every edge. Coordinates follow
//! Kurbo's y-down convention, so "north" is the smaller `y`. A point on a split line is stored
//! in the first quadrant (north-west, north-east, south-west, south-east) that contains it;
//! because each point lives in exactly one node, range queries never report duplicates.
//!
//! ### Float semantics
//!
//! Regions reject NaN and infinite coordinates at construction. NaN points are never
//! contained in any region, so inserting one returns `false`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod quadtree;
pub mod region;

pub use config::QuadtreeConfig;
pub use error::QuadtreeError;
pub use quadtree::Quadtree;
pub use region::Region;
