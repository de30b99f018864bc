// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point quadtree with capacity-bounded leaves and lazy subdivision.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;

use crate::config::QuadtreeConfig;
use crate::error::QuadtreeError;
use crate::region::Region;

/// A point quadtree carrying a `Copy` payload per point.
///
/// Each node owns a [`Region`], a bucket of the points inserted while it was
/// still a leaf, and either no children or exactly four. A leaf accepts points
/// until its bucket holds [`QuadtreeConfig::capacity`] of them; the next
/// insertion splits it into four quadrants and the point descends. Points
/// already in the bucket stay where they are.
///
/// A point lying exactly on a split line goes to the first quadrant, in
/// north-west, north-east, south-west, south-east order, whose inclusive
/// region contains it. In y-down coordinates that means `x <= mid.x` goes
/// west and `y <= mid.y` goes north. Every point is stored in exactly one
/// node, so queries never report a point twice.
pub struct Quadtree<P: Copy + Debug> {
    root: Node<P>,
    config: QuadtreeConfig,
    len: usize,
}

struct Node<P> {
    region: Region,
    items: Vec<(Point, P)>,
    kind: Kind<P>,
}

enum Kind<P> {
    Leaf,
    /// Children in north-west, north-east, south-west, south-east order.
    Internal(Box<[Node<P>; 4]>),
}

impl<P> Node<P> {
    fn leaf(region: Region) -> Self {
        Self {
            region,
            items: Vec::new(),
            kind: Kind::Leaf,
        }
    }

    fn children(&self) -> Option<&[Self; 4]> {
        match &self.kind {
            Kind::Leaf => None,
            Kind::Internal(children) => Some(&**children),
        }
    }
}

impl<P: Copy> Node<P> {
    fn insert(&mut self, point: Point, payload: P, depth: usize, config: &QuadtreeConfig) -> bool {
        if !self.region.contains_point(point) {
            return false;
        }

        match &mut self.kind {
            Kind::Internal(children) => Self::insert_into(children, point, payload, depth, config),
            Kind::Leaf if self.items.len() < config.capacity || depth >= config.max_depth => {
                self.items.push((point, payload));
                true
            }
            Kind::Leaf => {
                let mut children = Box::new(self.region.quadrants().map(Self::leaf));
                tracing::trace!(
                    depth,
                    x0 = self.region.min().x,
                    y0 = self.region.min().y,
                    x1 = self.region.max().x,
                    y1 = self.region.max().y,
                    "subdivided quadtree node"
                );
                let inserted = Self::insert_into(&mut children, point, payload, depth, config);
                self.kind = Kind::Internal(children);
                inserted
            }
        }
    }

    /// First child, in north-west to south-east order, that accepts the point.
    fn insert_into(
        children: &mut [Self; 4],
        point: Point,
        payload: P,
        depth: usize,
        config: &QuadtreeConfig,
    ) -> bool {
        children
            .iter_mut()
            .any(|child| child.insert(point, payload, depth + 1, config))
    }
}

impl<P: Copy + Debug> Quadtree<P> {
    /// Create an empty quadtree covering `region`.
    ///
    /// Fails with [`QuadtreeError::ZeroCapacity`] if `config.capacity` is zero.
    pub fn new(region: Region, config: QuadtreeConfig) -> Result<Self, QuadtreeError> {
        config.validate()?;
        Ok(Self {
            root: Node::leaf(region),
            config,
            len: 0,
        })
    }

    /// Create an empty quadtree covering `region` with the default configuration.
    pub fn with_region(region: Region) -> Self {
        Self {
            root: Node::leaf(region),
            config: QuadtreeConfig::default(),
            len: 0,
        }
    }

    /// The region covered by the root node.
    pub fn region(&self) -> Region {
        self.root.region
    }

    /// The configuration this tree was built with.
    pub fn config(&self) -> QuadtreeConfig {
        self.config
    }

    /// Number of points stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no point has been stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a point with its payload.
    ///
    /// Returns `false`, leaving the tree unchanged, when the point lies outside
    /// the root region (or is NaN). This is not an error: callers that build the
    /// root over their full domain never observe it, others decide whether to
    /// drop, clamp, or rebuild with a larger root.
    pub fn insert(&mut self, point: Point, payload: P) -> bool {
        let inserted = self.root.insert(point, payload, 0, &self.config);
        if inserted {
            self.len += 1;
        } else {
            tracing::debug!(x = point.x, y = point.y, "point outside quadtree region");
        }
        inserted
    }

    /// Query for every stored point contained in `range`.
    ///
    /// Subtrees whose region does not intersect `range` are skipped. Results
    /// come in node pre-order (bucket first, then quadrants north-west to
    /// south-east); callers should not rely on any particular order.
    pub fn query_range<'a>(
        &'a self,
        range: &Region,
    ) -> impl Iterator<Item = (Point, P)> + use<'a, P> {
        let mut out = Vec::new();
        self.query_range_with(range, |point, payload| out.push((point, payload)));
        out.into_iter()
    }

    /// Visit every stored point contained in `range` without allocating a result.
    ///
    /// Same pruning and order as [`Quadtree::query_range`].
    pub fn query_range_with(&self, range: &Region, mut visit: impl FnMut(Point, P)) {
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if !node.region.intersects(range) {
                continue;
            }
            for &(point, payload) in &node.items {
                if range.contains_point(point) {
                    visit(point, payload);
                }
            }
            if let Some(children) = node.children() {
                stack.extend(children.iter().rev());
            }
        }
    }

    /// Find the payload of a point stored at exactly `point`.
    ///
    /// Follows the same path an insertion of `point` would take, so it visits
    /// one node per level. With duplicates, returns the one stored highest in
    /// the tree (earliest inserted among equals in the same bucket).
    pub fn find(&self, point: Point) -> Option<P> {
        let mut node = &self.root;
        if !node.region.contains_point(point) {
            return None;
        }
        loop {
            if let Some(&(_, payload)) = node.items.iter().find(|(p, _)| *p == point) {
                return Some(payload);
            }
            node = node
                .children()?
                .iter()
                .find(|child| child.region.contains_point(point))?;
        }
    }

    /// Depth of the deepest node (0 for a tree that never subdivided).
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(0_usize, &self.root)];
        while let Some((depth, node)) = stack.pop() {
            deepest = deepest.max(depth);
            if let Some(children) = node.children() {
                stack.extend(children.iter().map(|c| (depth + 1, c)));
            }
        }
        deepest
    }

    /// Number of nodes, leaves and internal.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            count += 1;
            if let Some(children) = node.children() {
                stack.extend(children.iter());
            }
        }
        count
    }

    /// Depth and region of every node in pre-order, for drawing the subdivision.
    pub fn regions(&self) -> Vec<(usize, Region)> {
        let mut out = Vec::new();
        let mut stack = vec![(0_usize, &self.root)];
        while let Some((depth, node)) = stack.pop() {
            out.push((depth, node.region));
            if let Some(children) = node.children() {
                stack.extend(children.iter().rev().map(|c| (depth + 1, c)));
            }
        }
        out
    }
}

impl<P: Copy + Debug> Debug for Quadtree<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Quadtree")
            .field("region", &self.root.region)
            .field("config", &self.config)
            .field("len", &self.len)
            .field("nodes", &self.node_count())
            .finish_non_exhaustive()
    }
}
