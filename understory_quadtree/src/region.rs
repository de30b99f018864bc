// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding regions used for node extents and range queries.

use kurbo::{Point, Rect, Vec2};

use crate::error::QuadtreeError;

/// Axis-aligned box with inclusive edges.
///
/// A region can be described by its center and half-extent or by its two
/// corners; both views are available and agree: `min = center - half_extent`
/// and `max = center + half_extent`.
///
/// Coordinates follow Kurbo's y-down convention. The *north* (top) edge is
/// `min().y` and the *west* (left) edge is `min().x`.
///
/// Regions are stored as min/max corners so that [`Region::quadrants`]
/// produces children whose shared edges are bit-identical.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region {
    rect: Rect,
}

impl Region {
    /// Create a region from its center and half-extent.
    ///
    /// Fails with [`QuadtreeError::NegativeExtent`] if either half-extent
    /// component is negative and [`QuadtreeError::NonFinite`] on NaN or
    /// infinite input. A zero half-extent is allowed and produces a degenerate
    /// region that only contains points on that line.
    pub fn new(center: Point, half_extent: Vec2) -> Result<Self, QuadtreeError> {
        if !is_finite(center.x, center.y) || !is_finite(half_extent.x, half_extent.y) {
            return Err(QuadtreeError::NonFinite);
        }
        if half_extent.x < 0.0 || half_extent.y < 0.0 {
            return Err(QuadtreeError::NegativeExtent {
                x: half_extent.x,
                y: half_extent.y,
            });
        }
        Ok(Self {
            rect: Rect::from_points(center - half_extent, center + half_extent),
        })
    }

    /// Create a square region of the given half side length around `center`.
    pub fn square(center: Point, half: f64) -> Result<Self, QuadtreeError> {
        Self::new(center, Vec2::new(half, half))
    }

    /// Create a region spanning two opposite corners, given in any order.
    pub fn from_corners(a: Point, b: Point) -> Result<Self, QuadtreeError> {
        if !is_finite(a.x, a.y) || !is_finite(b.x, b.y) {
            return Err(QuadtreeError::NonFinite);
        }
        Ok(Self {
            rect: Rect::from_points(a, b),
        })
    }

    /// Create a region from a Kurbo rectangle. The rectangle is normalized first.
    pub fn from_rect(rect: Rect) -> Result<Self, QuadtreeError> {
        Self::from_corners(rect.origin(), Point::new(rect.x1, rect.y1))
    }

    /// The region as a Kurbo rectangle (`x0 <= x1`, `y0 <= y1`).
    pub const fn to_rect(&self) -> Rect {
        self.rect
    }

    /// North-west corner.
    pub const fn min(&self) -> Point {
        Point::new(self.rect.x0, self.rect.y0)
    }

    /// South-east corner.
    pub const fn max(&self) -> Point {
        Point::new(self.rect.x1, self.rect.y1)
    }

    /// Center point. May differ from a constructor's `center` by rounding.
    pub fn center(&self) -> Point {
        self.rect.center()
    }

    /// Half of the width and half of the height.
    pub fn half_extent(&self) -> Vec2 {
        Vec2::new(0.5 * self.rect.width(), 0.5 * self.rect.height())
    }

    /// Width of the region.
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// Height of the region.
    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    /// Whether `p` lies inside the region or on any of its edges.
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.rect.x0 && p.x <= self.rect.x1 && p.y >= self.rect.y0 && p.y <= self.rect.y1
    }

    /// Whether the two regions overlap. Touching edges count as overlapping.
    pub fn intersects(&self, other: &Self) -> bool {
        let (a, b) = (&self.rect, &other.rect);
        if b.x0 > a.x1 || b.x1 < a.x0 {
            return false;
        }
        if b.y0 > a.y1 || b.y1 < a.y0 {
            return false;
        }
        true
    }

    /// Split into four equal quadrants in north-west, north-east, south-west,
    /// south-east order.
    ///
    /// Quadrants share their inner edges with exactly the parent's midpoint,
    /// so together they cover the parent with no gap.
    pub fn quadrants(&self) -> [Self; 4] {
        let Rect { x0, y0, x1, y1 } = self.rect;
        let mid = self.rect.center();
        [
            Rect::new(x0, y0, mid.x, mid.y),
            Rect::new(mid.x, y0, x1, mid.y),
            Rect::new(x0, mid.y, mid.x, y1),
            Rect::new(mid.x, mid.y, x1, y1),
        ]
        .map(|rect| Self { rect })
    }
}

fn is_finite(x: f64, y: f64) -> bool {
    x.is_finite() && y.is_finite()
}
