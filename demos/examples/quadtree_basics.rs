// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics: insert a handful of points, watch the tree split, and run range queries.
//!
//! Run:
//! - `cargo run -p understory_demos --example quadtree_basics`

use kurbo::Point;
use understory_quadtree::{Quadtree, QuadtreeConfig, Region};

fn main() -> anyhow::Result<()> {
    let domain = Region::from_corners(Point::ZERO, Point::new(100.0, 100.0))?;
    let mut qt = Quadtree::new(domain, QuadtreeConfig::with_capacity(1))?;

    let labelled = [
        ('a', Point::new(10.0, 10.0)),
        ('b', Point::new(60.0, 10.0)),
        ('c', Point::new(10.0, 60.0)),
        ('d', Point::new(60.0, 60.0)),
        ('e', Point::new(50.0, 50.0)),
    ];
    for (label, p) in labelled {
        qt.insert(p, label);
    }
    // Outside the domain: rejected, nothing stored.
    let accepted = qt.insert(Point::new(150.0, 150.0), 'z');
    println!("insert outside domain accepted: {accepted}");

    println!(
        "len={} depth={} nodes={}",
        qt.len(),
        qt.depth(),
        qt.node_count()
    );
    for (depth, region) in qt.regions() {
        let min = region.min();
        let max = region.max();
        println!(
            "{:indent$}node ({:.1},{:.1})..({:.1},{:.1})",
            "",
            min.x,
            min.y,
            max.x,
            max.y,
            indent = depth * 2
        );
    }

    // The split line belongs to the north-west quadrant.
    println!("find(50,50) -> {:?}", qt.find(Point::new(50.0, 50.0)));

    let window = Region::from_corners(Point::new(0.0, 0.0), Point::new(55.0, 55.0))?;
    let mut hits: Vec<char> = qt.query_range(&window).map(|(_, label)| label).collect();
    hits.sort_unstable();
    println!("query (0,0)..(55,55) -> {hits:?}");

    let around = Region::square(Point::new(60.0, 60.0), 10.0)?;
    qt.query_range_with(&around, |p, label| {
        println!("near (60,60): {label} at ({:.1},{:.1})", p.x, p.y);
    });

    Ok(())
}
