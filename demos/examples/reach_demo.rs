// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reach demo: scatter random sites over a field, mark some as seeds, and flood fill from them.
//!
//! Run:
//! - `cargo run -p understory_demos --example reach_demo`
//! - `cargo run -p understory_demos --example reach_demo -- reach.toml`
//!
//! The optional TOML file overrides any of the defaults below, for example:
//!
//! ```toml
//! points = 2000
//! seed_one_in = 25
//!
//! [reach]
//! hop_radius = 12.0
//! metric = "euclidean"
//!
//! [index]
//! capacity = 4
//! ```
//!
//! Set `RUST_LOG=debug` to see per-seed expansion logs.

use std::path::Path;

use kurbo::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_quadtree::{QuadtreeConfig, Region};
use understory_reach::{
    ReachConfig, Site, SiteId, build_index_reporting, find_connected_regions_with,
};

/// Demo settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
struct DemoConfig {
    /// Number of random sites.
    points: usize,
    /// Width of the field and of the index domain.
    width: f64,
    /// Height of the field and of the index domain.
    height: f64,
    /// Sites keep this distance from the field edges.
    margin: f64,
    /// One site in this many becomes a seed.
    seed_one_in: u32,
    /// RNG seed, so runs are repeatable.
    rng_seed: u64,
    reach: ReachConfig,
    index: QuadtreeConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            points: 500,
            width: 800.0,
            height: 600.0,
            margin: 10.0,
            seed_one_in: 10,
            rng_seed: 0x5EED,
            reach: ReachConfig::default(),
            index: QuadtreeConfig::default(),
        }
    }
}

impl DemoConfig {
    fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let contents = std::fs::read_to_string(path)?;
                let config = toml::from_str(&contents)?;
                info!("Loaded configuration from {}", path.display());
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}

fn scatter(config: &DemoConfig) -> Vec<Site> {
    let mut rng = StdRng::seed_from_u64(config.rng_seed);
    let (lo_x, hi_x) = (config.margin, config.width - config.margin);
    let (lo_y, hi_y) = (config.margin, config.height - config.margin);
    (0..config.points)
        .map(|_| {
            let p = Point::new(rng.random_range(lo_x..=hi_x), rng.random_range(lo_y..=hi_y));
            Site::with_seed(p, rng.random_ratio(1, config.seed_one_in.max(1)))
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args().nth(1);
    let config = DemoConfig::load(path.as_deref().map(Path::new))?;
    anyhow::ensure!(
        config.width > 2.0 * config.margin && config.height > 2.0 * config.margin,
        "field {}x{} leaves no room inside margin {}",
        config.width,
        config.height,
        config.margin
    );
    info!(
        "  Field: {}x{}, {} sites, hop radius {} ({:?})",
        config.width, config.height, config.points, config.reach.hop_radius, config.reach.metric
    );

    let sites = scatter(&config);
    let domain = Region::from_corners(Point::ZERO, Point::new(config.width, config.height))?;
    let (index, dropped) = build_index_reporting(&sites, domain, config.index)?;
    info!(
        "  Index: {} sites, depth {}, {} nodes, {} outside the domain",
        index.len(),
        index.depth(),
        index.node_count(),
        dropped.len()
    );

    let reach = find_connected_regions_with(&index, &sites, config.reach)?;

    let seeds: Vec<SiteId> = (0..sites.len())
        .map(SiteId::new)
        .filter(|id| sites[id.index()].is_seed())
        .collect();
    let origins: Vec<SiteId> = reach.origins().collect();
    println!(
        "{} of {} sites reached from {} seeds ({} started their own region)",
        reach.visited_count(),
        sites.len(),
        seeds.len(),
        origins.len()
    );
    println!(
        "{} hops recorded, {} of them discovered a new site",
        reach.hops().len(),
        reach.discovery_hops().count()
    );

    let mut regions: Vec<(SiteId, usize)> = origins
        .iter()
        .map(|&seed| (seed, reach.region_of_seed(seed).len()))
        .collect();
    regions.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    for (seed, size) in regions.iter().take(10) {
        let p = sites[seed.index()].position();
        println!(
            "  region from site {:>4} at ({:>6.1},{:>6.1}): {size} sites",
            seed.index(),
            p.x,
            p.y
        );
    }
    if regions.len() > 10 {
        println!("  ... {} more regions", regions.len() - 10);
    }

    Ok(())
}
