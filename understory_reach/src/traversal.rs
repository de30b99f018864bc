// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth-first, multi-seed expansion over hop-radius neighbourhoods.

use alloc::vec;
use alloc::vec::Vec;

use understory_quadtree::{Quadtree, QuadtreeConfig, Region};

use crate::build::build_index_with;
use crate::config::{Metric, ReachConfig};
use crate::error::ReachError;
use crate::types::{Hop, Site, SiteFlags, SiteId};
use crate::visited::VisitedSet;

/// One in-progress expansion: the site and the neighbours still to look at.
#[derive(Debug)]
struct Frame {
    site: SiteId,
    neighbours: Vec<SiteId>,
    next: usize,
}

/// Connectivity traversal over a built index.
///
/// The traversal only reads the index; all visited state lives here, shared
/// by every seed expanded through the same `Traversal`. Each site is expanded
/// at most once per traversal.
///
/// Expansion of a site marks it visited, queries the square of half side
/// `hop_radius` around it, records a [`Hop`] to each neighbour, and expands
/// each neighbour that is not visited yet before moving on to the next one.
/// The walk runs on an explicit stack of frames, so long chains of points do
/// not grow the call stack.
#[derive(Debug)]
pub struct Traversal<'a> {
    index: &'a Quadtree<SiteId>,
    sites: &'a [Site],
    config: ReachConfig,
    visited: VisitedSet,
    hops: Vec<Hop>,
    seed_of: Vec<Option<SiteId>>,
    stack: Vec<Frame>,
    spare: Vec<Vec<SiteId>>,
}

impl<'a> Traversal<'a> {
    /// Prepare a traversal of `sites` through `index`.
    ///
    /// `index` payloads are expected to be ids into `sites`; entries with ids
    /// past the end of `sites` are ignored.
    pub fn new(
        index: &'a Quadtree<SiteId>,
        sites: &'a [Site],
        config: ReachConfig,
    ) -> Result<Self, ReachError> {
        config.validate()?;
        Ok(Self {
            index,
            sites,
            config,
            visited: VisitedSet::with_len(sites.len()),
            hops: Vec::new(),
            seed_of: vec![None; sites.len()],
            stack: Vec::new(),
            spare: Vec::new(),
        })
    }

    /// Expand every seed site, in site order, that is not yet visited.
    pub fn expand_seeds(&mut self) {
        for (i, site) in self.sites.iter().enumerate() {
            if site.is_seed() {
                self.expand_from(SiteId::new(i));
            }
        }
    }

    /// Expand from `origin` and return how many sites became visited.
    ///
    /// Does nothing and returns 0 if `origin` is already visited or is not a
    /// valid site id. `origin` need not be a seed.
    pub fn expand_from(&mut self, origin: SiteId) -> usize {
        if origin.index() >= self.sites.len() || self.visited.contains(origin) {
            return 0;
        }
        let before = self.visited.len();
        self.seed_of[origin.index()] = Some(origin);
        self.enter(origin);

        while let Some(frame) = self.stack.last_mut() {
            let Some(&to) = frame.neighbours.get(frame.next) else {
                if let Some(done) = self.stack.pop() {
                    self.recycle(done.neighbours);
                }
                continue;
            };
            frame.next += 1;
            let from = frame.site;
            let discovered = !self.visited.contains(to);
            self.hops.push(Hop {
                from,
                to,
                discovered,
            });
            if discovered {
                self.seed_of[to.index()] = Some(origin);
                self.enter(to);
            }
        }

        let reached = self.visited.len() - before;
        tracing::debug!(seed = origin.index(), reached, "expanded seed");
        reached
    }

    /// Sites visited so far.
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Hops recorded so far, in discovery order.
    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Finish the run and classify every site.
    pub fn finish(self) -> Reach {
        let flags = self
            .sites
            .iter()
            .enumerate()
            .map(|(i, site)| {
                let mut flags = site.flags();
                flags.set(SiteFlags::VISITED, self.visited.contains(SiteId::new(i)));
                flags
            })
            .collect();
        tracing::debug!(
            sites = self.sites.len(),
            visited = self.visited.len(),
            hops = self.hops.len(),
            "traversal finished"
        );
        Reach {
            flags,
            hops: self.hops,
            seed_of: self.seed_of,
            visited: self.visited,
        }
    }

    /// Mark `id` visited and push a frame with its neighbours.
    fn enter(&mut self, id: SiteId) {
        self.visited.insert(id);
        let mut neighbours = self.spare.pop().unwrap_or_default();
        let center = self.sites[id.index()].position();
        let radius = self.config.hop_radius;
        let metric = self.config.metric;
        let site_count = self.sites.len();
        // A site with a non-finite position has no neighbourhood.
        if let Ok(range) = Region::square(center, radius) {
            self.index.query_range_with(&range, |position, n| {
                if n == id || n.index() >= site_count {
                    return;
                }
                if metric == Metric::Euclidean && (position - center).hypot2() > radius * radius {
                    return;
                }
                neighbours.push(n);
            });
        }
        self.stack.push(Frame {
            site: id,
            neighbours,
            next: 0,
        });
    }

    fn recycle(&mut self, mut neighbours: Vec<SiteId>) {
        neighbours.clear();
        self.spare.push(neighbours);
    }
}

/// Outcome of a traversal run.
#[derive(Clone, Debug)]
pub struct Reach {
    flags: Vec<SiteFlags>,
    hops: Vec<Hop>,
    seed_of: Vec<Option<SiteId>>,
    visited: VisitedSet,
}

impl Reach {
    /// Number of sites the run covered, visited or not.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether the run covered no sites at all.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Classification of `id`: its seed flag plus [`SiteFlags::VISITED`] if reached.
    ///
    /// Unknown ids report empty flags.
    pub fn flags(&self, id: SiteId) -> SiteFlags {
        self.flags.get(id.index()).copied().unwrap_or_default()
    }

    /// Whether `id` was reached from some seed.
    pub fn is_visited(&self, id: SiteId) -> bool {
        self.visited.contains(id)
    }

    /// Number of reached sites.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Reached sites in ascending id order.
    pub fn visited(&self) -> impl Iterator<Item = SiteId> + '_ {
        self.visited.iter()
    }

    /// Every recorded hop, in discovery order.
    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Hops that first reached their target: the spanning forest of the run.
    pub fn discovery_hops(&self) -> impl Iterator<Item = &Hop> + '_ {
        self.hops.iter().filter(|h| h.discovered)
    }

    /// The seed whose expansion first reached `id`, if any.
    pub fn seed_of(&self, id: SiteId) -> Option<SiteId> {
        self.seed_of.get(id.index()).copied().flatten()
    }

    /// Seeds that started an expansion (were not already reached by an earlier seed).
    pub fn origins(&self) -> impl Iterator<Item = SiteId> + '_ {
        self.seed_of
            .iter()
            .enumerate()
            .filter(|(i, s)| **s == Some(SiteId::new(*i)))
            .map(|(i, _)| SiteId::new(i))
    }

    /// Every site reached by `seed`'s expansion, `seed` included.
    pub fn region_of_seed(&self, seed: SiteId) -> Vec<SiteId> {
        self.seed_of
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Some(seed))
            .map(|(i, _)| SiteId::new(i))
            .collect()
    }
}

/// Flood-fill from every seed in `sites`, with Chebyshev hops of at most `hop_radius`.
///
/// `index` must hold the sites' ids as payloads, as built by
/// [`build_index`](crate::build_index).
pub fn find_connected_regions(
    index: &Quadtree<SiteId>,
    sites: &[Site],
    hop_radius: f64,
) -> Result<Reach, ReachError> {
    find_connected_regions_with(index, sites, ReachConfig::new(hop_radius))
}

/// Flood-fill from every seed in `sites` with explicit traversal parameters.
pub fn find_connected_regions_with(
    index: &Quadtree<SiteId>,
    sites: &[Site],
    config: ReachConfig,
) -> Result<Reach, ReachError> {
    let mut traversal = Traversal::new(index, sites, config)?;
    traversal.expand_seeds();
    Ok(traversal.finish())
}

/// Build an index over `domain` and flood-fill from every seed in one call.
///
/// Index construction errors come back as [`ReachError::Index`]. The index is
/// dropped afterwards; build it with [`build_index_with`] and call
/// [`find_connected_regions_with`] to keep it.
pub fn find_connected_regions_in(
    sites: &[Site],
    domain: Region,
    index_config: QuadtreeConfig,
    config: ReachConfig,
) -> Result<Reach, ReachError> {
    config.validate()?;
    let index = build_index_with(sites, domain, index_config)?;
    find_connected_regions_with(&index, sites, config)
}
