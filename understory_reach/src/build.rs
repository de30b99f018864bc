// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bulk construction of a quadtree over a site slice.

use alloc::vec::Vec;

use understory_quadtree::{Quadtree, QuadtreeConfig, QuadtreeError, Region};

use crate::types::{Site, SiteId};

/// Build a quadtree over `domain` holding every site inside it, keyed by [`SiteId`].
///
/// Uses [`QuadtreeConfig::default`]. Sites outside `domain` are skipped; compare
/// [`Quadtree::len`] with `sites.len()`, or use [`build_index_reporting`] to
/// learn which ones.
pub fn build_index(sites: &[Site], domain: Region) -> Quadtree<SiteId> {
    let mut index = Quadtree::with_region(domain);
    insert_all(&mut index, sites);
    index
}

/// Like [`build_index`] with an explicit configuration.
pub fn build_index_with(
    sites: &[Site],
    domain: Region,
    config: QuadtreeConfig,
) -> Result<Quadtree<SiteId>, QuadtreeError> {
    let mut index = Quadtree::new(domain, config)?;
    insert_all(&mut index, sites);
    Ok(index)
}

/// Like [`build_index_with`], also returning the ids of sites outside `domain`.
pub fn build_index_reporting(
    sites: &[Site],
    domain: Region,
    config: QuadtreeConfig,
) -> Result<(Quadtree<SiteId>, Vec<SiteId>), QuadtreeError> {
    let mut index = Quadtree::new(domain, config)?;
    let dropped = insert_all(&mut index, sites);
    Ok((index, dropped))
}

fn insert_all(index: &mut Quadtree<SiteId>, sites: &[Site]) -> Vec<SiteId> {
    let mut dropped = Vec::new();
    for (i, site) in sites.iter().enumerate() {
        let id = SiteId::new(i);
        if !index.insert(site.position(), id) {
            dropped.push(id);
        }
    }
    if !dropped.is_empty() {
        tracing::debug!(
            dropped = dropped.len(),
            total = sites.len(),
            "sites outside the index domain were skipped"
        );
    }
    dropped
}
