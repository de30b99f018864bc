// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traversal parameters.

use crate::error::ReachError;

/// Default hop radius.
pub const DEFAULT_HOP_RADIUS: f64 = 20.0;

/// How the hop radius is measured.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Metric {
    /// L∞ distance: a neighbour is anything inside the axis-aligned square of
    /// half side `hop_radius`, edges included.
    #[default]
    Chebyshev,
    /// Euclidean distance: square candidates further limited to
    /// `distance <= hop_radius`.
    Euclidean,
}

/// Parameters of a connectivity traversal.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ReachConfig {
    /// Maximum length of a single hop. Must be finite and non-negative.
    pub hop_radius: f64,
    /// Distance used to compare against `hop_radius`.
    pub metric: Metric,
}

impl ReachConfig {
    /// Chebyshev traversal with the given hop radius.
    pub const fn new(hop_radius: f64) -> Self {
        Self {
            hop_radius,
            metric: Metric::Chebyshev,
        }
    }

    /// Replace the metric.
    #[must_use]
    pub const fn metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ReachError> {
        if !self.hop_radius.is_finite() || self.hop_radius < 0.0 {
            return Err(ReachError::InvalidRadius(self.hop_radius));
        }
        Ok(())
    }
}

impl Default for ReachConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOP_RADIUS)
    }
}
