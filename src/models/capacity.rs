//! Batch capacity limits.

use serde::{Deserialize, Serialize};

/// Per-batch capacity limits.
///
/// Both limits must be positive; [`crate::validation::validate_constraints`]
/// enforces this before any scheduling happens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityConstraints {
    /// Maximum cumulative job volume in one batch.
    pub max_volume: f64,
    /// Maximum number of jobs in one batch.
    pub max_items: usize,
}

impl CapacityConstraints {
    /// Creates capacity limits.
    pub fn new(max_volume: f64, max_items: usize) -> Self {
        Self {
            max_volume,
            max_items,
        }
    }

    /// Whether a batch holding `items` jobs and `volume` capacity may accept
    /// one more job of `job_volume`.
    #[inline]
    pub fn admits(&self, items: usize, volume: f64, job_volume: f64) -> bool {
        items < self.max_items && volume + job_volume <= self.max_volume
    }
}
