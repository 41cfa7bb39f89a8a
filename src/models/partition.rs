//! Partition (rod cutting) result model.

use serde::{Deserialize, Serialize};

/// Optimal partition of a length into priced segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionResult {
    /// Maximum achievable total value.
    pub max_value: u64,
    /// Segment lengths in chosen order; sums to the requested length.
    pub segments: Vec<usize>,
    /// `segments.len() - 1`. `-1` for a zero length (no segments).
    pub cuts: i64,
}

impl PartitionResult {
    /// Builds a result, deriving the cut count from the segments.
    pub fn new(max_value: u64, segments: Vec<usize>) -> Self {
        let cuts = segments.len() as i64 - 1;
        Self {
            max_value,
            segments,
            cuts,
        }
    }

    /// Total length covered by the segments.
    pub fn total_length(&self) -> usize {
        self.segments.iter().sum()
    }

    /// Value of the segments priced against `prices`.
    ///
    /// Returns `None` if a segment has no price entry or the total
    /// overflows.
    pub fn priced_value(&self, prices: &[u64]) -> Option<u64> {
        self.segments.iter().try_fold(0u64, |total, &len| {
            let price = len.checked_sub(1).and_then(|i| prices.get(i))?;
            total.checked_add(*price)
        })
    }
}
