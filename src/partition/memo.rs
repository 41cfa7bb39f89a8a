//! Top-down partition solver with per-call memoization.
//!
//! Recursion depth grows linearly with the length; use
//! [`MemoizedSolver::with_max_length`] to bound it, or prefer
//! [`TabulatedSolver`](super::TabulatedSolver) for very long inputs.
//!
//! The cache keeps only the best value and first segment per length, so
//! the cost matches the tabulated solver: O(n²) time, O(n) memory.

use std::collections::HashMap;

use super::PartitionSolver;
use crate::error::{PlanningError, PlanningResult};
use crate::models::PartitionResult;
use crate::validation::validate_partition_input;

/// Cache of `remaining length → (best value, first segment)`, scoped to one call.
type Memo = HashMap<usize, (u64, usize)>;

/// Recursive memoized solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoizedSolver {
    max_length: Option<usize>,
}

impl MemoizedSolver {
    /// Creates an unbounded solver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects lengths above `limit` instead of recursing that deep.
    pub fn with_max_length(mut self, limit: usize) -> Self {
        self.max_length = Some(limit);
        self
    }
}

impl PartitionSolver for MemoizedSolver {
    fn name(&self) -> &'static str {
        "memoized"
    }

    fn solve(&self, length: i64, prices: &[u64]) -> PlanningResult<PartitionResult> {
        let length = validate_partition_input(length, prices)?;
        if let Some(limit) = self.max_length {
            if length > limit {
                return Err(PlanningError::LengthLimitExceeded { length, limit });
            }
        }

        let mut memo = Memo::new();
        let value = best(length, prices, &mut memo)?;

        let mut segments = Vec::new();
        let mut rest = length;
        while let Some(&(_, cut)) = memo.get(&rest) {
            segments.push(cut);
            rest -= cut;
        }

        log::debug!(
            "memoized partition of {length}: value {value}, {} cached lengths",
            memo.len()
        );
        let result = PartitionResult::new(value, segments);
        debug_assert_eq!(result.total_length(), length);
        Ok(result)
    }
}

/// Best value for `remaining`, caching the chosen first segment.
///
/// Scans first-segment lengths ascending and keeps the first strictly
/// better candidate, so the smallest maximizing first segment wins.
fn best(remaining: usize, prices: &[u64], memo: &mut Memo) -> PlanningResult<u64> {
    if remaining == 0 {
        return Ok(0);
    }
    if let Some(&(value, _)) = memo.get(&remaining) {
        log::trace!("memo hit for length {remaining}");
        return Ok(value);
    }

    let mut incumbent: Option<(u64, usize)> = None;
    for cut in 1..=remaining {
        let sub_value = best(remaining - cut, prices, memo)?;
        let value = prices[cut - 1]
            .checked_add(sub_value)
            .ok_or(PlanningError::ValueOverflow { length: remaining })?;
        if incumbent.map_or(true, |(v, _)| value > v) {
            incumbent = Some((value, cut));
        }
    }

    // remaining > 0, so the loop ran at least once
    let (value, cut) = incumbent.unwrap_or_default();
    memo.insert(remaining, (value, cut));
    Ok(value)
}
