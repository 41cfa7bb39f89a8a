//! Bottom-up partition solver.
//!
//! Fills `V(1)..=V(n)` in increasing order, recording the first segment
//! chosen for each length, then walks those choices to rebuild the
//! partition. No recursion; memory is O(n).

use super::PartitionSolver;
use crate::error::{PlanningError, PlanningResult};
use crate::models::PartitionResult;
use crate::validation::validate_partition_input;

/// Iterative tabulating solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabulatedSolver;

impl TabulatedSolver {
    /// Creates the solver.
    pub fn new() -> Self {
        Self
    }
}

impl PartitionSolver for TabulatedSolver {
    fn name(&self) -> &'static str {
        "tabulated"
    }

    fn solve(&self, length: i64, prices: &[u64]) -> PlanningResult<PartitionResult> {
        let length = validate_partition_input(length, prices)?;

        let mut values = vec![0u64; length + 1];
        let mut first_cut = vec![0usize; length + 1];

        for current in 1..=length {
            let mut best: Option<u64> = None;
            for cut in 1..=current {
                let value = prices[cut - 1]
                    .checked_add(values[current - cut])
                    .ok_or(PlanningError::ValueOverflow { length: current })?;
                // Strict comparison keeps the smallest maximizing cut
                if best.map_or(true, |b| value > b) {
                    best = Some(value);
                    first_cut[current] = cut;
                }
            }
            values[current] = best.unwrap_or(0);
        }

        let mut segments = Vec::new();
        let mut rest = length;
        while rest > 0 {
            let cut = first_cut[rest];
            segments.push(cut);
            rest -= cut;
        }

        log::debug!(
            "tabulated partition of {length}: value {}, {} segments",
            values[length],
            segments.len()
        );
        let result = PartitionResult::new(values[length], segments);
        debug_assert_eq!(result.total_length(), length);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_case() {
        let r = TabulatedSolver.solve(5, &[2, 5, 7, 8, 10]).unwrap();
        assert_eq!(r.max_value, 12);
        assert_eq!(r.segments, vec![1, 2, 2]);
        assert_eq!(r.cuts, 2);
    }

    #[test]
    fn test_no_cut_optimal() {
        let r = TabulatedSolver.solve(3, &[1, 3, 8]).unwrap();
        assert_eq!(r.max_value, 8);
        assert_eq!(r.segments, vec![3]);
        assert_eq!(r.cuts, 0);
    }

    #[test]
    fn test_zero_prices_still_partition() {
        let r = TabulatedSolver.solve(3, &[0, 0, 0]).unwrap();
        assert_eq!(r.max_value, 0);
        assert_eq!(r.segments, vec![1, 1, 1]);
    }

    #[test]
    fn test_extra_prices_ignored() {
        let r = TabulatedSolver.solve(2, &[1, 5, 100]).unwrap();
        assert_eq!(r, PartitionResult::new(5, vec![2]));
    }

    #[test]
    fn test_zero_length() {
        let r = TabulatedSolver.solve(0, &[4, 5]).unwrap();
        assert_eq!(r, PartitionResult::new(0, Vec::new()));
        assert_eq!(r.cuts, -1);
    }

    #[test]
    fn test_large_length_no_recursion() {
        let prices: Vec<u64> = (1..=5_000).collect();
        let r = TabulatedSolver.solve(5_000, &prices).unwrap();
        assert_eq!(r.max_value, 5_000);
        assert_eq!(r.total_length(), 5_000);
    }

    #[test]
    fn test_value_overflow() {
        assert_eq!(
            TabulatedSolver.solve(2, &[u64::MAX - 1, 1]),
            Err(PlanningError::ValueOverflow { length: 2 })
        );
        let r = TabulatedSolver.solve(2, &[0, u64::MAX]).unwrap();
        assert_eq!(r, PartitionResult::new(u64::MAX, vec![2]));
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            TabulatedSolver.solve(-1, &[]),
            Err(PlanningError::InvalidLength(-1))
        );
        assert_eq!(
            TabulatedSolver.solve(3, &[1]),
            Err(PlanningError::PriceTableTooShort {
                length: 3,
                available: 1,
            })
        );
    }
}
