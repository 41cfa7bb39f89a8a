//! Optimal length partitioning ("rod cutting").
//!
//! Splits a length into integer segments, each priced from a table, so that
//! the total value is maximal:
//!
//! ```text
//! V(0) = 0
//! V(n) = max_{c in 1..=n} price(c) + V(n - c)
//! ```
//!
//! # Tie-breaking
//! First-segment lengths are scanned in ascending order and an incumbent is
//! replaced only by a strictly greater value. When several partitions are
//! optimal, the one whose first segment is smallest is returned, applied
//! recursively to the remainder. Both solvers follow this policy, so they
//! return identical partitions, not merely equal values.
//!
//! # Usage
//!
//! ```
//! use u_batchplan::partition::{MemoizedSolver, PartitionSolver, TabulatedSolver};
//!
//! let prices = [1, 3, 8];
//! let memo = MemoizedSolver::new().solve(3, &prices).unwrap();
//! let table = TabulatedSolver::new().solve(3, &prices).unwrap();
//! assert_eq!(memo, table);
//! assert_eq!(memo.segments, vec![3]);
//! assert_eq!(memo.cuts, 0);
//! ```
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 15.1 (Rod Cutting)

mod memo;
mod table;

pub use memo::MemoizedSolver;
pub use table::TabulatedSolver;

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::error::PlanningResult;
use crate::models::PartitionResult;

/// A strategy for computing an optimal partition.
///
/// Implementations hold no state between calls.
pub trait PartitionSolver: Send + Sync + Debug {
    /// Strategy name (e.g., "memoized").
    fn name(&self) -> &'static str;

    /// Computes the optimal partition of `length` under `prices`, where
    /// `prices[i]` is the value of a segment of length `i + 1`.
    ///
    /// # Errors
    /// `InvalidLength` for a negative length, `PriceTableTooShort` when
    /// `prices` has fewer than `length` entries, `ValueOverflow` when a
    /// candidate total exceeds `u64::MAX`.
    fn solve(&self, length: i64, prices: &[u64]) -> PlanningResult<PartitionResult>;
}

/// Selects a solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartitionStrategy {
    /// Top-down recursion with a per-call cache.
    Memoized,
    /// Bottom-up table, no recursion.
    #[default]
    Tabulated,
}

impl PartitionStrategy {
    /// Returns a solver for this strategy.
    pub fn solver(self) -> Box<dyn PartitionSolver> {
        match self {
            Self::Memoized => Box::new(MemoizedSolver::new()),
            Self::Tabulated => Box::new(TabulatedSolver::new()),
        }
    }
}

/// Input container for partitioning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionRequest {
    /// Length to partition.
    pub length: i64,
    /// `prices[i]` is the value of a segment of length `i + 1`.
    pub prices: Vec<u64>,
    /// Solver to use.
    #[serde(default)]
    pub strategy: PartitionStrategy,
}

impl PartitionRequest {
    /// Creates a request using the default strategy.
    pub fn new(length: i64, prices: Vec<u64>) -> Self {
        Self {
            length,
            prices,
            strategy: PartitionStrategy::default(),
        }
    }

    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: PartitionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Solves the request.
    pub fn solve(&self) -> PlanningResult<PartitionResult> {
        optimize(self.length, &self.prices, self.strategy)
    }
}

/// Computes the optimal partition with the chosen strategy.
pub fn optimize(
    length: i64,
    prices: &[u64],
    strategy: PartitionStrategy,
) -> PlanningResult<PartitionResult> {
    strategy.solver().solve(length, prices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanningError;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    const STRATEGIES: [PartitionStrategy; 2] =
        [PartitionStrategy::Memoized, PartitionStrategy::Tabulated];

    #[test]
    fn test_strategies_agree_on_known_cases() {
        let cases: [(i64, &[u64], u64); 3] = [
            (5, &[2, 5, 7, 8, 10][..], 12),
            (3, &[1, 3, 8][..], 8),
            (4, &[3, 5, 6, 7][..], 12),
        ];
        for (length, prices, expected) in cases {
            let memo = optimize(length, prices, PartitionStrategy::Memoized).unwrap();
            let table = optimize(length, prices, PartitionStrategy::Tabulated).unwrap();
            assert_eq!(memo, table);
            assert_eq!(memo.max_value, expected);
        }
    }

    #[test]
    fn test_random_strategies_agree() {
        let mut rng = SmallRng::seed_from_u64(2024);
        for _ in 0..300 {
            let length = rng.random_range(0..40usize);
            let prices: Vec<u64> = (0..length + rng.random_range(0..3))
                .map(|_| rng.random_range(0..50))
                .collect();

            let memo = MemoizedSolver::new().solve(length as i64, &prices).unwrap();
            let table = TabulatedSolver::new().solve(length as i64, &prices).unwrap();
            assert_eq!(memo, table);

            assert_eq!(memo.total_length(), length);
            assert_eq!(memo.priced_value(&prices), Some(memo.max_value));
            assert_eq!(memo.cuts, memo.segments.len() as i64 - 1);
            assert_eq!(memo.segments.is_empty(), length == 0);
        }
    }

    #[test]
    fn test_value_is_optimal() {
        // Brute force over all compositions of small lengths
        fn brute(n: usize, prices: &[u64]) -> u64 {
            (1..=n)
                .map(|c| prices[c - 1] + brute(n - c, prices))
                .max()
                .unwrap_or(0)
        }

        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..50 {
            let length = rng.random_range(0..12usize);
            let prices: Vec<u64> = (0..length).map(|_| rng.random_range(0..30)).collect();
            let r = optimize(length as i64, &prices, PartitionStrategy::Tabulated).unwrap();
            assert_eq!(r.max_value, brute(length, &prices));
        }
    }

    #[test]
    fn test_idempotent() {
        let prices = [2, 5, 7, 8, 10];
        for strategy in STRATEGIES {
            let solver = strategy.solver();
            assert_eq!(solver.solve(5, &prices), solver.solve(5, &prices));
        }
    }

    #[test]
    fn test_errors_match_across_strategies() {
        for strategy in STRATEGIES {
            assert_eq!(
                optimize(-1, &[1], strategy),
                Err(PlanningError::InvalidLength(-1))
            );
            assert_eq!(
                optimize(2, &[1], strategy),
                Err(PlanningError::PriceTableTooShort {
                    length: 2,
                    available: 1,
                })
            );
        }
    }

    #[test]
    fn test_large_length_strategies_agree() {
        let mut rng = SmallRng::seed_from_u64(2000);
        let prices: Vec<u64> = (0..2_000).map(|_| rng.random_range(0..1_000)).collect();
        let memo = MemoizedSolver::new().solve(2_000, &prices).unwrap();
        let table = TabulatedSolver::new().solve(2_000, &prices).unwrap();
        assert_eq!(memo, table);
        assert_eq!(memo.total_length(), 2_000);
        assert_eq!(memo.priced_value(&prices), Some(memo.max_value));
    }

    #[test]
    fn test_overflow_reported_by_both_strategies() {
        for strategy in STRATEGIES {
            assert_eq!(
                optimize(3, &[u64::MAX / 2, 1, 1], strategy),
                Err(PlanningError::ValueOverflow { length: 3 })
            );
        }
    }

    #[test]
    fn test_solver_names() {
        assert_eq!(PartitionStrategy::Memoized.solver().name(), "memoized");
        assert_eq!(PartitionStrategy::Tabulated.solver().name(), "tabulated");
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{"length": 5, "prices": [2, 5, 7, 8, 10], "strategy": "memoized"}"#;
        let request: PartitionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.strategy, PartitionStrategy::Memoized);
        assert_eq!(request.solve().unwrap().max_value, 12);

        let request: PartitionRequest =
            serde_json::from_str(r#"{"length": 0, "prices": []}"#).unwrap();
        assert_eq!(request.strategy, PartitionStrategy::Tabulated);
        assert_eq!(request.solve().unwrap().cuts, -1);
    }

    #[test]
    fn test_request_builder() {
        let request =
            PartitionRequest::new(3, vec![1, 3, 8]).with_strategy(PartitionStrategy::Memoized);
        assert_eq!(request.solve().unwrap().segments, vec![3]);
    }
}
