//! Error taxonomy for planning calls.
//!
//! Every variant is caller-visible and deterministic: the same invalid
//! input always fails with the same error. Jobs too large for any batch
//! are not errors; they are reported in [`BatchSchedule::skipped`].
//!
//! [`BatchSchedule::skipped`]: crate::models::BatchSchedule::skipped

use thiserror::Error;

/// Result alias used across the crate.
pub type PlanningResult<T> = Result<T, PlanningError>;

/// Errors returned by the batch scheduler and the partition solvers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanningError {
    /// A capacity limit is zero, negative, or not a number.
    #[error("invalid capacity constraint: {field} must be positive, got {value}")]
    InvalidConstraint {
        /// Name of the offending limit (`max_volume` or `max_items`).
        field: &'static str,
        /// Value as supplied.
        value: f64,
    },

    /// A job has a non-positive duration.
    #[error("invalid job '{id}': duration must be positive, got {duration}")]
    InvalidJob {
        /// Job identifier.
        id: String,
        /// Duration as supplied.
        duration: f64,
    },

    /// Partition length is negative.
    #[error("invalid length {0}: must be non-negative")]
    InvalidLength(i64),

    /// Price table has fewer entries than the requested length.
    #[error("price table too short: length {length} needs {length} prices, got {available}")]
    PriceTableTooShort {
        /// Requested length.
        length: usize,
        /// Number of prices supplied.
        available: usize,
    },

    /// The optimal value does not fit in `u64`.
    #[error("partition value overflows u64 at length {length}")]
    ValueOverflow {
        /// Smallest sub-length whose best value overflowed.
        length: usize,
    },

    /// Length exceeds the bound configured on a recursive solver.
    #[error("length {length} exceeds configured limit {limit}")]
    LengthLimitExceeded {
        /// Requested length.
        length: usize,
        /// Configured bound.
        limit: usize,
    },
}
