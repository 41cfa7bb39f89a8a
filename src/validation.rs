//! Input validation for planning calls.
//!
//! Checks inputs before any scheduling or partitioning. Detects:
//! - Non-positive (or NaN) capacity limits
//! - Jobs with non-positive durations (their volume ratio is undefined)
//! - Negative partition lengths
//! - Price tables shorter than the requested length
//!
//! Batch input checks collect every problem found; the scheduler reports
//! the first one.

use crate::error::{PlanningError, PlanningResult};
use crate::models::{CapacityConstraints, Job};

/// Validation result carrying every detected problem.
pub type ValidationResult = Result<(), Vec<PlanningError>>;

/// Validates capacity limits.
pub fn validate_constraints(constraints: &CapacityConstraints) -> ValidationResult {
    let mut errors = Vec::new();

    // NaN fails this comparison too
    if !(constraints.max_volume > 0.0) {
        errors.push(PlanningError::InvalidConstraint {
            field: "max_volume",
            value: constraints.max_volume,
        });
    }
    if constraints.max_items == 0 {
        errors.push(PlanningError::InvalidConstraint {
            field: "max_items",
            value: 0.0,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates jobs and capacity limits together.
///
/// Checks:
/// 1. `max_volume > 0`
/// 2. `max_items > 0`
/// 3. Every job has `duration > 0`
///
/// Jobs whose volume exceeds `max_volume` pass: they are dropped by the
/// scheduler and reported as skipped, not rejected.
pub fn validate_batch_input(jobs: &[Job], constraints: &CapacityConstraints) -> ValidationResult {
    let mut errors = match validate_constraints(constraints) {
        Ok(()) => Vec::new(),
        Err(errors) => errors,
    };

    for job in jobs {
        if !(job.duration > 0.0) {
            errors.push(PlanningError::InvalidJob {
                id: job.id.clone(),
                duration: job.duration,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a partition request and returns the length as an index bound.
pub fn validate_partition_input(length: i64, prices: &[u64]) -> PlanningResult<usize> {
    let length = usize::try_from(length).map_err(|_| PlanningError::InvalidLength(length))?;
    if prices.len() < length {
        return Err(PlanningError::PriceTableTooShort {
            length,
            available: prices.len(),
        });
    }
    Ok(length)
}
