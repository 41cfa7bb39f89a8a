//! Job ordering policy.
//!
//! Jobs are ranked by `(priority, volume / duration)`, both ascending.
//! Priority dominates; within a priority level, jobs that consume less
//! volume per unit of time go first. The sort is stable, so full ties keep
//! their input order.

use std::cmp::Ordering;

use crate::models::Job;

/// Compares two jobs under the batching order.
///
/// Durations must be positive; otherwise the ratio is undefined.
pub fn compare_jobs(a: &Job, b: &Job) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| a.volume_ratio().total_cmp(&b.volume_ratio()))
}

/// Returns the jobs in batching order.
pub fn sort_jobs(jobs: &[Job]) -> Vec<&Job> {
    let mut sorted: Vec<&Job> = jobs.iter().collect();
    sorted.sort_by(|a, b| compare_jobs(a, b));
    sorted
}
