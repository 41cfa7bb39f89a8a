//! Greedy capacity-bounded batch scheduler.
//!
//! # Algorithm
//!
//! 1. Validate constraints and job durations (fail fast).
//! 2. Stable-sort jobs by `(priority, volume / duration)` ascending.
//! 3. Single pass: before each job, close the current batch if it is full
//!    or the job's volume would overflow it. Place the job if it fits the
//!    (possibly fresh) batch; otherwise drop it and report it as skipped.
//! 4. Close the final batch.
//!
//! A dropped job still closes the batch that was open when it was visited.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for packing.

use std::mem;

use serde::{Deserialize, Serialize};

use super::ordering::sort_jobs;
use crate::error::PlanningResult;
use crate::models::{Batch, BatchSchedule, CapacityConstraints, Job};
use crate::validation::validate_batch_input;

/// Input container for batch scheduling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRequest {
    /// Jobs to schedule.
    pub jobs: Vec<Job>,
    /// Per-batch capacity limits.
    pub constraints: CapacityConstraints,
}

/// Greedy batch scheduler bound to a set of capacity limits.
///
/// Holds no state between calls; scheduling is a pure function of the jobs
/// and the limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchScheduler {
    constraints: CapacityConstraints,
}

impl BatchScheduler {
    /// Creates a scheduler for the given limits.
    pub fn new(constraints: CapacityConstraints) -> Self {
        Self { constraints }
    }

    /// Schedules jobs into sequential batches.
    ///
    /// # Errors
    /// [`InvalidConstraint`] for non-positive limits, [`InvalidJob`] for a
    /// non-positive duration. The first detected problem is returned.
    ///
    /// Jobs whose volume exceeds `max_volume` are not errors: they never
    /// appear in the order or the total time and are listed in
    /// [`BatchSchedule::skipped`].
    ///
    /// [`InvalidConstraint`]: crate::error::PlanningError::InvalidConstraint
    /// [`InvalidJob`]: crate::error::PlanningError::InvalidJob
    pub fn schedule(&self, jobs: &[Job]) -> PlanningResult<BatchSchedule> {
        validate_batch_input(jobs, &self.constraints).map_err(|mut errors| errors.remove(0))?;

        let limits = &self.constraints;
        let mut schedule = BatchSchedule::new();
        let mut current = Batch::new();

        for job in sort_jobs(jobs) {
            if current.item_count() >= limits.max_items
                || current.volume + job.volume > limits.max_volume
            {
                close(&mut schedule, &mut current);
            }

            if limits.admits(current.item_count(), current.volume, job.volume) {
                current.push(job.id.as_str(), job.volume, job.duration);
            } else {
                log::warn!(
                    "job '{}' (volume {}) exceeds batch capacity {}; skipped",
                    job.id,
                    job.volume,
                    limits.max_volume
                );
                schedule.skipped.push(job.id.clone());
            }
        }
        close(&mut schedule, &mut current);

        Ok(schedule)
    }

    /// Schedules from a request, using the request's limits.
    pub fn schedule_request(request: &BatchRequest) -> PlanningResult<BatchSchedule> {
        Self::new(request.constraints).schedule(&request.jobs)
    }
}

/// Schedules jobs under `max_volume` / `max_items` limits.
pub fn schedule(jobs: &[Job], max_volume: f64, max_items: usize) -> PlanningResult<BatchSchedule> {
    BatchScheduler::new(CapacityConstraints::new(max_volume, max_items)).schedule(jobs)
}

fn close(schedule: &mut BatchSchedule, current: &mut Batch) {
    if current.is_empty() {
        return;
    }
    let batch = mem::take(current);
    log::debug!(
        "closing batch {} ({} jobs, volume {}, time {})",
        schedule.batch_count(),
        batch.item_count(),
        batch.volume,
        batch.max_duration
    );
    schedule.close_batch(batch);
}
