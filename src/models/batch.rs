//! Batch plan (solution) model.
//!
//! A batch plan is the ordered list of closed batches produced by the
//! batch scheduler, together with the commit order of job IDs, the total
//! time, and the jobs that could not be placed in any batch.

use serde::{Deserialize, Serialize};

/// A closed batch of jobs processed concurrently.
///
/// A batch lasts as long as its slowest job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// Job IDs in placement order.
    pub job_ids: Vec<String>,
    /// Cumulative volume of the batch.
    pub volume: f64,
    /// Longest job duration in the batch.
    pub max_duration: f64,
    /// Sum of job durations (the time the batch would take run serially).
    pub duration_sum: f64,
}

impl Batch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a job to the batch.
    pub fn push(&mut self, id: impl Into<String>, volume: f64, duration: f64) {
        self.job_ids.push(id.into());
        self.volume += volume;
        self.max_duration = self.max_duration.max(duration);
        self.duration_sum += duration;
    }

    /// Number of jobs in the batch.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.job_ids.len()
    }

    /// Whether the batch holds no jobs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.job_ids.is_empty()
    }
}

/// Result of a batch scheduling call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSchedule {
    /// Job IDs in commit order across all batches.
    pub order: Vec<String>,
    /// Sum of each batch's maximum job duration.
    pub total_time: f64,
    /// Closed batches in execution order.
    pub batches: Vec<Batch>,
    /// Jobs dropped because they fit in no batch, in visit order.
    pub skipped: Vec<String>,
}

impl BatchSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a closed batch, extending the commit order and total time.
    ///
    /// Empty batches are ignored.
    pub fn close_batch(&mut self, batch: Batch) {
        if batch.is_empty() {
            return;
        }
        self.order.extend(batch.job_ids.iter().cloned());
        self.total_time += batch.max_duration;
        self.batches.push(batch);
    }

    /// Number of closed batches.
    #[inline]
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Number of scheduled jobs.
    #[inline]
    pub fn scheduled_count(&self) -> usize {
        self.order.len()
    }
}
