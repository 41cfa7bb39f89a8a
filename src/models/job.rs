//! Job model.
//!
//! A job is a single unit of production work: it occupies some volume of a
//! batch and takes a fixed duration to complete. Jobs sharing a batch run
//! in parallel, so a batch lasts as long as its slowest job.

use serde::{Deserialize, Serialize};

/// A job submitted to the batch scheduler.
///
/// Immutable once submitted. The scheduler never retains jobs between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Opaque job identifier.
    pub id: String,
    /// Capacity consumed inside a batch (non-negative).
    pub volume: f64,
    /// Scheduling priority (lower = scheduled earlier).
    pub priority: i32,
    /// Time to complete (must be positive).
    #[serde(alias = "print_time")]
    pub duration: f64,
}

impl Job {
    /// Creates a job.
    pub fn new(id: impl Into<String>, volume: f64, priority: i32, duration: f64) -> Self {
        Self {
            id: id.into(),
            volume,
            priority,
            duration,
        }
    }

    /// Volume consumed per unit of duration.
    ///
    /// Smaller ratios are scheduled first within equal priority.
    #[inline]
    pub fn volume_ratio(&self) -> f64 {
        self.volume / self.duration
    }
}
