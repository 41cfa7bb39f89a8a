//! Batch plan quality metrics (KPIs).
//!
//! Computes performance indicators from a completed batch plan and the
//! capacity limits it was built under.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Batch Count | Number of closed batches |
//! | Volume Utilization | Mean of batch volume / max_volume |
//! | Item Utilization | Mean of batch items / max_items |
//! | Serial Time | Sum of all scheduled job durations |
//! | Parallel Speedup | Serial time / total time |
//! | Skip Rate | Fraction of jobs dropped as unplaceable |

use serde::Serialize;

use crate::models::{BatchSchedule, CapacityConstraints};

/// Batch plan performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchKpi {
    /// Number of closed batches.
    pub batch_count: usize,
    /// Number of scheduled jobs.
    pub scheduled_count: usize,
    /// Number of skipped jobs.
    pub skipped_count: usize,
    /// Total time of the plan.
    pub total_time: f64,
    /// Time the scheduled jobs would take run one by one.
    pub serial_time: f64,
    /// Average volume fill across batches (0.0..1.0).
    pub avg_volume_utilization: f64,
    /// Average item fill across batches (0.0..1.0).
    pub avg_item_utilization: f64,
}

impl BatchKpi {
    /// Computes KPIs from a plan and its capacity limits.
    pub fn calculate(schedule: &BatchSchedule, constraints: &CapacityConstraints) -> Self {
        let batch_count = schedule.batch_count();
        let serial_time = schedule.batches.iter().map(|b| b.duration_sum).sum();

        let (avg_volume_utilization, avg_item_utilization) = if batch_count == 0 {
            (0.0, 0.0)
        } else {
            let volume: f64 = schedule
                .batches
                .iter()
                .map(|b| b.volume / constraints.max_volume)
                .sum();
            let items: f64 = schedule
                .batches
                .iter()
                .map(|b| b.item_count() as f64 / constraints.max_items as f64)
                .sum();
            (volume / batch_count as f64, items / batch_count as f64)
        };

        Self {
            batch_count,
            scheduled_count: schedule.scheduled_count(),
            skipped_count: schedule.skipped.len(),
            total_time: schedule.total_time,
            serial_time,
            avg_volume_utilization,
            avg_item_utilization,
        }
    }

    /// Serial time divided by plan time (1.0 for an empty plan).
    pub fn parallel_speedup(&self) -> f64 {
        if self.total_time > 0.0 {
            self.serial_time / self.total_time
        } else {
            1.0
        }
    }

    /// Fraction of submitted jobs that were skipped.
    pub fn skip_rate(&self) -> f64 {
        let submitted = self.scheduled_count + self.skipped_count;
        if submitted == 0 {
            0.0
        } else {
            self.skipped_count as f64 / submitted as f64
        }
    }
}
