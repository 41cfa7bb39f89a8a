//! Capacity-bounded batch scheduling.
//!
//! Orders jobs by priority and volume ratio, then packs them greedily into
//! sequential batches limited by cumulative volume and item count. Jobs in
//! a batch run in parallel; batches run one after another.
//!
//! # Usage
//!
//! ```
//! use u_batchplan::batching::BatchScheduler;
//! use u_batchplan::models::{CapacityConstraints, Job};
//!
//! let jobs = vec![
//!     Job::new("M1", 100.0, 1, 120.0),
//!     Job::new("M2", 150.0, 1, 90.0),
//!     Job::new("M3", 120.0, 1, 150.0),
//! ];
//! let scheduler = BatchScheduler::new(CapacityConstraints::new(300.0, 2));
//! let plan = scheduler.schedule(&jobs).unwrap();
//! assert_eq!(plan.order, vec!["M3", "M1", "M2"]);
//! assert_eq!(plan.total_time, 240.0);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Potts & Kovalyov (2000), "Scheduling with batching: A review"

mod kpi;
mod ordering;
mod scheduler;

pub use kpi::BatchKpi;
pub use ordering::{compare_jobs, sort_jobs};
pub use scheduler::{schedule, BatchRequest, BatchScheduler};
