//! Production planning kernels for the U-Engine ecosystem.
//!
//! Two independent optimizers for planning discrete production work:
//! a greedy capacity-bounded batch scheduler and an exact optimal
//! length-partition ("rod cutting") solver with memoized and tabulated
//! strategies.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `CapacityConstraints`, `Batch`,
//!   `BatchSchedule`, `PartitionResult`
//! - **`batching`**: Batch ordering, packing, and plan KPIs
//! - **`partition`**: `PartitionSolver` trait with `MemoizedSolver` and
//!   `TabulatedSolver`
//! - **`validation`**: Input checks (capacity limits, job durations,
//!   partition lengths and price tables)
//! - **`error`**: `PlanningError`
//!
//! All calls are synchronous and pure; nothing is cached across calls.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 15

pub mod batching;
pub mod error;
pub mod models;
pub mod partition;
pub mod validation;

pub use error::{PlanningError, PlanningResult};
