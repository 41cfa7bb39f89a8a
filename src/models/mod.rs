//! Planning domain models.
//!
//! Provides the data types consumed and produced by the batch scheduler
//! and the partition solvers.
//!
//! # Domain Mappings
//!
//! | u-batchplan | 3D Printing | Packaging | Material Cutting |
//! |-------------|-------------|-----------|------------------|
//! | Job | Print model | Parcel | - |
//! | Batch | Build plate | Container load | - |
//! | Segment | - | - | Cut piece |

mod batch;
mod capacity;
mod job;
mod partition;

pub use batch::{Batch, BatchSchedule};
pub use capacity::CapacityConstraints;
pub use job::Job;
pub use partition::PartitionResult;
