//! Background jobs and their scheduler.

pub mod dropout_sweep;
pub mod pool_metrics;
pub mod scheduler;

pub use dropout_sweep::DropoutSweepJob;
pub use pool_metrics::PoolMetricsJob;
pub use scheduler::{Job, JobFrequency, JobScheduler};
