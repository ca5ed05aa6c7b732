//! Dropout sweep background job.

use super::scheduler::{Job, JobFrequency};
use crate::services::DropoutSweepService;

/// Background job running the dropout sweep on an interval.
pub struct DropoutSweepJob {
    service: DropoutSweepService,
    interval_minutes: u64,
}

impl DropoutSweepJob {
    /// Create a new sweep job.
    pub fn new(service: DropoutSweepService, interval_minutes: u64) -> Self {
        Self {
            service,
            interval_minutes,
        }
    }
}

#[async_trait::async_trait]
impl Job for DropoutSweepJob {
    fn name(&self) -> &'static str {
        "dropout_sweep"
    }

    fn frequency(&self) -> JobFrequency {
        JobFrequency::Minutes(self.interval_minutes)
    }

    fn run_on_start(&self) -> bool {
        // Resume immediately after a restart instead of waiting a full
        // interval.
        true
    }

    async fn execute(&self) -> anyhow::Result<()> {
        self.service.run().await?;
        Ok(())
    }
}
