//! Dropout sweep service.
//!
//! One sweep: resolve the cutoff deadline, stream qualifying enrollments in
//! id-ordered pages, drop out each page in its own committed transaction,
//! and report aggregate counts.

use chrono::Utc;
use persistence::metrics::record_sweep_report;
use persistence::repositories::EnrollmentRepository;
use sqlx::PgPool;
use std::time::Instant;
use tracing::{debug, info};

use domain::models::SweepReport;

use crate::error::SweepError;

/// Runs the enrollment dropout sweep.
#[derive(Clone)]
pub struct DropoutSweepService {
    enrollments: EnrollmentRepository,
    batch_size: i64,
}

impl DropoutSweepService {
    /// Create a new sweep service.
    ///
    /// # Arguments
    /// * `pool` - Database connection pool
    /// * `batch_size` - Candidate pairs per page (must be >= 1)
    pub fn new(pool: PgPool, batch_size: i64) -> Self {
        Self {
            enrollments: EnrollmentRepository::new(pool),
            batch_size,
        }
    }

    /// Run one full sweep.
    ///
    /// Fails with [`SweepError::NoEnrollments`] before any write when the
    /// enrollments table is empty. A storage failure mid-run stops the
    /// sweep; pages committed before the failure stay committed, and a
    /// rerun picks up the remainder (the ACTIVE-only filter makes reruns
    /// no-ops for rows already transitioned).
    pub async fn run(&self) -> Result<SweepReport, SweepError> {
        let started = Instant::now();

        let cutoff = self
            .enrollments
            .latest_deadline()
            .await?
            .ok_or(SweepError::NoEnrollments)?;

        // One timestamp for the whole sweep, so every page stamps the same
        // updated_at/created_at.
        let now = Utc::now();

        let initial = self.enrollments.count_candidates(cutoff).await?;
        info!(cutoff = %cutoff, initial, "Starting dropout sweep");

        let mut dropped_out: u64 = 0;
        let mut cursor: i64 = 0;

        loop {
            let page = self
                .enrollments
                .candidate_page(cutoff, cursor, self.batch_size)
                .await?;

            let Some(last) = page.last() else {
                break;
            };
            cursor = last.enrollment_id;

            let claimed = self.enrollments.drop_out_page(&page, now).await?;
            dropped_out += claimed;

            debug!(
                page_len = page.len(),
                claimed,
                cursor,
                "Committed dropout page"
            );

            if (page.len() as i64) < self.batch_size {
                break;
            }
        }

        let report = SweepReport {
            initial,
            dropped_out,
        };
        record_sweep_report(&report);

        info!(
            initial = report.initial,
            dropped_out = report.dropped_out,
            excluded = report.excluded(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Dropout sweep complete"
        );

        Ok(report)
    }
}
