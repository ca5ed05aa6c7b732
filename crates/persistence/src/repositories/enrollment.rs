//! Enrollment repository for database operations.
//!
//! Carries the storage side of the dropout sweep: cutoff resolution,
//! candidate scanning and the per-page transactional write.

use chrono::{DateTime, Utc};
use domain::models::{
    DropoutCandidate, Enrollment, EnrollmentStatus, ExamStatus, SubmissionStatus, COURSE_DROPOUT,
};
use sqlx::PgPool;

use crate::entities::EnrollmentEntity;
use crate::metrics::QueryTimer;

/// Repository for enrollment database operations.
#[derive(Clone)]
pub struct EnrollmentRepository {
    pool: PgPool,
}

impl EnrollmentRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Deadline of the most recently created enrollment, used as the sweep
    /// cutoff. Returns `None` when the table is empty.
    pub async fn latest_deadline(&self) -> Result<Option<DateTime<Utc>>, sqlx::Error> {
        let timer = QueryTimer::new("latest_enrollment_deadline");
        let deadline = sqlx::query_scalar::<_, DateTime<Utc>>(
            r#"
            SELECT deadline_at
            FROM enrollments
            ORDER BY id DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;
        timer.record();
        Ok(deadline)
    }

    /// Count active enrollments whose deadline has passed, before exclusion
    /// filtering.
    pub async fn count_candidates(&self, cutoff: DateTime<Utc>) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("count_dropout_candidates");
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM enrollments
            WHERE deadline_at <= $1
              AND status = $2
            "#,
        )
        .bind(cutoff)
        .bind(EnrollmentStatus::Active.as_str())
        .fetch_one(&self.pool)
        .await?;
        timer.record();
        Ok(count as u64)
    }

    /// Fetch one page of qualifying (enrollment, student) pairs.
    ///
    /// A pair qualifies when the deadline has passed, the enrollment is
    /// still active, and no in-progress exam or review-pending submission
    /// exists for the same (course, student). Pages are strictly ordered by
    /// enrollment id; `after_id` is the exclusive lower bound (pass 0 for
    /// the first page).
    pub async fn candidate_page(
        &self,
        cutoff: DateTime<Utc>,
        after_id: i64,
        limit: i64,
    ) -> Result<Vec<DropoutCandidate>, sqlx::Error> {
        let timer = QueryTimer::new("dropout_candidate_page");
        let rows = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT DISTINCT e.id, e.student_id
            FROM enrollments e
            WHERE e.deadline_at <= $1
              AND e.status = $2
              AND e.id > $3
              AND NOT EXISTS (
                  SELECT 1
                  FROM exams x
                  WHERE x.course_id = e.course_id
                    AND x.student_id = e.student_id
                    AND x.status = $4
              )
              AND NOT EXISTS (
                  SELECT 1
                  FROM submissions s
                  WHERE s.course_id = e.course_id
                    AND s.student_id = e.student_id
                    AND s.status = $5
              )
            ORDER BY e.id
            LIMIT $6
            "#,
        )
        .bind(cutoff)
        .bind(EnrollmentStatus::Active.as_str())
        .bind(after_id)
        .bind(ExamStatus::InProgress.as_str())
        .bind(SubmissionStatus::WaitingReview.as_str())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        timer.record();

        Ok(rows
            .into_iter()
            .map(|(enrollment_id, student_id)| DropoutCandidate {
                enrollment_id,
                student_id,
            })
            .collect())
    }

    /// Drop out one page of candidates as a single transaction.
    ///
    /// The status update is conditional on the row still being active, and
    /// activity rows are inserted only for the rows the update actually
    /// claimed, so a rerun or a racing status mutator can never produce a
    /// duplicate activity. Returns the number of enrollments transitioned.
    pub async fn drop_out_page(
        &self,
        candidates: &[DropoutCandidate],
        now: DateTime<Utc>,
    ) -> Result<u64, sqlx::Error> {
        if candidates.is_empty() {
            return Ok(0);
        }

        let ids: Vec<i64> = candidates.iter().map(|c| c.enrollment_id).collect();

        let timer = QueryTimer::new("drop_out_page");
        let mut tx = self.pool.begin().await?;

        let claimed = sqlx::query_as::<_, (i64, i64)>(
            r#"
            UPDATE enrollments
            SET status = $1, updated_at = $2
            WHERE id = ANY($3)
              AND status = $4
            RETURNING id, student_id
            "#,
        )
        .bind(EnrollmentStatus::Dropout.as_str())
        .bind(now)
        .bind(ids)
        .bind(EnrollmentStatus::Active.as_str())
        .fetch_all(&mut *tx)
        .await?;

        if claimed.is_empty() {
            tx.rollback().await?;
            timer.record();
            return Ok(0);
        }

        if claimed.len() < candidates.len() {
            tracing::debug!(
                requested = candidates.len(),
                claimed = claimed.len(),
                "Some candidates were no longer active at write time"
            );
        }

        let (resource_ids, user_ids): (Vec<i64>, Vec<i64>) = claimed.into_iter().unzip();
        let dropped = resource_ids.len() as u64;

        sqlx::query(
            r#"
            INSERT INTO activities (resource_id, user_id, description, created_at)
            SELECT pairs.resource_id, pairs.user_id, $3, $4
            FROM UNNEST($1::BIGINT[], $2::BIGINT[]) AS pairs(resource_id, user_id)
            "#,
        )
        .bind(resource_ids)
        .bind(user_ids)
        .bind(COURSE_DROPOUT)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        timer.record();
        Ok(dropped)
    }

    /// Find an enrollment by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Enrollment>, sqlx::Error> {
        let timer = QueryTimer::new("find_enrollment_by_id");
        let entity = sqlx::query_as::<_, EnrollmentEntity>(
            r#"
            SELECT id, student_id, course_id, status, deadline_at, created_at, updated_at
            FROM enrollments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        timer.record();
        Ok(entity.map(Into::into))
    }
}
