//! Activity repository for database operations.
//!
//! Read-only audit queries. Activity rows for dropouts are written inside
//! the enrollment repository's page transaction, never here, so the
//! exactly-once contract has a single write path.

use domain::models::{Activity, COURSE_DROPOUT};
use sqlx::PgPool;

use crate::entities::ActivityEntity;
use crate::metrics::QueryTimer;

/// Repository for activity database operations.
#[derive(Clone)]
pub struct ActivityRepository {
    pool: PgPool,
}

impl ActivityRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List activities recorded against a resource, oldest first.
    pub async fn list_for_resource(&self, resource_id: i64) -> Result<Vec<Activity>, sqlx::Error> {
        let timer = QueryTimer::new("list_activities_for_resource");
        let entities = sqlx::query_as::<_, ActivityEntity>(
            r#"
            SELECT id, resource_id, user_id, description, created_at
            FROM activities
            WHERE resource_id = $1
            ORDER BY id
            "#,
        )
        .bind(resource_id)
        .fetch_all(&self.pool)
        .await?;
        timer.record();
        Ok(entities.into_iter().map(Into::into).collect())
    }

    /// Total number of course-dropout activities on record.
    pub async fn count_dropout_activities(&self) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("count_dropout_activities");
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM activities
            WHERE description = $1
            "#,
        )
        .bind(COURSE_DROPOUT)
        .fetch_one(&self.pool)
        .await?;
        timer.record();
        Ok(count as u64)
    }
}
