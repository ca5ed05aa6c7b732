//! Activity entity.

use chrono::{DateTime, Utc};
use domain::models::Activity;
use sqlx::FromRow;

/// Database entity for audit activity rows.
#[derive(Debug, Clone, FromRow)]
pub struct ActivityEntity {
    pub id: i64,
    pub resource_id: i64,
    pub user_id: i64,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<ActivityEntity> for Activity {
    fn from(entity: ActivityEntity) -> Self {
        Activity {
            id: entity.id,
            resource_id: entity.resource_id,
            user_id: entity.user_id,
            description: entity.description,
            created_at: entity.created_at,
        }
    }
}
