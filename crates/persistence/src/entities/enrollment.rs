//! Enrollment entity.

use chrono::{DateTime, Utc};
use domain::models::Enrollment;
use sqlx::FromRow;

/// Database entity for course enrollments.
#[derive(Debug, Clone, FromRow)]
pub struct EnrollmentEntity {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    /// Stored as text; the sweep only ever writes `ACTIVE` -> `DROPOUT`.
    pub status: String,
    pub deadline_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EnrollmentEntity> for Enrollment {
    fn from(entity: EnrollmentEntity) -> Self {
        Enrollment {
            id: entity.id,
            student_id: entity.student_id,
            course_id: entity.course_id,
            status: entity.status,
            deadline_at: entity.deadline_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::EnrollmentStatus;

    #[test]
    fn test_entity_to_domain() {
        let now = Utc::now();
        let entity = EnrollmentEntity {
            id: 5,
            student_id: 11,
            course_id: 3,
            status: "ACTIVE".to_string(),
            deadline_at: now,
            created_at: now,
            updated_at: now,
        };

        let enrollment: Enrollment = entity.into();
        assert_eq!(enrollment.id, 5);
        assert_eq!(enrollment.parsed_status(), Some(EnrollmentStatus::Active));
    }
}
