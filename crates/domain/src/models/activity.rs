//! Activity audit log domain model.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Activity description tag written for every dropped-out enrollment.
pub const COURSE_DROPOUT: &str = "COURSE_DROPOUT";

/// An audit log entry recording an action taken on a resource.
///
/// The dropout sweep creates exactly one activity per enrollment it
/// transitions, with `resource_id` pointing at the enrollment and `user_id`
/// at the student. Activities are append-only; this worker never updates or
/// deletes them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Activity {
    pub id: i64,
    /// Id of the resource the action was taken on (here: the enrollment).
    pub resource_id: i64,
    /// Id of the user the action concerns (here: the student).
    pub user_id: i64,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Activity {
    /// Whether this activity records a course dropout.
    pub fn is_course_dropout(&self) -> bool {
        self.description == COURSE_DROPOUT
    }
}
