//! Course enrollment domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a course enrollment.
///
/// Only the two statuses the dropout sweep touches get dedicated variants.
/// Any other status an enrollment may carry is opaque to this worker and is
/// left untouched in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    Active,
    Dropout,
}

impl EnrollmentStatus {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Dropout => "DROPOUT",
        }
    }

    /// Parse from database string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ACTIVE" => Some(Self::Active),
            "DROPOUT" => Some(Self::Dropout),
            _ => None,
        }
    }
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A student's enrollment in a course.
///
/// `id` is monotonically increasing and doubles as the sweep's pagination
/// cursor. `deadline_at` is compared against the sweep cutoff.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    /// Raw status string; statuses outside the sweep's vocabulary pass
    /// through unchanged.
    pub status: String,
    pub deadline_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Enrollment {
    /// The parsed status, if it is one the sweep understands.
    pub fn parsed_status(&self) -> Option<EnrollmentStatus> {
        EnrollmentStatus::parse(&self.status)
    }

    /// Whether this enrollment is terminal for the dropout process.
    pub fn is_dropped_out(&self) -> bool {
        self.parsed_status() == Some(EnrollmentStatus::Dropout)
    }
}
