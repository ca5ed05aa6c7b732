//! Dropout sweep reporting types.

use serde::Serialize;

/// A (enrollment, student) pair that qualified for dropout in one page of
/// the candidate scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropoutCandidate {
    pub enrollment_id: i64,
    pub student_id: i64,
}

/// Aggregate counts for one full sweep.
///
/// `initial` counts enrollments matching the deadline filter before
/// exclusion; `dropped_out` counts enrollments actually transitioned.
/// The excluded count is always the difference of the two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SweepReport {
    pub initial: u64,
    pub dropped_out: u64,
}

impl SweepReport {
    /// Enrollments that matched the deadline filter but were held back by a
    /// blocking exam or submission.
    pub fn excluded(&self) -> u64 {
        self.initial.saturating_sub(self.dropped_out)
    }
}
