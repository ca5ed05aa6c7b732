//! Exam domain models.
//!
//! Exams are read-only from the sweep's perspective: an `IN_PROGRESS` exam
//! for the same (course, student) pair blocks the dropout transition.

/// Status of an exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamStatus {
    InProgress,
}

impl ExamStatus {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "IN_PROGRESS",
        }
    }
}

impl std::fmt::Display for ExamStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
