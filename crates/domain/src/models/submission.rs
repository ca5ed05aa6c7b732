//! Submission domain models.
//!
//! Submissions are read-only from the sweep's perspective: a submission
//! waiting for review on the same (course, student) pair blocks the dropout
//! transition.

/// Status of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    WaitingReview,
}

impl SubmissionStatus {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WaitingReview => "WAITING_REVIEW",
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
