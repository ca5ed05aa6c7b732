use thiserror::Error;

/// Errors surfaced by the dropout sweep.
#[derive(Debug, Error)]
pub enum SweepError {
    /// The enrollments table is empty, so no cutoff deadline can be
    /// resolved. The sweep aborts before any write.
    #[error("no enrollments exist; cannot resolve a dropout cutoff")]
    NoEnrollments,

    /// A storage failure. The failing page's transaction is rolled back and
    /// the sweep stops; pages committed before it remain valid.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
