//! Common test utilities for integration tests.
//!
//! These tests run against a real PostgreSQL database. They connect via the
//! `TEST_DATABASE_URL` environment variable and skip cleanly when it is not
//! set, so the suite passes on machines without Postgres.

// Helper utilities intentionally available to all integration tests.
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::OnceLock;
use std::time::Duration;
use tokio::sync::Mutex;

/// The sweep is a whole-table operation, so database tests serialize on
/// this lock instead of racing each other's seed data.
pub fn db_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// Connect to the test database and apply migrations, or `None` when
/// `TEST_DATABASE_URL` is unset.
pub async fn try_create_test_pool() -> Option<PgPool> {
    let database_url = std::env::var("TEST_DATABASE_URL").ok()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("../persistence/src/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    Some(pool)
}

/// Wipe all sweep tables and restart id sequences.
pub async fn reset_tables(pool: &PgPool) {
    sqlx::query("TRUNCATE enrollments, exams, submissions, activities RESTART IDENTITY")
        .execute(pool)
        .await
        .expect("Failed to reset tables");
}

/// Insert an enrollment and return its id.
pub async fn seed_enrollment(
    pool: &PgPool,
    student_id: i64,
    course_id: i64,
    status: &str,
    deadline_at: DateTime<Utc>,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO enrollments (student_id, course_id, status, deadline_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(student_id)
    .bind(course_id)
    .bind(status)
    .bind(deadline_at)
    .fetch_one(pool)
    .await
    .expect("Failed to seed enrollment")
}

/// Insert an exam for a (course, student) pair.
pub async fn seed_exam(pool: &PgPool, student_id: i64, course_id: i64, status: &str) {
    sqlx::query("INSERT INTO exams (student_id, course_id, status) VALUES ($1, $2, $3)")
        .bind(student_id)
        .bind(course_id)
        .bind(status)
        .execute(pool)
        .await
        .expect("Failed to seed exam");
}

/// Insert a submission for a (course, student) pair.
pub async fn seed_submission(pool: &PgPool, student_id: i64, course_id: i64, status: &str) {
    sqlx::query("INSERT INTO submissions (student_id, course_id, status) VALUES ($1, $2, $3)")
        .bind(student_id)
        .bind(course_id)
        .bind(status)
        .execute(pool)
        .await
        .expect("Failed to seed submission");
}

/// Current status string of an enrollment.
pub async fn enrollment_status(pool: &PgPool, id: i64) -> String {
    sqlx::query_scalar::<_, String>("SELECT status FROM enrollments WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .expect("Failed to fetch enrollment status")
}

/// Student ids of all dropped-out enrollments, sorted.
pub async fn dropped_student_ids(pool: &PgPool) -> Vec<i64> {
    sqlx::query_scalar::<_, i64>(
        "SELECT student_id FROM enrollments WHERE status = 'DROPOUT' ORDER BY student_id",
    )
    .fetch_all(pool)
    .await
    .expect("Failed to fetch dropped-out student ids")
}
