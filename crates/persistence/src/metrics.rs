//! Database and sweep metrics collection.
//!
//! Records into the `metrics` facade; the embedding environment decides
//! whether a recorder is installed.

use domain::models::SweepReport;
use metrics::{counter, gauge, histogram};
use sqlx::PgPool;
use std::time::Instant;

/// Record database query duration.
pub fn record_query_duration(query_name: &str, duration_secs: f64) {
    histogram!(
        "db_query_duration_seconds",
        "query" => query_name.to_string()
    )
    .record(duration_secs);
}

/// Record database connection pool gauges.
///
/// Call periodically to track pool health.
pub fn record_pool_metrics(pool: &PgPool) {
    let size = pool.size() as usize;
    let idle = pool.num_idle();
    let active = size.saturating_sub(idle);

    gauge!("db_connections_active").set(active as f64);
    gauge!("db_connections_idle").set(idle as f64);
    gauge!("db_connections_total").set(size as f64);
}

/// Record the aggregate counts of one completed dropout sweep.
pub fn record_sweep_report(report: &SweepReport) {
    counter!("dropout_sweep_candidates_total").increment(report.initial);
    counter!("dropout_sweep_dropped_total").increment(report.dropped_out);
    counter!("dropout_sweep_excluded_total").increment(report.excluded());
}

/// Times a database operation and records its duration on `record()`.
///
/// Usage:
/// ```ignore
/// let timer = QueryTimer::new("latest_enrollment_deadline");
/// let result = sqlx::query_scalar(...).fetch_optional(&pool).await?;
/// timer.record();
/// ```
pub struct QueryTimer {
    query_name: &'static str,
    start: Instant,
}

impl QueryTimer {
    /// Create a new timer for the given query name.
    pub fn new(query_name: &'static str) -> Self {
        Self {
            query_name,
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to metrics.
    pub fn record(self) {
        let duration = self.start.elapsed().as_secs_f64();
        record_query_duration(self.query_name, duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_timer_creation() {
        let timer = QueryTimer::new("test_query");
        assert_eq!(timer.query_name, "test_query");
    }

    #[test]
    fn test_record_sweep_report_accepts_empty() {
        // Recording into the facade with no recorder installed is a no-op.
        record_sweep_report(&SweepReport::default());
    }
}
