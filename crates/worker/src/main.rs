use std::time::Duration;

use anyhow::Result;
use tracing::info;

use dropout_worker::config::{Config, RunMode};
use dropout_worker::jobs::{DropoutSweepJob, JobScheduler, PoolMetricsJob};
use dropout_worker::logging;
use dropout_worker::services::DropoutSweepService;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    logging::init_logging(&config.logging);

    info!("Starting dropout worker v{}", env!("CARGO_PKG_VERSION"));

    // Create database pool
    let pool = persistence::db::create_pool(&config.database.pool_config()).await?;

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../persistence/src/migrations").run(&pool).await?;
    info!("Migrations completed");

    let service = DropoutSweepService::new(pool.clone(), config.sweep.batch_size);

    match config.sweep.run_mode {
        RunMode::Once => {
            // Single sweep for an external scheduler; a failure (including
            // an empty enrollments table) exits non-zero.
            let report = service.run().await?;
            info!(
                initial = report.initial,
                dropped_out = report.dropped_out,
                excluded = report.excluded(),
                "Sweep finished"
            );
        }
        RunMode::Scheduled => {
            let mut scheduler = JobScheduler::new();
            scheduler.register(DropoutSweepJob::new(service, config.sweep.interval_minutes));
            scheduler.register(PoolMetricsJob::new(pool.clone()));
            scheduler.start();

            tokio::signal::ctrl_c().await?;
            info!("Shutdown signal received");

            scheduler.shutdown();
            scheduler.wait_for_shutdown(Duration::from_secs(30)).await;
        }
    }

    Ok(())
}
