//! One-shot slot generation job, meant to be run daily by cron or a
//! scheduler. Covers today plus `GENERATION_HORIZON_DAYS - 1` days.

use chrono::{Duration, Local};
use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use clinic_api::config::ApiConfig;
use clinic_db::{create_pool, generate_appointments, schema::initialize_database};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let config = ApiConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let db_pool = create_pool(&config.database_url).await?;
    initialize_database(&db_pool).await?;

    let start = Local::now().date_naive();
    let end = start + Duration::days(i64::from(config.generation_horizon_days.saturating_sub(1)));

    let report = generate_appointments(&db_pool, start, end)
        .await
        .wrap_err_with(|| format!("Appointment generation for {} to {} failed", start, end))?;

    info!(
        "Created {} appointments between {} and {}",
        report.created_count, start, end
    );

    Ok(())
}
