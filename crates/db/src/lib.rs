pub mod models;
pub mod repositories;
pub mod schema;
pub mod store;

pub mod mock;

use chrono::NaiveDate;
use clinic_core::{errors::ClinicResult, slots::GenerationReport};
use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

use crate::store::{PgStore, PgUnitOfWork};

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Generates appointment slots for `[start, end]` against PostgreSQL and
/// commits them in a single transaction.
pub async fn generate_appointments(
    pool: &DbPool,
    start: NaiveDate,
    end: NaiveDate,
) -> ClinicResult<GenerationReport> {
    let store = PgStore::new(pool.clone());
    let mut uow = PgUnitOfWork::new(pool.clone());

    store.generator().generate(&mut uow, start, end).await
}
