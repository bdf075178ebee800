use crate::errors::Result;
use crate::metrics::DB_FAILURES_TOTAL;
use crate::model::{Measurement, NewMeasurement};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{error, info};

pub async fn make_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url)
        .await?;

    info!("Database connection established");
    info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| crate::errors::Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
    info!("Migrations completed");

    Ok(pool)
}

/// Inserts a single measurement; the database assigns id and timestamp.
pub async fn insert_measurement(pool: &PgPool, new: &NewMeasurement) -> Result<Measurement> {
    let query = r#"
        INSERT INTO measurements (device_id, temperature, humidity)
        VALUES ($1, $2, $3)
        RETURNING id, device_id, temperature, humidity, ts AS timestamp
        "#;

    let stored = sqlx::query_as::<_, Measurement>(query)
        .bind(&new.device_id)
        .bind(new.temperature)
        .bind(new.humidity)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            DB_FAILURES_TOTAL.inc();
            error!("Measurement insert failed: {}", e);
            e
        })?;

    Ok(stored)
}
