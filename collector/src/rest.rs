use crate::db::insert_measurement;
use crate::errors::Error;
use crate::metrics::{INSERT_LATENCY_SECONDS, MEASUREMENTS_TOTAL, REJECTED_TOTAL};
use crate::model::{Measurement, MeasurementPage, NewMeasurement};
use crate::validate::validate;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use tokio::time::Instant;
use tracing::{debug, error};

#[derive(Debug, Clone)]
struct AppState {
    pool: PgPool,
}

#[derive(Debug, Deserialize)]
pub struct MeasurementQuery {
    device_id: Option<String>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    limit: Option<usize>,
    offset: Option<usize>,
}

pub fn create_router(pool: PgPool) -> Router {
    let state = AppState { pool };

    Router::new()
        .route("/measurements", post(create_measurement).get(list_measurements))
        .with_state(state)
}

async fn create_measurement(
    State(state): State<AppState>,
    Json(new): Json<NewMeasurement>,
) -> Result<(StatusCode, Json<Measurement>), ApiError> {
    if let Err(e) = validate(&new) {
        REJECTED_TOTAL.inc();
        return Err(e.into());
    }

    let start = Instant::now();
    let stored = insert_measurement(&state.pool, &new).await?;
    INSERT_LATENCY_SECONDS.observe(start.elapsed().as_secs_f64());
    MEASUREMENTS_TOTAL.inc();

    debug!(
        "Stored measurement id={} from device {}",
        stored.id, stored.device_id
    );

    Ok((StatusCode::CREATED, Json(stored)))
}

async fn list_measurements(
    State(state): State<AppState>,
    Query(params): Query<MeasurementQuery>,
) -> Result<Json<MeasurementPage>, ApiError> {
    let limit = params.limit.unwrap_or(100).min(1000);
    let offset = params.offset.unwrap_or(0);

    // Build query with filters
    let mut conditions = Vec::new();
    let mut bind_count = 0;

    if params.device_id.is_some() {
        bind_count += 1;
        conditions.push(format!("device_id = ${}", bind_count));
    }

    if params.start.is_some() {
        bind_count += 1;
        conditions.push(format!("ts >= ${}", bind_count));
    }

    if params.end.is_some() {
        bind_count += 1;
        conditions.push(format!("ts <= ${}", bind_count));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    let query = format!(
        "SELECT id, device_id, temperature, humidity, ts AS timestamp
         FROM measurements
         {}
         ORDER BY ts DESC
         LIMIT {} OFFSET {}",
        where_clause, limit, offset
    );

    let mut query_builder = sqlx::query_as::<_, Measurement>(&query);

    if let Some(device_id) = &params.device_id {
        query_builder = query_builder.bind(device_id);
    }
    if let Some(start) = &params.start {
        query_builder = query_builder.bind(start);
    }
    if let Some(end) = &params.end {
        query_builder = query_builder.bind(end);
    }

    let measurements = query_builder.fetch_all(&state.pool).await.map_err(|e| {
        error!("Database error: {}", e);
        ApiError::Internal(anyhow::anyhow!("Database query failed: {}", e))
    })?;

    Ok(Json(MeasurementPage {
        total: measurements.len(),
        data: measurements,
        limit,
        offset,
    }))
}

pub enum ApiError {
    Validation(String),
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg).into_response()
            }
            ApiError::Internal(err) => {
                error!("API error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Internal server error: {}", err),
                )
                    .into_response()
            }
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation(msg) => ApiError::Validation(msg),
            other => ApiError::Internal(other.into()),
        }
    }
}
