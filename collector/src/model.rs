use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored temperature/humidity reading. `id` and `timestamp` are assigned
/// by the server at insert time.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Measurement {
    pub id: i64,
    pub device_id: String,
    pub temperature: f64,
    pub humidity: f64,
    pub timestamp: DateTime<Utc>,
}

/// Request body for `POST /measurements`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMeasurement {
    pub device_id: String,
    pub temperature: f64,
    pub humidity: f64,
}

/// REST API response wrapper for the list endpoint
#[derive(Debug, Serialize)]
pub struct MeasurementPage {
    pub data: Vec<Measurement>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}
