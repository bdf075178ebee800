use crate::reading::Reading;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum SendError {
    #[error("Could not connect to API: {0}")]
    Connection(reqwest::Error),

    #[error("Request timed out: {0}")]
    Timeout(reqwest::Error),

    #[error("API returned {status}: {body}")]
    Rejected { status: StatusCode, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
struct MeasurementBody<'a> {
    device_id: &'a str,
    temperature: f64,
    humidity: f64,
}

/// The record the collector stores, echoed back on a successful POST.
#[derive(Debug, Deserialize)]
pub struct StoredMeasurement {
    pub id: i64,
    pub device_id: String,
    pub temperature: f64,
    pub humidity: f64,
    pub timestamp: DateTime<Utc>,
}

pub struct ApiClient {
    http: Client,
    base_url: String,
    device_id: String,
}

impl ApiClient {
    pub fn new(base_url: String, device_id: String) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url,
            device_id,
        })
    }

    /// Posts one reading. Returns the stored record on HTTP 201.
    pub async fn post_measurement(&self, reading: &Reading) -> Result<StoredMeasurement, SendError> {
        let body = MeasurementBody {
            device_id: &self.device_id,
            temperature: reading.temperature,
            humidity: reading.humidity,
        };

        let response = self
            .http
            .post(format!("{}/measurements", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    SendError::Connection(e)
                } else if e.is_timeout() {
                    SendError::Timeout(e)
                } else {
                    SendError::Http(e)
                }
            })?;

        let status = response.status();
        if status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            return Err(SendError::Rejected { status, body });
        }

        Ok(response.json::<StoredMeasurement>().await?)
    }
}
