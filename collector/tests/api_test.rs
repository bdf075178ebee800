use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

// Requires a running collector (and database) on localhost:8080:
//   DATABASE_URL=... cargo run -p collector
// then: cargo test -p collector -- --ignored

const BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Deserialize)]
struct StoredMeasurement {
    id: i64,
    device_id: String,
    temperature: f64,
    humidity: f64,
    timestamp: DateTime<Utc>,
}

#[tokio::test]
#[ignore]
async fn test_post_measurement_returns_stored_record() {
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/measurements", BASE_URL))
        .json(&json!({
            "device_id": "api-test-dev",
            "temperature": 22.5,
            "humidity": 55.0
        }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 201);

    let stored: StoredMeasurement = response.json().await.expect("invalid response body");
    assert!(stored.id > 0);
    assert_eq!(stored.device_id, "api-test-dev");
    assert_eq!(stored.temperature, 22.5);
    assert_eq!(stored.humidity, 55.0);

    // Server-assigned timestamp should be recent
    let age = Utc::now() - stored.timestamp;
    assert!(age.num_seconds().abs() < 60);
}

#[tokio::test]
#[ignore]
async fn test_post_missing_field_rejected() {
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/measurements", BASE_URL))
        .json(&json!({
            "device_id": "api-test-dev",
            "temperature": 22.5
        }))
        .send()
        .await
        .expect("request failed");

    assert!(response.status().is_client_error());
}

#[tokio::test]
#[ignore]
async fn test_post_out_of_range_rejected() {
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/measurements", BASE_URL))
        .json(&json!({
            "device_id": "api-test-dev",
            "temperature": 150.0,
            "humidity": 55.0
        }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_list_measurements_filtered_by_device() {
    let client = reqwest::Client::new();

    client
        .post(format!("{}/measurements", BASE_URL))
        .json(&json!({
            "device_id": "api-test-list-dev",
            "temperature": 20.0,
            "humidity": 40.0
        }))
        .send()
        .await
        .expect("request failed");

    let response = client
        .get(format!(
            "{}/measurements?device_id=api-test-list-dev&limit=10",
            BASE_URL
        ))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("invalid response body");
    let data = body["data"].as_array().expect("data array missing");
    assert!(!data.is_empty());
    for record in data {
        assert_eq!(record["device_id"], "api-test-list-dev");
    }
}
