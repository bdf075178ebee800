mod client;
mod reading;

use clap::Parser;
use client::ApiClient;
use reading::Reading;
use std::time::Duration;
use tracing::{error, info, warn};

/// Reads temperature/humidity and posts each measurement to the collector API.
#[derive(Debug, Parser)]
#[command(name = "sensor")]
struct Args {
    /// Base URL of the collector API
    #[arg(long, env = "API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    /// Device identifier; generated if not set
    #[arg(long, env = "DEVICE_ID")]
    device_id: Option<String>,

    /// Seconds between readings
    #[arg(long, env = "INTERVAL_SECS", default_value_t = 900)]
    interval_secs: u64,

    /// Send a single reading and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let device_id = args
        .device_id
        .unwrap_or_else(|| format!("sensor-{}", uuid::Uuid::new_v4()));

    info!("Starting sensor client");
    info!(
        "API: {}, Device ID: {}, Interval: {}s",
        args.api_url, device_id, args.interval_secs
    );

    let api = match ApiClient::new(args.api_url.clone(), device_id) {
        Ok(api) => api,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    loop {
        let reading = {
            let mut rng = rand::thread_rng();
            Reading::sample(&mut rng)
        };

        info!(
            "Reading: {:.1}C, {:.1}%",
            reading.temperature, reading.humidity
        );

        // Failed sends are dropped; the next interval produces a fresh reading
        match api.post_measurement(&reading).await {
            Ok(stored) => {
                info!("Sent: stored as id {} at {}", stored.id, stored.timestamp);
            }
            Err(e) => {
                warn!("Discarding reading: {}", e);
            }
        }

        if args.once {
            break;
        }

        info!("Next reading in {}s", args.interval_secs);
        tokio::time::sleep(Duration::from_secs(args.interval_secs)).await;
    }
}
