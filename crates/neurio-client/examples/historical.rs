//! Fetch the last 24 hours of samples at hourly granularity and print a
//! small consumption table.
//!
//! Run with: `cargo run --example historical`

use chrono::{Duration, SecondsFormat, Utc};
use neurio_client::models::{ApiFailure, Sample};
use neurio_client::NeurioClient;
use neurio_core::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let client = NeurioClient::connect(config).await?;

    let sensor_id = std::env::var("NEURIO_SENSOR_ID")?;
    let start = (Utc::now() - Duration::days(1)).to_rfc3339_opts(SecondsFormat::Secs, true);

    let response = client
        .samples()
        .history_with_options(&sensor_id, &start, "hours", None, None, Some(24), None, false)
        .await?;

    // Business errors come back as a payload, not an Err
    if let Some(failure) = ApiFailure::from_value(&response) {
        eprintln!("API rejected the request: {failure:?}");
        std::process::exit(1);
    }

    let samples: Vec<Sample> = serde_json::from_value(response)?;
    for sample in &samples {
        println!(
            "{}  consumption {:>6} W  generation {:>6} W",
            sample.timestamp, sample.consumption_power, sample.generation_power
        );
    }

    Ok(())
}
