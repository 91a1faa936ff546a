//! Print the most recent live sample from a sensor.
//!
//! Reads `NEURIO_API_KEY` and `NEURIO_API_SECRET` from the environment (or
//! a `.env` file). The sensor id is discovered from the current user's
//! first location unless `NEURIO_SENSOR_ID` is set.
//!
//! Run with: `cargo run --example last_live_sample`

use neurio_client::{NeurioClient, TokenProvider};
use neurio_core::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let provider = TokenProvider::from_config(&config)?;
    let client = NeurioClient::new(&config, &provider).await?;

    let sensor_id = match std::env::var("NEURIO_SENSOR_ID") {
        Ok(id) => id,
        Err(_) => {
            let user = client.users().current().await?;
            user["locations"][0]["sensors"][0]["sensorId"]
                .as_str()
                .ok_or("no sensor found on the current user")?
                .to_string()
        }
    };

    let sample = client.samples().live_last(&sensor_id).await?;
    println!("{}", serde_json::to_string_pretty(&sample)?);

    Ok(())
}
