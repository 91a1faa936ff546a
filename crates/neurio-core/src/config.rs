//! Configuration management for the Neurio client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the Neurio client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Neurio API key
  pub key: String,

  /// Neurio API secret
  pub secret: String,

  /// Base URL for the Neurio API, including the version segment
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Config {
  /// Create a configuration from explicit credentials.
  ///
  /// Fails with [`Error::Config`] if either credential is empty.
  pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
    let key = key.into();
    let secret = secret.into();

    if key.is_empty() || secret.is_empty() {
      return Err(Error::Config("key and secret must be set".to_string()));
    }

    Ok(Config {
      key,
      secret,
      base_url: crate::NEURIO_BASE_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
    })
  }

  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let key = env::var("NEURIO_API_KEY")
      .map_err(|_| Error::Config("NEURIO_API_KEY not set".to_string()))?;

    let secret = env::var("NEURIO_API_SECRET")
      .map_err(|_| Error::Config("NEURIO_API_SECRET not set".to_string()))?;

    let base_url =
      env::var("NEURIO_BASE_URL").unwrap_or_else(|_| crate::NEURIO_BASE_URL.to_string());

    let timeout_secs = env::var("NEURIO_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid NEURIO_TIMEOUT_SECS".to_string()))?;

    let mut config = Config::new(key, secret)?;
    config.base_url = base_url;
    config.timeout_secs = timeout_secs;
    Ok(config)
  }

  /// Replace the base URL, e.g. to point at a staging deployment or a
  /// test server.
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_defaults() {
    let config = Config::new("my-key", "my-secret").unwrap();
    assert_eq!(config.key, "my-key");
    assert_eq!(config.secret, "my-secret");
    assert_eq!(config.base_url, "https://api.neur.io/v1");
    assert_eq!(config.timeout_secs, 30);
  }

  #[test]
  fn test_config_rejects_empty_key() {
    let result = Config::new("", "my-secret");
    assert!(matches!(result, Err(Error::Config(_))));
  }

  #[test]
  fn test_config_rejects_empty_secret() {
    let result = Config::new("my-key", "");
    assert!(matches!(result, Err(Error::Config(_))));
  }

  #[test]
  fn test_config_with_base_url() {
    let config =
      Config::new("my-key", "my-secret").unwrap().with_base_url("http://localhost:8080/v1");
    assert_eq!(config.base_url, "http://localhost:8080/v1");
  }
}
