//! # neurio-client
//!
//! A Rust client for the Neurio energy-monitoring REST API.
//!
//! ## Features
//!
//! - **OAuth2 client credentials**: one token exchange per [`TokenProvider`],
//!   cached for the lifetime of the instance
//! - **One method per endpoint**: samples, live samples, appliances,
//!   appliance events/stats, current user
//! - **Passthrough JSON**: endpoint methods return the parsed body
//!   unmodified; remote-reported business errors arrive as ordinary payloads
//! - **Async/Await**: built on reqwest and tokio
//!
//! ## Usage
//!
//! ```rust,no_run
//! use neurio_client::{NeurioClient, TokenProvider};
//! use neurio_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let provider = TokenProvider::from_config(&config)?;
//!     let client = NeurioClient::new(&config, &provider).await?;
//!
//!     let sample = client.samples().live_last("0x0013A20040B65FAD").await?;
//!     println!("{sample}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, neurio_core::Error>`. Transport failures
//! and authentication failures are errors; business errors reported by the
//! API (bad granularity, out-of-range dates) are returned as JSON payloads
//! of the shape `{"status": ..., "errors": [...]}` and can be inspected
//! with [`neurio_models::ApiFailure::from_value`].

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main entry points and common types
pub use auth::TokenProvider;
pub use client::NeurioClient;
pub use neurio_core::{Config, Endpoint, Error, Result};

/// Typed views over API payloads, re-exported from `neurio-models`
pub use neurio_models as models;

// Re-export endpoint groups for direct access if needed
pub use endpoints::{
    appliances::ApplianceEndpoints, samples::SamplesEndpoints, users::UserEndpoints,
};

pub(crate) const USER_AGENT: &str = concat!("neurio-client/", env!("CARGO_PKG_VERSION"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_carries_credentials() {
        let config = Config::new("test_key", "test_secret").unwrap();
        assert_eq!(config.key, "test_key");
        assert_eq!(config.secret, "test_secret");
    }
}
