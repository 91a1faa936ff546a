//! The main Neurio API client

use crate::auth::TokenProvider;
use crate::endpoints::{
  appliances::ApplianceEndpoints, samples::SamplesEndpoints, users::UserEndpoints,
};
use crate::transport::Transport;
use neurio_core::{Config, Result};
use std::sync::Arc;

/// Main Neurio API client
///
/// Obtains the access token once at construction and exposes the API
/// surface through organized endpoint groups. Construction fails
/// immediately if the token exchange fails.
///
/// # Examples
///
/// ```rust,no_run
/// use neurio_client::{NeurioClient, TokenProvider};
/// use neurio_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let provider = TokenProvider::from_config(&config)?;
///     let client = NeurioClient::new(&config, &provider).await?;
///
///     let appliances = client.appliances().list("0qX7nB-8Ry2bxIMTK0EmXw").await?;
///     println!("{appliances}");
///
///     Ok(())
/// }
/// ```
pub struct NeurioClient {
  transport: Arc<Transport>,
}

impl NeurioClient {
  /// Create a new client, exchanging credentials for a token once.
  ///
  /// # Errors
  ///
  /// Propagates [`neurio_core::Error::Auth`] if the token exchange fails
  /// and [`neurio_core::Error::Http`] if the HTTP client cannot be created.
  pub async fn new(config: &Config, token_provider: &TokenProvider) -> Result<Self> {
    let token = token_provider.token().await?;
    let transport = Arc::new(Transport::new(config, token)?);

    Ok(Self { transport })
  }

  /// Create a client directly from a [`Config`], building the token
  /// provider internally.
  pub async fn connect(config: Config) -> Result<Self> {
    let provider = TokenProvider::from_config(&config)?;
    Self::new(&config, &provider).await
  }

  /// Get access to sample endpoints
  ///
  /// Returns a [`SamplesEndpoints`] instance for live readings, historical
  /// samples, and sample statistics.
  pub fn samples(&self) -> SamplesEndpoints {
    SamplesEndpoints::new(self.transport.clone())
  }

  /// Get access to appliance endpoints
  ///
  /// Returns an [`ApplianceEndpoints`] instance for appliance listings,
  /// detected events, and aggregated usage stats.
  pub fn appliances(&self) -> ApplianceEndpoints {
    ApplianceEndpoints::new(self.transport.clone())
  }

  /// Get access to user endpoints
  ///
  /// Returns a [`UserEndpoints`] instance for the current-user record,
  /// which carries location and sensor ids.
  pub fn users(&self) -> UserEndpoints {
    UserEndpoints::new(self.transport.clone())
  }
}

impl std::fmt::Debug for NeurioClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("NeurioClient").field("base_url", &self.transport.base_url()).finish()
  }
}
