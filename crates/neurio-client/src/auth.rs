//! OAuth2 client-credentials token exchange

use neurio_core::{Config, Error, Result, TOKEN_PATH};
use serde_json::Value;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, instrument, warn};

/// Exchanges an API key/secret pair for a bearer access token.
///
/// The token is fetched on first use and cached for the lifetime of the
/// instance; there is no expiry tracking or renewal. A failed exchange
/// caches nothing, so a later call retries from scratch. Use one provider
/// per credential set.
pub struct TokenProvider {
  key: String,
  secret: String,
  token_url: String,
  http: reqwest::Client,
  token: OnceCell<String>,
}

impl TokenProvider {
  /// Create a provider from explicit credentials, using the production
  /// base URL and default timeout.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Config`] if either credential is empty.
  pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
    Self::from_config(&Config::new(key, secret)?)
  }

  /// Create a provider from a [`Config`], honoring its base URL and timeout.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Config`] if either credential is empty, or
  /// [`Error::Http`] if the HTTP client cannot be created.
  pub fn from_config(config: &Config) -> Result<Self> {
    if config.key.is_empty() || config.secret.is_empty() {
      return Err(Error::Config("key and secret must be set".to_string()));
    }

    let http = reqwest::Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent(crate::USER_AGENT)
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {e}")))?;

    Ok(Self {
      key: config.key.clone(),
      secret: config.secret.clone(),
      token_url: format!("{}{}", config.base_url, TOKEN_PATH),
      http,
      token: OnceCell::new(),
    })
  }

  /// Return the access token, performing the exchange on first call.
  ///
  /// At most one network round trip succeeds per instance; subsequent calls
  /// return the cached token without touching the network.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Auth`] if the exchange fails: network error, non-2xx
  /// status, non-JSON body, or a response without an `access_token` field.
  pub async fn token(&self) -> Result<String> {
    let token = self.token.get_or_try_init(|| self.fetch_token()).await?;
    Ok(token.clone())
  }

  #[instrument(skip(self))]
  async fn fetch_token(&self) -> Result<String> {
    debug!("Requesting access token from {}", self.token_url);

    let response = self
      .http
      .post(&self.token_url)
      .basic_auth(&self.key, Some(&self.secret))
      .form(&[("grant_type", "client_credentials")])
      .send()
      .await
      .map_err(|e| Error::Auth(format!("token request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
      warn!("Token endpoint returned {}", status);
      return Err(Error::Auth(format!("token endpoint returned {status}")));
    }

    let body: Value = response
      .json()
      .await
      .map_err(|e| Error::Auth(format!("token response was not JSON: {e}")))?;

    body
      .get("access_token")
      .and_then(Value::as_str)
      .map(str::to_owned)
      .ok_or_else(|| Error::Auth("access_token missing from token response".to_string()))
  }
}

impl std::fmt::Debug for TokenProvider {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    // Never print the secret or a cached token
    f.debug_struct("TokenProvider")
      .field("key", &self.key)
      .field("token_url", &self.token_url)
      .finish()
  }
}
