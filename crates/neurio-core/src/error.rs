use thiserror::Error;

/// The main error type for neurio-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Missing or empty credentials, bad base URL, invalid settings
  #[error("Configuration error: {0}")]
  Config(String),

  /// Token exchange failed: network error, non-2xx status, or malformed
  /// token response
  #[error("Authentication error: {0}")]
  Auth(String),

  /// HTTP transport error on an endpoint call
  #[error("HTTP error: {0}")]
  Http(String),

  /// Response body was not valid JSON
  #[error("Parse error: {0}")]
  Parse(String),
}

/// Result type alias for neurio-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_display() {
    let err = Error::Config("key must not be empty".to_string());
    assert_eq!(err.to_string(), "Configuration error: key must not be empty");

    let err = Error::Auth("token endpoint returned 401".to_string());
    assert_eq!(err.to_string(), "Authentication error: token endpoint returned 401");
  }
}
