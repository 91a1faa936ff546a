pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};

/// The Neurio API endpoints supported by this client.
///
/// Each variant renders to a path relative to the versioned base URL,
/// e.g. `Endpoint::SamplesLive` becomes `/samples/live`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
  // Sample endpoints
  SamplesLive,
  SamplesLiveLast,
  Samples,
  SamplesFull,
  SamplesStats,

  // Appliance endpoints
  Appliances,
  Appliance(String),
  ApplianceEvents,
  ApplianceStats,

  // User endpoints
  CurrentUser,
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      // Sample endpoints
      Endpoint::SamplesLive => write!(f, "/samples/live"),
      Endpoint::SamplesLiveLast => write!(f, "/samples/live/last"),
      Endpoint::Samples => write!(f, "/samples"),
      Endpoint::SamplesFull => write!(f, "/samples/full"),
      Endpoint::SamplesStats => write!(f, "/samples/stats"),

      // Appliance endpoints
      Endpoint::Appliances => write!(f, "/appliances"),
      Endpoint::Appliance(id) => write!(f, "/appliances/{id}"),
      Endpoint::ApplianceEvents => write!(f, "/appliances/events"),
      Endpoint::ApplianceStats => write!(f, "/appliances/stats"),

      // User endpoints
      Endpoint::CurrentUser => write!(f, "/users/current"),
    }
  }
}

/// Base URL for the Neurio API, including the version segment.
pub const NEURIO_BASE_URL: &str = "https://api.neur.io/v1";

/// Path of the OAuth2 client-credentials token endpoint, relative to the base URL.
pub const TOKEN_PATH: &str = "/oauth2/token";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_endpoint_paths() {
    assert_eq!(Endpoint::SamplesLive.to_string(), "/samples/live");
    assert_eq!(Endpoint::SamplesLiveLast.to_string(), "/samples/live/last");
    assert_eq!(Endpoint::Samples.to_string(), "/samples");
    assert_eq!(Endpoint::SamplesFull.to_string(), "/samples/full");
    assert_eq!(Endpoint::SamplesStats.to_string(), "/samples/stats");
    assert_eq!(Endpoint::Appliances.to_string(), "/appliances");
    assert_eq!(Endpoint::ApplianceEvents.to_string(), "/appliances/events");
    assert_eq!(Endpoint::ApplianceStats.to_string(), "/appliances/stats");
    assert_eq!(Endpoint::CurrentUser.to_string(), "/users/current");
  }

  #[test]
  fn test_appliance_endpoint_embeds_id() {
    let endpoint = Endpoint::Appliance("2SMROBfiTA6huhV7Drrm1g".to_string());
    assert_eq!(endpoint.to_string(), "/appliances/2SMROBfiTA6huhV7Drrm1g");
  }
}
