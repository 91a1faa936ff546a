//! User endpoints

use crate::transport::Transport;
use neurio_core::{Endpoint, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

/// User endpoints for account information
pub struct UserEndpoints {
    transport: Arc<Transport>,
}

impl UserEndpoints {
    /// Create a new user endpoints instance
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Get the current user's information, including location and sensor ids.
    ///
    /// This is the usual starting point for discovering the `sensor_id` and
    /// `location_id` values the other endpoints take.
    #[instrument(skip(self))]
    pub async fn current(&self) -> Result<Value> {
        self.transport.get(Endpoint::CurrentUser, HashMap::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_creation() {
        let endpoints = UserEndpoints::new(Arc::new(Transport::new_mock()));
        assert_eq!(endpoints.transport.base_url(), "https://mock.neur.io/v1");
    }
}
