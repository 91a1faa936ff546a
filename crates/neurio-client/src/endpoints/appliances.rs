//! Appliance endpoints: listings, detected events, and usage stats
//!
//! This module covers:
//! - Appliances registered or inferred at a location
//! - A single appliance by id
//! - Detected usage events, queried by location, by appliance, or by
//!   creation/update time
//! - Usage stats aggregated from events per granularity bucket

use super::insert_paging;
use crate::transport::Transport;
use neurio_core::{Endpoint, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

/// Appliance endpoints for listings, events, and stats
pub struct ApplianceEndpoints {
    transport: Arc<Transport>,
}

impl ApplianceEndpoints {
    /// Create a new appliance endpoints instance
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Get the appliances added for a specified location.
    ///
    /// # Arguments
    ///
    /// * `location_id` - Id of the location to query
    #[instrument(skip(self), fields(location_id))]
    pub async fn list(&self, location_id: &str) -> Result<Value> {
        let mut params = HashMap::new();
        params.insert("locationId".to_string(), location_id.to_string());

        self.transport.get(Endpoint::Appliances, params).await
    }

    /// Get the information for a specified appliance.
    ///
    /// # Arguments
    ///
    /// * `appliance_id` - Id of the appliance to fetch
    #[instrument(skip(self), fields(appliance_id))]
    pub async fn get(&self, appliance_id: &str) -> Result<Value> {
        self.transport.get(Endpoint::Appliance(appliance_id.to_string()), HashMap::new()).await
    }

    /// Get appliance events for a location within a time range.
    ///
    /// # Arguments
    ///
    /// * `location_id` - Id of the location to query
    /// * `start` - ISO 8601 start time
    /// * `end` - ISO 8601 stop time; the server allows at most 1 day from
    ///   `start`
    /// * `per_page` - Results per page, 1-500 (default: 10)
    /// * `page` - Page number, 1-100000 (default: 1)
    /// * `min_power` - Only events with an average power in watts above
    ///   this value are returned (default: 400)
    #[instrument(skip(self), fields(location_id, start, end))]
    pub async fn events_by_location(
        &self,
        location_id: &str,
        start: &str,
        end: &str,
        per_page: Option<u32>,
        page: Option<u32>,
        min_power: Option<u32>,
    ) -> Result<Value> {
        let mut params = HashMap::new();
        params.insert("locationId".to_string(), location_id.to_string());
        params.insert("start".to_string(), start.to_string());
        params.insert("end".to_string(), end.to_string());
        insert_paging(&mut params, per_page, page, min_power);

        self.transport.get(Endpoint::ApplianceEvents, params).await
    }

    /// Get appliance events for a location created or updated after a time.
    ///
    /// # Arguments
    ///
    /// * `location_id` - Id of the location to query
    /// * `since` - ISO 8601 time; the server allows at most 1 day before
    ///   the current time
    ///
    /// Optional arguments are as on
    /// [`events_by_location`](Self::events_by_location).
    #[instrument(skip(self), fields(location_id, since))]
    pub async fn events_since(
        &self,
        location_id: &str,
        since: &str,
        per_page: Option<u32>,
        page: Option<u32>,
        min_power: Option<u32>,
    ) -> Result<Value> {
        let mut params = HashMap::new();
        params.insert("locationId".to_string(), location_id.to_string());
        params.insert("since".to_string(), since.to_string());
        insert_paging(&mut params, per_page, page, min_power);

        self.transport.get(Endpoint::ApplianceEvents, params).await
    }

    /// Get events of a single appliance within a time range.
    ///
    /// # Arguments
    ///
    /// * `appliance_id` - Id of the appliance to query
    /// * `start` - ISO 8601 start time
    /// * `end` - ISO 8601 stop time; the server allows at most 1 day from
    ///   `start`
    ///
    /// Optional arguments are as on
    /// [`events_by_location`](Self::events_by_location).
    #[instrument(skip(self), fields(appliance_id, start, end))]
    pub async fn events_by_appliance(
        &self,
        appliance_id: &str,
        start: &str,
        end: &str,
        per_page: Option<u32>,
        page: Option<u32>,
        min_power: Option<u32>,
    ) -> Result<Value> {
        let mut params = HashMap::new();
        params.insert("applianceId".to_string(), appliance_id.to_string());
        params.insert("start".to_string(), start.to_string());
        params.insert("end".to_string(), end.to_string());
        insert_paging(&mut params, per_page, page, min_power);

        self.transport.get(Endpoint::ApplianceEvents, params).await
    }

    /// Get appliance usage stats for a location within a time range.
    ///
    /// Stats are generated server-side by fetching matching events and
    /// aggregating them per granularity bucket, in the location's time
    /// zone.
    ///
    /// # Arguments
    ///
    /// * `location_id` - Id of the location to query
    /// * `start` - ISO 8601 start time
    /// * `end` - ISO 8601 stop time; the server allows at most 1 month
    ///   from `start`
    /// * `granularity` - One of "minutes", "hours", "days", "weeks",
    ///   "months", or "unknown" for a single bucket spanning the whole
    ///   range (default: "days")
    ///
    /// Remaining optional arguments are as on
    /// [`events_by_location`](Self::events_by_location).
    #[allow(clippy::too_many_arguments)]
    #[instrument(skip(self), fields(location_id, start, end))]
    pub async fn stats_by_location(
        &self,
        location_id: &str,
        start: &str,
        end: &str,
        granularity: Option<&str>,
        per_page: Option<u32>,
        page: Option<u32>,
        min_power: Option<u32>,
    ) -> Result<Value> {
        let mut params = HashMap::new();
        params.insert("locationId".to_string(), location_id.to_string());
        params.insert("start".to_string(), start.to_string());
        params.insert("end".to_string(), end.to_string());

        if let Some(granularity) = granularity {
            params.insert("granularity".to_string(), granularity.to_string());
        }
        insert_paging(&mut params, per_page, page, min_power);

        self.transport.get(Endpoint::ApplianceStats, params).await
    }

    /// Get usage stats for a single appliance within a time range.
    ///
    /// Arguments are as on [`stats_by_location`](Self::stats_by_location),
    /// keyed by appliance id instead of location id.
    #[allow(clippy::too_many_arguments)]
    #[instrument(skip(self), fields(appliance_id, start, end))]
    pub async fn stats_by_appliance(
        &self,
        appliance_id: &str,
        start: &str,
        end: &str,
        granularity: Option<&str>,
        per_page: Option<u32>,
        page: Option<u32>,
        min_power: Option<u32>,
    ) -> Result<Value> {
        let mut params = HashMap::new();
        params.insert("applianceId".to_string(), appliance_id.to_string());
        params.insert("start".to_string(), start.to_string());
        params.insert("end".to_string(), end.to_string());

        if let Some(granularity) = granularity {
            params.insert("granularity".to_string(), granularity.to_string());
        }
        insert_paging(&mut params, per_page, page, min_power);

        self.transport.get(Endpoint::ApplianceStats, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_creation() {
        let endpoints = ApplianceEndpoints::new(Arc::new(Transport::new_mock()));
        assert_eq!(endpoints.transport.base_url(), "https://mock.neur.io/v1");
    }
}
