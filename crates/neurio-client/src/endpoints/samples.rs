//! Sample endpoints: live readings, historical samples, and statistics
//!
//! This module covers:
//! - Live samples, one reading per second for up to the last 2 minutes
//! - The single most recent live reading
//! - Historical samples at minutes/hours/days/weeks/months/years granularity
//! - Aggregated consumption statistics per granularity bucket

use crate::transport::Transport;
use neurio_core::{Endpoint, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

/// Sample endpoints for live and historical power data
pub struct SamplesEndpoints {
    transport: Arc<Transport>,
}

impl SamplesEndpoints {
    /// Create a new samples endpoints instance
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Get recent live samples, one per second for up to the last 2 minutes.
    ///
    /// # Arguments
    ///
    /// * `sensor_id` - Hexadecimal id of the sensor to query, e.g.
    ///   `0x0013A20040B65FAD`
    /// * `last` - Optional ISO 8601 timestamp; only samples after it are
    ///   returned
    #[instrument(skip(self), fields(sensor_id))]
    pub async fn live(&self, sensor_id: &str, last: Option<&str>) -> Result<Value> {
        let mut params = HashMap::new();
        params.insert("sensorId".to_string(), sensor_id.to_string());

        if let Some(last) = last {
            params.insert("last".to_string(), last.to_string());
        }

        self.transport.get(Endpoint::SamplesLive, params).await
    }

    /// Get the last sample recorded by the sensor.
    ///
    /// # Arguments
    ///
    /// * `sensor_id` - Hexadecimal id of the sensor to query
    #[instrument(skip(self), fields(sensor_id))]
    pub async fn live_last(&self, sensor_id: &str) -> Result<Value> {
        let mut params = HashMap::new();
        params.insert("sensorId".to_string(), sensor_id.to_string());

        self.transport.get(Endpoint::SamplesLiveLast, params).await
    }

    /// Get a sensor's samples for a specified time interval.
    ///
    /// # Arguments
    ///
    /// * `sensor_id` - Hexadecimal id of the sensor to query
    /// * `start` - ISO 8601 start time; the maximum supported range depends
    ///   on granularity (1 day for minutes/hours up to 10 years for years)
    /// * `granularity` - One of "minutes", "hours", "days", "weeks",
    ///   "months", or "years"; the server rejects other values
    #[instrument(skip(self), fields(sensor_id, start, granularity))]
    pub async fn history(&self, sensor_id: &str, start: &str, granularity: &str) -> Result<Value> {
        self.history_with_options(sensor_id, start, granularity, None, None, None, None, false)
            .await
    }

    /// Get a sensor's samples with full filtering options.
    ///
    /// # Arguments
    ///
    /// * `end` - ISO 8601 stop time (default: the current time)
    /// * `frequency` - Sampling frequency, e.g. every 3rd bucket; should be
    ///   a multiple of 5 when using minutes granularity (default: 1)
    /// * `per_page` - Results per page, 1-500 (default: 10)
    /// * `page` - Page number, 1-100000 (default: 1)
    /// * `full` - Include per-channel detail; selects the `/samples/full`
    ///   endpoint
    #[allow(clippy::too_many_arguments)]
    #[instrument(skip(self), fields(sensor_id, start, granularity, full))]
    pub async fn history_with_options(
        &self,
        sensor_id: &str,
        start: &str,
        granularity: &str,
        end: Option<&str>,
        frequency: Option<u32>,
        per_page: Option<u32>,
        page: Option<u32>,
        full: bool,
    ) -> Result<Value> {
        let endpoint = if full { Endpoint::SamplesFull } else { Endpoint::Samples };

        let mut params = HashMap::new();
        params.insert("sensorId".to_string(), sensor_id.to_string());
        params.insert("start".to_string(), start.to_string());
        params.insert("granularity".to_string(), granularity.to_string());

        if let Some(end) = end {
            params.insert("end".to_string(), end.to_string());
        }
        if let Some(frequency) = frequency {
            params.insert("frequency".to_string(), frequency.to_string());
        }
        if let Some(per_page) = per_page {
            params.insert("perPage".to_string(), per_page.to_string());
        }
        if let Some(page) = page {
            params.insert("page".to_string(), page.to_string());
        }

        self.transport.get(endpoint, params).await
    }

    /// Get brief stats for energy consumed in a given time interval.
    ///
    /// The server uses the sensor location's time zone when generating
    /// stat intervals, which matters where daylight saving time applies.
    #[instrument(skip(self), fields(sensor_id, start, granularity))]
    pub async fn stats(&self, sensor_id: &str, start: &str, granularity: &str) -> Result<Value> {
        self.stats_with_options(sensor_id, start, granularity, None, None, None, None).await
    }

    /// Get consumption stats with full filtering options.
    ///
    /// Takes the same optional arguments as
    /// [`history_with_options`](Self::history_with_options), minus `full`.
    #[allow(clippy::too_many_arguments)]
    #[instrument(skip(self), fields(sensor_id, start, granularity))]
    pub async fn stats_with_options(
        &self,
        sensor_id: &str,
        start: &str,
        granularity: &str,
        end: Option<&str>,
        frequency: Option<u32>,
        per_page: Option<u32>,
        page: Option<u32>,
    ) -> Result<Value> {
        let mut params = HashMap::new();
        params.insert("sensorId".to_string(), sensor_id.to_string());
        params.insert("start".to_string(), start.to_string());
        params.insert("granularity".to_string(), granularity.to_string());

        if let Some(end) = end {
            params.insert("end".to_string(), end.to_string());
        }
        if let Some(frequency) = frequency {
            params.insert("frequency".to_string(), frequency.to_string());
        }
        if let Some(per_page) = per_page {
            params.insert("perPage".to_string(), per_page.to_string());
        }
        if let Some(page) = page {
            params.insert("page".to_string(), page.to_string());
        }

        self.transport.get(Endpoint::SamplesStats, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_creation() {
        let endpoints = SamplesEndpoints::new(Arc::new(Transport::new_mock()));
        assert_eq!(endpoints.transport.base_url(), "https://mock.neur.io/v1");
    }
}
