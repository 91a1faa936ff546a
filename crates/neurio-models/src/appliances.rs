//! Appliance, appliance event, and appliance stats models

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An appliance registered or inferred at a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appliance {
    /// Appliance identifier
    pub id: String,

    /// Machine name, e.g. "air_conditioner"
    #[serde(default)]
    pub name: Option<String>,

    /// Human-readable label chosen by the user
    #[serde(default)]
    pub label: Option<String>,

    /// User-assigned tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Location the appliance belongs to
    #[serde(default)]
    pub location_id: Option<String>,

    /// ISO 8601 creation time
    #[serde(default)]
    pub created_at: Option<String>,

    /// ISO 8601 last-update time
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A detected appliance usage event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplianceEvent {
    /// Event identifier
    #[serde(default)]
    pub id: Option<String>,

    /// The appliance the event was attributed to
    #[serde(default)]
    pub appliance: Option<Appliance>,

    /// ISO 8601 event start
    pub start: String,

    /// ISO 8601 event end, absent while the event is still in progress
    #[serde(default)]
    pub end: Option<String>,

    /// Energy consumed during the event, in watt-seconds
    #[serde(default)]
    pub energy: Option<i64>,

    /// Average power during the event, in watts
    #[serde(default)]
    pub average_power: Option<i64>,

    /// Detection status, e.g. "complete" or "inProgress"
    #[serde(default)]
    pub status: Option<String>,

    /// Alternative attribution guesses with confidence scores
    #[serde(default)]
    pub guesses: Option<Value>,
}

/// An aggregated appliance usage bucket from `/appliances/stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplianceStats {
    /// The appliance the bucket aggregates
    #[serde(default)]
    pub appliance: Option<Appliance>,

    /// ISO 8601 start of the bucket
    pub start: String,

    /// ISO 8601 end of the bucket
    pub end: String,

    /// Energy consumed over the bucket, in watt-seconds
    #[serde(default)]
    pub energy: Option<i64>,

    /// Average power over the bucket, in watts
    #[serde(default)]
    pub average_power: Option<i64>,

    /// Number of events aggregated into the bucket
    #[serde(default)]
    pub event_count: Option<u64>,

    /// Total usage time in seconds
    #[serde(default)]
    pub usage_time: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_appliance_decodes_with_sparse_fields() {
        let value = json!({
            "id": "2SMROBfiTA6huhV7Drrm1g",
            "name": "air_conditioner",
            "locationId": "0qX7nB-8Ry2bxIMTK0EmXw"
        });

        let appliance: Appliance = serde_json::from_value(value).unwrap();
        assert_eq!(appliance.id, "2SMROBfiTA6huhV7Drrm1g");
        assert_eq!(appliance.name.as_deref(), Some("air_conditioner"));
        assert!(appliance.tags.is_empty());
        assert!(appliance.label.is_none());
    }

    #[test]
    fn test_event_decodes_in_progress_payload() {
        let value = json!({
            "id": "e-1",
            "appliance": {"id": "2SMROBfiTA6huhV7Drrm1g", "name": "dryer"},
            "start": "2016-01-04T18:42:10.000Z",
            "averagePower": 2400,
            "status": "inProgress"
        });

        let event: ApplianceEvent = serde_json::from_value(value).unwrap();
        assert!(event.end.is_none());
        assert_eq!(event.average_power, Some(2400));
        assert_eq!(event.appliance.unwrap().name.as_deref(), Some("dryer"));
    }

    #[test]
    fn test_stats_bucket_decodes() {
        let value = json!({
            "appliance": {"id": "2SMROBfiTA6huhV7Drrm1g"},
            "start": "2016-01-04T00:00:00.000Z",
            "end": "2016-01-05T00:00:00.000Z",
            "energy": 8640000,
            "averagePower": 100,
            "eventCount": 7,
            "usageTime": 86400
        });

        let stats: ApplianceStats = serde_json::from_value(value).unwrap();
        assert_eq!(stats.event_count, Some(7));
        assert_eq!(stats.usage_time, Some(86400));
    }
}
