//! Sample data models for live and historical power readings

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single power/energy sample.
///
/// Returned by the live sample endpoints (one element per second) and by
/// the historical `/samples` endpoint (one element per granularity bucket).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    /// ISO 8601 timestamp of the reading
    pub timestamp: String,

    /// Net consumption power in watts
    pub consumption_power: i64,

    /// Net consumption energy in watt-seconds
    pub consumption_energy: i64,

    /// Generation power in watts (solar installations)
    pub generation_power: i64,

    /// Generation energy in watt-seconds
    pub generation_energy: i64,
}

/// A sample from the `/samples/full` endpoint, carrying per-channel detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullSample {
    /// ISO 8601 timestamp of the reading
    pub timestamp: String,

    /// One entry per sensor channel; shape varies by sensor model
    #[serde(default)]
    pub channel_samples: Vec<Value>,
}

/// An aggregated energy statistic bucket from `/samples/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleStats {
    /// ISO 8601 start of the bucket
    pub start: String,

    /// ISO 8601 end of the bucket
    pub end: String,

    /// Energy consumed over the bucket, in watt-seconds
    pub consumption_energy: i64,

    /// Energy generated over the bucket, in watt-seconds
    #[serde(default)]
    pub generation_energy: Option<i64>,

    /// Energy imported from the grid, in watt-seconds
    #[serde(default)]
    pub imported_energy: Option<i64>,

    /// Energy exported to the grid, in watt-seconds
    #[serde(default)]
    pub exported_energy: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sample_decodes_live_payload() {
        let value = json!({
            "sensorId": "0x0013A20040B65FAD",
            "timestamp": "2016-01-04T18:42:10.000Z",
            "consumptionPower": 1150,
            "consumptionEnergy": 187352128,
            "generationPower": 0,
            "generationEnergy": 0
        });

        let sample: Sample = serde_json::from_value(value).unwrap();
        assert_eq!(sample.timestamp, "2016-01-04T18:42:10.000Z");
        assert_eq!(sample.consumption_power, 1150);
        assert_eq!(sample.generation_energy, 0);
    }

    #[test]
    fn test_full_sample_decodes_channel_detail() {
        let value = json!({
            "timestamp": "2016-01-04T18:40:00.000Z",
            "channelSamples": [
                {"channelNumber": 1, "power": 540, "energyConsumed": 93676064},
                {"channelNumber": 2, "power": 610, "energyConsumed": 93676064}
            ]
        });

        let sample: FullSample = serde_json::from_value(value).unwrap();
        assert_eq!(sample.channel_samples.len(), 2);
    }

    #[test]
    fn test_sample_stats_tolerates_missing_generation_fields() {
        let value = json!({
            "start": "2016-01-04T18:30:00.000Z",
            "end": "2016-01-04T18:35:00.000Z",
            "consumptionEnergy": 352128
        });

        let stats: SampleStats = serde_json::from_value(value).unwrap();
        assert_eq!(stats.consumption_energy, 352128);
        assert!(stats.generation_energy.is_none());
    }
}
