//! Current-user models, including locations and their sensors

use serde::{Deserialize, Serialize};

/// The authenticated user, as returned by `/users/current`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Account email address
    #[serde(default)]
    pub email: Option<String>,

    /// Account status, e.g. "active"
    #[serde(default)]
    pub status: Option<String>,

    /// Locations owned by the user
    #[serde(default)]
    pub locations: Vec<Location>,
}

/// An account-level grouping of sensors and appliances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Location identifier
    pub id: String,

    /// Display name, e.g. "Home"
    #[serde(default)]
    pub name: Option<String>,

    /// IANA time zone of the location; stats buckets are computed in it
    #[serde(default)]
    pub timezone: Option<String>,

    /// Sensors installed at the location
    #[serde(default)]
    pub sensors: Vec<Sensor>,
}

/// A physical energy-monitoring sensor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sensor {
    /// Hexadecimal sensor id, e.g. "0x0013A20040B65FAD"
    pub sensor_id: String,

    /// Hardware type, e.g. "powerblaster"
    #[serde(default)]
    pub sensor_type: Option<String>,

    /// Installed channel count
    #[serde(default)]
    pub channels: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_decodes_nested_sensors() {
        let value = json!({
            "id": "u-1",
            "name": "Ada",
            "email": "ada@example.com",
            "status": "active",
            "locations": [{
                "id": "loc-1",
                "name": "Home",
                "timezone": "America/Vancouver",
                "sensors": [{
                    "sensorId": "0x0013A20040B65FAD",
                    "sensorType": "powerblaster",
                    "channels": 2
                }]
            }]
        });

        let user: User = serde_json::from_value(value).unwrap();
        let sensor = &user.locations[0].sensors[0];
        assert_eq!(sensor.sensor_id, "0x0013A20040B65FAD");
        assert_eq!(sensor.channels, Some(2));
    }

    #[test]
    fn test_user_decodes_without_locations() {
        let user: User = serde_json::from_value(json!({"id": "u-2"})).unwrap();
        assert!(user.locations.is_empty());
    }
}
