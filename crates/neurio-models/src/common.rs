//! Shared response types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error payload reported by the Neurio API in the response body.
///
/// The API answers business-rule violations (unsupported granularity,
/// out-of-range dates, bad page bounds) with an ordinary JSON object of the
/// shape `{"status": ..., "errors": [...]}` instead of an empty error
/// status. Endpoint methods return such bodies as plain values; use
/// [`ApiFailure::from_value`] to distinguish them from data payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiFailure {
    /// Status reported by the server, e.g. "400"
    pub status: Value,

    /// Individual error entries; shape varies by endpoint
    #[serde(default)]
    pub errors: Vec<Value>,
}

impl ApiFailure {
    /// Interpret a response payload as a failure, if it has the failure shape.
    ///
    /// Returns `None` for data payloads (arrays, or objects without both
    /// `status` and `errors` keys).
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        if obj.contains_key("status") && obj.contains_key("errors") {
            serde_json::from_value(value.clone()).ok()
        } else {
            None
        }
    }
}
