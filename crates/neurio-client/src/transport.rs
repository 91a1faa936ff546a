//! HTTP transport layer for Neurio API requests

use neurio_core::{Config, Endpoint, Error, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;

/// HTTP transport layer for making authenticated requests to the Neurio API
///
/// Holds the bearer token obtained at client construction. Every call is a
/// single round trip: no retries, no rate limiting, no status-based
/// failure. Whatever JSON the server sends back is returned verbatim,
/// including `{status, errors}` bodies on rejected requests.
pub struct Transport {
    client: Client,
    base_url: String,
    token: String,
}

impl Transport {
    /// Create a new transport instance holding the given access token
    pub fn new(config: &Config, token: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(crate::USER_AGENT)
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url: config.base_url.clone(), token })
    }

    /// Create a mock transport for testing
    #[cfg(test)]
    pub fn new_mock() -> Self {
        Self {
            client: Client::new(),
            base_url: "https://mock.neur.io/v1".to_string(),
            token: "test_token".to_string(),
        }
    }

    /// Make a GET request to a Neurio API endpoint
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The endpoint to call
    /// * `params` - Query parameters for the request
    ///
    /// # Returns
    ///
    /// The parsed JSON body, unmodified. Bodies of the shape
    /// `{"status": ..., "errors": [...]}` are ordinary return values here;
    /// only transport failures and non-JSON bodies are errors.
    #[instrument(skip(self, params), fields(endpoint = %endpoint))]
    pub async fn get(&self, endpoint: Endpoint, params: HashMap<String, String>) -> Result<Value> {
        let url = self.endpoint_url(&endpoint, &params)?;
        debug!("Making request to: {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response body: {e}")))?;

        debug!("Response status {}, body length {} bytes", status, text.len());

        serde_json::from_str(&text).map_err(|e| {
            error!("Non-JSON response (status {}): {}", status, e);
            // Truncate on a char boundary; a byte-index slice can panic on
            // multi-byte UTF-8 in the body
            let snippet: String = text.chars().take(200).collect();
            Error::Parse(format!("invalid JSON response (status {status}): {snippet}"))
        })
    }

    /// Build the full URL for an endpoint call
    fn endpoint_url(&self, endpoint: &Endpoint, params: &HashMap<String, String>) -> Result<Url> {
        merge_query(&format!("{}{}", self.base_url, endpoint), params)
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Merge query parameters into a URL.
///
/// Any query string already present on `url` is parsed and kept; `params`
/// are overlaid on top, with same-named keys overwritten rather than
/// duplicated. Parameters are re-serialized in key order so the output is
/// stable.
pub(crate) fn merge_query(url: &str, params: &HashMap<String, String>) -> Result<Url> {
    let mut url =
        Url::parse(url).map_err(|e| Error::Http(format!("Invalid URL {url}: {e}")))?;

    let mut merged: BTreeMap<String, String> = url.query_pairs().into_owned().collect();
    merged.extend(params.iter().map(|(k, v)| (k.clone(), v.clone())));

    if merged.is_empty() {
        url.set_query(None);
    } else {
        let mut query_pairs = url.query_pairs_mut();
        query_pairs.clear();
        for (key, value) in &merged {
            query_pairs.append_pair(key, value);
        }
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_merge_query_keeps_existing_params() {
        let url = merge_query("https://x/y?a=1", &params(&[("b", "2")])).unwrap();

        let query: BTreeMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(query.len(), 2);
        assert_eq!(query["a"], "1");
        assert_eq!(query["b"], "2");
    }

    #[test]
    fn test_merge_query_overrides_same_named_params() {
        let url = merge_query("https://x/y?a=1", &params(&[("a", "2")])).unwrap();

        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(query, vec![("a".to_string(), "2".to_string())]);
    }

    #[test]
    fn test_merge_query_without_params_leaves_url_alone() {
        let url = merge_query("https://x/y", &HashMap::new()).unwrap();
        assert_eq!(url.as_str(), "https://x/y");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_merge_query_encodes_values() {
        let url =
            merge_query("https://x/y", &params(&[("last", "2016-01-04T18:42:10+00:00")])).unwrap();
        let query: BTreeMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(query["last"], "2016-01-04T18:42:10+00:00");
    }

    #[test]
    fn test_merge_query_rejects_invalid_url() {
        let result = merge_query("not a url", &HashMap::new());
        assert!(matches!(result, Err(Error::Http(_))));
    }

    #[test]
    fn test_endpoint_url_joins_base_and_path() {
        let transport = Transport::new_mock();
        let url = transport
            .endpoint_url(&Endpoint::SamplesLive, &params(&[("sensorId", "0x0013A20040B65FAD")]))
            .unwrap();

        assert!(url.as_str().starts_with("https://mock.neur.io/v1/samples/live"));
        assert!(url.as_str().contains("sensorId=0x0013A20040B65FAD"));
    }

    #[test]
    fn test_endpoint_url_embeds_appliance_id() {
        let transport = Transport::new_mock();
        let url = transport
            .endpoint_url(&Endpoint::Appliance("abc123".to_string()), &HashMap::new())
            .unwrap();

        assert_eq!(url.as_str(), "https://mock.neur.io/v1/appliances/abc123");
    }
}
