//! Endpoint groups for the Neurio API
//!
//! Each group wraps the shared [`Transport`](crate::transport::Transport)
//! and exposes one method per remote endpoint. Methods validate only that
//! required arguments are present in the signature; ranges and enums are
//! validated by the remote service, which reports violations as
//! `{status, errors}` payloads returned to the caller as ordinary values.

pub mod appliances;
pub mod samples;
pub mod users;

use std::collections::HashMap;

/// Insert the shared paging/filtering parameters used by the appliance
/// event and stats endpoints.
pub(crate) fn insert_paging(
    params: &mut HashMap<String, String>,
    per_page: Option<u32>,
    page: Option<u32>,
    min_power: Option<u32>,
) {
    if let Some(per_page) = per_page {
        params.insert("perPage".to_string(), per_page.to_string());
    }
    if let Some(page) = page {
        params.insert("page".to_string(), page.to_string());
    }
    if let Some(min_power) = min_power {
        params.insert("minPower".to_string(), min_power.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_paging_skips_absent_values() {
        let mut params = HashMap::new();
        insert_paging(&mut params, Some(50), None, Some(400));

        assert_eq!(params.get("perPage").map(String::as_str), Some("50"));
        assert_eq!(params.get("minPower").map(String::as_str), Some("400"));
        assert!(!params.contains_key("page"));
    }
}
