//! # neurio-models
//!
//! Data models for Neurio API responses.
//!
//! Endpoint methods in `neurio-client` return raw `serde_json::Value`
//! payloads exactly as the API sent them. The structs in this crate are
//! optional typed views over those payloads for callers that want them:
//!
//! ```ignore
//! use neurio_models::samples::Sample;
//!
//! let samples: Vec<Sample> = serde_json::from_value(response)?;
//! ```
//!
//! Field coverage follows what the API is observed to return; anything the
//! server may omit is an `Option` or defaults to empty.

#![warn(clippy::all)]

pub mod appliances;
pub mod common;
pub mod samples;
pub mod users;

// Re-export common types for convenience
pub use common::*;

pub use appliances::*;
pub use samples::*;
pub use users::*;
