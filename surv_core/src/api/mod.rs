//! HTTP data sources: item wiki search and community dataset
//!
//! Both sources are read-only JSON over GET. Responses are cached
//! in-process under the per-resource TTLs listed in the registry;
//! failures are surfaced per request with no retry or backoff.

mod armor;
mod client;
mod supporting;

pub use client::{ApiClient, REQUEST_TIMEOUT};

use std::time::Duration;
use thiserror::Error;

/// Default root of the item wiki search endpoint
pub const WIKI_ITEM_SEARCH: &str = "https://api.weirdgloop.org/runescape/items/search";
/// Default root of the static community dataset
pub const COMMUNITY_DATA_ROOT: &str = "https://runescape-calcs.github.io/data";

/// Armor listings change with game updates; refetch twice an hour
pub const ARMOR_TTL: Duration = Duration::from_secs(30 * 60);
/// Prayers, auras and familiars are near-static
pub const SUPPORTING_TTL: Duration = Duration::from_secs(24 * 60 * 60);
/// Boss data gets community edits more often
pub const BOSS_TTL: Duration = Duration::from_secs(2 * 60 * 60);

/// Request failure, surfaced per request
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One fetchable resource: cache key, URL, and refresh policy
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub key: &'static str,
    pub url: String,
    pub ttl: Duration,
}

/// Outcome of probing one endpoint
#[derive(Debug, Clone)]
pub struct SourceCheck {
    pub endpoint: Endpoint,
    /// Age of the cached value after the probe, if it is live
    pub age: Option<Duration>,
    /// Error message when the probe failed
    pub error: Option<String>,
}
