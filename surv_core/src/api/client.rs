//! Cached JSON client shared by every fetcher

use super::{
    ApiError, Endpoint, SourceCheck, ARMOR_TTL, BOSS_TTL, COMMUNITY_DATA_ROOT, SUPPORTING_TTL,
    WIKI_ITEM_SEARCH,
};
use crate::cache::TtlCache;
use crate::types::CombatStyle;
use parking_lot::Mutex;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Fixed per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client with a URL-keyed TTL cache of raw JSON responses
pub struct ApiClient {
    http: reqwest::Client,
    cache: Mutex<TtlCache<String, serde_json::Value>>,
    wiki_root: String,
    data_root: String,
}

impl ApiClient {
    /// Client against the public data sources
    pub fn new() -> Self {
        Self::with_roots(WIKI_ITEM_SEARCH, COMMUNITY_DATA_ROOT)
    }

    /// Client against custom roots (used by tests and mirrors)
    pub fn with_roots(wiki_root: impl Into<String>, data_root: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            cache: Mutex::new(TtlCache::new()),
            wiki_root: wiki_root.into(),
            data_root: data_root.into(),
        }
    }

    pub(super) fn wiki_root(&self) -> &str {
        &self.wiki_root
    }

    pub(super) fn data_root(&self) -> &str {
        &self.data_root
    }

    /// GET a JSON resource, serving a live cache hit when possible
    ///
    /// The raw `serde_json::Value` is what gets cached, so different
    /// target types for the same URL share one entry.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        ttl: Duration,
    ) -> Result<T, ApiError> {
        if let Some(value) = self.cache.lock().get(&url.to_string()) {
            debug!(url, "cache hit");
            return Ok(serde_json::from_value(value.clone())?);
        }

        debug!(url, "fetching");
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, %status, "request failed");
            return Err(ApiError::Status(status));
        }

        let body = response.bytes().await?;
        let value: serde_json::Value = serde_json::from_slice(&body)?;
        let parsed = serde_json::from_value(value.clone())?;
        self.cache.lock().insert(url.to_string(), value, ttl);
        Ok(parsed)
    }

    /// Age of the cached response for a URL, if still live
    pub fn cache_age(&self, url: &str) -> Option<Duration> {
        self.cache.lock().age(&url.to_string())
    }

    /// Drop the cached response for a URL, forcing the next fetch out
    pub fn invalidate(&self, url: &str) {
        self.cache.lock().invalidate(&url.to_string());
    }

    /// Drop every cached response
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }

    /// Every fetchable resource with its cache key and TTL
    pub fn registry(&self) -> Vec<Endpoint> {
        let mut endpoints: Vec<Endpoint> = CombatStyle::all()
            .iter()
            .map(|style| Endpoint {
                key: match style {
                    CombatStyle::Melee => "armor-melee",
                    CombatStyle::Ranged => "armor-ranged",
                    CombatStyle::Magic => "armor-magic",
                    CombatStyle::Necromancy => "armor-necromancy",
                },
                url: self.armor_url(*style),
                ttl: ARMOR_TTL,
            })
            .collect();
        endpoints.push(Endpoint {
            key: "prayers",
            url: format!("{}/prayers.json", self.data_root),
            ttl: SUPPORTING_TTL,
        });
        endpoints.push(Endpoint {
            key: "auras",
            url: format!("{}/auras.json", self.data_root),
            ttl: SUPPORTING_TTL,
        });
        endpoints.push(Endpoint {
            key: "familiars",
            url: format!("{}/familiars.json", self.data_root),
            ttl: SUPPORTING_TTL,
        });
        endpoints.push(Endpoint {
            key: "bosses",
            url: format!("{}/bosses.json", self.data_root),
            ttl: BOSS_TTL,
        });
        endpoints
    }

    /// Probe every registered endpoint, reporting freshness or the
    /// failure message per resource
    pub async fn check_sources(&self) -> Vec<SourceCheck> {
        let mut checks = Vec::new();
        for endpoint in self.registry() {
            let result = self
                .get_json::<serde_json::Value>(&endpoint.url, endpoint.ttl)
                .await;
            checks.push(SourceCheck {
                age: self.cache_age(&endpoint.url),
                error: result.err().map(|e| e.to_string()),
                endpoint,
            });
        }
        checks
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
