//! Data transfer objects for web responses.
//!
//! The enrichment request and response bodies are the enrich module's own
//! types; only the small auxiliary bodies live here.

use serde::Serialize;

use crate::enrich::CacheStats;

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Cache entry counts.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CacheStatsResponse {
    pub hub_entries: u64,
    pub response_entries: u64,
}

impl From<CacheStats> for CacheStatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hub_entries: stats.hub_entries,
            response_entries: stats.response_entries,
        }
    }
}
