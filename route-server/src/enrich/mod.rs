//! Batch route enrichment.
//!
//! Turns shipment rows with free-text origins, destinations and modes into
//! rows carrying hubs, route geometry and a risk score. Whole responses are
//! cached by a digest of the request.

mod batch;
mod config;
pub mod fields;
pub mod row;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use batch::{CacheStats, RouteEnricher, request_key};
pub use config::{EnrichConfig, PointBudget};
pub use fields::{CanonicalField, FieldMappings};
pub use row::{EnrichedRow, Enrichment};

use crate::domain::TransportMode;

/// Errors that reject a whole request.
#[derive(Debug, thiserror::Error)]
pub enum EnrichError {
    #[error("request has {rows} rows, limit is {max}")]
    TooManyRows { rows: usize, max: usize },

    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("failed to serialize enriched row: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichRequest {
    pub rows: Vec<Map<String, Value>>,
    /// `sourceField -> canonicalField`.
    #[serde(default)]
    pub field_mappings: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichResponse {
    pub rows: Vec<Map<String, Value>>,
    pub summary: EnrichSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichSummary {
    pub total_rows: usize,
    pub enriched_rows: usize,
    pub cache_hit: bool,
    pub cache_key: String,
    pub mode_breakdown: ModeBreakdown,
    /// Distinct providers across all segments, sorted.
    pub providers_used: Vec<String>,
}

impl EnrichSummary {
    pub fn empty(cache_key: String) -> Self {
        Self {
            total_rows: 0,
            enriched_rows: 0,
            cache_hit: false,
            cache_key,
            mode_breakdown: ModeBreakdown::default(),
            providers_used: Vec::new(),
        }
    }
}

/// Enriched rows per effective mode. Every mode is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ModeBreakdown {
    pub sea: usize,
    pub air: usize,
    pub rail: usize,
    pub road: usize,
    pub multimodal: usize,
}

impl ModeBreakdown {
    pub fn add(&mut self, mode: TransportMode) {
        let slot = match mode {
            TransportMode::Sea => &mut self.sea,
            TransportMode::Air => &mut self.air,
            TransportMode::Rail => &mut self.rail,
            TransportMode::Road => &mut self.road,
            TransportMode::Multimodal => &mut self.multimodal,
        };
        *slot += 1;
    }

    pub fn get(&self, mode: TransportMode) -> usize {
        match mode {
            TransportMode::Sea => self.sea,
            TransportMode::Air => self.air,
            TransportMode::Rail => self.rail,
            TransportMode::Road => self.road,
            TransportMode::Multimodal => self.multimodal,
        }
    }
}
