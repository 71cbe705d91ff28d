use std::collections::BTreeSet;
use std::sync::Arc;

use futures::future::join_all;
use serde_json::{Map, Value, json};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::cache::ResponseCache;
use crate::domain::TransportMode;
use crate::geocode::Geocoder;
use crate::plan::SegmentPlanner;
use crate::resolve::HubResolver;
use crate::risk::RiskInputs;
use crate::routing::RoadRouter;

use super::config::{EnrichConfig, PointBudget};
use super::fields::{CanonicalField, FieldMappings, RowFields};
use super::row::{EnrichedRow, Enrichment, RoutePlan};
use super::{EnrichError, EnrichRequest, EnrichResponse, EnrichSummary, ModeBreakdown};

/// Part of the request key. Bump when the enriched row layout changes.
const SCHEMA_VERSION: u32 = 1;

/// Entry counts for both caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hub_entries: u64,
    pub response_entries: u64,
}

/// Enriches batches of rows, sharing hub and response caches across calls.
pub struct RouteEnricher<G, R> {
    resolver: HubResolver<G>,
    planner: SegmentPlanner<R>,
    responses: ResponseCache,
    config: EnrichConfig,
}

impl<G: Geocoder, R: RoadRouter> RouteEnricher<G, R> {
    pub fn new(geocoder: Arc<G>, router: Arc<R>, config: EnrichConfig) -> Self {
        Self {
            resolver: HubResolver::new(geocoder, &config.hub_cache),
            planner: SegmentPlanner::new(router, config.planner.clone()),
            responses: ResponseCache::new(&config.response_cache),
            config,
        }
    }

    pub fn config(&self) -> &EnrichConfig {
        &self.config
    }

    /// Enrich every row of a request, or return the cached response.
    pub async fn enrich(&self, request: &EnrichRequest) -> Result<EnrichResponse, EnrichError> {
        let total = request.rows.len();
        if total > self.config.max_rows {
            return Err(EnrichError::TooManyRows {
                rows: total,
                max: self.config.max_rows,
            });
        }
        let mappings = FieldMappings::parse(&request.field_mappings)?;
        let key = request_key(request);

        if let Some(hit) = self.responses.get(&key).await {
            debug!(key = %key, rows = total, "response cache hit");
            let mut response = (*hit).clone();
            response.summary.cache_hit = true;
            return Ok(response);
        }

        let budget = PointBudget::for_rows(total);
        let mut enriched = Vec::with_capacity(total);
        for chunk in request.rows.chunks(self.config.concurrency.max(1)) {
            let futures = chunk
                .iter()
                .map(|row| self.enrich_row(row, &mappings, budget));
            enriched.extend(join_all(futures).await);
        }

        let summary = summarize(&enriched, key.clone());
        info!(
            rows = summary.total_rows,
            enriched = summary.enriched_rows,
            providers = ?summary.providers_used,
            "request enriched"
        );
        let rows = enriched
            .into_iter()
            .map(EnrichedRow::into_json)
            .collect::<Result<Vec<_>, _>>()?;

        let response = EnrichResponse { rows, summary };
        self.responses.insert(key, Arc::new(response.clone())).await;
        Ok(response)
    }

    /// Enrich a single row. Never fails; unusable input degrades to
    /// fallback hubs and great-circle geometry.
    pub async fn enrich_row(
        &self,
        raw: &Map<String, Value>,
        mappings: &FieldMappings,
        budget: PointBudget,
    ) -> EnrichedRow {
        let fields = RowFields::new(raw, mappings);
        let origin_text = fields.text(CanonicalField::OriginName).unwrap_or_default();
        let destination_text = fields.text(CanonicalField::DestinationName).unwrap_or_default();
        if origin_text.is_empty() && destination_text.is_empty() {
            debug!("row has no origin or destination, skipping");
            return EnrichedRow::skipped(raw.clone());
        }

        let requested = fields
            .text(CanonicalField::Mode)
            .map(|m| TransportMode::classify(&m))
            .unwrap_or(TransportMode::Sea);

        let (origin, destination) = futures::join!(
            self.resolver.resolve_mode_main_hub(&origin_text, requested),
            self.resolver.resolve_mode_main_hub(&destination_text, requested),
        );
        let decision = self
            .planner
            .decide(requested, &origin.anchor, &destination.anchor);
        let segments = self.planner.segments(&decision, &origin, &destination).await;
        debug!(
            origin = %origin_text,
            destination = %destination_text,
            requested = %requested,
            effective = %decision.effective,
            segments = segments.len(),
            "row routed"
        );

        let risk_inputs = RiskInputs {
            risk_score: fields.get(CanonicalField::RiskScore),
            risk_level: fields.get(CanonicalField::RiskLevel),
            lead_time_days: fields.get(CanonicalField::LeadTimeDays),
            planned_departure: fields.get(CanonicalField::PlannedDeparture),
            planned_arrival: fields.get(CanonicalField::PlannedArrival),
        };
        let plan = RoutePlan {
            decision,
            origin: &origin,
            destination: &destination,
            segments,
        };
        EnrichedRow::enriched(raw.clone(), Enrichment::build(plan, &risk_inputs, budget))
    }

    pub async fn cache_stats(&self) -> CacheStats {
        CacheStats {
            hub_entries: self.resolver.entry_count().await,
            response_entries: self.responses.entry_count().await,
        }
    }
}

fn summarize(rows: &[EnrichedRow], cache_key: String) -> EnrichSummary {
    let mut summary = EnrichSummary::empty(cache_key);
    summary.total_rows = rows.len();

    let mut breakdown = ModeBreakdown::default();
    let mut providers = BTreeSet::new();
    for e in rows.iter().filter_map(EnrichedRow::enrichment) {
        summary.enriched_rows += 1;
        breakdown.add(e.mode_of_transport);
        providers.extend(e.route_segments.iter().map(|s| s.provider.as_str()));
    }
    summary.mode_breakdown = breakdown;
    summary.providers_used = providers.into_iter().map(str::to_string).collect();
    summary
}

/// SHA-256 hex digest of the request in canonical JSON form.
///
/// Object keys are emitted sorted at every depth, so two requests that
/// differ only in key order share a key.
pub fn request_key(request: &EnrichRequest) -> String {
    let doc = json!({
        "schemaVersion": SCHEMA_VERSION,
        "rows": request.rows,
        "fieldMappings": request.field_mappings,
    });
    let mut canonical = String::new();
    write_canonical(&doc, &mut canonical);

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            out.push('{');
            for (i, (k, v)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::from(k.as_str()).to_string());
                out.push(':');
                write_canonical(v, out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, v) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(v, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}
