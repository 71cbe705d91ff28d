//! Location text to hub resolution.
//!
//! Resolution runs through three tiers: the static gazetteer, the external
//! geocoder, then a deterministic synthetic point. Results are cached per
//! `(class, normalized text)`; concurrent lookups of the same key share one
//! resolution.

mod matching;

use std::sync::Arc;

use moka::future::Cache as MokaCache;
use tracing::{debug, warn};

use crate::cache::CacheConfig;
use crate::domain::{
    Coord, HubSource, HubType, ResolveMode, ResolvedHub, TransportMode, normalize_text,
};
use crate::gazetteer;
use crate::geocode::{GeocodeError, Geocoder};

use matching::{
    candidate_score, is_other_facility, query_variants, short_name, static_match, strong_score,
    synthetic_coord,
};

/// Words that mark a location text as naming a specific facility.
const HUB_KEYWORDS: &[&str] = &[
    "airport", "airfield", "port", "harbor", "harbour", "terminal", "seaport", "dock", "pier",
];

/// A named facility is only trusted over the nearest static hub if it is
/// within this margin of it, measured from the city anchor.
const HUB_PREFERENCE_MARGIN_KM: f64 = 180.0;

/// City anchor and main hub for one end of a route.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeHubs {
    /// City-level location.
    pub anchor: Arc<ResolvedHub>,
    /// Departure/arrival facility for sea and air; the anchor otherwise.
    pub main: Arc<ResolvedHub>,
}

/// Resolves free-text locations into hubs.
pub struct HubResolver<G> {
    geocoder: Arc<G>,
    cache: MokaCache<String, Arc<ResolvedHub>>,
}

impl<G: Geocoder> HubResolver<G> {
    pub fn new(geocoder: Arc<G>, config: &CacheConfig) -> Self {
        Self {
            geocoder,
            cache: config.build(),
        }
    }

    /// Resolve `text` to a hub of the given class. Never fails.
    pub async fn resolve(&self, text: &str, mode: ResolveMode) -> Arc<ResolvedHub> {
        let normalized = normalize_text(text);
        if normalized.is_empty() {
            return Arc::new(fallback_hub("Unknown", &normalized));
        }

        let key = format!("{}:{}", mode.as_str(), normalized);
        self.cache
            .get_with(key, async {
                Arc::new(self.resolve_uncached(text.trim(), &normalized, mode).await)
            })
            .await
    }

    async fn resolve_uncached(&self, text: &str, normalized: &str, mode: ResolveMode) -> ResolvedHub {
        if let Some((hub, coord)) = static_match(normalized, mode) {
            debug!(text, mode = %mode, hub = hub.name, "static hub match");
            return static_hub(hub.name, coord, mode);
        }

        if let Some(hub) = self.geocode(text, mode).await {
            debug!(text, mode = %mode, hub = %hub.name, "geocoded hub");
            return hub;
        }

        debug!(text, mode = %mode, "no match, using synthetic location");
        fallback_hub(text, normalized)
    }

    /// Query the geocoder with each variant until a strong candidate turns up.
    async fn geocode(&self, text: &str, mode: ResolveMode) -> Option<ResolvedHub> {
        let mut best: Option<(f64, String, Coord)> = None;

        for query in query_variants(text, mode) {
            let candidates = match self.geocoder.search(&query).await {
                Ok(c) => c,
                Err(GeocodeError::Disabled) => return None,
                Err(e) => {
                    warn!(query = %query, error = %e, "geocoder lookup failed");
                    continue;
                }
            };

            for (rank, candidate) in candidates.iter().enumerate() {
                let Ok(coord) = Coord::new(candidate.lon, candidate.lat) else {
                    continue;
                };
                if is_other_facility(candidate, mode) {
                    debug!(query = %query, candidate = %candidate.display_name, "skipping wrong facility type");
                    continue;
                }
                let score = candidate_score(candidate, rank, mode);
                if best.as_ref().is_none_or(|(s, _, _)| score > *s) {
                    let name = short_name(&candidate.display_name).unwrap_or(text);
                    best = Some((score, name.to_string(), coord));
                }
            }

            if best.as_ref().is_some_and(|(s, _, _)| *s >= strong_score(mode)) {
                break;
            }
        }

        best.map(|(_, name, coord)| {
            ResolvedHub::new(name, coord, gazetteer::hub_type(mode), HubSource::Geocoder)
        })
    }

    /// Resolve the city anchor and the main hub used by `mode`.
    ///
    /// Sea and air routes depart from a facility: either the one the text
    /// names, or the nearest static port/airport to the city. Other modes
    /// run city to city.
    pub async fn resolve_mode_main_hub(&self, text: &str, mode: TransportMode) -> ModeHubs {
        let mut anchor = self.resolve(text, ResolveMode::Land).await;
        if !mode.uses_hubs() {
            return ModeHubs {
                main: anchor.clone(),
                anchor,
            };
        }

        let class = mode.resolve_mode();
        let names_facility = normalize_text(text)
            .split(' ')
            .any(|t| HUB_KEYWORDS.contains(&t));

        let main = if names_facility || anchor.is_fallback() {
            let mode_hub = self.resolve(text, class).await;
            if anchor.is_fallback() && !mode_hub.is_fallback() {
                anchor = mode_hub.clone();
            }
            match gazetteer::nearest(class, &anchor.coordinates) {
                Some((hub, coord, nearest_km))
                    if anchor.distance_km(&mode_hub) > nearest_km + HUB_PREFERENCE_MARGIN_KM =>
                {
                    debug!(
                        text,
                        named = %mode_hub.name,
                        nearest = hub.name,
                        "named hub too far from anchor, using nearest"
                    );
                    Arc::new(static_hub(hub.name, coord, class))
                }
                _ => mode_hub,
            }
        } else {
            match gazetteer::nearest(class, &anchor.coordinates) {
                Some((hub, coord, _)) => Arc::new(static_hub(hub.name, coord, class)),
                None => self.resolve(text, class).await,
            }
        };

        ModeHubs { anchor, main }
    }

    /// Approximate number of cached hubs.
    pub async fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}

fn static_hub(name: &str, coord: Coord, class: ResolveMode) -> ResolvedHub {
    ResolvedHub::new(name, coord, gazetteer::hub_type(class), HubSource::Static)
}

fn fallback_hub(text: &str, normalized: &str) -> ResolvedHub {
    ResolvedHub::new(
        text,
        synthetic_coord(normalized),
        HubType::CityCenter,
        HubSource::Fallback,
    )
}
