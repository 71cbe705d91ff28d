//! Application state for the web layer.

use std::sync::Arc;

use crate::enrich::{EnrichConfig, RouteEnricher};

/// Shared application state.
///
/// Generic over the geocoder and router so tests can serve with in-process
/// stand-ins.
pub struct AppState<G, R> {
    /// Route enricher, owning the hub and response caches.
    pub enricher: Arc<RouteEnricher<G, R>>,
}

impl<G, R> Clone for AppState<G, R> {
    fn clone(&self) -> Self {
        Self {
            enricher: self.enricher.clone(),
        }
    }
}

impl<G, R> AppState<G, R>
where
    G: crate::geocode::Geocoder,
    R: crate::routing::RoadRouter,
{
    /// Create a new app state.
    pub fn new(geocoder: G, router: R, config: EnrichConfig) -> Self {
        Self {
            enricher: Arc::new(RouteEnricher::new(
                Arc::new(geocoder),
                Arc::new(router),
                config,
            )),
        }
    }
}
