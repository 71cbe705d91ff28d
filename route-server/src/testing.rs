//! In-process stand-ins for the geocoder and router, with call counters.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::domain::{Coord, TransportMode};
use crate::geocode::{GeocodeCandidate, GeocodeError, Geocoder};
use crate::routing::{RoadRouter, RoutedPath, RoutingError};

/// Geocoder answering from a fixed query table.
#[derive(Default)]
pub struct MockGeocoder {
    answers: HashMap<String, Vec<GeocodeCandidate>>,
    failing: bool,
    delay: Option<Duration>,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl MockGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `query` (exact match) with the given candidates.
    pub fn answer(mut self, query: &str, candidates: Vec<GeocodeCandidate>) -> Self {
        self.answers.insert(query.to_string(), candidates);
        self
    }

    /// Fail every query with a server error.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

pub fn candidate(name: &str, lon: f64, lat: f64, class: &str, kind: &str) -> GeocodeCandidate {
    GeocodeCandidate {
        display_name: name.to_string(),
        lat,
        lon,
        class: Some(class.to_string()),
        kind: Some(kind.to_string()),
    }
}

impl Geocoder for MockGeocoder {
    async fn search(&self, query: &str) -> Result<Vec<GeocodeCandidate>, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing {
            return Err(GeocodeError::Api {
                status: 503,
                message: "unavailable".to_string(),
            });
        }
        Ok(self.answers.get(query).cloned().unwrap_or_default())
    }
}

/// Router that draws a straight two-point line, or fails on request.
#[derive(Default)]
pub struct MockRouter {
    failing: bool,
    calls: AtomicUsize,
}

impl MockRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RoadRouter for MockRouter {
    async fn route(
        &self,
        _mode: TransportMode,
        from: Coord,
        to: Coord,
    ) -> Result<RoutedPath, RoutingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(RoutingError::NoRoute {
                code: "NoRoute".to_string(),
            });
        }
        let mid = from.intermediate(&to, 0.5);
        let km = from.distance_km(&to);
        Ok(RoutedPath {
            coordinates: vec![from, mid, to],
            distance_meters: km * 1100.0,
            duration_seconds: km * 60.0,
        })
    }
}
