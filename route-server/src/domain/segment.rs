//! Route segments: one leg of an enriched route.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Coord, TransportMode};

/// Position of a segment within a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentRole {
    /// Origin city to the departure hub.
    Access,
    /// Hub to hub, or city to city for overland routes.
    Main,
    /// Arrival hub to the destination city.
    Egress,
}

impl SegmentRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentRole::Access => "access",
            SegmentRole::Main => "main",
            SegmentRole::Egress => "egress",
        }
    }

    pub fn is_connector(&self) -> bool {
        !matches!(self, SegmentRole::Main)
    }
}

/// Source of a segment's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// External road/rail routing service.
    Osrm,
    LandCorridor,
    MaritimeCorridor,
    GreatCircle,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Osrm => "osrm",
            Provider::LandCorridor => "land_corridor",
            Provider::MaritimeCorridor => "maritime_corridor",
            Provider::GreatCircle => "great_circle",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error constructing a segment.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("segment needs at least 2 coordinates, got {0}")]
pub struct TooFewPoints(pub usize);

/// One leg of a route with its geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSegment {
    pub mode: TransportMode,
    pub role: SegmentRole,
    coordinates: Vec<Coord>,
    pub distance_km: f64,
    pub duration_minutes: Option<f64>,
    pub provider: Provider,
    /// True when geometry came from a lower tier than the mode prefers.
    pub is_fallback: bool,
}

impl RouteSegment {
    /// Build a segment. Fails if fewer than two coordinates are given.
    pub fn new(
        mode: TransportMode,
        role: SegmentRole,
        coordinates: Vec<Coord>,
        distance_km: f64,
        duration_minutes: Option<f64>,
        provider: Provider,
        is_fallback: bool,
    ) -> Result<Self, TooFewPoints> {
        if coordinates.len() < 2 {
            return Err(TooFewPoints(coordinates.len()));
        }
        Ok(Self {
            mode,
            role,
            coordinates,
            distance_km,
            duration_minutes,
            provider,
            is_fallback,
        })
    }

    pub fn coordinates(&self) -> &[Coord] {
        &self.coordinates
    }

    pub fn start(&self) -> Coord {
        self.coordinates[0]
    }

    pub fn end(&self) -> Coord {
        self.coordinates[self.coordinates.len() - 1]
    }

    /// Replace the geometry (e.g. after compression). Keeps the old
    /// geometry if the new one is too short.
    pub fn set_coordinates(&mut self, coordinates: Vec<Coord>) {
        if coordinates.len() >= 2 {
            self.coordinates = coordinates;
        }
    }
}
