//! Resolved transport hubs.

use serde::{Deserialize, Serialize};

use super::Coord;

/// What kind of facility a hub is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HubType {
    Airport,
    Seaport,
    CityCenter,
}

impl HubType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HubType::Airport => "airport",
            HubType::Seaport => "seaport",
            HubType::CityCenter => "city_center",
        }
    }
}

/// Which resolution tier produced a hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HubSource {
    /// Matched in the built-in gazetteer.
    Static,
    /// Returned by the external geocoder.
    Geocoder,
    /// Synthesized from a hash of the input text.
    Fallback,
}

impl HubSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            HubSource::Static => "static",
            HubSource::Geocoder => "geocoder",
            HubSource::Fallback => "fallback",
        }
    }
}

/// A named location with validated coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedHub {
    pub name: String,
    pub coordinates: Coord,
    #[serde(rename = "type")]
    pub hub_type: HubType,
    pub source: HubSource,
}

impl ResolvedHub {
    pub fn new(name: impl Into<String>, coordinates: Coord, hub_type: HubType, source: HubSource) -> Self {
        Self {
            name: name.into(),
            coordinates,
            hub_type,
            source,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == HubSource::Fallback
    }

    pub fn distance_km(&self, other: &ResolvedHub) -> f64 {
        self.coordinates.distance_km(&other.coordinates)
    }
}
