//! Place-name geocoding.
//!
//! The hub resolver only needs free-text search returning ranked
//! candidates, so the seam is a single-method trait. [`NominatimClient`]
//! talks to a Nominatim-compatible server; [`DisabledGeocoder`] is used when
//! the process runs without network access.

mod client;
mod error;

use std::future::Future;

pub use client::{GeocoderConfig, NominatimClient};
pub use error::GeocodeError;

/// One search hit, in provider relevance order.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeCandidate {
    pub display_name: String,
    pub lat: f64,
    pub lon: f64,
    /// OSM class, e.g. `aeroway` or `place`.
    pub class: Option<String>,
    /// OSM type within the class, e.g. `aerodrome` or `city`.
    pub kind: Option<String>,
}

/// Free-text place search.
pub trait Geocoder: Send + Sync {
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<GeocodeCandidate>, GeocodeError>> + Send;
}

/// Geocoder that never reaches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGeocoder;

impl Geocoder for DisabledGeocoder {
    async fn search(&self, _query: &str) -> Result<Vec<GeocodeCandidate>, GeocodeError> {
        Err(GeocodeError::Disabled)
    }
}
