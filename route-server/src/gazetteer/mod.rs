//! Built-in gazetteer of airports, seaports and cities.
//!
//! A small curated table that resolves the common trade hubs without a
//! network round trip. Anything it misses goes to the geocoder.

mod data;

use std::cmp::Ordering;

use crate::domain::{Coord, HubType, ResolveMode};

/// A hub from the static tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticHub {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub lon: f64,
    pub lat: f64,
}

impl StaticHub {
    /// The hub's coordinate, or `None` if the table entry is out of range.
    pub fn coord(&self) -> Option<Coord> {
        Coord::new(self.lon, self.lat).ok()
    }

    /// Name followed by aliases.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }
}

/// Hubs searched for a resolution class: airports, seaports or cities.
pub fn hubs(mode: ResolveMode) -> &'static [StaticHub] {
    match mode {
        ResolveMode::Air => data::AIRPORTS,
        ResolveMode::Sea => data::SEAPORTS,
        ResolveMode::Land => data::CITIES,
    }
}

/// Hub type assigned to hubs resolved under `mode`.
pub fn hub_type(mode: ResolveMode) -> HubType {
    match mode {
        ResolveMode::Air => HubType::Airport,
        ResolveMode::Sea => HubType::Seaport,
        ResolveMode::Land => HubType::CityCenter,
    }
}

/// The static hub of class `mode` closest to `target`, with its distance in km.
pub fn nearest(mode: ResolveMode, target: &Coord) -> Option<(&'static StaticHub, Coord, f64)> {
    hubs(mode)
        .iter()
        .filter_map(|h| h.coord().map(|c| (h, c, c.distance_km(target))))
        .min_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::normalize_text;

    #[test]
    fn all_table_coordinates_are_valid() {
        for mode in [ResolveMode::Air, ResolveMode::Sea, ResolveMode::Land] {
            for hub in hubs(mode) {
                assert!(hub.coord().is_some(), "{} has a bad coordinate", hub.name);
            }
        }
    }

    #[test]
    fn aliases_are_normalized() {
        // Matching compares normalized text; aliases should already be in
        // that form so they read the same in the table and at runtime.
        for mode in [ResolveMode::Air, ResolveMode::Sea, ResolveMode::Land] {
            for hub in hubs(mode) {
                for alias in hub.aliases {
                    assert_eq!(&normalize_text(alias), alias, "alias of {}", hub.name);
                }
            }
        }
    }

    #[test]
    fn nearest_seaport_to_los_angeles() {
        let downtown = Coord::new(-118.24, 34.05).unwrap();
        let (hub, _, km) = nearest(ResolveMode::Sea, &downtown).unwrap();
        // San Pedro Bay: Long Beach edges out Los Angeles from downtown.
        assert_eq!(hub.name, "Port of Long Beach");
        assert!(km < 50.0);
    }

    #[test]
    fn nearest_airport_to_tokyo() {
        let tokyo = Coord::new(139.69, 35.69).unwrap();
        let (hub, _, _) = nearest(ResolveMode::Air, &tokyo).unwrap();
        assert_eq!(hub.name, "Tokyo Haneda Airport");
    }

    #[test]
    fn hub_types_follow_mode() {
        assert_eq!(hub_type(ResolveMode::Air), HubType::Airport);
        assert_eq!(hub_type(ResolveMode::Sea), HubType::Seaport);
        assert_eq!(hub_type(ResolveMode::Land), HubType::CityCenter);
    }
}
