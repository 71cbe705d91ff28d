//! Sea-lane waypoint graph.
//!
//! Waypoints sit offshore along the main container shipping lanes: the
//! Suez and Panama canals, the major straits, and the two ocean crossings.

use std::sync::LazyLock;

use super::graph::{CorridorGraph, CorridorGraphBuilder};
use crate::domain::Coord;

static MARITIME: LazyLock<CorridorGraph> = LazyLock::new(build);

/// The process-wide maritime corridor graph.
pub fn graph() -> &'static CorridorGraph {
    &MARITIME
}

/// Waypoints from the sea-lane node nearest `from` to the one nearest `to`.
pub fn route(from: &Coord, to: &Coord) -> Option<Vec<Coord>> {
    let g = graph();
    let (start, _) = g.nearest(from)?;
    let (goal, _) = g.nearest(to)?;
    let (path, _) = g.shortest_path(start.key, goal.key)?;
    Some(path.into_iter().map(|n| n.coord).collect())
}

fn build() -> CorridorGraph {
    CorridorGraphBuilder::new()
        // East Asia
        .node("shanghai_approach", 122.6, 30.8)
        .node("yellow_sea", 123.0, 35.5)
        .node("east_china_sea", 124.0, 30.5)
        .node("korea_strait", 129.5, 34.5)
        .node("tokyo_bay_approach", 140.0, 34.6)
        .node("japan_east", 142.0, 36.0)
        .node("taiwan_strait", 119.8, 24.0)
        .node("philippines_east", 127.0, 15.0)
        .node("hong_kong_approach", 114.3, 21.9)
        .node("south_china_sea_n", 115.5, 20.5)
        .node("south_china_sea_s", 110.0, 10.0)
        .node("singapore_strait", 104.2, 1.2)
        .node("malacca_north", 98.0, 5.5)
        .node("sunda_strait", 105.5, -6.5)
        // Pacific
        .node("north_pacific_west", 155.0, 40.0)
        .node("north_pacific_mid", -175.0, 45.0)
        .node("north_pacific_east", -150.0, 42.0)
        .node("hawaii", -157.0, 21.0)
        .node("seattle_approach", -125.0, 48.3)
        .node("san_francisco_approach", -123.0, 37.6)
        .node("los_angeles_approach", -119.5, 33.0)
        .node("mexico_pacific", -105.5, 18.5)
        .node("panama_pacific", -79.5, 8.5)
        .node("ecuador_offshore", -81.0, -1.0)
        .node("peru_offshore", -78.5, -12.0)
        .node("chile_offshore", -73.0, -33.0)
        .node("cape_horn", -67.0, -57.0)
        // Atlantic
        .node("panama_atlantic", -79.9, 9.5)
        .node("caribbean", -75.0, 15.0)
        .node("gulf_of_mexico", -90.0, 25.0)
        .node("florida_strait", -80.0, 24.5)
        .node("us_east_coast", -73.0, 38.0)
        .node("new_york_approach", -73.8, 40.3)
        .node("north_atlantic_west", -50.0, 42.0)
        .node("north_atlantic_east", -20.0, 47.0)
        .node("brazil_northeast", -34.0, -7.0)
        .node("brazil_southeast", -42.0, -24.5)
        .node("river_plate", -55.0, -36.0)
        .node("canaries", -16.0, 28.0)
        .node("west_africa_north", -18.0, 15.0)
        .node("gulf_of_guinea", 3.0, 3.0)
        .node("angola_offshore", 10.0, -12.0)
        .node("cape_of_good_hope", 18.5, -35.0)
        // Europe and Mediterranean
        .node("lisbon_offshore", -10.0, 38.5)
        .node("cape_finisterre", -10.0, 43.0)
        .node("bay_of_biscay", -8.0, 45.0)
        .node("english_channel", -2.0, 50.0)
        .node("dover_strait", 1.5, 51.0)
        .node("north_sea", 3.5, 53.0)
        .node("baltic", 15.0, 55.5)
        .node("gibraltar", -5.6, 35.95)
        .node("mediterranean_west", 2.0, 37.5)
        .node("mediterranean_central", 12.0, 36.5)
        .node("mediterranean_east", 25.0, 34.5)
        .node("port_said_approach", 32.3, 31.6)
        // Suez to Asia
        .node("suez_south", 32.6, 29.5)
        .node("red_sea_north", 36.0, 25.0)
        .node("red_sea_south", 41.0, 16.0)
        .node("bab_el_mandeb", 43.3, 12.6)
        .node("gulf_of_aden", 48.0, 12.5)
        .node("arabian_sea", 62.0, 16.0)
        .node("hormuz", 56.5, 26.3)
        .node("persian_gulf", 52.0, 26.5)
        .node("india_west", 71.5, 17.5)
        .node("sri_lanka_south", 80.5, 5.5)
        .node("bay_of_bengal", 87.0, 15.0)
        .node("indian_ocean_mid", 75.0, -5.0)
        .node("kenya_offshore", 41.0, -4.5)
        .node("mozambique_channel", 41.0, -18.0)
        .node("south_africa_east", 33.0, -30.5)
        // Oceania
        .node("australia_northwest", 115.0, -20.0)
        .node("australia_west", 112.0, -30.0)
        .node("australia_south", 130.0, -37.0)
        .node("bass_strait", 146.0, -39.5)
        .node("sydney_offshore", 152.0, -34.0)
        .node("coral_sea", 155.0, -22.0)
        .node("new_zealand_north", 175.0, -37.0)
        // East Asia lanes
        .edge("shanghai_approach", "east_china_sea")
        .edge("east_china_sea", "yellow_sea")
        .edge("east_china_sea", "korea_strait")
        .edge("yellow_sea", "korea_strait")
        .edge("east_china_sea", "tokyo_bay_approach")
        .edge("korea_strait", "tokyo_bay_approach")
        .edge("tokyo_bay_approach", "japan_east")
        .edge("japan_east", "north_pacific_west")
        .edge("east_china_sea", "north_pacific_west")
        .edge("east_china_sea", "taiwan_strait")
        .edge("east_china_sea", "philippines_east")
        .edge("taiwan_strait", "hong_kong_approach")
        .edge("taiwan_strait", "south_china_sea_n")
        .edge("hong_kong_approach", "south_china_sea_n")
        .edge("philippines_east", "south_china_sea_n")
        .edge("south_china_sea_n", "south_china_sea_s")
        .edge("south_china_sea_s", "singapore_strait")
        .edge("singapore_strait", "malacca_north")
        .edge("singapore_strait", "sunda_strait")
        // Pacific crossings
        .edge("north_pacific_west", "north_pacific_mid")
        .edge("north_pacific_mid", "north_pacific_east")
        .edge("north_pacific_east", "seattle_approach")
        .edge("north_pacific_east", "san_francisco_approach")
        .edge("north_pacific_east", "los_angeles_approach")
        .edge("north_pacific_west", "hawaii")
        .edge("hawaii", "los_angeles_approach")
        .edge("seattle_approach", "san_francisco_approach")
        .edge("san_francisco_approach", "los_angeles_approach")
        .edge("los_angeles_approach", "mexico_pacific")
        .edge("mexico_pacific", "panama_pacific")
        .edge("panama_pacific", "ecuador_offshore")
        .edge("ecuador_offshore", "peru_offshore")
        .edge("peru_offshore", "chile_offshore")
        .edge("chile_offshore", "cape_horn")
        .edge("philippines_east", "coral_sea")
        // Panama canal and the Americas' Atlantic side
        .edge("panama_pacific", "panama_atlantic")
        .edge("panama_atlantic", "caribbean")
        .edge("caribbean", "gulf_of_mexico")
        .edge("caribbean", "florida_strait")
        .edge("gulf_of_mexico", "florida_strait")
        .edge("florida_strait", "us_east_coast")
        .edge("us_east_coast", "new_york_approach")
        .edge("us_east_coast", "north_atlantic_west")
        .edge("new_york_approach", "north_atlantic_west")
        .edge("north_atlantic_west", "north_atlantic_east")
        .edge("caribbean", "brazil_northeast")
        .edge("cape_horn", "river_plate")
        .edge("river_plate", "brazil_southeast")
        .edge("brazil_southeast", "brazil_northeast")
        .edge("brazil_northeast", "canaries")
        .edge("brazil_northeast", "gulf_of_guinea")
        .edge("brazil_southeast", "cape_of_good_hope")
        // Africa's Atlantic coast
        .edge("canaries", "west_africa_north")
        .edge("west_africa_north", "gulf_of_guinea")
        .edge("gulf_of_guinea", "angola_offshore")
        .edge("angola_offshore", "cape_of_good_hope")
        .edge("cape_of_good_hope", "south_africa_east")
        // Europe
        .edge("north_atlantic_east", "english_channel")
        .edge("north_atlantic_east", "cape_finisterre")
        .edge("english_channel", "dover_strait")
        .edge("dover_strait", "north_sea")
        .edge("north_sea", "baltic")
        .edge("english_channel", "bay_of_biscay")
        .edge("bay_of_biscay", "cape_finisterre")
        .edge("cape_finisterre", "lisbon_offshore")
        .edge("lisbon_offshore", "gibraltar")
        .edge("lisbon_offshore", "canaries")
        .edge("gibraltar", "canaries")
        .edge("gibraltar", "mediterranean_west")
        .edge("mediterranean_west", "mediterranean_central")
        .edge("mediterranean_central", "mediterranean_east")
        .edge("mediterranean_east", "port_said_approach")
        // Suez and the Indian Ocean
        .edge("port_said_approach", "suez_south")
        .edge("suez_south", "red_sea_north")
        .edge("red_sea_north", "red_sea_south")
        .edge("red_sea_south", "bab_el_mandeb")
        .edge("bab_el_mandeb", "gulf_of_aden")
        .edge("gulf_of_aden", "arabian_sea")
        .edge("gulf_of_aden", "kenya_offshore")
        .edge("arabian_sea", "hormuz")
        .edge("hormuz", "persian_gulf")
        .edge("arabian_sea", "india_west")
        .edge("arabian_sea", "sri_lanka_south")
        .edge("india_west", "sri_lanka_south")
        .edge("sri_lanka_south", "bay_of_bengal")
        .edge("sri_lanka_south", "malacca_north")
        .edge("bay_of_bengal", "malacca_north")
        .edge("sri_lanka_south", "indian_ocean_mid")
        .edge("kenya_offshore", "mozambique_channel")
        .edge("mozambique_channel", "south_africa_east")
        .edge("mozambique_channel", "indian_ocean_mid")
        // Oceania
        .edge("indian_ocean_mid", "australia_west")
        .edge("sunda_strait", "australia_northwest")
        .edge("australia_northwest", "australia_west")
        .edge("australia_west", "australia_south")
        .edge("australia_south", "bass_strait")
        .edge("bass_strait", "sydney_offshore")
        .edge("sydney_offshore", "coral_sea")
        .edge("sydney_offshore", "new_zealand_north")
        .edge("coral_sea", "new_zealand_north")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coord;

    #[test]
    fn every_node_is_reachable() {
        let g = graph();
        let first = g.nodes()[0].key;
        for node in g.nodes() {
            assert!(
                g.shortest_path(first, node.key).is_some(),
                "{} is unreachable",
                node.key
            );
        }
    }

    #[test]
    fn all_nodes_loaded() {
        // Builder silently drops invalid nodes; make sure none were dropped.
        assert_eq!(graph().len(), 77);
    }

    #[test]
    fn asia_to_europe_goes_through_suez() {
        let g = graph();
        let (path, _) = g.shortest_path("singapore_strait", "north_sea").unwrap();
        let keys: Vec<_> = path.iter().map(|n| n.key).collect();
        assert!(keys.contains(&"suez_south"), "{keys:?}");
        assert!(keys.contains(&"gibraltar"), "{keys:?}");
    }

    #[test]
    fn route_from_shanghai_to_los_angeles_crosses_pacific() {
        let shanghai = Coord::new(121.80, 31.00).unwrap();
        let la = Coord::new(-118.27, 33.73).unwrap();
        let path = route(&shanghai, &la).unwrap();
        assert_eq!(path.first(), graph().node("shanghai_approach").map(|n| &n.coord));
        assert_eq!(path.last(), graph().node("los_angeles_approach").map(|n| &n.coord));
        assert!(path.iter().any(|c| c.lon() < -170.0 || c.lon() > 150.0));
    }

    #[test]
    fn nearest_to_los_angeles() {
        let la_port = Coord::new(-118.27, 33.73).unwrap();
        let (node, _) = graph().nearest(&la_port).unwrap();
        assert_eq!(node.key, "los_angeles_approach");
    }
}
