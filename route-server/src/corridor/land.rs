//! Overland corridor graph.
//!
//! Nodes are major road/rail junction cities. Continents without a fixed
//! overland link (the Americas split at the Darién Gap, Japan, Korea,
//! Australia) form separate components, so a land route between them does
//! not exist and callers switch to sea freight.

use std::sync::LazyLock;

use tracing::debug;

use super::graph::{CorridorGraph, CorridorGraphBuilder};
use crate::domain::Coord;

/// Paths longer than this multiple of the direct distance are suspect...
const DETOUR_RATIO: f64 = 3.2;
/// ...and rejected when they also exceed it by this many km.
const DETOUR_EXCESS_KM: f64 = 5000.0;

static LAND: LazyLock<CorridorGraph> = LazyLock::new(build);

/// The process-wide land corridor graph.
pub fn graph() -> &'static CorridorGraph {
    &LAND
}

/// Node path between the land nodes nearest to `from` and `to`.
///
/// Both endpoints must have a node within `anchor_cap_km`. Paths that wander
/// far beyond the direct distance are rejected.
pub fn route(from: &Coord, to: &Coord, anchor_cap_km: f64) -> Option<Vec<Coord>> {
    let g = graph();
    let (start, _) = g.nearest_within(from, anchor_cap_km)?;
    let (goal, _) = g.nearest_within(to, anchor_cap_km)?;
    let (path, length_km) = g.shortest_path(start.key, goal.key)?;

    let direct_km = from.distance_km(to);
    if length_km > DETOUR_RATIO * direct_km && length_km - direct_km > DETOUR_EXCESS_KM {
        debug!(
            from = start.key,
            to = goal.key,
            length_km,
            direct_km,
            "land corridor rejected as detour"
        );
        return None;
    }

    Some(path.into_iter().map(|n| n.coord).collect())
}

/// Whether an overland route exists between the two points.
pub fn connected(from: &Coord, to: &Coord, anchor_cap_km: f64) -> bool {
    let g = graph();
    let (Some((start, _)), Some((goal, _))) = (
        g.nearest_within(from, anchor_cap_km),
        g.nearest_within(to, anchor_cap_km),
    ) else {
        return false;
    };
    g.shortest_path(start.key, goal.key).is_some()
}

fn build() -> CorridorGraph {
    CorridorGraphBuilder::new()
        // Western and central Europe
        .node("lisbon", -9.14, 38.72)
        .node("madrid", -3.70, 40.42)
        .node("paris", 2.35, 48.86)
        .node("london", -0.13, 51.51)
        .node("rotterdam", 4.48, 51.92)
        .node("frankfurt", 8.68, 50.11)
        .node("hamburg", 9.99, 53.55)
        .node("berlin", 13.40, 52.52)
        .node("munich", 11.58, 48.14)
        .node("milan", 9.19, 45.46)
        .node("rome", 12.50, 41.90)
        .node("vienna", 16.37, 48.21)
        .node("warsaw", 21.01, 52.23)
        .node("budapest", 19.04, 47.50)
        .node("belgrade", 20.46, 44.79)
        .node("athens", 23.73, 37.98)
        .node("istanbul", 28.98, 41.01)
        // Eastern Europe and Russia
        .node("minsk", 27.56, 53.90)
        .node("kyiv", 30.52, 50.45)
        .node("moscow", 37.62, 55.76)
        .node("samara", 50.10, 53.20)
        .node("yekaterinburg", 60.60, 56.84)
        .node("novosibirsk", 82.92, 55.03)
        .node("irkutsk", 104.28, 52.29)
        // Middle East and Central Asia
        .node("ankara", 32.85, 39.93)
        .node("tbilisi", 44.79, 41.72)
        .node("baku", 49.87, 40.41)
        .node("tehran", 51.39, 35.69)
        .node("amman", 35.93, 31.95)
        .node("riyadh", 46.68, 24.71)
        .node("jeddah", 39.19, 21.49)
        .node("dubai", 55.27, 25.20)
        .node("astana", 71.43, 51.13)
        .node("almaty", 76.85, 43.22)
        .node("tashkent", 69.24, 41.30)
        .node("kabul", 69.21, 34.56)
        .node("khorgos", 80.42, 44.21)
        .node("kashgar", 75.99, 39.47)
        // South Asia
        .node("islamabad", 73.05, 33.68)
        .node("lahore", 74.36, 31.55)
        .node("karachi", 67.00, 24.86)
        .node("delhi", 77.10, 28.70)
        .node("mumbai", 72.88, 19.08)
        .node("kolkata", 88.36, 22.57)
        .node("chennai", 80.27, 13.08)
        // China and Southeast Asia
        .node("urumqi", 87.62, 43.83)
        .node("lanzhou", 103.83, 36.06)
        .node("xian", 108.94, 34.34)
        .node("chengdu", 104.07, 30.57)
        .node("chongqing", 106.55, 29.56)
        .node("wuhan", 114.31, 30.59)
        .node("beijing", 116.41, 39.90)
        .node("shanghai", 121.47, 31.23)
        .node("guangzhou", 113.26, 23.13)
        .node("shenyang", 123.43, 41.81)
        .node("harbin", 126.53, 45.80)
        .node("vladivostok", 131.89, 43.12)
        .node("ulaanbaatar", 106.91, 47.89)
        .node("kunming", 102.83, 24.88)
        .node("nanning", 108.37, 22.82)
        .node("hanoi", 105.83, 21.03)
        .node("bangkok", 100.50, 13.76)
        .node("kuala_lumpur", 101.69, 3.14)
        .node("singapore", 103.82, 1.35)
        // Korea and Japan
        .node("seoul", 126.98, 37.57)
        .node("busan", 129.08, 35.18)
        .node("tokyo", 139.69, 35.69)
        .node("osaka", 135.50, 34.69)
        // Africa
        .node("cairo", 31.24, 30.04)
        .node("khartoum", 32.56, 15.50)
        .node("addis_ababa", 38.75, 9.03)
        .node("nairobi", 36.82, -1.29)
        .node("dar_es_salaam", 39.28, -6.79)
        .node("lusaka", 28.32, -15.39)
        .node("johannesburg", 28.05, -26.20)
        .node("durban", 31.02, -29.86)
        .node("cape_town", 18.42, -33.92)
        .node("kinshasa", 15.27, -4.44)
        .node("ndjamena", 15.04, 12.13)
        .node("lagos", 3.38, 6.52)
        .node("accra", -0.19, 5.60)
        .node("abidjan", -4.01, 5.36)
        .node("bamako", -8.00, 12.64)
        .node("niamey", 2.11, 13.51)
        .node("dakar", -17.45, 14.72)
        .node("algiers", 3.06, 36.75)
        .node("tunis", 10.18, 36.81)
        .node("tripoli", 13.19, 32.89)
        .node("casablanca", -7.59, 33.57)
        .node("tangier", -5.80, 35.76)
        // North and Central America
        .node("vancouver", -123.12, 49.28)
        .node("seattle", -122.33, 47.61)
        .node("san_francisco", -122.42, 37.77)
        .node("los_angeles", -118.24, 34.05)
        .node("phoenix", -112.07, 33.45)
        .node("salt_lake_city", -111.89, 40.76)
        .node("denver", -104.99, 39.74)
        .node("dallas", -96.80, 32.78)
        .node("houston", -95.37, 29.76)
        .node("kansas_city", -94.58, 39.10)
        .node("chicago", -87.63, 41.88)
        .node("memphis", -90.05, 35.15)
        .node("atlanta", -84.39, 33.75)
        .node("miami", -80.19, 25.76)
        .node("washington", -77.04, 38.91)
        .node("new_york", -74.01, 40.71)
        .node("toronto", -79.38, 43.65)
        .node("montreal", -73.57, 45.50)
        .node("winnipeg", -97.14, 49.90)
        .node("calgary", -114.07, 51.05)
        .node("monterrey", -100.32, 25.69)
        .node("mexico_city", -99.13, 19.43)
        .node("guadalajara", -103.35, 20.66)
        .node("guatemala_city", -90.51, 14.63)
        .node("panama_city", -79.52, 8.98)
        // South America
        .node("caracas", -66.90, 10.49)
        .node("bogota", -74.07, 4.71)
        .node("quito", -78.47, -0.18)
        .node("lima", -77.04, -12.05)
        .node("la_paz", -68.15, -16.50)
        .node("santiago", -70.67, -33.45)
        .node("buenos_aires", -58.38, -34.60)
        .node("montevideo", -56.16, -34.90)
        .node("asuncion", -57.58, -25.26)
        .node("sao_paulo", -46.63, -23.55)
        .node("rio_de_janeiro", -43.17, -22.91)
        .node("belo_horizonte", -43.94, -19.92)
        .node("manaus", -60.02, -3.12)
        // Australia
        .node("perth", 115.86, -31.95)
        .node("adelaide", 138.60, -34.93)
        .node("melbourne", 144.96, -37.81)
        .node("sydney", 151.21, -33.87)
        .node("brisbane", 153.03, -27.47)
        .node("alice_springs", 133.88, -23.70)
        .node("darwin", 130.84, -12.46)
        // Europe
        .edge("lisbon", "madrid")
        .edge("madrid", "paris")
        .edge("paris", "london")
        .edge("paris", "rotterdam")
        .edge("paris", "frankfurt")
        .edge("paris", "milan")
        .edge("rotterdam", "hamburg")
        .edge("rotterdam", "frankfurt")
        .edge("frankfurt", "munich")
        .edge("frankfurt", "berlin")
        .edge("hamburg", "berlin")
        .edge("berlin", "warsaw")
        .edge("munich", "vienna")
        .edge("munich", "milan")
        .edge("milan", "rome")
        .edge("vienna", "budapest")
        .edge("vienna", "warsaw")
        .edge("budapest", "belgrade")
        .edge("belgrade", "istanbul")
        .edge("belgrade", "athens")
        .edge("warsaw", "minsk")
        .edge("warsaw", "kyiv")
        .edge("minsk", "moscow")
        .edge("kyiv", "moscow")
        // Russia and the Trans-Siberian
        .edge("moscow", "samara")
        .edge("samara", "yekaterinburg")
        .edge("yekaterinburg", "novosibirsk")
        .edge("novosibirsk", "irkutsk")
        .edge("irkutsk", "ulaanbaatar")
        .edge("ulaanbaatar", "beijing")
        // Central Asia and the Middle East
        .edge("yekaterinburg", "astana")
        .edge("samara", "astana")
        .edge("astana", "almaty")
        .edge("almaty", "tashkent")
        .edge("almaty", "khorgos")
        .edge("khorgos", "urumqi")
        .edge("istanbul", "ankara")
        .edge("ankara", "tbilisi")
        .edge("tbilisi", "baku")
        .edge("baku", "tehran")
        .edge("ankara", "tehran")
        .edge("tehran", "tashkent")
        .edge("tehran", "karachi")
        .edge("tashkent", "kabul")
        .edge("kabul", "islamabad")
        .edge("ankara", "amman")
        .edge("amman", "riyadh")
        .edge("amman", "cairo")
        .edge("riyadh", "dubai")
        .edge("riyadh", "jeddah")
        // South Asia
        .edge("islamabad", "lahore")
        .edge("islamabad", "kashgar")
        .edge("kashgar", "urumqi")
        .edge("karachi", "lahore")
        .edge("lahore", "delhi")
        .edge("delhi", "mumbai")
        .edge("delhi", "kolkata")
        .edge("mumbai", "chennai")
        .edge("chennai", "kolkata")
        // China and Southeast Asia
        .edge("urumqi", "lanzhou")
        .edge("lanzhou", "xian")
        .edge("xian", "beijing")
        .edge("xian", "wuhan")
        .edge("xian", "chengdu")
        .edge("chengdu", "chongqing")
        .edge("chongqing", "wuhan")
        .edge("wuhan", "shanghai")
        .edge("wuhan", "guangzhou")
        .edge("beijing", "shanghai")
        .edge("beijing", "shenyang")
        .edge("shenyang", "harbin")
        .edge("harbin", "vladivostok")
        .edge("kunming", "chengdu")
        .edge("kunming", "nanning")
        .edge("kunming", "bangkok")
        .edge("guangzhou", "nanning")
        .edge("nanning", "hanoi")
        .edge("bangkok", "kuala_lumpur")
        .edge("kuala_lumpur", "singapore")
        // Korea and Japan
        .edge("seoul", "busan")
        .edge("tokyo", "osaka")
        // Africa
        .edge("cairo", "khartoum")
        .edge("khartoum", "addis_ababa")
        .edge("addis_ababa", "nairobi")
        .edge("nairobi", "dar_es_salaam")
        .edge("dar_es_salaam", "lusaka")
        .edge("lusaka", "johannesburg")
        .edge("johannesburg", "durban")
        .edge("johannesburg", "cape_town")
        .edge("lusaka", "kinshasa")
        .edge("khartoum", "ndjamena")
        .edge("ndjamena", "lagos")
        .edge("lagos", "accra")
        .edge("accra", "abidjan")
        .edge("abidjan", "bamako")
        .edge("bamako", "dakar")
        .edge("lagos", "niamey")
        .edge("niamey", "bamako")
        .edge("niamey", "algiers")
        .edge("algiers", "tunis")
        .edge("tunis", "tripoli")
        .edge("tripoli", "cairo")
        .edge("algiers", "casablanca")
        .edge("casablanca", "tangier")
        .edge("casablanca", "dakar")
        .edge("tangier", "madrid")
        // North and Central America
        .edge("vancouver", "seattle")
        .edge("vancouver", "calgary")
        .edge("calgary", "winnipeg")
        .edge("winnipeg", "toronto")
        .edge("seattle", "san_francisco")
        .edge("seattle", "salt_lake_city")
        .edge("san_francisco", "los_angeles")
        .edge("san_francisco", "salt_lake_city")
        .edge("los_angeles", "phoenix")
        .edge("phoenix", "dallas")
        .edge("phoenix", "denver")
        .edge("salt_lake_city", "denver")
        .edge("denver", "kansas_city")
        .edge("kansas_city", "chicago")
        .edge("dallas", "houston")
        .edge("dallas", "kansas_city")
        .edge("dallas", "memphis")
        .edge("memphis", "chicago")
        .edge("memphis", "atlanta")
        .edge("atlanta", "miami")
        .edge("atlanta", "washington")
        .edge("washington", "new_york")
        .edge("new_york", "chicago")
        .edge("chicago", "toronto")
        .edge("toronto", "montreal")
        .edge("montreal", "new_york")
        .edge("dallas", "monterrey")
        .edge("houston", "monterrey")
        .edge("monterrey", "mexico_city")
        .edge("mexico_city", "guadalajara")
        .edge("mexico_city", "guatemala_city")
        .edge("guatemala_city", "panama_city")
        // South America
        .edge("caracas", "bogota")
        .edge("bogota", "quito")
        .edge("quito", "lima")
        .edge("lima", "la_paz")
        .edge("la_paz", "santiago")
        .edge("santiago", "buenos_aires")
        .edge("buenos_aires", "montevideo")
        .edge("buenos_aires", "asuncion")
        .edge("asuncion", "sao_paulo")
        .edge("montevideo", "sao_paulo")
        .edge("sao_paulo", "rio_de_janeiro")
        .edge("rio_de_janeiro", "belo_horizonte")
        .edge("manaus", "caracas")
        // Australia
        .edge("perth", "adelaide")
        .edge("adelaide", "melbourne")
        .edge("melbourne", "sydney")
        .edge("sydney", "brisbane")
        .edge("adelaide", "alice_springs")
        .edge("alice_springs", "darwin")
        .build()
}
