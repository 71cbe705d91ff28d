//! Planner configuration.

use crate::domain::{SegmentRole, TransportMode};

/// Cruising speeds used when a provider reports no travel time.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedProfile {
    pub sea_kmh: f64,
    pub air_kmh: f64,
    /// Taxi, loading and climb, added to every air leg.
    pub air_overhead_mins: f64,
    pub road_main_kmh: f64,
    pub rail_main_kmh: f64,
    /// Trucking to and from ports and airports.
    pub connector_kmh: f64,
}

impl Default for SpeedProfile {
    fn default() -> Self {
        Self {
            sea_kmh: 30.0,
            air_kmh: 820.0,
            air_overhead_mins: 60.0,
            road_main_kmh: 60.0,
            rail_main_kmh: 70.0,
            connector_kmh: 45.0,
        }
    }
}

impl SpeedProfile {
    /// Estimated minutes to cover `distance_km`.
    pub fn duration_minutes(&self, mode: TransportMode, role: SegmentRole, distance_km: f64) -> f64 {
        let hours = |kmh: f64| distance_km / kmh * 60.0;
        if role.is_connector() {
            return hours(self.connector_kmh);
        }
        match mode {
            TransportMode::Sea => hours(self.sea_kmh),
            TransportMode::Air => hours(self.air_kmh) + self.air_overhead_mins,
            TransportMode::Rail => hours(self.rail_main_kmh),
            TransportMode::Road | TransportMode::Multimodal => hours(self.road_main_kmh),
        }
    }
}

/// Distance limits and thresholds for segment planning.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Longest main segment sent to the external router.
    pub main_router_cap_km: f64,

    /// Longest access/egress segment sent to the external router.
    pub connector_router_cap_km: f64,

    /// How far a city may lie from its nearest land corridor node.
    pub land_anchor_cap_km: f64,

    /// Connectors shorter than this are dropped.
    pub connector_min_km: f64,

    /// Multimodal shipments further apart than this go by sea.
    pub multimodal_sea_threshold_km: f64,

    pub speeds: SpeedProfile,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            main_router_cap_km: 3500.0,
            connector_router_cap_km: 400.0,
            land_anchor_cap_km: 900.0,
            connector_min_km: 15.0,
            multimodal_sea_threshold_km: 1600.0,
            speeds: SpeedProfile::default(),
        }
    }
}

impl PlannerConfig {
    pub fn with_speeds(mut self, speeds: SpeedProfile) -> Self {
        self.speeds = speeds;
        self
    }

    pub fn with_main_router_cap(mut self, km: f64) -> Self {
        self.main_router_cap_km = km;
        self
    }

    pub fn with_connector_router_cap(mut self, km: f64) -> Self {
        self.connector_router_cap_km = km;
        self
    }

    pub fn with_land_anchor_cap(mut self, km: f64) -> Self {
        self.land_anchor_cap_km = km;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_by_mode_and_role() {
        let s = SpeedProfile::default();
        assert_eq!(s.duration_minutes(TransportMode::Sea, SegmentRole::Main, 30.0), 60.0);
        assert_eq!(s.duration_minutes(TransportMode::Air, SegmentRole::Main, 820.0), 120.0);
        assert_eq!(s.duration_minutes(TransportMode::Road, SegmentRole::Main, 120.0), 120.0);
        assert_eq!(s.duration_minutes(TransportMode::Rail, SegmentRole::Main, 70.0), 60.0);
        assert_eq!(s.duration_minutes(TransportMode::Sea, SegmentRole::Access, 45.0), 60.0);
    }

    #[test]
    fn defaults() {
        let c = PlannerConfig::default();
        assert_eq!(c.main_router_cap_km, 3500.0);
        assert_eq!(c.connector_router_cap_km, 400.0);
        assert_eq!(c.land_anchor_cap_km, 900.0);
    }
}
