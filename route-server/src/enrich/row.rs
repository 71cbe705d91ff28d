//! Enriched row construction.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::{Coord, HubSource, HubType, ResolvedHub, RouteSegment, TransportMode};
use crate::geometry::{compress, merge};
use crate::plan::ModeDecision;
use crate::resolve::ModeHubs;
use crate::risk::{self, RiskInputs, RiskLevel, RouteFacts};

use super::config::PointBudget;

/// Fields added to a row that could be routed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enrichment {
    pub route_status: &'static str,
    pub requested_mode: TransportMode,
    pub mode_of_transport: TransportMode,

    pub origin_hub_name: String,
    pub origin_hub_coordinates: Coord,
    pub origin_hub_type: HubType,
    pub origin_hub_source: HubSource,
    pub destination_hub_name: String,
    pub destination_hub_coordinates: Coord,
    pub destination_hub_type: HubType,
    pub destination_hub_source: HubSource,

    /// City anchors.
    pub origin_coordinates: Coord,
    pub destination_coordinates: Coord,

    pub route_segments: Vec<RouteSegment>,
    pub route_geometry: Vec<Coord>,
    pub route_distance_km: f64,
    pub route_duration_minutes: Option<f64>,
    pub route_provider: String,
    pub route_is_fallback: bool,
    pub route_risk_score: f64,
    pub route_risk_level: RiskLevel,
}

/// Everything needed to assemble an [`Enrichment`].
pub struct RoutePlan<'a> {
    pub decision: ModeDecision,
    pub origin: &'a ModeHubs,
    pub destination: &'a ModeHubs,
    pub segments: Vec<RouteSegment>,
}

impl Enrichment {
    pub fn build(plan: RoutePlan<'_>, risk_inputs: &RiskInputs<'_>, budget: PointBudget) -> Self {
        let RoutePlan {
            decision,
            origin,
            destination,
            mut segments,
        } = plan;

        let merged = if segments.is_empty() {
            vec![origin.anchor.coordinates, destination.anchor.coordinates]
        } else {
            merge(segments.iter().map(RouteSegment::coordinates))
        };
        let route_geometry = compress(&merged, budget.route);
        for seg in &mut segments {
            let points = compress(seg.coordinates(), budget.segment);
            seg.set_coordinates(points);
        }

        let route_distance_km = segments.iter().map(|s| s.distance_km).sum();
        let route_duration_minutes = segments.iter().map(|s| s.duration_minutes).sum();
        let route_is_fallback = segments.iter().any(|s| s.is_fallback);
        let route_provider = segments
            .iter()
            .map(|s| s.provider.as_str())
            .collect::<Vec<_>>()
            .join(" > ");

        let hub_fallback = [&origin.anchor, &origin.main, &destination.anchor, &destination.main]
            .into_iter()
            .any(|h| h.is_fallback());
        let risk = risk::assess(
            risk_inputs,
            &RouteFacts {
                mode: decision.effective,
                distance_km: route_distance_km,
                is_fallback: route_is_fallback || hub_fallback,
            },
        );

        let o: &ResolvedHub = &origin.main;
        let d: &ResolvedHub = &destination.main;
        Self {
            route_status: "enriched",
            requested_mode: decision.requested,
            mode_of_transport: decision.effective,
            origin_hub_name: o.name.clone(),
            origin_hub_coordinates: o.coordinates,
            origin_hub_type: o.hub_type,
            origin_hub_source: o.source,
            destination_hub_name: d.name.clone(),
            destination_hub_coordinates: d.coordinates,
            destination_hub_type: d.hub_type,
            destination_hub_source: d.source,
            origin_coordinates: origin.anchor.coordinates,
            destination_coordinates: destination.anchor.coordinates,
            route_segments: segments,
            route_geometry,
            route_distance_km,
            route_duration_minutes,
            route_provider,
            route_is_fallback,
            route_risk_score: risk.score,
            route_risk_level: risk.level,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Enriched(Box<Enrichment>),
    /// No origin and no destination to work with.
    Skipped,
}

/// A raw row and what enrichment made of it.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRow {
    pub raw: Map<String, Value>,
    pub outcome: RowOutcome,
}

impl EnrichedRow {
    pub fn enriched(raw: Map<String, Value>, enrichment: Enrichment) -> Self {
        Self {
            raw,
            outcome: RowOutcome::Enriched(Box::new(enrichment)),
        }
    }

    pub fn skipped(raw: Map<String, Value>) -> Self {
        Self {
            raw,
            outcome: RowOutcome::Skipped,
        }
    }

    pub fn enrichment(&self) -> Option<&Enrichment> {
        match &self.outcome {
            RowOutcome::Enriched(e) => Some(e),
            RowOutcome::Skipped => None,
        }
    }

    /// The raw row with enrichment fields laid over it.
    pub fn into_json(self) -> Result<Map<String, Value>, serde_json::Error> {
        let mut out = self.raw;
        match self.outcome {
            RowOutcome::Enriched(e) => {
                if let Value::Object(fields) = serde_json::to_value(&*e)? {
                    out.extend(fields);
                }
            }
            RowOutcome::Skipped => {
                out.insert("route_status".to_string(), Value::from("skipped"));
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::domain::{Provider, SegmentRole};
    use crate::geometry::{StepRule, great_circle};

    fn hub(name: &str, lon: f64, lat: f64, hub_type: HubType, source: HubSource) -> Arc<ResolvedHub> {
        Arc::new(ResolvedHub::new(name, Coord::new(lon, lat).unwrap(), hub_type, source))
    }

    fn segment(from: Coord, to: Coord, role: SegmentRole, provider: Provider, fallback: bool) -> RouteSegment {
        let g = great_circle(from, to, StepRule::AIR);
        RouteSegment::new(
            TransportMode::Air,
            role,
            g.coordinates,
            g.distance_km,
            Some(60.0),
            provider,
            fallback,
        )
        .unwrap()
    }

    fn ends() -> (ModeHubs, ModeHubs) {
        let origin = ModeHubs {
            anchor: hub("Tokyo", 139.69, 35.69, HubType::CityCenter, HubSource::Static),
            main: hub("Haneda Airport", 139.78, 35.55, HubType::Airport, HubSource::Static),
        };
        let destination = ModeHubs {
            anchor: hub("Dubai", 55.27, 25.20, HubType::CityCenter, HubSource::Static),
            main: hub("Dubai International Airport", 55.36, 25.25, HubType::Airport, HubSource::Static),
        };
        (origin, destination)
    }

    fn decision() -> ModeDecision {
        ModeDecision {
            requested: TransportMode::Air,
            effective: TransportMode::Air,
            via_hubs: true,
        }
    }

    #[test]
    fn totals_and_provider_chain() {
        let (o, d) = ends();
        let segments = vec![
            segment(o.anchor.coordinates, o.main.coordinates, SegmentRole::Access, Provider::Osrm, false),
            segment(o.main.coordinates, d.main.coordinates, SegmentRole::Main, Provider::GreatCircle, false),
        ];
        let km: f64 = segments.iter().map(|s| s.distance_km).sum();
        let plan = RoutePlan {
            decision: decision(),
            origin: &o,
            destination: &d,
            segments,
        };
        let e = Enrichment::build(plan, &RiskInputs::default(), PointBudget::for_rows(1));

        assert_eq!(e.route_provider, "osrm > great_circle");
        assert_eq!(e.route_distance_km, km);
        assert_eq!(e.route_duration_minutes, Some(120.0));
        assert!(!e.route_is_fallback);
        assert_eq!(e.origin_hub_name, "Haneda Airport");
        assert_eq!(e.origin_coordinates, o.anchor.coordinates);
        assert_eq!(e.route_geometry.first(), Some(&o.anchor.coordinates));
        assert_eq!(e.route_geometry.last(), Some(&d.main.coordinates));
    }

    #[test]
    fn geometry_respects_budgets() {
        let (o, d) = ends();
        let segments = vec![segment(o.main.coordinates, d.main.coordinates, SegmentRole::Main, Provider::GreatCircle, false)];
        let plan = RoutePlan {
            decision: decision(),
            origin: &o,
            destination: &d,
            segments,
        };
        let budget = PointBudget { route: 10, segment: 5 };
        let e = Enrichment::build(plan, &RiskInputs::default(), budget);
        assert!(e.route_geometry.len() <= 10);
        assert!(e.route_segments[0].coordinates().len() <= 5);
        assert_eq!(e.route_segments[0].start(), o.main.coordinates);
        assert_eq!(e.route_segments[0].end(), d.main.coordinates);
    }

    #[test]
    fn fallback_hub_raises_risk() {
        let (o, mut d) = ends();
        let segs = |o: &ModeHubs, d: &ModeHubs| {
            vec![segment(o.main.coordinates, d.main.coordinates, SegmentRole::Main, Provider::GreatCircle, false)]
        };
        let clean = Enrichment::build(
            RoutePlan { decision: decision(), origin: &o, destination: &d, segments: segs(&o, &d) },
            &RiskInputs::default(),
            PointBudget::for_rows(1),
        );
        d.anchor = hub("Dubai", 55.27, 25.20, HubType::CityCenter, HubSource::Fallback);
        let degraded = Enrichment::build(
            RoutePlan { decision: decision(), origin: &o, destination: &d, segments: segs(&o, &d) },
            &RiskInputs::default(),
            PointBudget::for_rows(1),
        );
        assert!(!degraded.route_is_fallback);
        assert!((degraded.route_risk_score - clean.route_risk_score - 0.1).abs() < 1e-9);
    }

    #[test]
    fn no_segments_still_yields_a_line() {
        let (o, d) = ends();
        let plan = RoutePlan {
            decision: decision(),
            origin: &o,
            destination: &d,
            segments: Vec::new(),
        };
        let e = Enrichment::build(plan, &RiskInputs::default(), PointBudget::for_rows(1));
        assert_eq!(e.route_geometry, vec![o.anchor.coordinates, d.anchor.coordinates]);
        assert_eq!(e.route_provider, "");
        assert_eq!(e.route_duration_minutes, Some(0.0));
    }

    #[test]
    fn enrichment_overwrites_raw_fields() {
        let (o, d) = ends();
        let plan = RoutePlan {
            decision: decision(),
            origin: &o,
            destination: &d,
            segments: Vec::new(),
        };
        let e = Enrichment::build(plan, &RiskInputs::default(), PointBudget::for_rows(1));
        let raw = match json!({"id": 7, "route_status": "stale", "mode_of_transport": "plane"}) {
            Value::Object(m) => m,
            _ => unreachable!(),
        };
        let out = EnrichedRow::enriched(raw, e).into_json().unwrap();
        assert_eq!(out["id"], 7);
        assert_eq!(out["route_status"], "enriched");
        assert_eq!(out["mode_of_transport"], "air");
        assert_eq!(out["origin_hub_type"], "airport");
        assert_eq!(out["route_risk_level"], "low");
        assert_eq!(out["origin_coordinates"], json!([139.69, 35.69]));
    }

    #[test]
    fn skipped_rows_are_marked() {
        let raw = match json!({"note": "blank"}) {
            Value::Object(m) => m,
            _ => unreachable!(),
        };
        let row = EnrichedRow::skipped(raw);
        assert!(row.enrichment().is_none());
        let out = row.into_json().unwrap();
        assert_eq!(out["route_status"], "skipped");
        assert_eq!(out["note"], "blank");
    }
}
