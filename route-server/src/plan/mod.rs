//! Mode decisions and segment planning.
//!
//! A route is one to three segments: an optional access leg from the
//! origin city to its port or airport, the main leg, and an optional egress
//! leg at the far end. Each segment's geometry comes from the first provider
//! in its strategy chain that can serve it.

mod config;

use std::sync::Arc;

use tracing::{debug, warn};

pub use config::{PlannerConfig, SpeedProfile};

use crate::corridor::land;
use crate::domain::{Coord, Provider, ResolvedHub, RouteSegment, SegmentRole, TransportMode};
use crate::geometry::{self, Geometry, StepRule};
use crate::resolve::ModeHubs;
use crate::routing::{RoadRouter, RoutingError};

/// How a requested mode will actually be routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeDecision {
    pub requested: TransportMode,
    pub effective: TransportMode,
    /// Whether the route runs through a port or airport at each end.
    pub via_hubs: bool,
}

/// One way of producing geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Strategy {
    /// External router, for segments up to the given length.
    Router { cap_km: f64 },
    MaritimeCorridor,
    LandCorridor,
    GreatCircle(StepRule),
}

/// Plans route segments between resolved hubs.
pub struct SegmentPlanner<R> {
    router: Arc<R>,
    config: PlannerConfig,
}

impl<R: RoadRouter> SegmentPlanner<R> {
    pub fn new(router: Arc<R>, config: PlannerConfig) -> Self {
        Self { router, config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Decide the effective mode from the city anchors.
    ///
    /// Multimodal becomes sea or road by distance. Road and rail need both
    /// cities near a connected land corridor; otherwise the shipment is
    /// assumed to go by sea.
    pub fn decide(&self, requested: TransportMode, origin: &ResolvedHub, destination: &ResolvedHub) -> ModeDecision {
        let direct = |effective| ModeDecision {
            requested,
            effective,
            via_hubs: false,
        };
        match requested {
            TransportMode::Sea | TransportMode::Air => ModeDecision {
                requested,
                effective: requested,
                via_hubs: true,
            },
            TransportMode::Multimodal => {
                if origin.distance_km(destination) > self.config.multimodal_sea_threshold_km {
                    direct(TransportMode::Sea)
                } else {
                    direct(TransportMode::Road)
                }
            }
            TransportMode::Road | TransportMode::Rail => {
                if land::connected(
                    &origin.coordinates,
                    &destination.coordinates,
                    self.config.land_anchor_cap_km,
                ) {
                    direct(requested)
                } else {
                    debug!(
                        origin = %origin.name,
                        destination = %destination.name,
                        requested = %requested,
                        "no overland corridor, routing by sea"
                    );
                    direct(TransportMode::Sea)
                }
            }
        }
    }

    /// Build the segments for a decided route.
    ///
    /// Hubbed routes get access and egress connectors when the hub is more
    /// than the connector threshold from its city. Direct routes are a
    /// single main segment between the city anchors.
    pub async fn segments(&self, decision: &ModeDecision, origin: &ModeHubs, destination: &ModeHubs) -> Vec<RouteSegment> {
        let mode = decision.effective;
        if !decision.via_hubs {
            return self
                .segment(mode, SegmentRole::Main, origin.anchor.coordinates, destination.anchor.coordinates)
                .await
                .into_iter()
                .collect();
        }

        let mut out = Vec::with_capacity(3);
        if origin.anchor.distance_km(&origin.main) > self.config.connector_min_km {
            out.extend(
                self.segment(
                    TransportMode::Road,
                    SegmentRole::Access,
                    origin.anchor.coordinates,
                    origin.main.coordinates,
                )
                .await,
            );
        }
        out.extend(
            self.segment(mode, SegmentRole::Main, origin.main.coordinates, destination.main.coordinates)
                .await,
        );
        if destination.main.distance_km(&destination.anchor) > self.config.connector_min_km {
            out.extend(
                self.segment(
                    TransportMode::Road,
                    SegmentRole::Egress,
                    destination.main.coordinates,
                    destination.anchor.coordinates,
                )
                .await,
            );
        }
        out
    }

    /// Run the strategy chain for one segment.
    async fn segment(&self, mode: TransportMode, role: SegmentRole, from: Coord, to: Coord) -> Option<RouteSegment> {
        for (tier, strategy) in self.chain(mode, role).into_iter().enumerate() {
            let Some(geometry) = self.run(strategy, mode, from, to).await else {
                continue;
            };
            let duration = geometry.duration_minutes.unwrap_or_else(|| {
                self.config
                    .speeds
                    .duration_minutes(mode, role, geometry.distance_km)
            });
            debug!(
                mode = %mode,
                role = role.as_str(),
                provider = %geometry.provider,
                tier,
                km = geometry.distance_km,
                "segment planned"
            );
            match RouteSegment::new(
                mode,
                role,
                geometry.coordinates,
                geometry.distance_km,
                Some(duration),
                geometry.provider,
                geometry.provider != Provider::Osrm,
            ) {
                Ok(seg) => return Some(seg),
                Err(e) => warn!(provider = %geometry.provider, error = %e, "discarding geometry"),
            }
        }
        None
    }

    fn chain(&self, mode: TransportMode, role: SegmentRole) -> Vec<Strategy> {
        if role.is_connector() {
            return vec![
                Strategy::Router {
                    cap_km: self.config.connector_router_cap_km,
                },
                Strategy::GreatCircle(StepRule::SURFACE),
            ];
        }
        match mode {
            TransportMode::Air => vec![Strategy::GreatCircle(StepRule::AIR)],
            TransportMode::Sea => vec![
                Strategy::MaritimeCorridor,
                Strategy::GreatCircle(StepRule::SURFACE),
            ],
            TransportMode::Road | TransportMode::Rail | TransportMode::Multimodal => vec![
                Strategy::Router {
                    cap_km: self.config.main_router_cap_km,
                },
                Strategy::LandCorridor,
                Strategy::GreatCircle(StepRule::SURFACE),
            ],
        }
    }

    async fn run(&self, strategy: Strategy, mode: TransportMode, from: Coord, to: Coord) -> Option<Geometry> {
        match strategy {
            Strategy::Router { cap_km } => {
                if from.distance_km(&to) > cap_km {
                    return None;
                }
                self.routed(mode, from, to).await
            }
            Strategy::MaritimeCorridor => geometry::maritime_corridor(from, to),
            Strategy::LandCorridor => {
                geometry::land_corridor(from, to, self.config.land_anchor_cap_km)
            }
            Strategy::GreatCircle(rule) => Some(geometry::great_circle(from, to, rule)),
        }
    }

    async fn routed(&self, mode: TransportMode, from: Coord, to: Coord) -> Option<Geometry> {
        let path = match self.router.route(mode, from, to).await {
            Ok(p) => p,
            Err(RoutingError::Disabled) => return None,
            Err(e) => {
                warn!(mode = %mode, error = %e, "router failed, falling back");
                return None;
            }
        };

        let duration = (path.duration_seconds.is_finite() && path.duration_seconds >= 0.0)
            .then_some(path.duration_seconds / 60.0);
        let mut geometry = Geometry::pinned(path.coordinates, from, to, duration, Provider::Osrm)?;
        if path.distance_meters.is_finite() && path.distance_meters > 0.0 {
            geometry.distance_km = path.distance_meters / 1000.0;
        }
        Some(geometry)
    }
}
