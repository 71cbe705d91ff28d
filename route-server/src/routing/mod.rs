//! Road and rail routing.
//!
//! [`OsrmClient`] asks an OSRM server for a drivable path between two
//! points. [`DisabledRouter`] is used when the process runs offline; the
//! planner then falls back to corridor or great-circle geometry.

mod client;
mod error;

use std::future::Future;

pub use client::{OsrmClient, RouterConfig};
pub use error::RoutingError;

use crate::domain::{Coord, TransportMode};

/// A path returned by the routing service.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedPath {
    /// At least two valid points.
    pub coordinates: Vec<Coord>,
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

/// Point-to-point routing over a road or rail network.
pub trait RoadRouter: Send + Sync {
    fn route(
        &self,
        mode: TransportMode,
        from: Coord,
        to: Coord,
    ) -> impl Future<Output = Result<RoutedPath, RoutingError>> + Send;
}

/// Router that never reaches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledRouter;

impl RoadRouter for DisabledRouter {
    async fn route(
        &self,
        _mode: TransportMode,
        _from: Coord,
        _to: Coord,
    ) -> Result<RoutedPath, RoutingError> {
        Err(RoutingError::Disabled)
    }
}
