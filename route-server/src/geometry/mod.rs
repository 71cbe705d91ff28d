//! Geometry providers.
//!
//! Each provider turns a pair of endpoints into a polyline. Providers that
//! cannot serve a pair return `None` and the planner moves on to the next
//! one in its chain.

pub mod compress;
pub mod great_circle;

pub use compress::compress;
pub use great_circle::StepRule;

use crate::corridor::{land, maritime};
use crate::domain::{Coord, Provider};

/// A polyline produced by one provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub coordinates: Vec<Coord>,
    pub distance_km: f64,
    /// Travel time reported by the provider, if it reports one.
    pub duration_minutes: Option<f64>,
    pub provider: Provider,
}

impl Geometry {
    /// Wrap a polyline, pinning its ends to `from` and `to`.
    ///
    /// Returns `None` for fewer than two points. The distance is the
    /// polyline length after pinning.
    pub fn pinned(
        mut coordinates: Vec<Coord>,
        from: Coord,
        to: Coord,
        duration_minutes: Option<f64>,
        provider: Provider,
    ) -> Option<Self> {
        if coordinates.len() < 2 {
            return None;
        }
        coordinates[0] = from;
        let last = coordinates.len() - 1;
        coordinates[last] = to;
        Some(Self {
            distance_km: path_length_km(&coordinates),
            coordinates,
            duration_minutes,
            provider,
        })
    }
}

/// Sum of haversine lengths between consecutive points.
pub fn path_length_km(points: &[Coord]) -> f64 {
    points.windows(2).map(|w| w[0].distance_km(&w[1])).sum()
}

/// Great-circle arc between the endpoints. Never fails.
pub fn great_circle(from: Coord, to: Coord, rule: StepRule) -> Geometry {
    Geometry {
        coordinates: great_circle::arc(&from, &to, rule),
        distance_km: from.distance_km(&to),
        duration_minutes: None,
        provider: Provider::GreatCircle,
    }
}

/// Sea-lane geometry through the maritime corridor graph.
pub fn maritime_corridor(from: Coord, to: Coord) -> Option<Geometry> {
    let waypoints = maritime::route(&from, &to)?;
    Geometry::pinned(
        stitch(from, &waypoints, to),
        from,
        to,
        None,
        Provider::MaritimeCorridor,
    )
}

/// Overland geometry through the land corridor graph.
pub fn land_corridor(from: Coord, to: Coord, anchor_cap_km: f64) -> Option<Geometry> {
    let waypoints = land::route(&from, &to, anchor_cap_km)?;
    Geometry::pinned(
        stitch(from, &waypoints, to),
        from,
        to,
        None,
        Provider::LandCorridor,
    )
}

/// Join `from`, each waypoint and `to` with short great-circle legs.
fn stitch(from: Coord, waypoints: &[Coord], to: Coord) -> Vec<Coord> {
    let stops: Vec<Coord> = std::iter::once(from)
        .chain(waypoints.iter().copied())
        .chain(std::iter::once(to))
        .collect();

    let mut out: Vec<Coord> = Vec::new();
    for pair in stops.windows(2) {
        let leg = great_circle::arc(&pair[0], &pair[1], StepRule::STITCH);
        // Each leg starts where the previous one ended.
        let skip = usize::from(!out.is_empty());
        out.extend(leg.into_iter().skip(skip));
    }
    dedup_consecutive(&mut out);
    out
}

/// Concatenate segment polylines into one route, dropping repeated joins.
///
/// Always returns at least two points when any input point exists.
pub fn merge<'a>(parts: impl IntoIterator<Item = &'a [Coord]>) -> Vec<Coord> {
    let mut out: Vec<Coord> = parts.into_iter().flatten().copied().collect();
    dedup_consecutive(&mut out);
    if out.len() == 1 {
        out.push(out[0]);
    }
    out
}

fn dedup_consecutive(points: &mut Vec<Coord>) {
    points.dedup_by(|a, b| a == b);
}
