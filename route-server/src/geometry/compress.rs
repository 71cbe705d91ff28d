//! Point-count reduction for route geometry.

use crate::domain::Coord;

/// Smallest budget honoured; both endpoints are always kept.
const MIN_POINTS: usize = 2;

/// Reduce `points` to at most `max_points` by uniform stride sampling.
///
/// The first and last points are always kept. Interior points are taken
/// every `ceil((n - 2) / (max - 2))` indices starting from the second point.
/// Inputs already within budget are returned unchanged, which makes the
/// operation idempotent.
pub fn compress(points: &[Coord], max_points: usize) -> Vec<Coord> {
    let max_points = max_points.max(MIN_POINTS);
    let n = points.len();
    if n <= max_points {
        return points.to_vec();
    }

    let mut out = Vec::with_capacity(max_points);
    out.push(points[0]);
    let interior_budget = max_points - 2;
    if interior_budget > 0 {
        let stride = (n - 2).div_ceil(interior_budget);
        out.extend(points[1..n - 1].iter().step_by(stride).copied());
    }
    out.push(points[n - 1]);
    out
}
