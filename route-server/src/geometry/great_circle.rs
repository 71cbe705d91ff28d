//! Great-circle interpolation.

use crate::domain::Coord;

/// Interpolation density for one kind of leg: `clamp(km / km_per_step, min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRule {
    pub km_per_step: f64,
    pub min_steps: usize,
    pub max_steps: usize,
}

impl StepRule {
    /// Air legs: smooth arcs over long distances.
    pub const AIR: StepRule = StepRule::new(150.0, 24, 72);
    /// Surface fallback legs.
    pub const SURFACE: StepRule = StepRule::new(200.0, 8, 48);
    /// Short legs joining endpoints to corridor waypoints.
    pub const STITCH: StepRule = StepRule::new(250.0, 2, 24);

    pub const fn new(km_per_step: f64, min_steps: usize, max_steps: usize) -> Self {
        Self {
            km_per_step,
            min_steps,
            max_steps,
        }
    }

    pub fn steps(&self, distance_km: f64) -> usize {
        let raw = if distance_km.is_finite() {
            (distance_km / self.km_per_step).max(0.0) as usize
        } else {
            self.max_steps
        };
        raw.clamp(self.min_steps, self.max_steps)
    }
}

/// Points along the great circle from `from` to `to`, `steps + 1` in total.
///
/// The first and last points are exactly `from` and `to`.
pub fn interpolate(from: &Coord, to: &Coord, steps: usize) -> Vec<Coord> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| from.intermediate(to, i as f64 / steps as f64))
        .collect()
}

/// Interpolate with a step count derived from the leg length.
pub fn arc(from: &Coord, to: &Coord, rule: StepRule) -> Vec<Coord> {
    interpolate(from, to, rule.steps(from.distance_km(to)))
}
