//! Domain types for route enrichment.
//!
//! Coordinates, transport modes, hubs and route segments. All types enforce
//! their invariants at construction time, so code that receives them can
//! trust their validity.

mod coord;
mod hub;
mod mode;
mod segment;
mod text;

pub use coord::{Coord, InvalidCoord};
pub use hub::{HubSource, HubType, ResolvedHub};
pub use mode::{ResolveMode, TransportMode};
pub use segment::{Provider, RouteSegment, SegmentRole, TooFewPoints};
pub use text::{normalize_text, slugify};
