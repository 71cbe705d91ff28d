//! Static corridor graphs for sea lanes and overland routes.

pub mod graph;
pub mod land;
pub mod maritime;

pub use graph::{CorridorGraph, CorridorGraphBuilder, GraphNode};
