//! Route enrichment server.
//!
//! Turns spreadsheet-style shipment rows into map-ready routes: free-text
//! places become ports, airports or city centres, and each row gets
//! mode-aware geometry and a risk score.

pub mod cache;
pub mod corridor;
pub mod domain;
pub mod enrich;
pub mod gazetteer;
pub mod geocode;
pub mod geometry;
pub mod plan;
pub mod resolve;
pub mod risk;
pub mod routing;
pub mod web;

#[cfg(test)]
mod testing;
