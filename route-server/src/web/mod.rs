//! Web layer for the route enrichment service.
//!
//! Exposes batch enrichment, a health check and cache statistics over HTTP.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
