//! Router error types.

/// Errors that can occur when asking the routing service for a path.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    /// HTTP request failed or timed out
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned an error status
    #[error("router error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The service answered but found no route
    #[error("no route: {code}")]
    NoRoute { code: String },

    /// Route geometry had fewer than two valid points
    #[error("route geometry has {valid} valid points")]
    InvalidGeometry { valid: usize },

    /// Routing is switched off for this process
    #[error("router disabled")]
    Disabled,
}
