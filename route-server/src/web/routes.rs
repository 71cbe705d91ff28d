//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{debug, error, warn};

use crate::enrich::{EnrichError, EnrichRequest, EnrichResponse};
use crate::geocode::Geocoder;
use crate::routing::RoadRouter;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<G, R>(state: AppState<G, R>) -> Router
where
    G: Geocoder + 'static,
    R: RoadRouter + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/routes/enrich", post(enrich_routes::<G, R>))
        .route("/cache/stats", get(cache_stats::<G, R>))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Enrich a batch of shipment rows.
async fn enrich_routes<G: Geocoder, R: RoadRouter>(
    State(state): State<AppState<G, R>>,
    body: Bytes,
) -> Result<Json<EnrichResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: EnrichRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(body = %String::from_utf8_lossy(&body), "unparseable enrich request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let response = state.enricher.enrich(&req).await?;
    Ok(Json(response))
}

/// Entry counts for the hub and response caches.
async fn cache_stats<G: Geocoder, R: RoadRouter>(
    State(state): State<AppState<G, R>>,
) -> Json<CacheStatsResponse> {
    Json(state.enricher.cache_stats().await.into())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<EnrichError> for AppError {
    fn from(e: EnrichError) -> Self {
        match e {
            EnrichError::TooManyRows { .. } | EnrichError::InvalidRequest { .. } => {
                AppError::BadRequest {
                    message: e.to_string(),
                }
            }
            EnrichError::Serialize(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use serde_json::{Value, json};

    use super::*;
    use crate::enrich::EnrichConfig;
    use crate::testing::{MockGeocoder, MockRouter};

    async fn serve(config: EnrichConfig) -> SocketAddr {
        let state = AppState::new(MockGeocoder::new(), MockRouter::new(), config);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, create_router(state)).await.unwrap();
        });
        addr
    }

    #[tokio::test]
    async fn health_says_ok() {
        let addr = serve(EnrichConfig::default()).await;
        let body = reqwest::get(format!("http://{addr}/health"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn enrich_round_trip_and_stats() {
        let addr = serve(EnrichConfig::default()).await;
        let client = reqwest::Client::new();
        let request = json!({
            "rows": [{ "origin": "Hamburg", "destination": "Rotterdam", "mode": "Truck" }]
        });

        let resp = client
            .post(format!("http://{addr}/routes/enrich"))
            .json(&request)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["summary"]["totalRows"], 1);
        assert_eq!(body["summary"]["cacheHit"], false);
        assert_eq!(body["summary"]["modeBreakdown"]["road"], 1);
        assert_eq!(body["rows"][0]["mode_of_transport"], "road");

        let again: Value = client
            .post(format!("http://{addr}/routes/enrich"))
            .json(&request)
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(again["summary"]["cacheHit"], true);

        let stats: Value = reqwest::get(format!("http://{addr}/cache/stats"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(stats["responseEntries"], 1);
        assert_eq!(stats["hubEntries"], 2);
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let addr = serve(EnrichConfig::default()).await;
        let resp = reqwest::Client::new()
            .post(format!("http://{addr}/routes/enrich"))
            .body("{\"rows\": 12")
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
        let body: Value = resp.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));
    }

    #[tokio::test]
    async fn oversized_request_is_bad_request() {
        let addr = serve(EnrichConfig::default().with_max_rows(1)).await;
        let resp = reqwest::Client::new()
            .post(format!("http://{addr}/routes/enrich"))
            .json(&json!({ "rows": [{ "origin": "Paris" }, { "origin": "Lyon" }] }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn error_mapping() {
        let bad: AppError = EnrichError::TooManyRows { rows: 9, max: 1 }.into();
        assert!(matches!(bad, AppError::BadRequest { .. }));
        let response = bad.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
