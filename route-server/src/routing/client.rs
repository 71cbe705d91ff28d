//! OSRM route client.

use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::Semaphore;

use crate::domain::{Coord, TransportMode};

use super::error::RoutingError;
use super::{RoadRouter, RoutedPath};

/// Default base URL for the public OSRM demo server.
const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Configuration for the router client.
///
/// Both profiles default to `driving`, the only graph the public demo
/// server carries. With the default, rail legs are routed over roads and
/// still reported as `osrm` geometry; point `base_url` at a server with a
/// rail graph and set [`RouterConfig::with_rail_profile`] to get track
/// geometry.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Base URL of the OSRM server
    pub base_url: String,
    /// Profile used for road segments and connectors
    pub road_profile: String,
    /// Profile used for rail segments; `driving` unless configured
    pub rail_profile: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            road_profile: "driving".to_string(),
            rail_profile: "driving".to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 8,
        }
    }
}

impl RouterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom base URL (for testing or a self-hosted server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_rail_profile(mut self, profile: impl Into<String>) -> Self {
        self.rail_profile = profile.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct Route {
    geometry: LineString,
    distance: f64,
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct LineString {
    coordinates: Vec<Vec<f64>>,
}

/// Client for the OSRM `route` service.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    http: reqwest::Client,
    base_url: String,
    road_profile: String,
    rail_profile: String,
    semaphore: Arc<Semaphore>,
}

impl OsrmClient {
    pub fn new(config: RouterConfig) -> Result<Self, RoutingError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            road_profile: config.road_profile,
            rail_profile: config.rail_profile,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    fn profile(&self, mode: TransportMode) -> &str {
        match mode {
            TransportMode::Rail => &self.rail_profile,
            _ => &self.road_profile,
        }
    }
}

impl RoadRouter for OsrmClient {
    async fn route(
        &self,
        mode: TransportMode,
        from: Coord,
        to: Coord,
    ) -> Result<RoutedPath, RoutingError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| RoutingError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!(
            "{}/route/v1/{}/{},{};{},{}",
            self.base_url,
            self.profile(mode),
            from.lon(),
            from.lat(),
            to.lon(),
            to.lat()
        );

        let response = self
            .http
            .get(&url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // OSRM reports "no route" as a 400 with a JSON code, so try the body
        // before treating the status as fatal.
        let parsed: Result<RouteResponse, _> = serde_json::from_str(&body);
        let parsed = match parsed {
            Ok(p) => p,
            Err(e) if status.is_success() => {
                return Err(RoutingError::Json {
                    message: e.to_string(),
                });
            }
            Err(_) => {
                return Err(RoutingError::Api {
                    status: status.as_u16(),
                    message: body.chars().take(500).collect(),
                });
            }
        };

        if parsed.code != "Ok" {
            return Err(RoutingError::NoRoute { code: parsed.code });
        }

        let route = parsed
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| RoutingError::NoRoute {
                code: "NoRoute".to_string(),
            })?;

        let coordinates: Vec<Coord> = route
            .geometry
            .coordinates
            .iter()
            .filter_map(|pair| Coord::from_slice(pair))
            .collect();
        if coordinates.len() < 2 {
            return Err(RoutingError::InvalidGeometry {
                valid: coordinates.len(),
            });
        }

        Ok(RoutedPath {
            coordinates,
            distance_meters: route.distance,
            duration_seconds: route.duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn c(lon: f64, lat: f64) -> Coord {
        Coord::new(lon, lat).unwrap()
    }

    fn client_for(server: &MockServer) -> OsrmClient {
        OsrmClient::new(RouterConfig::new().with_base_url(server.uri())).unwrap()
    }

    #[test]
    fn config_defaults() {
        let config = RouterConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 8);
        assert_eq!(config.road_profile, "driving");
    }

    #[tokio::test]
    async fn parses_geojson_route() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/route/v1/driving/2.35,48.86;4.9,52.37"))
            .and(query_param("overview", "full"))
            .and(query_param("geometries", "geojson"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": "Ok",
                "routes": [{
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [[2.35, 48.86], [3.0, 50.0], [999.0, 0.0], [4.9, 52.37]]
                    },
                    "distance": 503000.0,
                    "duration": 18000.0
                }]
            })))
            .mount(&server)
            .await;

        let path = client_for(&server)
            .route(TransportMode::Road, c(2.35, 48.86), c(4.9, 52.37))
            .await
            .unwrap();
        // The out-of-range point is dropped.
        assert_eq!(path.coordinates.len(), 3);
        assert_eq!(path.distance_meters, 503000.0);
        assert_eq!(path.duration_seconds, 18000.0);
    }

    #[tokio::test]
    async fn rail_uses_rail_profile() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/route/v1/train/0,0;1,1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": "Ok",
                "routes": [{
                    "geometry": {"coordinates": [[0.0, 0.0], [1.0, 1.0]]},
                    "distance": 157000.0,
                    "duration": 7200.0
                }]
            })))
            .mount(&server)
            .await;

        let client =
            OsrmClient::new(RouterConfig::new().with_base_url(server.uri()).with_rail_profile("train"))
                .unwrap();
        let path = client
            .route(TransportMode::Rail, c(0.0, 0.0), c(1.0, 1.0))
            .await
            .unwrap();
        assert_eq!(path.coordinates.len(), 2);
    }

    #[tokio::test]
    async fn rail_defaults_to_the_road_graph() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/route/v1/driving/0,0;1,1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": "Ok",
                "routes": [{
                    "geometry": {"coordinates": [[0.0, 0.0], [1.0, 1.0]]},
                    "distance": 160000.0,
                    "duration": 6000.0
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        assert_eq!(RouterConfig::new().rail_profile, "driving");
        client_for(&server)
            .route(TransportMode::Rail, c(0.0, 0.0), c(1.0, 1.0))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn slow_server_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "code": "Ok", "routes": [] }))
                    .set_delay(std::time::Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let client =
            OsrmClient::new(RouterConfig::new().with_base_url(server.uri()).with_timeout(1)).unwrap();
        let started = std::time::Instant::now();
        let err = client
            .route(TransportMode::Road, c(2.35, 48.86), c(21.01, 52.23))
            .await
            .unwrap_err();
        assert!(matches!(&err, RoutingError::Http(e) if e.is_timeout()), "{err}");
        assert!(started.elapsed() < std::time::Duration::from_secs(3));
    }

    #[tokio::test]
    async fn no_route_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "code": "NoRoute",
                "message": "Impossible route between points"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .route(TransportMode::Road, c(0.0, 0.0), c(1.0, 1.0))
            .await
            .unwrap_err();
        assert!(matches!(err, RoutingError::NoRoute { ref code } if code == "NoRoute"));
    }

    #[tokio::test]
    async fn degenerate_geometry_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": "Ok",
                "routes": [{
                    "geometry": {"coordinates": [[0.0, 0.0]]},
                    "distance": 0.0,
                    "duration": 0.0
                }]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .route(TransportMode::Road, c(0.0, 0.0), c(1.0, 1.0))
            .await
            .unwrap_err();
        assert!(matches!(err, RoutingError::InvalidGeometry { valid: 1 }));
    }

    #[tokio::test]
    async fn server_error_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .route(TransportMode::Road, c(0.0, 0.0), c(1.0, 1.0))
            .await
            .unwrap_err();
        assert!(matches!(err, RoutingError::Api { status: 502, .. }));
    }
}
