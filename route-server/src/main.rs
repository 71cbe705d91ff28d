use std::error::Error;
use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use route_server::enrich::EnrichConfig;
use route_server::geocode::{DisabledGeocoder, Geocoder, GeocoderConfig, NominatimClient};
use route_server::routing::{DisabledRouter, OsrmClient, RoadRouter, RouterConfig};
use route_server::web::{AppState, create_router};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("route_server=info")),
        )
        .init();

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()?;

    let mut config = EnrichConfig::default();
    if let Ok(n) = std::env::var("ENRICH_CONCURRENCY") {
        match n.parse() {
            Ok(n) => config = config.with_concurrency(n),
            Err(_) => warn!(value = %n, "ENRICH_CONCURRENCY is not a number, using default"),
        }
    }

    let offline = std::env::var("DISABLE_EXTERNAL")
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);
    if offline {
        info!("external geocoding and routing disabled");
        return serve(AppState::new(DisabledGeocoder, DisabledRouter, config), addr).await;
    }

    let mut geocoder_config = GeocoderConfig::new();
    match std::env::var("GEOCODER_URL") {
        Ok(url) => geocoder_config = geocoder_config.with_base_url(url),
        Err(_) => warn!(url = %geocoder_config.base_url, "GEOCODER_URL not set, using public Nominatim"),
    }
    match std::env::var("GEOCODER_USER_AGENT") {
        Ok(ua) => geocoder_config = geocoder_config.with_user_agent(ua),
        Err(_) => warn!(
            user_agent = %geocoder_config.user_agent,
            "GEOCODER_USER_AGENT not set; public Nominatim expects an identifying agent"
        ),
    }

    let mut router_config = RouterConfig::new();
    match std::env::var("ROUTER_URL") {
        Ok(url) => router_config = router_config.with_base_url(url),
        Err(_) => warn!(url = %router_config.base_url, "ROUTER_URL not set, using public OSRM demo server"),
    }

    let geocoder = NominatimClient::new(geocoder_config)?;
    let router = OsrmClient::new(router_config)?;
    serve(AppState::new(geocoder, router, config), addr).await
}

async fn serve<G, R>(state: AppState<G, R>, addr: SocketAddr) -> Result<(), Box<dyn Error>>
where
    G: Geocoder + 'static,
    R: RoadRouter + 'static,
{
    let app = create_router(state);

    info!(%addr, "route enrichment server listening");
    info!("  GET  /health        - Health check");
    info!("  POST /routes/enrich - Enrich shipment rows");
    info!("  GET  /cache/stats   - Cache entry counts");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
