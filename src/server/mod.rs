//! Pass-through HTTP proxy that keeps the provider key on the server.
//!
//! * `GET /api/solar/coordinates?lat=&lng=`
//! * `GET /api/solar/postal?postalCode=`
//! * `GET /health`

pub mod error;
pub mod routes;
pub mod state;

pub use self::error::{ErrorEnvelope, ProxyError};
pub use self::state::ProxyState;

use crate::config::ServerConfig;
use crate::error::{SolarError, SolarResult};
use axum::http::{HeaderValue, Method};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn build_router(config: &ServerConfig) -> SolarResult<Router> {
    let state = Arc::new(ProxyState::new(config));

    let app = routes::system_routes()
        .nest("/api/solar", routes::solar_routes())
        .fallback(routes::system::not_found)
        .layer(cors_layer(&config.allowed_origins)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// A `*` entry allows any origin, without credentials.
fn cors_layer(origins: &[String]) -> SolarResult<CorsLayer> {
    let cors = CorsLayer::new().allow_methods([Method::GET]);
    let origins: Vec<&str> = origins
        .iter()
        .map(|o| o.trim())
        .filter(|o| !o.is_empty())
        .collect();

    if origins.contains(&"*") {
        warn!("⚠️  Wildcard origin configured. CORS credentials are disabled.");
        return Ok(cors.allow_origin(AllowOrigin::any()));
    }

    let origins = origins
        .into_iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .map_err(|_| SolarError::Configuration(format!("Invalid allowed origin: {}", o)))
        })
        .collect::<SolarResult<Vec<_>>>()?;

    Ok(cors
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true))
}

/// Serves on an already bound listener until the process stops.
pub async fn serve_on(listener: TcpListener, config: &ServerConfig) -> SolarResult<()> {
    let app = build_router(config)?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub async fn serve(config: ServerConfig) -> SolarResult<()> {
    if config.api_key().is_none() {
        warn!("⚠️  GOOGLE_SOLAR_API_KEY is not set. Lookups will answer 500.");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    info!("🚀 Solar proxy listening on http://{}", addr);
    info!("📊 Health check: http://{}/health", addr);
    info!("🌐 CORS enabled for {}", config.allowed_origins.join(", "));

    serve_on(listener, &config).await
}
