pub mod solar;
pub mod system;

use crate::server::state::ProxyState;
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn system_routes() -> Router<Arc<ProxyState>> {
    Router::new().route("/health", get(system::health))
}

pub fn solar_routes() -> Router<Arc<ProxyState>> {
    Router::new()
        .route("/coordinates", get(solar::by_coordinates))
        .route("/postal", get(solar::by_postal_code))
}
