use crate::server::error::{ProxyError, ProxyResult};
use crate::server::state::ProxyState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use reqwest::RequestBuilder;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

const COORDINATES_CONTEXT: &str = "Failed to fetch solar data";
const POSTAL_CONTEXT: &str = "Failed to fetch postal data";

#[derive(Deserialize)]
pub struct CoordinatesQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalQuery {
    pub postal_code: Option<String>,
}

pub async fn by_coordinates(
    State(state): State<Arc<ProxyState>>,
    query: Result<Query<CoordinatesQuery>, QueryRejection>,
) -> ProxyResult<Response> {
    let Query(query) = query?;
    let (lat, lng) = match (present(query.lat), present(query.lng)) {
        (Some(lat), Some(lng)) => (lat, lng),
        _ => {
            return Err(ProxyError::Validation(
                "Missing required parameters: lat and lng".into(),
            ))
        }
    };
    let lat = parse_coordinate("lat", &lat)?;
    let lng = parse_coordinate("lng", &lng)?;

    let key = state.api_key()?;

    info!("☀️  Proxying closest-building lookup for {}, {}", lat, lng);
    let request = state
        .http
        .get(format!("{}/buildingInsights:findClosest", state.provider_url))
        .query(&[
            ("location.latitude", lat.to_string().as_str()),
            ("location.longitude", lng.to_string().as_str()),
            ("requiredQuality", "HIGH"),
            ("key", key),
        ]);

    forward(request, COORDINATES_CONTEXT).await
}

pub async fn by_postal_code(
    State(state): State<Arc<ProxyState>>,
    query: Result<Query<PostalQuery>, QueryRejection>,
) -> ProxyResult<Response> {
    let Query(query) = query?;
    let postal_code = present(query.postal_code).ok_or_else(|| {
        ProxyError::Validation("Missing required parameter: postalCode".into())
    })?;

    let key = state.api_key()?;

    info!("📮 Proxying postal lookup for {}", postal_code);
    let request = state
        .http
        .get(format!(
            "{}/buildingInsights:findByPostalCode",
            state.provider_url
        ))
        .query(&[
            ("postalCode", postal_code.as_str()),
            ("requiredQuality", "HIGH"),
            ("key", key),
        ]);

    forward(request, POSTAL_CONTEXT).await
}

/// Relays a successful provider body untouched; anything else becomes a 500 envelope.
async fn forward(request: RequestBuilder, context: &'static str) -> ProxyResult<Response> {
    let upstream = request.send().await.map_err(|e| ProxyError::Transport {
        context,
        cause: e.to_string(),
    })?;

    let status = upstream.status();
    if !status.is_success() {
        return Err(ProxyError::Upstream {
            context,
            message: format!("Google API error: {}", status),
        });
    }

    let body = upstream.bytes().await.map_err(|e| ProxyError::Transport {
        context,
        cause: e.to_string(),
    })?;

    Ok((status, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_coordinate(name: &str, raw: &str) -> ProxyResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ProxyError::Validation(format!("Invalid {}: '{}'", name, raw)))
}
