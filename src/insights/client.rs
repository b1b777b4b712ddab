use super::{validate_coordinates, validate_postal_code, BuildingSolarInsights, InsightsProvider};
use crate::error::{SolarError, SolarResult};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_PROVIDER_URL: &str = "https://solar.googleapis.com/v1";

/// Where lookups are sent.
#[derive(Debug, Clone)]
pub enum Endpoint {
    /// Straight to the provider, carrying the API key on every request.
    Provider { base_url: String, api_key: String },
    /// Through a `solarscope serve` proxy (e.g. `http://localhost:3001/api/solar`).
    Proxy { base_url: String },
}

pub struct SolarClient {
    http: Client,
    endpoint: Endpoint,
}

impl SolarClient {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn with_timeout(endpoint: Endpoint, timeout: Duration) -> SolarResult<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    fn coordinates_request(&self, lat: f64, lng: f64) -> RequestBuilder {
        match &self.endpoint {
            Endpoint::Provider { base_url, api_key } => {
                let url = format!("{}/buildingInsights:findClosest", trim_base(base_url));
                debug!("GET {} lat={} lng={}", url, lat, lng);
                self.http.get(url).query(&[
                    ("location.latitude", lat.to_string()),
                    ("location.longitude", lng.to_string()),
                    ("requiredQuality", "HIGH".to_string()),
                    ("key", api_key.clone()),
                ])
            }
            Endpoint::Proxy { base_url } => {
                let url = format!("{}/coordinates", trim_base(base_url));
                debug!("GET {} lat={} lng={}", url, lat, lng);
                self.http
                    .get(url)
                    .query(&[("lat", lat.to_string()), ("lng", lng.to_string())])
            }
        }
    }

    fn postal_request(&self, code: &str) -> RequestBuilder {
        match &self.endpoint {
            Endpoint::Provider { base_url, api_key } => {
                let url = format!("{}/buildingInsights:findByPostalCode", trim_base(base_url));
                debug!("GET {} postalCode={}", url, code);
                self.http.get(url).query(&[
                    ("postalCode", code),
                    ("requiredQuality", "HIGH"),
                    ("key", api_key.as_str()),
                ])
            }
            Endpoint::Proxy { base_url } => {
                let url = format!("{}/postal", trim_base(base_url));
                debug!("GET {} postalCode={}", url, code);
                self.http.get(url).query(&[("postalCode", code)])
            }
        }
    }

    async fn execute(&self, request: RequestBuilder) -> SolarResult<BuildingSolarInsights> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = upstream_message(&body)
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            return Err(SolarError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        BuildingSolarInsights::from_json(&body)
    }
}

impl InsightsProvider for SolarClient {
    async fn fetch_by_coordinates(&self, lat: f64, lng: f64) -> SolarResult<BuildingSolarInsights> {
        validate_coordinates(lat, lng)?;
        self.execute(self.coordinates_request(lat, lng)).await
    }

    async fn fetch_by_postal_code(&self, code: &str) -> SolarResult<BuildingSolarInsights> {
        let code = validate_postal_code(code)?;
        self.execute(self.postal_request(code)).await
    }
}

fn trim_base(url: &str) -> &str {
    url.trim_end_matches('/')
}

/// Pulls a human readable message out of an error body.
///
/// Understands the proxy envelope (`{error, message}`) and the provider's
/// `{error: {message}}` shape.
pub(crate) fn upstream_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    let non_empty = |v: Option<&Value>| {
        v.and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
    };

    non_empty(value.get("message"))
        .or_else(|| non_empty(value.get("error")))
        .or_else(|| non_empty(value.get("error").and_then(|e| e.get("message"))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_message_wins_over_error() {
        let body = serde_json::json!({
            "error": "Failed to fetch solar data",
            "message": "Google API error: 404 Not Found"
        })
        .to_string();
        assert_eq!(
            upstream_message(&body).as_deref(),
            Some("Google API error: 404 Not Found")
        );
    }

    #[test]
    fn bare_error_string_is_used() {
        let body = r#"{"error": "Missing required parameters: lat and lng"}"#;
        assert_eq!(
            upstream_message(body).as_deref(),
            Some("Missing required parameters: lat and lng")
        );
    }

    #[test]
    fn provider_error_object_is_used() {
        let body = r#"{"error": {"code": 404, "message": "Requested entity was not found."}}"#;
        assert_eq!(
            upstream_message(body).as_deref(),
            Some("Requested entity was not found.")
        );
    }

    #[test]
    fn unreadable_body_yields_none() {
        assert_eq!(upstream_message("<html>Bad Gateway</html>"), None);
        assert_eq!(upstream_message(r#"{"message": "  "}"#), None);
    }
}
