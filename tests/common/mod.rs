#![allow(dead_code)]

use axum::extract::Query;
use axum::http::{header, StatusCode, Uri};
use axum::Router;
use solarscope::categories::{Category, Location};
use solarscope::error::{SolarError, SolarResult};
use solarscope::insights::{BuildingSolarInsights, InsightsProvider};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Clone)]
pub enum Outcome {
    Potential(u32, f64, f64),
    NoPotential,
    Upstream(u16, &'static str),
    Transport(&'static str),
}

/// Answers from a fixed table keyed by latitude. Unknown sites fail as upstream 404s.
pub struct StubProvider {
    table: Vec<(f64, Outcome)>,
    calls: AtomicUsize,
    seen: Mutex<Vec<(f64, f64)>>,
}

impl StubProvider {
    pub fn new(table: Vec<(f64, Outcome)>) -> Self {
        Self {
            table,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<(f64, f64)> {
        self.seen.lock().unwrap().clone()
    }
}

impl InsightsProvider for StubProvider {
    async fn fetch_by_coordinates(&self, lat: f64, lng: f64) -> SolarResult<BuildingSolarInsights> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push((lat, lng));

        let outcome = self
            .table
            .iter()
            .find(|(key, _)| *key == lat)
            .map(|(_, o)| o.clone())
            .unwrap_or(Outcome::Upstream(404, "Requested entity was not found."));

        match outcome {
            Outcome::Potential(panels, area, hours) => {
                Ok(BuildingSolarInsights::with_potential(panels, area, hours))
            }
            Outcome::NoPotential => Ok(BuildingSolarInsights::default()),
            Outcome::Upstream(status, message) => Err(SolarError::Upstream {
                status,
                message: message.to_string(),
            }),
            Outcome::Transport(cause) => Err(SolarError::Transport(cause.to_string())),
        }
    }

    async fn fetch_by_postal_code(&self, _code: &str) -> SolarResult<BuildingSolarInsights> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(BuildingSolarInsights::with_potential(10, 20.0, 1000.0))
    }
}

pub fn site(name: &str, lat: f64) -> Location {
    Location::new(name, lat, -100.0, format!("{} City", name))
}

pub fn category(name: &str, locations: Vec<Location>) -> Category {
    Category::new(name, locations)
}

/// A request seen by the mock upstream: path and decoded query.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub path: String,
    pub query: HashMap<String, String>,
}

pub struct MockUpstream {
    pub base_url: String,
    requests: Arc<Mutex<Vec<SeenRequest>>>,
}

impl MockUpstream {
    pub fn requests(&self) -> Vec<SeenRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Serves `body` with `status` for every path on a random local port.
pub async fn spawn_upstream(status: StatusCode, body: &str) -> MockUpstream {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = requests.clone();
    let body = body.to_string();

    let app = Router::new().fallback(
        move |uri: Uri, Query(query): Query<HashMap<String, String>>| {
            let seen = seen.clone();
            let body = body.clone();
            async move {
                seen.lock().unwrap().push(SeenRequest {
                    path: uri.path().to_string(),
                    query,
                });
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        },
    );

    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockUpstream {
        base_url: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

/// A local address with nothing listening on it.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

pub const INSIGHTS_BODY: &str = r#"{
  "name": "buildings/ChIJh0CMPQW7j4ARLrRiVvmg6Vs",
  "center": { "latitude": 37.4449439, "longitude": -122.13914659999998 },
  "imageryQuality": "HIGH",
  "regionCode": "US",
  "postalCode": "94303",
  "solarPotential": {
    "maxArrayPanelsCount": 1163,
    "maxArrayAreaMeters2": 1903.82,
    "maxSunshineHoursPerYear": 1802
  }
}"#;
