pub mod client;
pub mod types;

pub use self::client::{Endpoint, SolarClient, DEFAULT_PROVIDER_URL};
pub use self::types::{BuildingSolarInsights, LatLng};

use crate::error::{SolarError, SolarResult};
use std::future::Future;

/// Read-only lookups against a rooftop solar data provider.
///
/// Implementations make exactly one attempt per call. Retrying, pacing and
/// failure isolation are the caller's business.
pub trait InsightsProvider: Send + Sync {
    fn fetch_by_coordinates(
        &self,
        lat: f64,
        lng: f64,
    ) -> impl Future<Output = SolarResult<BuildingSolarInsights>> + Send;

    fn fetch_by_postal_code(
        &self,
        code: &str,
    ) -> impl Future<Output = SolarResult<BuildingSolarInsights>> + Send;
}

pub fn coordinates_are_valid(lat: f64, lng: f64) -> bool {
    lat.is_finite()
        && lng.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lng)
}

pub fn validate_coordinates(lat: f64, lng: f64) -> SolarResult<()> {
    if coordinates_are_valid(lat, lng) {
        Ok(())
    } else {
        Err(SolarError::Validation(format!(
            "Invalid coordinates: lat={}, lng={}",
            lat, lng
        )))
    }
}

pub fn validate_postal_code(code: &str) -> SolarResult<&str> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return Err(SolarError::Validation("Postal code must not be empty".into()));
    }
    Ok(trimmed)
}
