use crate::error::SolarResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// Rooftop solar potential for a single building.
///
/// Numeric fields default to zero when the provider omits them, so "missing"
/// and "zero" look the same here. `has_solar_potential` is the only signal
/// that the provider actually returned a `solarPotential` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingSolarInsights {
    pub name: Option<String>,
    pub center: Option<LatLng>,
    pub postal_code: Option<String>,
    pub region_code: Option<String>,
    pub imagery_quality: Option<String>,
    pub has_solar_potential: bool,
    pub max_array_panels_count: u32,
    pub max_array_area_meters2: f64,
    pub max_sunshine_hours_per_year: f64,
}

impl BuildingSolarInsights {
    pub fn with_potential(panels: u32, area_m2: f64, sunshine_hours: f64) -> Self {
        Self {
            has_solar_potential: true,
            max_array_panels_count: panels,
            max_array_area_meters2: area_m2,
            max_sunshine_hours_per_year: sunshine_hours,
            ..Default::default()
        }
    }

    /// Parses a `buildingInsights` body as returned by the provider (or relayed by the proxy).
    pub fn from_json(body: &str) -> SolarResult<Self> {
        let payload: BuildingInsightsPayload = serde_json::from_str(body)?;
        Ok(payload.into())
    }
}

// --- Wire format (provider JSON) ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BuildingInsightsPayload {
    name: Option<String>,
    center: Option<LatLng>,
    postal_code: Option<String>,
    region_code: Option<String>,
    imagery_quality: Option<String>,
    solar_potential: Option<SolarPotentialPayload>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SolarPotentialPayload {
    max_array_panels_count: u32,
    max_array_area_meters2: f64,
    max_sunshine_hours_per_year: f64,
}

impl From<BuildingInsightsPayload> for BuildingSolarInsights {
    fn from(p: BuildingInsightsPayload) -> Self {
        let has_solar_potential = p.solar_potential.is_some();
        let potential = p.solar_potential.unwrap_or_default();

        Self {
            name: p.name,
            center: p.center,
            postal_code: p.postal_code,
            region_code: p.region_code,
            imagery_quality: p.imagery_quality,
            has_solar_potential,
            max_array_panels_count: potential.max_array_panels_count,
            max_array_area_meters2: potential.max_array_area_meters2,
            max_sunshine_hours_per_year: potential.max_sunshine_hours_per_year,
        }
    }
}
