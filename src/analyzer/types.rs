use super::scoring::{Band, BandingStrategy};
use super::summary::Summary;
use crate::categories::Location;
use crate::insights::BuildingSolarInsights;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Outcome for one input location in one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub location: Location,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solar_data: Option<BuildingSolarInsights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    pub fn succeeded(location: Location, solar_data: BuildingSolarInsights, score: f64) -> Self {
        Self {
            location,
            success: true,
            solar_data: Some(solar_data),
            score: Some(score),
            error: None,
        }
    }

    pub fn failed(location: Location, error: impl Into<String>) -> Self {
        Self {
            location,
            success: false,
            solar_data: None,
            score: None,
            error: Some(error.into()),
        }
    }
}

/// A successful result placed in the descending-score ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult {
    /// 1-based.
    pub rank: usize,
    /// Position of the originating result in `AnalysisReport::results`.
    pub input_index: usize,
    pub location: Location,
    pub score: f64,
    pub band: Band,
    pub solar_data: BuildingSolarInsights,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub category: String,
    /// Every result, in input order.
    pub results: Vec<AnalysisResult>,
    /// Successes only, best first.
    pub ranking: Vec<RankedResult>,
    pub summary: Summary,
}

impl AnalysisReport {
    pub fn failures(&self) -> impl Iterator<Item = &AnalysisResult> {
        self.results.iter().filter(|r| !r.success)
    }
}

/// What to do with a location whose coordinates are not finite or out of range.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum CoordinatePolicy {
    /// Send the request anyway and let the provider decide.
    #[default]
    Passthrough,
    /// Drop the location without producing a result.
    Skip,
    /// Record a failed result without calling the provider.
    Reject,
}

/// Orders successes by score, best first. Equal scores keep input order.
pub fn rank(results: &[AnalysisResult], banding: BandingStrategy) -> Vec<RankedResult> {
    let mut successes: Vec<(usize, f64, &AnalysisResult)> = results
        .iter()
        .enumerate()
        .filter_map(|(i, r)| match (r.success, r.score, &r.solar_data) {
            (true, Some(score), Some(_)) => Some((i, score, r)),
            _ => None,
        })
        .collect();

    // sort_by is stable
    successes.sort_by(|a, b| b.1.total_cmp(&a.1));

    let scores: Vec<f64> = successes.iter().map(|(_, s, _)| *s).collect();
    let bands = banding.bands(&scores);

    successes
        .into_iter()
        .zip(bands)
        .enumerate()
        .map(|(pos, ((input_index, score, r), band))| RankedResult {
            rank: pos + 1,
            input_index,
            location: r.location.clone(),
            score,
            band,
            solar_data: r.solar_data.clone().unwrap_or_default(),
        })
        .collect()
}
