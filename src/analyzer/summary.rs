use super::types::{AnalysisResult, RankedResult};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredLocation {
    pub name: String,
    pub city: String,
    pub score: f64,
}

impl From<&RankedResult> for ScoredLocation {
    fn from(r: &RankedResult) -> Self {
        Self {
            name: r.location.name.clone(),
            city: r.location.city.clone(),
            score: r.score,
        }
    }
}

/// Run-level statistics. `succeeded + failed + skipped == total`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
    pub best: Option<ScoredLocation>,
    pub worst: Option<ScoredLocation>,
    pub average_score: Option<f64>,
}

impl Summary {
    pub fn new(results: &[AnalysisResult], ranking: &[RankedResult], skipped: usize) -> Self {
        let succeeded = ranking.len();
        let average_score = if succeeded == 0 {
            None
        } else {
            Some(ranking.iter().map(|r| r.score).sum::<f64>() / succeeded as f64)
        };

        Self {
            total: results.len() + skipped,
            succeeded,
            failed: results.len() - succeeded,
            skipped,
            best: ranking.first().map(ScoredLocation::from),
            worst: ranking.last().map(ScoredLocation::from),
            average_score,
        }
    }

    pub fn success_rate(&self) -> f64 {
        let attempted = self.succeeded + self.failed;
        if attempted == 0 {
            0.0
        } else {
            self.succeeded as f64 / attempted as f64
        }
    }
}
