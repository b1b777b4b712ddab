use crate::insights::BuildingSolarInsights;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

pub const WEIGHT_PANELS: f64 = 0.4;
pub const WEIGHT_AREA: f64 = 0.3;
pub const WEIGHT_SUNSHINE: f64 = 0.3;

/// Band cut-offs on a 0..=1 relative position.
pub const HIGH_THRESHOLD: f64 = 0.66;
pub const MEDIUM_THRESHOLD: f64 = 0.33;

pub fn solar_score(insights: &BuildingSolarInsights) -> f64 {
    WEIGHT_PANELS * insights.max_array_panels_count as f64
        + WEIGHT_AREA * insights.max_array_area_meters2
        + WEIGHT_SUNSHINE * insights.max_sunshine_hours_per_year
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Band {
    High,
    Medium,
    Low,
}

impl Band {
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction >= HIGH_THRESHOLD {
            Band::High
        } else if fraction >= MEDIUM_THRESHOLD {
            Band::Medium
        } else {
            Band::Low
        }
    }
}

/// How a score is placed relative to its peers in the same run.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum BandingStrategy {
    /// Fraction of peers scoring strictly lower, over `n - 1`.
    #[default]
    QuantileRank,
    /// Linear position between the lowest and highest score.
    MinMax,
}

impl BandingStrategy {
    /// Relative position of `score` among `peers` in `0..=1`.
    /// `peers` must contain `score`. Degenerate sets (one entry, all scores equal) sit at the top.
    pub fn position(&self, score: f64, peers: &[f64]) -> f64 {
        self.position_in_sorted(score, &sorted_ascending(peers))
    }

    pub fn band(&self, score: f64, peers: &[f64]) -> Band {
        Band::from_fraction(self.position(score, peers))
    }

    /// Bands for every score, in the order given.
    pub fn bands(&self, scores: &[f64]) -> Vec<Band> {
        let sorted = sorted_ascending(scores);
        scores
            .iter()
            .map(|&s| Band::from_fraction(self.position_in_sorted(s, &sorted)))
            .collect()
    }

    fn position_in_sorted(&self, score: f64, sorted: &[f64]) -> f64 {
        let n = sorted.len();
        if n <= 1 || sorted[0] == sorted[n - 1] {
            return 1.0;
        }
        match self {
            BandingStrategy::QuantileRank => {
                let below = sorted.partition_point(|&p| p < score);
                below as f64 / (n - 1) as f64
            }
            BandingStrategy::MinMax => (score - sorted[0]) / (sorted[n - 1] - sorted[0]),
        }
    }
}

fn sorted_ascending(scores: &[f64]) -> Vec<f64> {
    let mut sorted = scores.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_thresholds() {
        assert_eq!(Band::from_fraction(1.0), Band::High);
        assert_eq!(Band::from_fraction(0.66), Band::High);
        assert_eq!(Band::from_fraction(0.659), Band::Medium);
        assert_eq!(Band::from_fraction(0.33), Band::Medium);
        assert_eq!(Band::from_fraction(0.329), Band::Low);
        assert_eq!(Band::from_fraction(0.0), Band::Low);
    }

    #[test]
    fn strategy_parses_from_cli_names() {
        assert_eq!(
            "quantile-rank".parse::<BandingStrategy>().unwrap(),
            BandingStrategy::QuantileRank
        );
        assert_eq!("min-max".parse::<BandingStrategy>().unwrap(), BandingStrategy::MinMax);
        assert!("percentile".parse::<BandingStrategy>().is_err());
    }
}
