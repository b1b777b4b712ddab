use super::pacing::PacingPolicy;
use super::scoring::{solar_score, BandingStrategy};
use super::summary::Summary;
use super::types::{rank, AnalysisReport, AnalysisResult, CoordinatePolicy};
use crate::categories::{Category, Location};
use crate::config::AnalyzerConfig;
use crate::error::{SolarError, SolarResult};
use crate::insights::InsightsProvider;
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub processed: usize,
    pub total: usize,
}

impl Progress {
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.processed == self.total
    }
}

/// Called once after every input location, including skipped ones.
/// `latest` is `None` when the location was skipped.
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, progress: Progress, latest: Option<&AnalysisResult>);
}

pub struct NoProgress;
impl ProgressCallback for NoProgress {
    fn on_progress(&self, _progress: Progress, _latest: Option<&AnalysisResult>) {}
}

/// Lets callers poll or subscribe through the paired `watch::Receiver`.
impl ProgressCallback for watch::Sender<Progress> {
    fn on_progress(&self, progress: Progress, _latest: Option<&AnalysisResult>) {
        self.send_replace(progress);
    }
}

pub struct Analyzer<P> {
    provider: P,
    pacing: PacingPolicy,
    banding: BandingStrategy,
    coordinates: CoordinatePolicy,
}

impl<P: InsightsProvider> Analyzer<P> {
    pub fn new(provider: P, config: &AnalyzerConfig) -> Self {
        Self {
            provider,
            pacing: config.pacing(),
            banding: config.banding,
            coordinates: config.coordinates,
        }
    }

    pub fn with_pacing(mut self, pacing: PacingPolicy) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_banding(mut self, banding: BandingStrategy) -> Self {
        self.banding = banding;
        self
    }

    pub fn with_coordinate_policy(mut self, policy: CoordinatePolicy) -> Self {
        self.coordinates = policy;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Fetches, scores and ranks every location of `category`, one at a time.
    ///
    /// One location failing never stops the run. The only run-level error is
    /// an empty category, raised before anything is fetched.
    pub async fn analyze<CB: ProgressCallback>(
        &self,
        category: &Category,
        progress: &CB,
    ) -> SolarResult<AnalysisReport> {
        if category.is_empty() {
            return Err(SolarError::EmptyCategory(category.name.clone()));
        }

        let total = category.len();
        info!(
            "🔎 Analyzing {} locations in '{}' (pacing {:?})",
            total,
            category.name,
            self.pacing.interval()
        );

        let mut results = Vec::with_capacity(total);
        let mut skipped = 0;
        let mut fetched_any = false;

        for (idx, location) in category.locations.iter().enumerate() {
            let outcome = if location.has_valid_coordinates() {
                Some(self.fetch_location(location, &mut fetched_any).await)
            } else {
                match self.coordinates {
                    CoordinatePolicy::Passthrough => {
                        Some(self.fetch_location(location, &mut fetched_any).await)
                    }
                    CoordinatePolicy::Skip => {
                        debug!("Skipping '{}': invalid coordinates", location.name);
                        skipped += 1;
                        None
                    }
                    CoordinatePolicy::Reject => Some(AnalysisResult::failed(
                        location.clone(),
                        format!(
                            "Invalid coordinates: lat={}, lng={}",
                            location.lat, location.lng
                        ),
                    )),
                }
            };

            let current = Progress {
                processed: idx + 1,
                total,
            };
            progress.on_progress(current, outcome.as_ref());

            if let Some(result) = outcome {
                results.push(result);
            }
        }

        let ranking = rank(&results, self.banding);
        let summary = Summary::new(&results, &ranking, skipped);

        info!(
            "✅ '{}' done: {}/{} succeeded",
            category.name, summary.succeeded, summary.total
        );

        Ok(AnalysisReport {
            category: category.name.clone(),
            results,
            ranking,
            summary,
        })
    }

    async fn fetch_location(&self, location: &Location, fetched_any: &mut bool) -> AnalysisResult {
        // Pace between provider calls, not before the first one.
        if *fetched_any {
            self.pacing.pause().await;
        }
        *fetched_any = true;

        match self
            .provider
            .fetch_by_coordinates(location.lat, location.lng)
            .await
        {
            Ok(data) if data.has_solar_potential => {
                let score = solar_score(&data);
                debug!("'{}' scored {:.2}", location.name, score);
                AnalysisResult::succeeded(location.clone(), data, score)
            }
            Ok(_) => {
                warn!("⚠️  '{}': no solar potential in response", location.name);
                AnalysisResult::failed(location.clone(), SolarError::NoData.to_string())
            }
            Err(e) => {
                warn!("⚠️  '{}': {}", location.name, e);
                AnalysisResult::failed(location.clone(), e.detail())
            }
        }
    }
}

/// Holds the latest report. Starting a new run discards the previous one.
pub struct AnalysisSession<P> {
    analyzer: Analyzer<P>,
    latest: Option<AnalysisReport>,
}

impl<P: InsightsProvider> AnalysisSession<P> {
    pub fn new(analyzer: Analyzer<P>) -> Self {
        Self {
            analyzer,
            latest: None,
        }
    }

    pub async fn run<CB: ProgressCallback>(
        &mut self,
        category: &Category,
        progress: &CB,
    ) -> SolarResult<&AnalysisReport> {
        self.latest = None;
        let report = self.analyzer.analyze(category, progress).await?;
        Ok(&*self.latest.insert(report))
    }

    pub fn latest(&self) -> Option<&AnalysisReport> {
        self.latest.as_ref()
    }
}
