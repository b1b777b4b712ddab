pub mod pacing;
pub mod runner;
pub mod scoring;
pub mod summary;
pub mod types;

pub use self::pacing::PacingPolicy;
pub use self::runner::{AnalysisSession, Analyzer, NoProgress, Progress, ProgressCallback};
pub use self::scoring::{solar_score, Band, BandingStrategy};
pub use self::summary::{ScoredLocation, Summary};
pub use self::types::{rank, AnalysisReport, AnalysisResult, CoordinatePolicy, RankedResult};
