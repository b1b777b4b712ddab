use crate::reports;
use anyhow::Context;
use chrono::Local;
use clap::Args;
use solarscope::analyzer::{AnalysisResult, AnalysisSession, Analyzer, Progress, ProgressCallback};
use solarscope::categories::{CategoryStore, Location};
use solarscope::config::{AnalyzerConfig, ClientConfig};
use solarscope::export;
use solarscope::insights::Endpoint;
use std::fs::File;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Category to analyze (see `categories`)
    #[arg(default_value = "capitals")]
    pub category: String,

    #[command(flatten)]
    pub analyzer: AnalyzerConfig,

    #[command(flatten)]
    pub client: ClientConfig,

    /// Append locations from a NAME,LAT,LNG[,CITY] file to the custom set
    #[arg(long, value_name = "FILE")]
    pub custom_csv: Option<PathBuf>,

    /// Add one custom location (repeatable)
    #[arg(long = "add", value_name = "NAME,LAT,LNG[,CITY]", allow_hyphen_values = true)]
    pub add: Vec<Location>,

    /// Write the ranking to DIR/solar-analysis-<category>-<date>.csv
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// Print the report as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

struct ProgressLogger;
impl ProgressCallback for ProgressLogger {
    fn on_progress(&self, progress: Progress, latest: Option<&AnalysisResult>) {
        let Progress { processed, total } = progress;
        match latest {
            Some(r) if r.success => info!(
                "   [{}/{}] ✅ {} ({:.1})",
                processed,
                total,
                r.location.name,
                r.score.unwrap_or_default()
            ),
            Some(r) => info!(
                "   [{}/{}] ❌ {}: {}",
                processed,
                total,
                r.location.name,
                r.error.as_deref().unwrap_or("unknown error")
            ),
            None => info!("   [{}/{}] ⏭️  skipped", processed, total),
        }
    }
}

pub async fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let mut store = CategoryStore::with_builtins();

    if let Some(path) = &args.custom_csv {
        let file = File::open(path)
            .with_context(|| format!("Could not open custom locations '{}'", path.display()))?;
        store.import_custom_csv(file)?;
    }
    for location in args.add {
        store.add_custom(location)?;
    }

    let category = store.get(&args.category)?;
    let client = args.client.build_client()?;
    match client.endpoint() {
        Endpoint::Proxy { base_url } => info!("🔌 Routing lookups through {}", base_url),
        Endpoint::Provider { base_url, .. } => info!("🔌 Calling provider at {}", base_url),
    }
    let mut session = AnalysisSession::new(Analyzer::new(client, &args.analyzer));

    let report = session.run(&category, &ProgressLogger).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        reports::print_ranking(report);
        reports::print_failures(report);
        reports::print_summary(&report.summary);
    }

    if let Some(dir) = &args.export {
        let path = export::export_to_dir(report, dir, Local::now().date_naive())?;
        println!("💾 Saved {}", path.display());
    }

    Ok(())
}
