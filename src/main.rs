use clap::{Parser, Subcommand};
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rank locations by rooftop solar potential", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the pass-through proxy in front of the Solar API
    Serve(cmd::serve::ServeArgs),
    /// Fetch, score and rank every location in a category
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Look up a single site by coordinates or postal code
    Lookup(cmd::lookup::LookupArgs),
    /// List the available categories and their locations
    Categories(cmd::categories::CategoriesArgs),
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so `--json` output stays clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => cmd::serve::run(args).await,
        Commands::Analyze(args) => cmd::analyze::run(args).await,
        Commands::Lookup(args) => cmd::lookup::run(args).await,
        Commands::Categories(args) => cmd::categories::run(args),
    };

    if let Err(e) = result {
        error!("❌ {:#}", e);
        process::exit(1);
    }
}
