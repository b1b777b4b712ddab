use crate::reports;
use anyhow::bail;
use clap::Args;
use solarscope::config::ClientConfig;
use solarscope::insights::InsightsProvider;

#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    #[arg(long, allow_negative_numbers = true, requires = "lng")]
    pub lat: Option<f64>,

    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    pub lng: Option<f64>,

    #[arg(long, conflicts_with_all = ["lat", "lng"])]
    pub postal_code: Option<String>,

    #[command(flatten)]
    pub client: ClientConfig,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub async fn run(args: LookupArgs) -> anyhow::Result<()> {
    let client = args.client.build_client()?;

    let insights = match (args.lat, args.lng, &args.postal_code) {
        (Some(lat), Some(lng), None) => client.fetch_by_coordinates(lat, lng).await?,
        (None, None, Some(code)) => client.fetch_by_postal_code(code).await?,
        _ => bail!("Provide either --lat and --lng, or --postal-code"),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
    } else {
        reports::print_insights(&insights);
    }
    Ok(())
}
