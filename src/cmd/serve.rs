use clap::Args;
use solarscope::config::ServerConfig;
use solarscope::server;

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub server: ServerConfig,
}

pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    server::serve(args.server).await?;
    Ok(())
}
