//! GamerWrapped CLI - yearly gaming stats in the terminal.

use clap::Parser;
use gw_core::Config;

#[derive(Parser)]
#[command(
    name = "gw-cli",
    version,
    about = "Browse GamerWrapped yearly gaming stats"
)]
struct Cli {
    /// Stats backend base URL (overrides GAMERWRAPPED_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: gw_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = Config::from_env().with_api_url(cli.api_url);
    log::debug!("Using backend {}", config.api_url());
    gw_cmd::run(cli.command, config).await
}
