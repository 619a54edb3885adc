use anyhow::{Context, Result};
use clap::Parser;

use portfolio_relay::{logging, run_relay, Cli, RelayConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init_tracing(cli.log_json);

    let config = RelayConfig::from_cli(&cli).context("invalid relay configuration")?;
    run_relay(config).await
}
