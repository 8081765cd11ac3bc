//! Scholaris server binary.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use scholaris_core::ResearchAgent;
use std::path::PathBuf;
use std::sync::Arc;

/// Command-line arguments for the Scholaris server.
#[derive(Debug, Parser)]
#[command(name = "scholaris", about = "Conversational research specialist agent")]
struct Args {
    /// Path to a JSON5 config file; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the configured listen port.
    #[arg(long)]
    port: Option<u16>,
}

#[rocket::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = scholaris_config::load_or_default(args.config.as_deref())
        .context("failed to load config")?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let agent = Arc::new(ResearchAgent::new(&config).context("failed to build research agent")?);
    info!(
        "starting scholaris (speaker_uri={}, address={}, port={})",
        config.agent.speaker_uri, config.server.address, config.server.port
    );

    scholaris_server::rocket(&config.server, agent)
        .launch()
        .await
        .context("server exited with error")?;
    Ok(())
}
