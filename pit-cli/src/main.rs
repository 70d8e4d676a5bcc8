use anyhow::Context;
use clap::Parser;
use tracing::debug;

use pit_cli::cli::Cli;
use pit_cli::commands;
use pit_cli::config::CliConfig;
use pit_cli::logging::init_logging;

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_or_default(cli.config.as_deref()).context("failed to load configuration")?;
    init_logging(&config.logging)?;
    debug!(?config, "configuration loaded");

    let output = commands::run(&cli.command, &config)?;
    print!("{output}");

    Ok(())
}
