use anyhow::Context;
use clap::Parser;
use tracing::debug;

use profit_cli::app;
use profit_cli::cli::Cli;
use profit_cli::config::AppConfig;
use profit_cli::logging;

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();

    let mut config =
        AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    config
        .apply_overrides(cli.currency.clone(), cli.log_level.clone())
        .context("invalid command-line option")?;

    if !logging::env_filter_overridden() {
        logging::set_log_level(&config.log_level)?;
    }
    if let Some(path) = &config.log_file {
        logging::enable_file_logging(path)?;
    }

    let currency = config.currency();
    debug!(currency = currency.code, "configuration ready");

    let output = app::execute(&cli.command, currency)?;
    print!("{output}");

    Ok(())
}
