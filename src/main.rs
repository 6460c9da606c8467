use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio::cli::Cli;
use folio::config::Config;
use folio::utils::error::{report_error, AppError};

fn main() {
    if let Err(err) = run() {
        match err.downcast_ref::<AppError>() {
            Some(app_err) => report_error(app_err),
            None => eprintln!("❌ {:#}", err),
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    // Ensure configuration exists and load it
    if cli.config.is_none() {
        Config::ensure_config_exists()?;
    }

    let config = if let Some(config_path) = &cli.config {
        Config::load_custom(config_path)?
    } else {
        Config::load()?
    };
    tracing::debug!(?config, "configuration loaded");

    if !config.general.color {
        colored::control::set_override(false);
    }

    cli.command.execute(config)?;

    Ok(())
}
