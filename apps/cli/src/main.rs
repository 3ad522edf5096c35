pub mod handlers;
pub mod models;

use crate::handlers::{check, kinds};
use crate::models::args::{AppCommands, Cli};

use anyhow::{Context, Result};
use clap::Parser;
use qualis::domain::config::{LogConfig, QualisConfig};
use qualis::kernel::config::load_config;
use qualis_logger::{LevelFilter, Logger, parse_level, parse_rotation};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config: QualisConfig = match &cli.config {
        Some(path) => load_config(Some(path)).context("Critical: Configuration is malformed")?,
        None => QualisConfig::default(),
    };

    let level = parse_level(cli.log_level.as_deref().unwrap_or(&config.log.level))?;
    let _logger = init_logger(&config.log, level).context("Logging could not be set up")?;

    if let Some(path) = &cli.config {
        info!(path = %path.display(), qualifiers = config.qualifiers.len(), "configuration loaded");
    }

    match cli.command {
        AppCommands::Check { packages, qualifiers } => {
            check::check_inventory(&config, &packages, &qualifiers)?;
        },
        AppCommands::Kinds {} => kinds::list_kinds()?,
    }

    Ok(())
}

fn init_logger(log: &LogConfig, level: LevelFilter) -> Result<Logger> {
    let mut builder = Logger::builder().name(env!("CARGO_BIN_NAME")).level(level);
    if let Some(filter) = &log.filter {
        builder = builder.env_filter(filter);
    }

    let Some(dir) = &log.dir else {
        return Ok(builder.init()?);
    };

    let files = builder.path(dir).rotation(parse_rotation(&log.rotation)?).max_files(log.max_files);
    let logger = if log.json { files.json().init()? } else { files.init()? };
    Ok(logger)
}
