//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use qualis::kinds;
use qualis::prelude::QualifierRecord;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "qualis")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Evaluate package qualifiers against a package inventory")]
pub struct Cli {
    /// Configuration file (TOML, JSON or YAML); `QUALIS__*` variables override it
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Evaluate the configured qualifiers against every package of an inventory
    Check {
        /// JSON file holding an array of packages
        #[arg(long, short)]
        packages: PathBuf,

        /// Extra qualifier, either `kind=value` (e.g. `rpm-modularity=nodejs:16`) or a JSON
        /// record (e.g. '{"kind":"rpm-modularity","module":"nodejs:16"}')
        #[arg(long = "qualifier", value_name = "KIND=VALUE|JSON", value_parser = parse_record)]
        qualifiers: Vec<QualifierRecord>,
    },
    /// List the qualifier kinds this build understands
    Kinds {},
}

fn parse_record(raw: &str) -> Result<QualifierRecord, String> {
    if raw.trim_start().starts_with('{') {
        return serde_json::from_str(raw).map_err(|e| format!("invalid qualifier record: {e}"));
    }

    kinds::parse_shorthand(raw).ok_or_else(|| match raw.split_once('=') {
        Some((kind, _)) => format!("qualifier kind '{kind}' has no KIND=VALUE form; pass a JSON record"),
        None => format!("expected KIND=VALUE or a JSON record, got '{raw}'"),
    })
}
