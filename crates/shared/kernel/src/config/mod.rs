use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prefix for environment overrides, e.g. `QUALIS__LOG__LEVEL=debug`.
pub const ENV_PREFIX: &str = "QUALIS";

/// Default config file stem, resolved against any supported extension.
pub const DEFAULT_CONFIG: &str = "qualis";

/// Error type for config loading.
#[qualis_derive::qualis_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file layered with environment overrides.
///
/// 1. **Base file**: `path`, or [`DEFAULT_CONFIG`] in the working directory. The format is
///    picked from the extension (TOML, JSON or YAML); a bare stem tries each of them.
/// 2. **Environment**: variables prefixed with `QUALIS__`, nested with double underscores
///    (`QUALIS__LOG__LEVEL=debug` maps to `log.level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, unreadable, or does not match `T`.
///
/// # Example
/// ```rust,no_run
/// use qualis_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     level: String,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__"));

    // Usually runs before any subscriber exists; callers log the outcome themselves.
    debug!(path = %effective_path.display(), "loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
