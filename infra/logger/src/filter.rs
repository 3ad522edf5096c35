//! Textual logging settings as they appear in config files.

use crate::LoggerError;
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;

/// Parses a level such as `"debug"` or `" WARN "`.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for anything `tracing` does not recognise.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|e| LoggerError::invalid(format!("unknown log level '{level}': {e}")))
}

/// Parses a file rotation schedule: `minutely`, `hourly`, `daily` or `never`.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for any other value.
pub fn parse_rotation(rotation: &str) -> Result<Rotation, LoggerError> {
    match rotation.trim().to_ascii_lowercase().as_str() {
        "minutely" => Ok(Rotation::MINUTELY),
        "hourly" => Ok(Rotation::HOURLY),
        "daily" => Ok(Rotation::DAILY),
        "never" => Ok(Rotation::NEVER),
        _ => Err(LoggerError::invalid(format!("unknown log rotation '{rotation}'"))),
    }
}

/// Global filter: `level` as the default directive, refined by explicit `directives` or,
/// when there are none, by `RUST_LOG`.
pub(crate) fn build(level: LevelFilter, directives: Option<&str>) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(level.into());
    match directives {
        Some(directives) => builder
            .parse(directives)
            .map_err(|e| LoggerError::invalid(format!("invalid filter '{directives}': {e}"))),
        None => Ok(builder.from_env_lossy()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_ignore_case_and_padding() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level(" WARN ").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::OFF);
        assert!(matches!(parse_level("loud"), Err(LoggerError::InvalidConfiguration { .. })));
    }

    #[test]
    fn rotations_map_to_appender_schedules() {
        assert_eq!(parse_rotation("daily").unwrap(), Rotation::DAILY);
        assert_eq!(parse_rotation("Hourly").unwrap(), Rotation::HOURLY);
        assert_eq!(parse_rotation("minutely").unwrap(), Rotation::MINUTELY);
        assert_eq!(parse_rotation("never").unwrap(), Rotation::NEVER);

        let err = parse_rotation("weekly").unwrap_err();
        assert!(err.to_string().contains("unknown log rotation 'weekly'"), "{err}");
    }

    #[test]
    fn explicit_directives_are_validated() {
        assert!(build(LevelFilter::INFO, Some("qualis_qualifier=debug,warn")).is_ok());
        assert!(build(LevelFilter::INFO, None).is_ok());
        assert!(build(LevelFilter::INFO, Some("qualis=notalevel")).is_err());
    }
}
