//! # Logger
//!
//! Installs the global `tracing` subscriber for qualis binaries.
//!
//! Console output goes to stderr so that commands printing machine-readable results on
//! stdout stay pipe-friendly. File output is optional, rolls over on a schedule and is
//! written from a non-blocking worker thread. Library crates never call into this crate;
//! they only emit `tracing` events.
//!
//! ```rust
//! use qualis_logger::{Logger, parse_level};
//!
//! let _logger = Logger::builder()
//!     .name("qualis")
//!     .level(parse_level("debug").unwrap())
//!     .env_filter("qualis_qualifier=trace")
//!     .init()
//!     .unwrap();
//! ```

pub mod builder;
mod error;
mod filter;

pub use crate::builder::LoggerBuilder;
pub use crate::error::{LoggerError, LoggerErrorExt};
pub use crate::filter::{parse_level, parse_rotation};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use tracing_appender::non_blocking::WorkerGuard;

/// Handle to the installed subscriber. Keep it alive for the whole program: dropping it
/// flushes and stops the file writer.
#[must_use = "dropping the handle stops file logging"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    pub const fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// The file writer guard, when file output is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}
