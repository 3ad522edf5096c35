//! Typestate builder for the global subscriber.
//!
//! A name must be set before anything else, and the file knobs (rotation, retention,
//! JSON) only exist once a log directory has been chosen.

use crate::{Logger, LoggerError, LoggerErrorExt, filter};
use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync>;

/// No name yet.
#[derive(Debug)]
pub struct Unnamed;

#[derive(Debug)]
pub struct Named(String);

/// Console output only.
#[derive(Debug)]
pub struct Console;

/// Rolling files in a directory, optionally alongside the console.
#[derive(Debug)]
pub struct Files {
    dir: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

#[derive(Debug)]
struct Shared {
    console: bool,
    level: LevelFilter,
    directives: Option<String>,
}

#[must_use = "a builder does nothing until `init` is called"]
#[derive(Debug)]
pub struct LoggerBuilder<N = Unnamed, O = Console> {
    name: N,
    output: O,
    shared: Shared,
}

impl LoggerBuilder {
    pub(crate) const fn new() -> Self {
        Self {
            name: Unnamed,
            output: Console,
            shared: Shared { console: true, level: LevelFilter::INFO, directives: None },
        }
    }
}

impl<O> LoggerBuilder<Unnamed, O> {
    /// Names the logger; the name also prefixes log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, O> {
        LoggerBuilder { name: Named(name.into()), output: self.output, shared: self.shared }
    }
}

impl<O> LoggerBuilder<Named, O> {
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.shared.level = level;
        self
    }

    /// Adds `tracing` directives such as `qualis_qualifier=debug`.
    ///
    /// `RUST_LOG` is consulted only when none are given.
    pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
        self.shared.directives = Some(directives.into());
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.shared.console = enabled;
        self
    }
}

impl LoggerBuilder<Named, Console> {
    /// Also writes rolling log files into `dir`, created on init if missing.
    pub fn path(self, dir: impl Into<PathBuf>) -> LoggerBuilder<Named, Files> {
        let output = Files {
            dir: dir.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        };
        LoggerBuilder { name: self.name, output, shared: self.shared }
    }

    /// Installs the global subscriber.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, an invalid filter, or
    ///   when console output is disabled and there is nothing else to write to.
    /// * [`LoggerError::Subscriber`] when a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        install(&self.name.0, self.shared, None)
    }
}

impl LoggerBuilder<Named, Files> {
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.output.rotation = rotation;
        self
    }

    /// Number of rolled files kept on disk.
    pub const fn max_files(mut self, max_files: usize) -> Self {
        self.output.max_files = max_files;
        self
    }

    /// Writes files as JSON lines.
    pub const fn json(mut self) -> Self {
        self.output.json = true;
        self
    }

    /// Installs the global subscriber with file output.
    ///
    /// # Errors
    /// As for the console-only builder, plus [`LoggerError::InvalidConfiguration`] for zero
    /// retention, [`LoggerError::Io`] when the directory cannot be created and
    /// [`LoggerError::Appender`] when the appender cannot open its file.
    pub fn init(self) -> Result<Logger, LoggerError> {
        install(&self.name.0, self.shared, Some(self.output))
    }
}

impl Files {
    fn attach(self, name: &str, layers: &mut Vec<BoxedLayer>) -> Result<WorkerGuard, LoggerError> {
        if self.max_files == 0 {
            return Err(LoggerError::invalid("max_files must be greater than zero"));
        }

        fs::create_dir_all(&self.dir)
            .context(format!("creating {}", self.dir.display()))?;

        let appender = RollingFileAppender::builder()
            .rotation(self.rotation)
            .filename_prefix(name)
            .filename_suffix(LOG_FILE_SUFFIX)
            .max_log_files(self.max_files)
            .build(&self.dir)
            .context(format!("opening log files in {}", self.dir.display()))?;

        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_writer(writer).with_ansi(false);
        layers.push(if self.json { layer.json().boxed() } else { layer.boxed() });
        Ok(guard)
    }
}

fn install(name: &str, shared: Shared, files: Option<Files>) -> Result<Logger, LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::invalid("logger name cannot be empty"));
    }
    let filter = filter::build(shared.level, shared.directives.as_deref())?;

    let mut layers: Vec<BoxedLayer> = Vec::new();
    if shared.console {
        // stdout belongs to command output.
        let ansi = io::stderr().is_terminal();
        layers.push(fmt::layer().compact().with_writer(io::stderr).with_ansi(ansi).boxed());
    }
    let guard = files.map(|files| files.attach(name, &mut layers)).transpose()?;

    if layers.is_empty() {
        return Err(LoggerError::invalid("console output is disabled and no log directory is set"));
    }

    tracing_subscriber::registry().with(filter).with(layers).try_init()?;
    Ok(Logger { guard })
}
