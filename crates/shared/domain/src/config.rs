use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration for qualis binaries.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QualisConfigInner {
    pub log: LogConfig,
    /// Qualifiers applied to every package unless overridden on the command line.
    pub qualifiers: Vec<QualifierRecord>,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct QualisConfig {
    #[serde(flatten, default)]
    inner: Arc<QualisConfigInner>,
}

impl Deref for QualisConfig {
    type Target = QualisConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for QualisConfig {
    fn deref_mut(&mut self) -> &mut QualisConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Logging knobs. Levels and rotation stay textual so config files remain readable;
/// the logger crate parses them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// Extra `tracing` directives such as `qualis_qualifier=debug`.
    pub filter: Option<String>,
    pub json: bool,
    /// Directory for rolling log files; console only when unset.
    pub dir: Option<PathBuf>,
    /// `minutely`, `hourly`, `daily` or `never`.
    pub rotation: String,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            filter: None,
            json: false,
            dir: None,
            rotation: "daily".to_owned(),
            max_files: 10,
        }
    }
}

/// A serialized qualifier as it appears in vulnerability records and config files.
///
/// ```json
/// { "kind": "rpm-modularity", "module": "nodejs:16" }
/// ```
///
/// Everything except `kind` is kept as arbitrary JSON parameters; interpreting them is the
/// job of whichever constructor is registered for `kind`. Records of kinds nobody knows
/// must still parse, whatever their parameters look like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifierRecord {
    pub kind: String,
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

impl QualifierRecord {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into(), params: Map::new() }
    }

    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for QualifierRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind)?;
        for (i, (key, value)) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_str(")")
    }
}
