//! Kind-to-constructor registry for serialized qualifiers.
//!
//! Vulnerability records carry qualifiers as small tagged objects. The registry turns
//! those records into live [`Qualifier`]s. It is a plain value: build it at startup,
//! extend it with [`QualifierRegistry::register`], and hand it to whatever decodes
//! records. There is no process-wide registration.

use crate::error::QualifierErrorExt;
use crate::{Qualifier, QualifierError, rpm_modularity};
use fxhash::FxHashMap;
use qualis_domain::config::QualifierRecord;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Constructor for one qualifier kind.
pub type Factory = fn(&QualifierRecord) -> Result<Box<dyn Qualifier>, QualifierError>;

/// Maps serialized qualifier kinds to constructors.
#[derive(Debug, Clone)]
pub struct QualifierRegistry {
    factories: FxHashMap<String, Factory>,
}

impl QualifierRegistry {
    /// An empty registry; every record is an unknown kind until something is registered.
    #[must_use]
    pub fn new() -> Self {
        Self { factories: FxHashMap::default() }
    }

    /// A registry with every built-in qualifier kind.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(rpm_modularity::KIND, rpm_modularity::RpmModularity::from_record);
        registry
    }

    /// Registers `factory` for `kind`, returning the constructor it replaced.
    pub fn register(&mut self, kind: impl Into<String>, factory: Factory) -> Option<Factory> {
        self.factories.insert(kind.into(), factory)
    }

    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    /// Registered kinds in lexical order.
    #[must_use]
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Builds the qualifier described by `record`.
    ///
    /// # Errors
    /// * [`QualifierError::UnknownKind`] when no constructor is registered for the kind.
    /// * [`QualifierError::InvalidRecord`] when the constructor rejects the parameters.
    pub fn build(&self, record: &QualifierRecord) -> Result<Box<dyn Qualifier>, QualifierError> {
        let factory = self.factories.get(&record.kind).ok_or_else(|| QualifierError::UnknownKind {
            kind: record.kind.clone(),
            context: None,
        })?;

        let qualifier = factory(record)?;
        debug!(%record, %qualifier, "qualifier built");
        Ok(qualifier)
    }
}

impl Default for QualifierRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Decodes a record's parameters into a typed struct.
///
/// Unknown parameters are ignored so newer records still decode.
///
/// # Errors
/// Returns [`QualifierError::InvalidRecord`] when a required parameter is missing or a
/// value does not parse.
pub fn decode_params<T: DeserializeOwned>(record: &QualifierRecord) -> Result<T, QualifierError> {
    serde_json::from_value(Value::Object(record.params.clone()))
        .context(format!("decoding {} parameters", record.kind))
}
