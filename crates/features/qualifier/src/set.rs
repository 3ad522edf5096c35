//! Ordered qualifier collections.

use crate::{Qualifier, QualifierError, QualifierRegistry};
use qualis_domain::config::QualifierRecord;
use qualis_domain::pkg::Package;
use tracing::{trace, warn};

/// Qualifiers attached to one vulnerability record, evaluated in insertion order.
///
/// A package satisfies the set when it satisfies every member; an empty set is
/// always satisfied.
#[derive(Debug, Default)]
pub struct QualifierSet {
    qualifiers: Vec<Box<dyn Qualifier>>,
}

impl QualifierSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes `records` through `registry`.
    ///
    /// Records of unknown kinds are skipped with a warning so that data written by a
    /// newer producer does not break evaluation.
    ///
    /// # Errors
    /// Returns [`QualifierError::InvalidRecord`] for a known kind with bad parameters.
    pub fn from_records<'a>(
        records: impl IntoIterator<Item = &'a QualifierRecord>,
        registry: &QualifierRegistry,
    ) -> Result<Self, QualifierError> {
        let mut set = Self::new();
        for record in records {
            match registry.build(record) {
                Ok(qualifier) => set.push(qualifier),
                Err(QualifierError::UnknownKind { kind, .. }) => {
                    warn!(%kind, %record, "skipping qualifier of unknown kind");
                },
                Err(err) => return Err(err),
            }
        }
        Ok(set)
    }

    pub fn push(&mut self, qualifier: Box<dyn Qualifier>) {
        self.qualifiers.push(qualifier);
    }

    #[must_use]
    pub fn with(mut self, qualifier: impl Qualifier + 'static) -> Self {
        self.push(Box::new(qualifier));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.qualifiers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.qualifiers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Box<dyn Qualifier>> {
        self.qualifiers.iter()
    }

    /// Checks every qualifier against `package`, stopping at the first one that fails.
    ///
    /// # Errors
    /// Returns [`QualifierError::Evaluation`] naming the qualifier and the package when a
    /// member reports a fault.
    pub fn satisfied_by(&self, package: &Package) -> Result<bool, QualifierError> {
        for qualifier in &self.qualifiers {
            let satisfied =
                qualifier.satisfied(package).map_err(|e| QualifierError::Evaluation {
                    qualifier: qualifier.to_string(),
                    package: format!("{}@{}", package.name, package.version),
                    message: e.to_string().into(),
                    context: None,
                })?;

            trace!(%qualifier, package = %package.name, satisfied, "qualifier evaluated");
            if !satisfied {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Keeps the packages that satisfy the whole set, preserving order.
    ///
    /// # Errors
    /// Propagates the first evaluation fault.
    pub fn retain_qualified<'p>(
        &self,
        packages: impl IntoIterator<Item = &'p Package>,
    ) -> Result<Vec<&'p Package>, QualifierError> {
        let mut kept = Vec::new();
        for package in packages {
            if self.satisfied_by(package)? {
                kept.push(package);
            }
        }
        Ok(kept)
    }
}

impl<'a> IntoIterator for &'a QualifierSet {
    type Item = &'a Box<dyn Qualifier>;
    type IntoIter = std::slice::Iter<'a, Box<dyn Qualifier>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Box<dyn Qualifier>> for QualifierSet {
    fn from_iter<I: IntoIterator<Item = Box<dyn Qualifier>>>(iter: I) -> Self {
        Self { qualifiers: iter.into_iter().collect() }
    }
}
