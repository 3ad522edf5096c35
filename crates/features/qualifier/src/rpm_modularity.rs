//! RPM module stream qualifier.
//!
//! Advisories for modular RPM content (RHEL 8+, Fedora modules) are scoped to a module
//! stream. A package built from `nodejs:18` must not inherit a `nodejs:16` advisory even
//! when name and version ranges line up, so the match is kept only when the package's
//! modularity label equals the advisory's.

use crate::registry::decode_params;
use crate::{Qualifier, QualifierError};
use qualis_domain::config::QualifierRecord;
use qualis_domain::pkg::{Metadata, MetadataType, Package};
use serde::Deserialize;
use std::fmt;
use tracing::warn;

/// Serialized kind for [`RpmModularity`].
pub const KIND: &str = "rpm-modularity";

/// Record parameter holding the module label.
pub const MODULE_PARAM: &str = "module";

/// Matches RPM packages whose modularity label equals a configured label.
///
/// Comparison is exact: no trimming, case folding or stream/version splitting. An empty
/// label matches only non-modular packages (empty modularity).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RpmModularity {
    label: String,
}

#[derive(Deserialize)]
struct Params {
    module: String,
}

impl RpmModularity {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Builds the qualifier from `{"kind": "rpm-modularity", "module": "<label>"}`.
    ///
    /// # Errors
    /// Returns [`QualifierError::InvalidRecord`] when `module` is missing.
    pub fn from_record(record: &QualifierRecord) -> Result<Box<dyn Qualifier>, QualifierError> {
        let params: Params = decode_params(record)?;
        Ok(Box::new(Self::new(params.module)))
    }
}

impl Qualifier for RpmModularity {
    fn kind(&self) -> &'static str {
        KIND
    }

    /// Never fails; packages that are not RPM (or whose payload is not RPM metadata)
    /// simply do not satisfy the qualifier.
    fn satisfied(&self, package: &Package) -> Result<bool, QualifierError> {
        if package.metadata_type != MetadataType::RpmMetadata {
            return Ok(false);
        }

        let Some(Metadata::Rpm(rpm)) = &package.metadata else {
            warn!(
                package.id = %package.id,
                package.name = %package.name,
                payload = ?package.metadata.as_ref().map(Metadata::metadata_type),
                "package is tagged as RPM but carries no RPM metadata; treating as unqualified"
            );
            return Ok(false);
        };

        Ok(rpm.modularity == self.label)
    }
}

impl fmt::Display for RpmModularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{KIND}(module={:?})", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qualis_domain::pkg::{ApkMetadata, PackageType, RpmMetadata};

    fn rpm_package(modularity: &str) -> Package {
        Package::new(
            "id",
            "nodejs",
            "16.20.2",
            PackageType::Rpm,
            Some(Metadata::Rpm(RpmMetadata { epoch: None, modularity: modularity.to_owned() })),
        )
    }

    #[test]
    fn payload_without_rpm_metadata_is_not_applicable() {
        let apk_payload = Package::new(
            "id",
            "musl",
            "1.2.4",
            PackageType::Apk,
            Some(Metadata::Apk(ApkMetadata { origin_package: "musl".to_owned() })),
        )
        .with_metadata_type(MetadataType::RpmMetadata);
        let no_payload = Package::new("id", "musl", "1.2.4", PackageType::Rpm, None)
            .with_metadata_type(MetadataType::RpmMetadata);

        let qualifier = RpmModularity::new("");
        assert!(!qualifier.satisfied(&apk_payload).unwrap());
        assert!(!qualifier.satisfied(&no_payload).unwrap());
    }

    #[test]
    fn discriminator_wins_over_payload() {
        let mislabeled = rpm_package("nodejs:16").with_metadata_type(MetadataType::ApkMetadata);
        assert!(!RpmModularity::new("nodejs:16").satisfied(&mislabeled).unwrap());
    }

    #[test]
    fn comparison_is_exact() {
        let qualifier = RpmModularity::new("nodejs:16");
        for label in ["NodeJS:16", "nodejs:16 ", "nodejs", "nodejs:16:8040020210817", "16"] {
            assert!(!qualifier.satisfied(&rpm_package(label)).unwrap(), "{label} must not match");
        }
    }

    #[test]
    fn displays_kind_and_label() {
        assert_eq!(RpmModularity::new("nodejs:16").to_string(), r#"rpm-modularity(module="nodejs:16")"#);
        assert_eq!(RpmModularity::new("nodejs:16").kind(), KIND);
    }

    #[test]
    fn from_record_reads_module() {
        let record = QualifierRecord::new(KIND).param(MODULE_PARAM, "perl:5.26");
        let qualifier = RpmModularity::from_record(&record).unwrap();
        assert_eq!(qualifier.to_string(), r#"rpm-modularity(module="perl:5.26")"#);
    }

    #[test]
    fn from_record_requires_module() {
        let err = RpmModularity::from_record(&QualifierRecord::new(KIND)).unwrap_err();
        assert!(matches!(err, QualifierError::InvalidRecord { .. }));
    }
}
