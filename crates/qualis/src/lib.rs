//! Facade crate for the qualis workspace.
//! Re-exports domain/kernel primitives and the qualifier engine so applications depend on
//! a single crate. Keep this crate thin: it composes other crates, it does not implement
//! business logic.

pub use qualis_domain as domain;
pub use qualis_kernel as kernel;
pub use qualis_qualifier as qualifier;

/// Items most applications need.
pub mod prelude {
    pub use qualis_domain::config::{QualifierRecord, QualisConfig};
    pub use qualis_domain::pkg::{Metadata, MetadataType, Package, PackageType};
    pub use qualis_qualifier::{
        Qualifier, QualifierError, QualifierRegistry, QualifierSet, RpmModularity,
    };
}

/// Qualifier kinds compiled into this build.
pub mod kinds {
    use qualis_domain::config::QualifierRecord;
    use qualis_qualifier::rpm_modularity;

    pub use qualis_qualifier::rpm_modularity::KIND as RPM_MODULARITY;

    /// The parameter a one-value `kind=value` shorthand fills in, for kinds that have one.
    #[must_use]
    pub fn shorthand_param(kind: &str) -> Option<&'static str> {
        match kind {
            RPM_MODULARITY => Some(rpm_modularity::MODULE_PARAM),
            _ => None,
        }
    }

    /// Expands `kind=value` (for example `rpm-modularity=nodejs:16`) into a record.
    ///
    /// Only the first `=` separates kind from value, and the value may be empty.
    /// Returns `None` when there is no `=` or the kind has no shorthand.
    #[must_use]
    pub fn parse_shorthand(raw: &str) -> Option<QualifierRecord> {
        let (kind, value) = raw.split_once('=')?;
        let key = shorthand_param(kind.trim())?;
        Some(QualifierRecord::new(kind.trim()).param(key, value))
    }
}
