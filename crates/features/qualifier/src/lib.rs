//! # Package Qualifiers
//!
//! Qualifiers are predicates applied to a package after a vulnerability database lookup.
//! A match survives only when the package satisfies the qualifiers attached to the
//! vulnerability record, which suppresses false positives caused by metadata mismatches
//! (for example an advisory that only concerns one RPM module stream).
//!
//! ## Architecture
//!
//! 1.  **[`Qualifier`]:** the capability every variant implements. Variants are stored as
//!     `Box<dyn Qualifier>` and evaluated uniformly.
//! 2.  **[`RpmModularity`]:** keeps a match only for RPM packages built from a given
//!     module stream (`nodejs:16`, `perl:5.26`, ...).
//! 3.  **[`QualifierRegistry`]:** explicit mapping from serialized kinds
//!     (`"rpm-modularity"`) to constructors. Built once at startup and passed by reference.
//! 4.  **[`QualifierSet`]:** ordered collection evaluated conjunctively against a package.
//!
//! ## Example
//!
//! ```rust
//! use qualis_domain::pkg::{Metadata, Package, PackageType, RpmMetadata};
//! use qualis_qualifier::{Qualifier, RpmModularity};
//!
//! let package = Package::new(
//!     "pkg-1",
//!     "nodejs",
//!     "16.20.2",
//!     PackageType::Rpm,
//!     Some(Metadata::Rpm(RpmMetadata { epoch: None, modularity: "nodejs:16".into() })),
//! );
//!
//! assert!(RpmModularity::new("nodejs:16").satisfied(&package).unwrap());
//! assert!(!RpmModularity::new("nodejs:18").satisfied(&package).unwrap());
//! ```

mod error;
pub mod registry;
pub mod rpm_modularity;
pub mod set;

pub use crate::error::{QualifierError, QualifierErrorExt};
pub use crate::registry::QualifierRegistry;
pub use crate::rpm_modularity::RpmModularity;
pub use crate::set::QualifierSet;

use qualis_domain::pkg::Package;
use std::fmt;

/// A predicate deciding whether a vulnerability match still applies to a package.
///
/// Implementations must be pure: the answer depends only on the qualifier's own
/// configuration and the package, never on earlier calls. They are shared across threads
/// without synchronization.
///
/// A qualifier that does not apply to a package (wrong ecosystem, missing metadata)
/// answers `Ok(false)`. `Err` is reserved for genuine faults that should abort the
/// surrounding evaluation.
pub trait Qualifier: fmt::Debug + fmt::Display + Send + Sync {
    /// The serialized kind this qualifier is registered under.
    fn kind(&self) -> &'static str;

    /// Checks the qualifier against `package`.
    ///
    /// # Errors
    /// Variant specific; see each implementation.
    fn satisfied(&self, package: &Package) -> Result<bool, QualifierError>;
}
