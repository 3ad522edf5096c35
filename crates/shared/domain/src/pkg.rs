//! Package inventory model.
//!
//! A [`Package`] carries a metadata discriminator ([`MetadataType`]) next to an optional,
//! kind-specific payload ([`Metadata`]). The two normally agree; when a package is built
//! from JSON without a discriminator it is inferred from the payload. They are still
//! stored separately because inventories produced elsewhere can disagree, and consumers
//! must cope with that without panicking.
//!
//! In JSON the payload either names its own `kind` or takes its shape from the package's
//! `metadataType`, as syft-style inventories do.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumString};

/// Identifies which concrete metadata shape a package carries.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum MetadataType {
    /// No metadata was captured for the package.
    #[default]
    Unknown,
    /// An RPM package database entry.
    RpmMetadata,
    /// An APK package database entry.
    ApkMetadata,
    /// A dpkg status database entry.
    DpkgMetadata,
    JavaMetadata,
    GolangBinMetadata,
}

/// Package ecosystem.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PackageType {
    #[default]
    Unknown,
    Rpm,
    Apk,
    Deb,
    JavaArchive,
    GoModule,
}

/// Kind-specific package metadata, tagged by `kind` in serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Metadata {
    Rpm(RpmMetadata),
    Apk(ApkMetadata),
    Dpkg(DpkgMetadata),
    Java(JavaMetadata),
    GolangBin(GolangBinMetadata),
}

impl Metadata {
    /// The discriminator that matches this payload.
    #[must_use]
    pub const fn metadata_type(&self) -> MetadataType {
        match self {
            Self::Rpm(_) => MetadataType::RpmMetadata,
            Self::Apk(_) => MetadataType::ApkMetadata,
            Self::Dpkg(_) => MetadataType::DpkgMetadata,
            Self::Java(_) => MetadataType::JavaMetadata,
            Self::GolangBin(_) => MetadataType::GolangBinMetadata,
        }
    }

    /// Decodes a JSON payload, using its `kind` tag when present and `hint` otherwise.
    fn from_payload(payload: Value, hint: Option<MetadataType>) -> Result<Self, serde_json::Error> {
        if payload.get("kind").is_some() {
            return serde_json::from_value(payload);
        }

        match hint {
            Some(MetadataType::RpmMetadata) => serde_json::from_value(payload).map(Self::Rpm),
            Some(MetadataType::ApkMetadata) => serde_json::from_value(payload).map(Self::Apk),
            Some(MetadataType::DpkgMetadata) => serde_json::from_value(payload).map(Self::Dpkg),
            Some(MetadataType::JavaMetadata) => serde_json::from_value(payload).map(Self::Java),
            Some(MetadataType::GolangBinMetadata) => {
                serde_json::from_value(payload).map(Self::GolangBin)
            },
            Some(MetadataType::Unknown) | None => Err(serde_json::Error::custom(
                "metadata has neither a `kind` tag nor a known `metadataType`",
            )),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RpmMetadata {
    pub epoch: Option<i32>,
    /// Module stream label such as `nodejs:16`; empty when the package is not modular.
    pub modularity: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApkMetadata {
    pub origin_package: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DpkgMetadata {
    pub source: String,
    pub source_version: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JavaMetadata {
    pub pom_artifact_id: String,
    pub pom_group_id: String,
    pub manifest_name: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GolangBinMetadata {
    pub build_settings: Vec<(String, String)>,
    pub go_compiled_version: String,
    pub h1_digest: String,
    pub main_module: String,
}

/// A package from the scanned inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PackageRecord")]
pub struct Package {
    pub id: String,
    pub name: String,
    pub version: String,
    #[serde(rename = "type")]
    pub kind: PackageType,
    pub metadata_type: MetadataType,
    pub metadata: Option<Metadata>,
}

impl Package {
    /// Builds a package whose discriminator is derived from `metadata`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        kind: PackageType,
        metadata: Option<Metadata>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: version.into(),
            kind,
            metadata_type: metadata.as_ref().map_or(MetadataType::Unknown, Metadata::metadata_type),
            metadata,
        }
    }

    /// Overrides the discriminator without touching the payload.
    #[must_use]
    pub const fn with_metadata_type(mut self, metadata_type: MetadataType) -> Self {
        self.metadata_type = metadata_type;
        self
    }

    /// True when the discriminator and the payload agree (or both are absent).
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.metadata.as_ref().map_or(MetadataType::Unknown, Metadata::metadata_type)
            == self.metadata_type
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageRecord {
    #[serde(default)]
    id: String,
    name: String,
    #[serde(default)]
    version: String,
    #[serde(rename = "type", default)]
    kind: PackageType,
    #[serde(default)]
    metadata_type: Option<MetadataType>,
    #[serde(default)]
    metadata: Option<Value>,
}

impl TryFrom<PackageRecord> for Package {
    type Error = serde_json::Error;

    fn try_from(raw: PackageRecord) -> Result<Self, Self::Error> {
        let metadata = match raw.metadata {
            None | Some(Value::Null) => None,
            Some(payload) => Some(Metadata::from_payload(payload, raw.metadata_type).map_err(|e| {
                serde_json::Error::custom(format_args!("package {:?} metadata: {e}", raw.name))
            })?),
        };

        let package = Self::new(raw.id, raw.name, raw.version, raw.kind, metadata);
        Ok(match raw.metadata_type {
            Some(explicit) => package.with_metadata_type(explicit),
            None => package,
        })
    }
}
