//! Typed model of the Kubernetes CRD manifest shape

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The only `kind` value accepted by [`CustomResourceDefinition::from_slice`].
pub const CRD_KIND: &str = "CustomResourceDefinition";

/// A fully decoded CustomResourceDefinition manifest.
///
/// Decoding is structural: the required fields below double as the type
/// filter, so arbitrary Kubernetes manifests (ConfigMaps, Deployments,
/// kustomizations) fail to deserialize instead of producing empty values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomResourceDefinition {
    /// API version of the CRD object itself (e.g. `apiextensions.k8s.io/v1`)
    pub api_version: String,

    /// Object kind, always `CustomResourceDefinition` for decoded values
    pub kind: String,

    /// Object metadata
    pub metadata: ObjectMeta,

    /// The CRD spec
    pub spec: CrdSpec,
}

impl CustomResourceDefinition {
    /// Decode a single YAML document into a CRD.
    ///
    /// Any failure (invalid YAML, shape mismatch, or a different `kind`) is
    /// reported uniformly as "not a CRD" rather than as a typed parse
    /// hierarchy.
    pub fn from_slice(content: &[u8]) -> Result<Self> {
        let crd: Self =
            serde_yaml::from_slice(content).context("content does not decode into a CRD")?;

        if crd.kind != CRD_KIND {
            return Err(anyhow!("unexpected kind '{}', want '{CRD_KIND}'", crd.kind));
        }

        Ok(crd)
    }

    /// Full CRD name (e.g. `certificates.cert-manager.io`)
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// API group (e.g. `cert-manager.io`)
    pub fn group(&self) -> &str {
        &self.spec.group
    }

    /// Kind of the declared resource (from `spec.names.kind`)
    pub fn kind_name(&self) -> &str {
        &self.spec.names.kind
    }

    /// All declared versions, in manifest order
    pub fn versions(&self) -> &[CrdVersion] {
        &self.spec.versions
    }

    /// The storage version, if one is marked
    pub fn storage_version(&self) -> Option<&CrdVersion> {
        self.spec.versions.iter().find(|v| v.storage)
    }

    /// All versions served by the API server
    pub fn served_versions(&self) -> impl Iterator<Item = &CrdVersion> {
        self.spec.versions.iter().filter(|v| v.served)
    }

    /// Check whether a specific version is declared
    pub fn has_version(&self, name: &str) -> bool {
        self.spec.versions.iter().any(|v| v.name == name)
    }
}

/// Object metadata carried by the manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectMeta {
    /// Object name
    pub name: String,

    /// Labels attached to the object
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    /// Annotations attached to the object
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

/// The `spec` section of a CRD manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrdSpec {
    /// API group of the declared resource
    pub group: String,

    /// Naming information for the declared resource
    pub names: CrdNames,

    /// Whether resources are namespaced or cluster-wide
    #[serde(default)]
    pub scope: CrdScope,

    /// Declared API versions
    pub versions: Vec<CrdVersion>,

    /// Legacy pruning opt-out, present on older manifests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_unknown_fields: Option<bool>,
}

/// The `spec.names` section of a CRD manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrdNames {
    /// Kind (e.g. `Certificate`)
    pub kind: String,

    /// Plural name (e.g. `certificates`)
    pub plural: String,

    /// Singular name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub singular: Option<String>,

    /// Short names for kubectl (e.g. `["cert", "certs"]`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub short_names: Vec<String>,

    /// List kind (e.g. `CertificateList`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_kind: Option<String>,

    /// Categories for grouping in kubectl
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
}

/// Resource scope declared by the CRD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CrdScope {
    #[default]
    Namespaced,
    Cluster,
}

impl std::fmt::Display for CrdScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Namespaced => write!(f, "Namespaced"),
            Self::Cluster => write!(f, "Cluster"),
        }
    }
}

/// A single declared API version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrdVersion {
    /// Version name (e.g. `v1`, `v1beta1`)
    pub name: String,

    /// Whether the API server serves this version
    #[serde(default)]
    pub served: bool,

    /// Whether this is the storage version
    #[serde(default)]
    pub storage: bool,

    /// Whether this version is deprecated
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,

    /// Deprecation warning message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_warning: Option<String>,

    /// Validation schema for this version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<VersionSchema>,

    /// Subresources configuration, kept opaque
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subresources: Option<serde_yaml::Value>,

    /// Additional printer columns for kubectl, kept opaque
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_printer_columns: Vec<serde_yaml::Value>,
}

impl CrdVersion {
    /// Check whether this version carries an OpenAPI v3 schema
    pub fn has_schema(&self) -> bool {
        self.schema
            .as_ref()
            .map(|s| s.open_api_v3_schema.is_some())
            .unwrap_or(false)
    }
}

/// The `schema` section of a version entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionSchema {
    /// The OpenAPI v3 schema body, retained as an opaque YAML value
    #[serde(
        rename = "openAPIV3Schema",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub open_api_v3_schema: Option<serde_yaml::Value>,
}
