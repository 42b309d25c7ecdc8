use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// The resolved dependency manifest produced by an upstream scanner.
///
/// `dependencies` preserves the insertion order of the source document so
/// that successive builds over the same payload emit nodes and edges in the
/// same order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub dependencies: IndexMap<String, PackageEntry>,
}

/// One package in the manifest.
///
/// The source document stores each version's descriptor as a sibling key of
/// `metadata`/`vulnerabilities`/`versions` inside the same object; the
/// flattened `releases` map captures those keys.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageEntry {
    #[serde(default)]
    pub metadata: Value,
    #[serde(default)]
    pub vulnerabilities: Vec<Value>,
    #[serde(default)]
    pub versions: Vec<String>,
    #[serde(flatten)]
    pub releases: IndexMap<String, VersionDescriptor>,
}

/// Per-version metadata for a package.
///
/// `id` is assigned by the upstream producer and is globally unique across
/// the whole manifest; it is never computed here. `name`, `version` and
/// `hidden` are derived fields stamped by the builder during the walk, not
/// part of the input document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDescriptor {
    pub id: u64,
    #[serde(default)]
    pub used_by: IndexMap<String, String>,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub license: License,
    #[serde(default)]
    pub author: Value,
    #[serde(default)]
    pub composition: Composition,

    #[serde(skip)]
    pub name: String,
    #[serde(skip)]
    pub version: String,
    #[serde(skip)]
    pub hidden: bool,
}

/// License field of a version descriptor.
///
/// Scanners normally emit a conformance object carrying SPDX identifiers;
/// legacy payloads carry a bare string instead. Anything that is not the
/// conformance shape (strings included) counts against the `Unknown`
/// license bucket.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum License {
    Spdx {
        #[serde(rename = "uniqueLicenseIds")]
        unique_license_ids: Vec<String>,
    },
    Unstructured(Value),
}

impl Default for License {
    fn default() -> Self {
        License::Unstructured(Value::Null)
    }
}

/// File composition of a version's tarball.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Composition {
    #[serde(default)]
    pub extensions: Vec<String>,
}
