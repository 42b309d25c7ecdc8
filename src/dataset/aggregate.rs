use super::payload::License;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Bucket name charged for licenses that are not a structured SPDX shape.
pub const UNKNOWN_LICENSE: &str = "Unknown";

/// An author seen in the manifest, with how many versions they signed.
///
/// `author` keeps the original descriptor fields verbatim so downstream
/// consumers can read emails, URLs or whatever else the scanner captured.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorCount {
    #[serde(flatten)]
    pub author: serde_json::Map<String, Value>,
    pub count: u64,
}

/// Running histograms over every (package, version) pair of a walk.
///
/// The license map is pre-seeded with `Unknown: 0` so the bucket is always
/// present in the output, even for manifests where every license is
/// structured.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateCounters {
    extensions: HashMap<String, u64>,
    licenses: HashMap<String, u64>,
    authors: HashMap<String, AuthorCount>,
}

impl AggregateCounters {
    pub fn new() -> Self {
        let mut licenses = HashMap::new();
        licenses.insert(UNKNOWN_LICENSE.to_string(), 0);

        Self {
            extensions: HashMap::new(),
            licenses,
            authors: HashMap::new(),
        }
    }

    /// Increments the histogram bucket of each non-empty extension name.
    pub fn record_extensions(&mut self, extensions: &[String]) {
        for ext_name in extensions.iter().filter(|name| !name.is_empty()) {
            *self.extensions.entry(ext_name.clone()).or_insert(0) += 1;
        }
    }

    /// Charges one license observation.
    ///
    /// A structured license increments one bucket per SPDX identifier it
    /// carries; any other shape (bare string, malformed object, null)
    /// increments `Unknown` exactly once.
    pub fn record_license(&mut self, license: &License) {
        match license {
            License::Spdx { unique_license_ids } => {
                for license_id in unique_license_ids {
                    *self.licenses.entry(license_id.clone()).or_insert(0) += 1;
                }
            }
            License::Unstructured(_) => {
                *self.licenses.entry(UNKNOWN_LICENSE.to_string()).or_insert(0) += 1;
            }
        }
    }

    /// Records one author observation.
    ///
    /// An author without a `name` field (or a non-object author value) is
    /// silently skipped. Sameness is decided by name alone: the first
    /// occurrence keeps its fields, later occurrences only bump the count.
    pub fn record_author(&mut self, author: &Value) {
        let Some(fields) = author.as_object() else {
            return;
        };
        let Some(name) = fields.get("name").and_then(Value::as_str) else {
            return;
        };

        if let Some(existing) = self.authors.get_mut(name) {
            existing.count += 1;
        } else {
            self.authors.insert(
                name.to_string(),
                AuthorCount {
                    author: fields.clone(),
                    count: 1,
                },
            );
        }
    }

    pub fn extensions(&self) -> &HashMap<String, u64> {
        &self.extensions
    }

    pub fn licenses(&self) -> &HashMap<String, u64> {
        &self.licenses
    }

    pub fn authors(&self) -> &HashMap<String, AuthorCount> {
        &self.authors
    }
}

impl Default for AggregateCounters {
    fn default() -> Self {
        Self::new()
    }
}
