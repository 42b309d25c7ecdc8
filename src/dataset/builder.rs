use super::aggregate::AggregateCounters;
use super::graph::{Edge, FontHint, GraphData, Node};
use super::linker::Linker;
use super::payload::Payload;
use super::summary::PackageSummary;
use crate::ports::NodeDecorator;
use crate::shared::{DatasetError, Result};
use serde_json::Value;

/// Flag name marking a version that pulls in indirect dependencies.
pub const INDIRECT_DEPENDENCY_FLAG: &str = "hasIndirectDependencies";

/// Everything one walk produces. Created fresh per build and replaced
/// wholesale on the next; nothing survives across builder invocations.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub warnings: Vec<String>,
    pub packages: Vec<PackageSummary>,
    pub linker: Linker,
    pub counters: AggregateCounters,
    pub raw_nodes: Vec<Node>,
    pub raw_edges: Vec<Edge>,
    pub dependencies_count: usize,
    pub size: u64,
    pub indirect_dependencies: u64,
    /// The flags document, passed through unmodified.
    pub flags: Value,
}

impl Dataset {
    /// Converts the raw node/edge lists into a render-ready graph.
    ///
    /// Safe to call any number of times; every call returns an independent
    /// instance built from the same raw lists.
    pub fn materialize(&self) -> GraphData {
        GraphData::materialize(&self.raw_nodes, &self.raw_edges)
    }

    pub fn extensions(&self) -> &std::collections::HashMap<String, u64> {
        self.counters.extensions()
    }

    pub fn licenses(&self) -> &std::collections::HashMap<String, u64> {
        self.counters.licenses()
    }

    pub fn authors(&self) -> &std::collections::HashMap<String, super::aggregate::AuthorCount> {
        self.counters.authors()
    }
}

/// DatasetBuilder walks a manifest once and synthesizes the dataset.
///
/// The walk visits packages in manifest order and versions in listed
/// order, so output node/edge order is reproducible for a given document.
/// It is a single pure pass: no I/O, no retries, and on the first fatal
/// lookup failure the whole build aborts with no partial dataset.
pub struct DatasetBuilder<'a, D: NodeDecorator> {
    decorator: &'a D,
}

impl<'a, D: NodeDecorator> DatasetBuilder<'a, D> {
    pub fn new(decorator: &'a D) -> Self {
        Self { decorator }
    }

    /// Runs the walk over `payload`, carrying `flags` through to the
    /// dataset untouched.
    ///
    /// # Errors
    /// - [`DatasetError::MissingRelease`] when a version listed in
    ///   `versions` has no nested descriptor.
    /// - [`DatasetError::DanglingReference`] when a `usedBy` entry names a
    ///   package or version absent from the manifest.
    pub fn build(&self, payload: &Payload, flags: Value) -> Result<Dataset> {
        let mut dataset = Dataset {
            warnings: payload.warnings.clone(),
            dependencies_count: payload.dependencies.len(),
            flags,
            ..Dataset::default()
        };

        for (package_name, entry) in &payload.dependencies {
            for version in &entry.versions {
                let mut descriptor = entry
                    .releases
                    .get(version)
                    .ok_or_else(|| DatasetError::MissingRelease {
                        package: package_name.clone(),
                        version: version.clone(),
                    })?
                    .clone();
                descriptor.name = package_name.clone();
                descriptor.version = version.clone();
                descriptor.hidden = false;

                dataset
                    .counters
                    .record_extensions(&descriptor.composition.extensions);
                dataset.counters.record_license(&descriptor.license);
                dataset.counters.record_author(&descriptor.author);

                if descriptor
                    .flags
                    .iter()
                    .any(|flag| flag == INDIRECT_DEPENDENCY_FLAG)
                {
                    dataset.indirect_dependencies += 1;
                }
                dataset.size += descriptor.size;

                let flag_suffix = self.decorator.flag_label(&descriptor.flags, entry);
                dataset.packages.push(PackageSummary {
                    id: descriptor.id,
                    name: package_name.clone(),
                    version: version.clone(),
                    flags: flag_suffix
                        .chars()
                        .filter(|c| !c.is_whitespace())
                        .collect(),
                });

                let label = format!(
                    "{}@{}{}\n<b>[{}]</b>",
                    package_name,
                    version,
                    flag_suffix,
                    self.decorator.format_size(descriptor.size)
                );
                dataset.raw_nodes.push(Node {
                    id: descriptor.id,
                    label,
                    color: self.decorator.node_color(descriptor.id, &descriptor.flags),
                    font: FontHint::default(),
                });

                for (used_by_name, used_by_version) in &descriptor.used_by {
                    let target = payload
                        .dependencies
                        .get(used_by_name)
                        .and_then(|dep| dep.releases.get(used_by_version))
                        .ok_or_else(|| DatasetError::DanglingReference {
                            package: used_by_name.clone(),
                            version: used_by_version.clone(),
                            referenced_by: format!("{}@{}", package_name, version),
                        })?;
                    dataset.raw_edges.push(Edge {
                        from: descriptor.id,
                        to: target.id,
                    });
                }

                dataset.linker.insert(descriptor.id, descriptor);
            }
        }

        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::VisDecorator;
    use serde_json::json;

    fn two_package_payload() -> Payload {
        serde_json::from_value(json!({
            "warnings": ["ambiguous tarball"],
            "dependencies": {
                "foo": {
                    "metadata": {},
                    "vulnerabilities": [],
                    "versions": ["1.0.0", "2.0.0"],
                    "1.0.0": {
                        "id": 1,
                        "usedBy": { "bar": "1.0.0" },
                        "flags": [],
                        "size": 1500,
                        "license": { "uniqueLicenseIds": ["MIT"] },
                        "author": { "name": "alice" },
                        "composition": { "extensions": [".js", ""] }
                    },
                    "2.0.0": {
                        "id": 2,
                        "usedBy": {},
                        "flags": ["hasIndirectDependencies"],
                        "size": 2500,
                        "license": "MIT",
                        "author": { "name": "alice" },
                        "composition": { "extensions": [".js", ".md"] }
                    }
                },
                "bar": {
                    "metadata": {},
                    "vulnerabilities": [],
                    "versions": ["1.0.0"],
                    "1.0.0": {
                        "id": 3,
                        "usedBy": {},
                        "flags": [],
                        "size": 1000,
                        "license": { "uniqueLicenseIds": ["ISC"] },
                        "author": {},
                        "composition": { "extensions": [".ts"] }
                    }
                }
            }
        }))
        .unwrap()
    }

    fn build(payload: &Payload) -> Dataset {
        let decorator = VisDecorator::new();
        DatasetBuilder::new(&decorator)
            .build(payload, json!({ "warnings": true }))
            .unwrap()
    }

    #[test]
    fn test_walk_produces_one_node_per_version_pair() {
        let payload = two_package_payload();
        let dataset = build(&payload);

        assert_eq!(dataset.raw_nodes.len(), 3);
        assert_eq!(dataset.dependencies_count, 2);
        assert_eq!(dataset.packages.len(), 3);
    }

    #[test]
    fn test_walk_resolves_used_by_edges() {
        let payload = two_package_payload();
        let dataset = build(&payload);

        assert_eq!(dataset.raw_edges.len(), 1);
        assert_eq!(dataset.raw_edges[0], Edge { from: 1, to: 3 });
    }

    #[test]
    fn test_walk_accumulates_size_and_indirect_count() {
        let payload = two_package_payload();
        let dataset = build(&payload);

        assert_eq!(dataset.size, 5000);
        assert_eq!(dataset.indirect_dependencies, 1);
    }

    #[test]
    fn test_walk_feeds_counters() {
        let payload = two_package_payload();
        let dataset = build(&payload);

        assert_eq!(dataset.counters.extensions().get(".js"), Some(&2));
        assert_eq!(dataset.counters.extensions().get(".md"), Some(&1));
        assert_eq!(dataset.counters.extensions().get(".ts"), Some(&1));
        assert!(!dataset.counters.extensions().contains_key(""));

        assert_eq!(dataset.counters.licenses().get("MIT"), Some(&1));
        assert_eq!(dataset.counters.licenses().get("ISC"), Some(&1));
        // foo@2.0.0 carries a bare-string license
        assert_eq!(dataset.counters.licenses().get("Unknown"), Some(&1));

        // bar's empty author object is skipped; alice counted twice
        assert_eq!(dataset.counters.authors().len(), 1);
        assert_eq!(dataset.counters.authors()["alice"].count, 2);
    }

    #[test]
    fn test_walk_stamps_derived_fields_into_linker() {
        let payload = two_package_payload();
        let dataset = build(&payload);

        assert_eq!(dataset.linker.len(), 3);
        let foo2 = dataset.linker.get(2).unwrap();
        assert_eq!(foo2.name, "foo");
        assert_eq!(foo2.version, "2.0.0");
        assert!(!foo2.hidden);
    }

    #[test]
    fn test_node_label_carries_name_version_and_size() {
        let payload = two_package_payload();
        let dataset = build(&payload);

        let bar = dataset.raw_nodes.iter().find(|n| n.id == 3).unwrap();
        assert!(bar.label.starts_with("bar@1.0.0"));
        assert!(bar.label.ends_with("\n<b>[1 kB]</b>"));
        assert_eq!(bar.font, FontHint::default());
    }

    #[test]
    fn test_summary_flags_have_no_whitespace() {
        let payload = two_package_payload();
        let dataset = build(&payload);

        for summary in &dataset.packages {
            assert!(summary.flags.chars().all(|c| !c.is_whitespace()));
        }
    }

    #[test]
    fn test_flags_document_passes_through() {
        let payload = two_package_payload();
        let dataset = build(&payload);
        assert_eq!(dataset.flags, json!({ "warnings": true }));
        assert_eq!(dataset.warnings, vec!["ambiguous tarball"]);
    }

    #[test]
    fn test_dangling_used_by_reference_is_fatal() {
        let payload: Payload = serde_json::from_value(json!({
            "warnings": [],
            "dependencies": {
                "foo": {
                    "versions": ["1.0.0"],
                    "1.0.0": {
                        "id": 1,
                        "usedBy": { "ghost": "9.9.9" },
                        "composition": { "extensions": [] }
                    }
                }
            }
        }))
        .unwrap();

        let decorator = VisDecorator::new();
        let err = DatasetBuilder::new(&decorator)
            .build(&payload, Value::Null)
            .unwrap_err();
        match err.downcast_ref::<DatasetError>() {
            Some(DatasetError::DanglingReference {
                package,
                version,
                referenced_by,
            }) => {
                assert_eq!(package, "ghost");
                assert_eq!(version, "9.9.9");
                assert_eq!(referenced_by, "foo@1.0.0");
            }
            other => panic!("expected DanglingReference, got {:?}", other),
        }
    }

    #[test]
    fn test_version_without_descriptor_is_fatal() {
        let payload: Payload = serde_json::from_value(json!({
            "warnings": [],
            "dependencies": {
                "foo": {
                    "versions": ["1.0.0", "2.0.0"],
                    "1.0.0": { "id": 1 }
                }
            }
        }))
        .unwrap();

        let decorator = VisDecorator::new();
        let err = DatasetBuilder::new(&decorator)
            .build(&payload, Value::Null)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DatasetError>(),
            Some(DatasetError::MissingRelease { version, .. }) if version == "2.0.0"
        ));
    }

    #[test]
    fn test_circular_used_by_references_are_legal() {
        let payload: Payload = serde_json::from_value(json!({
            "warnings": [],
            "dependencies": {
                "a": {
                    "versions": ["1.0.0"],
                    "1.0.0": { "id": 1, "usedBy": { "b": "1.0.0" } }
                },
                "b": {
                    "versions": ["1.0.0"],
                    "1.0.0": { "id": 2, "usedBy": { "a": "1.0.0" } }
                }
            }
        }))
        .unwrap();

        let dataset = build(&payload);
        assert_eq!(dataset.raw_edges.len(), 2);
        assert!(dataset.raw_edges.contains(&Edge { from: 1, to: 2 }));
        assert!(dataset.raw_edges.contains(&Edge { from: 2, to: 1 }));
    }
}
