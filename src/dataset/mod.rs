//! Domain layer: manifest model, aggregation, linker, walk, graph records.

pub mod aggregate;
pub mod builder;
pub mod graph;
pub mod linker;
pub mod payload;
pub mod summary;

pub use aggregate::{AggregateCounters, AuthorCount, UNKNOWN_LICENSE};
pub use builder::{Dataset, DatasetBuilder, INDIRECT_DEPENDENCY_FLAG};
pub use graph::{Edge, FontHint, GraphData, Node};
pub use linker::Linker;
pub use payload::{Composition, License, PackageEntry, Payload, VersionDescriptor};
pub use summary::PackageSummary;
