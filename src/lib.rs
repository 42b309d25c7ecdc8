//! depviz - dependency manifest to force-graph dataset
//!
//! This library ingests a package registry's resolved dependency manifest
//! (per-version metadata, vulnerability flags, license, author, file
//! composition and reverse-dependency links) plus an opaque flags document,
//! and produces a node/edge graph representation suitable for
//! force-directed rendering along with aggregate statistics.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dataset`): payload model, aggregation, linker, the
//!   manifest walk and graph materialization
//! - **Application Layer** (`application`): the build use case joining the
//!   two document fetches with the synchronous walk
//! - **Ports** (`ports`): interface definitions for sources and presentation
//! - **Adapters** (`adapters`): HTTP, filesystem, in-memory and console
//!   implementations of the ports
//! - **Shared** (`shared`): common Result alias and error types
//!
//! # Example
//!
//! ```no_run
//! use depviz::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let source = HttpPayloadSource::new("http://localhost:1337")?;
//! let use_case = BuildDatasetUseCase::new(source, VisDecorator::new(), SilentProgressReporter);
//!
//! let dataset = use_case.execute().await?;
//! let graph = dataset.materialize();
//! println!("{} nodes, {} edges", graph.nodes.len(), graph.edges.len());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod dataset;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::{
        FileSystemSource, HttpPayloadSource, InMemorySource, SilentProgressReporter,
        StderrProgressReporter, VisDecorator,
    };
    pub use crate::application::BuildDatasetUseCase;
    pub use crate::dataset::{
        AggregateCounters, AuthorCount, Composition, Dataset, DatasetBuilder, Edge, FontHint,
        GraphData, License, Linker, Node, PackageEntry, PackageSummary, Payload,
        VersionDescriptor, INDIRECT_DEPENDENCY_FLAG, UNKNOWN_LICENSE,
    };
    pub use crate::ports::{NodeDecorator, PayloadSource, ProgressReporter};
    pub use crate::shared::{DatasetError, Result};
}
