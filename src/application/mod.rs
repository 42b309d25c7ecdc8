//! Application layer: use cases orchestrating ports and domain.

pub mod build_dataset;

pub use build_dataset::BuildDatasetUseCase;
