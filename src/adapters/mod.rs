//! Adapters - concrete implementations of the ports.

pub mod console;
pub mod decorator;
pub mod filesystem;
pub mod network;

pub use console::{SilentProgressReporter, StderrProgressReporter};
pub use decorator::VisDecorator;
pub use filesystem::{FileSystemSource, InMemorySource};
pub use network::HttpPayloadSource;
