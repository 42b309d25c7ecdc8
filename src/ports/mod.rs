//! Ports - interfaces the core uses to reach external collaborators
//! (source documents, presentation, console).

pub mod decorator;
pub mod payload_source;
pub mod progress_reporter;

pub use decorator::NodeDecorator;
pub use payload_source::PayloadSource;
pub use progress_reporter::ProgressReporter;
