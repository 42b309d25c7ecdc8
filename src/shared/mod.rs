//! Shared utilities and error types.

pub mod error;
pub mod result;

pub use error::{DatasetError, ExitCode};
pub use result::Result;
