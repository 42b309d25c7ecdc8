use std::fmt;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - dataset built and emitted
    Success = 0,
    /// Application error (source unavailable, malformed payload, dangling reference, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Fatal failures raised by the dataset walk.
///
/// Tolerated payload oddities (a license that is a bare string, an author
/// without a name) are absorbed by the aggregate counters and never reach
/// this enum. Anything here aborts the whole build; no partial dataset is
/// produced.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dangling reference: {referenced_by} lists usedBy entry {package}@{version}, which is absent from the manifest")]
    DanglingReference {
        package: String,
        version: String,
        referenced_by: String,
    },

    #[error("package {package} lists version {version} but carries no descriptor for it")]
    MissingRelease { package: String, version: String },
}
