//! Launcher error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort the launch
///
/// A non-zero exit from the backend itself is not an error; its exit code is
/// propagated verbatim as the launcher's own.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The platform start script is missing from the backend directory
    #[error("Start script does not exist: {}", path.display())]
    CommandNotFound { path: PathBuf },

    /// The OS refused to create the child process
    #[error("Failed to start backend: {source}")]
    Spawn {
        #[source]
        source: io::Error,
    },

    /// The launcher's own executable path could not be determined
    #[error("Failed to locate launcher executable: {source}")]
    ExePath {
        #[source]
        source: io::Error,
    },
}
