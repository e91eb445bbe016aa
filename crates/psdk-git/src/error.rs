//! Error types for psdk-git

use std::path::PathBuf;

/// Result type for psdk-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in psdk-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The command could not be spawned at all
    #[error("Failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran but exited with a non-zero status
    #[error("`{program} {args}` exited with status {status} in {}", dir.display())]
    CommandFailed {
        program: String,
        args: String,
        status: i32,
        dir: PathBuf,
    },
}
