//! Error types for psdk-core

use std::path::PathBuf;

/// Result type for psdk-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in psdk-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No plausible Pokemon Studio installation among the known candidates
    #[error("failed to locate Pokemon Studio, please set it up manually")]
    StudioNotFound,

    /// Cloning the SDK repository into the cli data directory failed
    #[error("Failed to setup pokemonsdk repository in `{}`", dir.display())]
    CloneFailed { dir: PathBuf },

    /// No local SDK checkout and no binaries under the configured Studio path
    #[error("Cannot locate Pokémon Studio or local repository...")]
    BinariesNotFound,

    /// The home directory could not be determined
    #[error("Could not determine the home directory")]
    NoHomeDirectory,

    /// Rejected settings assignment
    #[error(transparent)]
    Settings(#[from] crate::config::SettingsError),

    /// Git error from psdk-git
    #[error(transparent)]
    Git(#[from] psdk_git::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
