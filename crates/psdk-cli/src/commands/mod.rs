//! Subcommand implementations

mod update;
mod use_sdk;
mod version;

pub use update::run_update;
pub use use_sdk::run_use;
pub use version::run_version;
