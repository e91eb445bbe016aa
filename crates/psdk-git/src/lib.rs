//! Git abstraction for the PSDK CLI
//!
//! Wraps the external `git` binary behind an injectable [`CommandRunner`]
//! so callers can substitute a fake runner in tests instead of spawning
//! real subprocesses.

pub mod error;
pub mod queries;
pub mod runner;

pub use error::{Error, Result};
pub use queries::{clone_repository, current_branch, head_summary, is_repository};
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
