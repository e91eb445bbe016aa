//! Core logic for the PSDK command line tool
//!
//! This crate implements the parts of the tool with real invariants:
//!
//! - **Configuration resolution**: a two-scope (global/per-project) store
//!   with layered merge and project-root discovery by upward directory walk
//! - **Studio discovery**: locating a Pokemon Studio installation across a
//!   prioritized list of candidate locations
//! - **Version reconciliation**: extracting the SDK version code and git
//!   state from the global clone, a project checkout, or a Studio install
//!
//! Fatal conditions (no installation found, clone failure, no binaries) are
//! returned as [`Error`] values; deciding to terminate the process is left
//! to the binary's entry point.

pub mod config;
pub mod error;
pub mod report;
pub mod studio;
pub mod version;

pub use config::{Scope, Settings, SettingsError, Store};
pub use error::{Error, Result};
pub use report::{ProjectSdk, VersionReport};
