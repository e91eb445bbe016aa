//! Two-scope configuration with layered merge
//!
//! The global scope lives in the per-user cli data directory; the local
//! scope overlays a per-project file on top of the global values.

pub mod resolver;
pub mod settings;
pub mod store;

pub use resolver::find_project_root;
pub use settings::{Settings, SettingsError};
pub use store::{Scope, Store};
