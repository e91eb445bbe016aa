//! Project root discovery by upward directory walk

use std::path::{Path, PathBuf};

/// Marker file whose presence identifies a project root.
pub const PROJECT_MARKER: &str = "project.studio";

/// Find the nearest enclosing project root.
///
/// Walks the ancestors of `cwd` from deepest to shallowest, stopping before
/// the filesystem (or drive) root, and returns the first directory that
/// directly contains a `project.studio` marker file. Deterministic, no side
/// effects beyond filesystem reads.
pub fn find_project_root(cwd: &Path) -> Option<PathBuf> {
    cwd.ancestors()
        .filter(|candidate| candidate.parent().is_some())
        .find(|candidate| candidate.join(PROJECT_MARKER).exists())
        .map(Path::to_path_buf)
}
