//! Version reconciliation across the global SDK clone, the project
//! checkout, and a located Studio installation.
//!
//! The report is returned as a value; printing it (and exiting on a fatal
//! error) is the caller's responsibility.

use std::path::{Path, PathBuf};

use psdk_git::{self as git, CommandRunner};
use serde::Serialize;

use crate::config::{Scope, Store};
use crate::{Error, Result, studio, version};

/// Remote holding the SDK repository.
pub const SDK_REPOSITORY_URL: &str = "https://gitlab.com/pokemonsdk/pokemonsdk.git";

/// Directory name of an SDK checkout, shared by the global clone, project
/// checkouts, and the bundle inside Studio binaries.
pub const SDK_DIR_NAME: &str = "pokemonsdk";

/// Where the project-scoped SDK was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ProjectSdk {
    /// The project carries its own checkout at `<root>/pokemonsdk`
    Checkout {
        version: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        git_target: Option<String>,
    },
    /// The SDK bundled with a located Studio installation
    Studio { version: String },
}

/// Reconciled SDK versions for the global environment and, when a project
/// root was found, the current project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionReport {
    pub global_version: String,
    pub global_git_target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectSdk>,
}

/// Build the full reconciliation report.
///
/// The global phase always runs first: it ensures the shared SDK clone
/// exists under the store's data directory (cloning it when absent) and
/// reads its version and git state. The project phase is skipped silently
/// when no project root is found.
pub fn reconcile<R: CommandRunner>(store: &mut Store, runner: &R) -> Result<VersionReport> {
    let sdk_path = ensure_sdk_repository(store.data_dir(), runner)?;
    let global_version = version::format_version(version::read_version_code(&sdk_path));
    let global_git_target = version::source_target(runner, &sdk_path)?;

    let project = reconcile_project(store, runner)?;

    Ok(VersionReport {
        global_version,
        global_git_target,
        project,
    })
}

/// Ensure the shared SDK clone exists under `data_dir`, cloning it when the
/// checkout is absent. Returns the checkout path.
pub fn ensure_sdk_repository<R: CommandRunner>(data_dir: &Path, runner: &R) -> Result<PathBuf> {
    let sdk_path = data_dir.join(SDK_DIR_NAME);
    if sdk_path.join(".git").exists() {
        return Ok(sdk_path);
    }

    std::fs::create_dir_all(data_dir)?;
    git::clone_repository(runner, SDK_REPOSITORY_URL, data_dir).map_err(|error| {
        tracing::debug!(%error, "clone failed");
        Error::CloneFailed {
            dir: data_dir.to_path_buf(),
        }
    })?;
    Ok(sdk_path)
}

/// The project phase: a checkout under the project root wins; otherwise the
/// SDK is resolved through the configured (or freshly located) Studio path.
fn reconcile_project<R: CommandRunner>(
    store: &mut Store,
    runner: &R,
) -> Result<Option<ProjectSdk>> {
    store.get(Scope::Local);
    let Some(root) = store.project_root().map(Path::to_path_buf) else {
        return Ok(None);
    };

    let checkout = root.join(SDK_DIR_NAME);
    if checkout.is_dir() {
        let version = version::format_version(version::read_version_code(&checkout));
        let target = version::source_target(runner, &checkout)?;
        return Ok(Some(ProjectSdk::Checkout {
            version,
            git_target: (!target.is_empty()).then_some(target),
        }));
    }

    if store.get(Scope::Local).studio_path().is_empty() {
        studio::locate_and_save(store, Scope::Local)?;
    }
    let studio_path = PathBuf::from(store.get(Scope::Local).studio_path());
    let binaries = studio::binaries_path(&studio_path).ok_or(Error::BinariesNotFound)?;

    let version = version::format_version(version::read_version_code(&binaries.join(SDK_DIR_NAME)));
    Ok(Some(ProjectSdk::Studio { version }))
}
