//! Two-scope configuration store with root-change invalidation
//!
//! The store is an explicit object constructed once by the entry point and
//! passed by reference to all callers; it owns the cached settings for both
//! scopes. Missing or malformed files are never fatal: they load as
//! defaults with a diagnostic.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_yaml::Value;

use crate::config::resolver::find_project_root;
use crate::config::settings::Settings;
use crate::{Error, Result};

/// Directory under the home directory holding cli data (config file and the
/// shared SDK clone).
pub const DATA_DIR_NAME: &str = ".psdk-cli";

/// Filename of the global configuration inside the data directory.
pub const GLOBAL_CONFIG_FILENAME: &str = "config.yml";

/// Filename of the per-project configuration inside the project root.
pub const PROJECT_CONFIG_FILENAME: &str = ".psdk-cli.yml";

/// Environment variable overriding the data directory, mostly for tests.
pub const DATA_DIR_ENV: &str = "PSDK_CLI_HOME";

/// Configuration scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Per-user configuration
    Global,
    /// Per-project configuration, overlaid on the global values
    Local,
}

/// Shape of the per-project file: `project_paths` is global-only by
/// convention and never written here.
#[derive(Serialize)]
struct ProjectFile<'a> {
    studio_path: &'a str,
}

/// Lazily-loaded settings for both scopes.
pub struct Store {
    data_dir: PathBuf,
    cwd: PathBuf,
    global: Option<Settings>,
    local: Option<Settings>,
    project_root: Option<PathBuf>,
}

impl Store {
    /// Create a store over an explicit data directory and working directory.
    ///
    /// Production code uses [`Store::from_env`]; this constructor exists so
    /// tests can control both locations.
    pub fn new(data_dir: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            cwd: cwd.into(),
            global: None,
            local: None,
            project_root: None,
        }
    }

    /// Create a store from the process environment: the data directory is
    /// `$PSDK_CLI_HOME` when set, `<home>/.psdk-cli` otherwise, and the
    /// working directory is the process working directory.
    pub fn from_env() -> Result<Self> {
        let data_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::home_dir()
                .ok_or(Error::NoHomeDirectory)?
                .join(DATA_DIR_NAME),
        };
        Ok(Self::new(data_dir, std::env::current_dir()?))
    }

    /// The cli data directory (also hosts the shared SDK clone).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The most recently resolved project root, if any.
    ///
    /// Only meaningful after a [`Scope::Local`] access resolved it.
    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    /// Get the settings for a scope.
    ///
    /// The global scope loads once and is cached for the process lifetime.
    /// The local scope re-resolves the project root on every call and
    /// rebuilds its settings when the root changed; otherwise the cached
    /// settings are reused.
    pub fn get(&mut self, scope: Scope) -> &Settings {
        match scope {
            Scope::Global => self.global_settings(),
            Scope::Local => self.local_settings(),
        }
    }

    /// Mutable access to the settings for a scope, with the same caching
    /// and invalidation behavior as [`Store::get`].
    pub fn get_mut(&mut self, scope: Scope) -> &mut Settings {
        match scope {
            Scope::Global => self.global_settings(),
            Scope::Local => self.local_settings(),
        }
    }

    /// Persist the configuration.
    ///
    /// Always writes the global file in full (creating the data directory if
    /// needed). When local settings and a project root both exist, also
    /// writes `<root>/.psdk-cli.yml` carrying `studio_path` only.
    pub fn save(&mut self) -> Result<()> {
        let global_path = self.global_config_path();
        let global = self.global_settings().clone();
        write_yaml(&global_path, &global)?;

        if let (Some(local), Some(root)) = (&self.local, &self.project_root) {
            let project_file = ProjectFile {
                studio_path: local.studio_path(),
            };
            write_yaml(&root.join(PROJECT_CONFIG_FILENAME), &project_file)?;
        }
        Ok(())
    }

    fn global_config_path(&self) -> PathBuf {
        self.data_dir.join(GLOBAL_CONFIG_FILENAME)
    }

    fn global_settings(&mut self) -> &mut Settings {
        let path = self.global_config_path();
        self.global
            .get_or_insert_with(|| Settings::from_document(&load_document(&path)))
    }

    fn local_settings(&mut self) -> &mut Settings {
        let root = find_project_root(&self.cwd);
        if root != self.project_root {
            tracing::debug!(?root, "project root changed, rebuilding local settings");
            self.local = None;
            self.project_root = root;
        }

        if self.local.is_none() {
            let mut settings = self.global_settings().clone();
            if let Some(root) = &self.project_root {
                settings.apply_document(&load_document(&root.join(PROJECT_CONFIG_FILENAME)));
            }
            self.local = Some(settings);
        }
        self.local.get_or_insert_with(Settings::default)
    }
}

/// Load a YAML document; a missing or malformed file yields a null document
/// (settings built from it fall back to defaults).
fn load_document(path: &Path) -> Value {
    if !path.exists() {
        return Value::Null;
    }
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "failed to read configuration");
            return Value::Null;
        }
    };
    match serde_yaml::from_str(&content) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "failed to load configuration");
            Value::Null
        }
    }
}

fn write_yaml<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_yaml::to_string(value)?;
    fs::write(path, content)?;
    Ok(())
}
