//! Configuration value object with validated setters
//!
//! Assignments are validated at the boundary: a rejected assignment leaves
//! the prior value untouched and reports why, so the caller decides how to
//! surface the failure. Values loaded from files are only type-checked,
//! never re-validated against the disk.

use std::path::Path;

use serde::Serialize;
use serde_yaml::Value;

/// Validation failures for settings assignments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The studio path is non-empty and does not exist as a directory
    #[error("Invalid studio_path at `{path}`, this path does not exist")]
    InvalidStudioPath { path: String },

    /// The studio path value is not a string
    #[error("studio_path is not a string")]
    StudioPathNotAString,

    /// The project paths value is not a sequence
    #[error("project_paths is not a sequence")]
    ProjectPathsNotASequence,

    /// The project paths sequence contains a non-string element
    #[error("some of the project paths are not paths")]
    NonStringProjectPath,
}

/// Settings held by one configuration scope.
///
/// Serializes with a fixed key order (`studio_path`, then `project_paths`)
/// so saved files are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    studio_path: String,
    project_paths: Vec<String>,
}

impl Settings {
    /// Build settings from a parsed YAML document, applying each recognized
    /// key through its validated assignment. Rejected keys are skipped with
    /// a warning; unknown keys and non-mapping documents are ignored.
    pub fn from_document(document: &Value) -> Self {
        let mut settings = Self::default();
        settings.apply_document(document);
        settings
    }

    /// Overlay the keys of a parsed YAML document on top of the current
    /// values. Keys absent from the document keep their current value.
    pub fn apply_document(&mut self, document: &Value) {
        if let Some(raw) = document.get("studio_path") {
            if let Err(error) = self.apply_studio_path(raw) {
                tracing::warn!(%error, "rejected studio_path value");
            }
        }
        if let Some(raw) = document.get("project_paths") {
            if let Err(error) = self.apply_project_paths(raw) {
                tracing::warn!(%error, "rejected project_paths value");
            }
        }
    }

    /// The Pokemon Studio installation path; empty means "not configured".
    pub fn studio_path(&self) -> &str {
        &self.studio_path
    }

    /// Set the Studio path. Accepts the empty string (unset) or a path that
    /// currently exists as a directory; anything else is rejected and the
    /// prior value is retained.
    pub fn set_studio_path(&mut self, path: impl Into<String>) -> Result<(), SettingsError> {
        let path = path.into();
        if !path.is_empty() && !Path::new(&path).is_dir() {
            return Err(SettingsError::InvalidStudioPath { path });
        }
        self.studio_path = path;
        Ok(())
    }

    /// The known project paths, in insertion order.
    pub fn project_paths(&self) -> &[String] {
        &self.project_paths
    }

    /// Replace the project path list.
    pub fn set_project_paths(&mut self, paths: Vec<String>) {
        self.project_paths = paths;
    }

    fn apply_studio_path(&mut self, raw: &Value) -> Result<(), SettingsError> {
        match raw.as_str() {
            Some(path) => {
                self.studio_path = path.to_string();
                Ok(())
            }
            None => Err(SettingsError::StudioPathNotAString),
        }
    }

    fn apply_project_paths(&mut self, raw: &Value) -> Result<(), SettingsError> {
        let Some(sequence) = raw.as_sequence() else {
            return Err(SettingsError::ProjectPathsNotASequence);
        };
        let mut paths = Vec::with_capacity(sequence.len());
        for item in sequence {
            match item.as_str() {
                Some(path) => paths.push(path.to_string()),
                None => return Err(SettingsError::NonStringProjectPath),
            }
        }
        self.project_paths = paths;
        Ok(())
    }
}
