//! Pokemon Studio installation discovery
//!
//! Candidates are probed in a fixed priority order; a candidate is
//! plausible when one of the known `psdk-binaries` bundles exists under it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{Scope, Store};
use crate::{Error, Result};

/// Known locations of the psdk-binaries bundle inside a Studio install,
/// in probe order.
pub const BINARIES_LOCATIONS: [&str; 3] = [
    "psdk-binaries",
    "Contents/Resources/psdk-binaries",
    "resources/psdk-binaries",
];

/// Candidate Studio install locations, in priority order:
/// the macOS application bundle, the Windows per-user install (when the
/// `AppData` environment variable is set), a `projects/PokemonStudio` guess
/// on every mounted volume, and a fixed fallback drive path.
pub fn common_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from("/Applications/PokemonStudio.app")];

    if let Some(app_data) = std::env::var_os("AppData") {
        locations.push(PathBuf::from(app_data).join("../Local/Programs/pokemon-studio"));
    }

    for volume in mounted_volumes() {
        locations.push(volume.join("projects").join("PokemonStudio"));
    }

    locations.push(PathBuf::from("C:/Projects/PokemonStudio"));
    locations
}

fn mounted_volumes() -> Vec<PathBuf> {
    let mut volumes = list_dir(Path::new("/Volumes"));
    volumes.extend(list_dir(Path::new("/dev")).into_iter().filter(|path| {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with("sd"))
    }));
    volumes
}

fn list_dir(path: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(path) else {
        return Vec::new();
    };
    let mut paths: Vec<PathBuf> = entries.flatten().map(|entry| entry.path()).collect();
    paths.sort();
    paths
}

/// First candidate (in the given order) that exists as a directory and
/// contains a binaries bundle.
pub fn locate_in(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .filter(|candidate| candidate.is_dir())
        .find(|candidate| {
            BINARIES_LOCATIONS
                .iter()
                .any(|location| candidate.join(location).is_dir())
        })
        .cloned()
}

/// Locate a Studio installation among the common locations.
pub fn locate() -> Option<PathBuf> {
    locate_in(&common_locations())
}

/// The psdk-binaries path inside a Studio install root, if present.
pub fn binaries_path(root: &Path) -> Option<PathBuf> {
    BINARIES_LOCATIONS
        .iter()
        .map(|location| root.join(location))
        .find(|path| path.is_dir())
}

/// Locate a Studio installation, persist its path into the given scope's
/// `studio_path`, and save the store.
pub fn locate_and_save(store: &mut Store, scope: Scope) -> Result<PathBuf> {
    locate_and_save_in(store, scope, &common_locations())
}

/// Same as [`locate_and_save`] over an explicit candidate list.
pub fn locate_and_save_in(
    store: &mut Store,
    scope: Scope,
    candidates: &[PathBuf],
) -> Result<PathBuf> {
    let studio = locate_in(candidates).ok_or(Error::StudioNotFound)?;
    tracing::info!(path = %studio.display(), "located Pokemon Studio");

    store
        .get_mut(scope)
        .set_studio_path(studio.to_string_lossy())?;
    store.save()?;
    Ok(studio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::store::DATA_DIR_NAME;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn make_install(base: &Path, name: &str, binaries: &str) -> PathBuf {
        let root = base.join(name);
        fs::create_dir_all(root.join(binaries)).unwrap();
        root
    }

    #[test]
    fn locate_in_honors_priority_order_over_later_candidates() {
        let temp = TempDir::new().unwrap();
        let first = make_install(temp.path(), "first", "psdk-binaries");
        let second = make_install(temp.path(), "second", "psdk-binaries");

        let found = locate_in(&[first.clone(), second]);
        assert_eq!(found, Some(first));
    }

    #[test]
    fn locate_in_skips_missing_and_implausible_candidates() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        let empty = temp.path().join("empty");
        fs::create_dir(&empty).unwrap();
        let plausible = make_install(temp.path(), "studio", "Contents/Resources/psdk-binaries");

        let found = locate_in(&[missing, empty, plausible.clone()]);
        assert_eq!(found, Some(plausible));
    }

    #[test]
    fn locate_in_returns_none_when_nothing_is_plausible() {
        let temp = TempDir::new().unwrap();
        let empty = temp.path().join("empty");
        fs::create_dir(&empty).unwrap();

        assert_eq!(locate_in(&[empty]), None);
    }

    #[test]
    fn binaries_path_probes_known_locations_in_order() {
        let temp = TempDir::new().unwrap();
        let root = make_install(temp.path(), "studio", "resources/psdk-binaries");
        assert_eq!(
            binaries_path(&root),
            Some(root.join("resources/psdk-binaries"))
        );

        // An earlier location wins once it exists
        fs::create_dir_all(root.join("psdk-binaries")).unwrap();
        assert_eq!(binaries_path(&root), Some(root.join("psdk-binaries")));
    }

    #[test]
    fn binaries_path_is_none_without_a_bundle() {
        let temp = TempDir::new().unwrap();
        assert_eq!(binaries_path(temp.path()), None);
    }

    #[test]
    fn locate_and_save_persists_into_the_requested_scope() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join(DATA_DIR_NAME);
        let studio = make_install(temp.path(), "studio", "psdk-binaries");
        let mut store = Store::new(&data_dir, temp.path());

        let found =
            locate_and_save_in(&mut store, Scope::Global, &[studio.clone()]).unwrap();
        assert_eq!(found, studio);
        assert_eq!(
            store.get(Scope::Global).studio_path(),
            studio.to_string_lossy()
        );

        let saved = fs::read_to_string(data_dir.join("config.yml")).unwrap();
        assert!(saved.contains("studio_path"));
    }

    #[test]
    fn locate_and_save_reports_failure_without_saving() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join(DATA_DIR_NAME);
        let mut store = Store::new(&data_dir, temp.path());

        let result = locate_and_save_in(&mut store, Scope::Global, &[]);
        assert!(matches!(result, Err(Error::StudioNotFound)));
        assert!(!data_dir.join("config.yml").exists());
    }
}
