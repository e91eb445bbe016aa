//! `psdk use` - switch the project's SDK source
//!
//! Every action requires running inside a project. The checkout operations
//! themselves are not implemented yet; each action validates the project
//! and acknowledges the request.

use psdk_core::{Scope, Store};

use crate::cli::UseAction;
use crate::error::{CliError, Result};

pub fn run_use(action: UseAction) -> Result<()> {
    let mut store = Store::from_env()?;
    ensure_project(&mut store)?;

    match action {
        UseAction::Studio { delete } => {
            // TODO: rename or delete the project pokemonsdk folder, removing
            // the submodule when it is one
            println!("use studio (delete: {delete}) is not implemented yet");
        }
        UseAction::Version { version } => {
            // TODO: ensure pokemonsdk is in the project and check out the
            // commit tagged with this version
            println!("use version {version} is not implemented yet");
        }
        UseAction::Commit { sha1 } => {
            // TODO: ensure pokemonsdk is in the project and check out sha1
            println!("use commit {sha1} is not implemented yet");
        }
        UseAction::Mr { url } => {
            // TODO: check out the MR head commit, configuring remotes as
            // needed
            println!("use mr {url} is not implemented yet");
        }
        UseAction::Latest => {
            // TODO: check out development and pull
            println!("use latest is not implemented yet");
        }
    }
    Ok(())
}

/// Resolve the local scope and fail when no project root was found.
fn ensure_project(store: &mut Store) -> Result<()> {
    store.get(Scope::Local);
    if store.project_root().is_none() {
        return Err(CliError::user("Not in a project"));
    }
    Ok(())
}
