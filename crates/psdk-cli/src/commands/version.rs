//! `psdk version` - report the cli version and the active SDK versions

use std::io::Write;

use psdk_core::{ProjectSdk, Store, report};
use psdk_git::SystemRunner;

use crate::error::Result;

pub fn run_version(no_psdk_version: bool, json: bool) -> Result<()> {
    if !json {
        println!("psdk-cli v{}", env!("CARGO_PKG_VERSION"));
    }
    if no_psdk_version {
        return Ok(());
    }

    let mut store = Store::from_env()?;
    let runner = SystemRunner;

    if !json {
        print!("Searching for PSDK version...\r");
        std::io::stdout().flush()?;
    }
    let report = report::reconcile(&mut store, &runner)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    // Trailing spaces overwrite the progress line left by the search
    println!("Global PSDK version: {}       ", report.global_version);
    println!("Global PSDK git Target: {}", report.global_git_target);

    match report.project {
        Some(ProjectSdk::Checkout {
            version,
            git_target,
        }) => {
            println!("Project PSDK version: {version}");
            if let Some(target) = git_target {
                println!("Project's PSDK git target: {target}");
            }
        }
        Some(ProjectSdk::Studio { version }) => {
            println!("Project PSDK Version: {version} (Pokémon Studio)");
        }
        None => {}
    }
    Ok(())
}
