//! `psdk update` - self-update from the crates registry

use psdk_git::{CommandRunner, SystemRunner};
use regex::Regex;
use semver::Version;

use crate::error::{CliError, Result};

/// Published name of this package on the registry.
const PACKAGE_NAME: &str = "psdk-cli";

pub fn run_update() -> Result<()> {
    println!("Checking for updates...");
    let runner = SystemRunner;

    let local = Version::parse(env!("CARGO_PKG_VERSION"))
        .map_err(|e| CliError::user(format!("Invalid local version: {e}")))?;
    let remote = fetch_remote_version(&runner)?;

    if remote > local {
        println!("New version available: {remote} (current: {local})");
        update_package(&runner)?;
    } else {
        println!("psdk-cli is up-to-date.");
    }
    Ok(())
}

/// Latest published version, parsed from the registry search output.
fn fetch_remote_version<R: CommandRunner>(runner: &R) -> Result<Version> {
    let cwd = std::env::current_dir()?;
    let output = runner.run("cargo", &["search", PACKAGE_NAME, "--limit", "1"], &cwd)?;
    parse_remote_version(&output.stdout).ok_or_else(|| {
        CliError::user(format!("Could not find {PACKAGE_NAME} in the registry"))
    })
}

fn parse_remote_version(output: &str) -> Option<Version> {
    // `cargo search` lines look like: psdk-cli = "0.2.0"    # description
    let pattern = Regex::new(r#"(?m)^psdk-cli = "([\d.]+)""#).ok()?;
    let captures = pattern.captures(output)?;
    Version::parse(captures.get(1)?.as_str()).ok()
}

fn update_package<R: CommandRunner>(runner: &R) -> Result<()> {
    let confirmed = dialoguer::Confirm::new()
        .with_prompt("Do you want to update psdk-cli?")
        .default(true)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    println!("Updating psdk-cli...");
    let cwd = std::env::current_dir()?;
    let output = runner.run("cargo", &["install", PACKAGE_NAME], &cwd)?;
    if !output.success() {
        return Err(CliError::user("cargo install psdk-cli failed"));
    }
    println!("Update complete.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_registry_search_output() {
        let output = "psdk-cli = \"0.3.1\"    # Command-line interface for the PSDK toolchain\n";
        assert_eq!(
            parse_remote_version(output),
            Some(Version::new(0, 3, 1))
        );
    }

    #[test]
    fn ignores_other_packages_in_the_output() {
        let output = "psdk-cli-extras = \"9.9.9\"    # something else\n";
        assert_eq!(parse_remote_version(output), None);
    }

    #[test]
    fn empty_output_yields_none() {
        assert_eq!(parse_remote_version(""), None);
    }
}
