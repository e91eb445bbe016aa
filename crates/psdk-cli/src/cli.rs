//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// PSDK CLI - Manage project configuration and SDK versions
#[derive(Parser, Debug)]
#[command(name = "psdk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the psdk-cli version and the active SDK versions
    Version {
        /// Do not search and show the SDK version
        #[arg(long)]
        no_psdk_version: bool,

        /// Output the SDK report as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Update the psdk-cli
    Update,

    /// Make the project use a specific SDK source
    Use {
        /// SDK source to use
        #[command(subcommand)]
        action: UseAction,
    },
}

/// SDK source selection actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum UseAction {
    /// Use the SDK bundled with Pokemon Studio
    Studio {
        /// Delete the local pokemonsdk folder
        #[arg(long)]
        delete: bool,
    },

    /// Use a specific SDK version
    Version {
        /// Version to check out (e.g. 16.160)
        version: String,
    },

    /// Use a specific SDK commit
    Commit {
        /// Commit hash to check out
        sha1: String,
    },

    /// Use a specific merge request
    Mr {
        /// URL of the merge request
        url: String,
    },

    /// Use the latest development commit
    Latest,
}
