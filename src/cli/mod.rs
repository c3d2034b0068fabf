//! Command-line interface.

pub mod completions;
pub mod downloads;
pub mod keystore;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::constants;

/// Slipway - release-pipeline helpers for CI.
#[derive(Parser)]
#[command(
    name = "slipway",
    about = "Helpers for the app release pipeline",
    version,
    after_help = "Clear the slipway. Ship it. ⚓"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Recover the signing keystore from ANDROID_KEYSTORE_BASE64
    Keystore {
        /// Output path for the decoded keystore
        #[arg(default_value = constants::DEFAULT_KEYSTORE_PATH)]
        out: PathBuf,
    },

    /// Generate the downloads page from GitHub releases
    Downloads {
        /// Repository as owner/name
        #[arg(long, env = "GITHUB_REPOSITORY", default_value = constants::DEFAULT_REPO)]
        repo: String,

        /// Output path for the Markdown page
        #[arg(long, default_value = constants::DEFAULT_PAGE_PATH)]
        out: PathBuf,

        /// Tag of the stable release
        #[arg(long, default_value = "latest")]
        stable_tag: String,

        /// Tag of the nightly release
        #[arg(long, default_value = "nightly")]
        nightly_tag: String,
    },

    /// Print shell completions
    Completions {
        /// Shell dialect to emit
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Keystore { out } => keystore::execute(&out),
        Downloads {
            repo,
            out,
            stable_tag,
            nightly_tag,
        } => downloads::execute(&repo, &out, &stable_tag, &nightly_tag),
        Completions { shell } => completions::execute(shell),
    }
}
