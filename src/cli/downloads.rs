//! Downloads command.
//!
//! Renders the public downloads page for the stable and nightly
//! channels and writes it into the docs tree.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::github::GhCli;
use crate::core::{page, release};
use crate::error::Result;

/// Render the downloads page for `repo` and write it to `out`.
pub fn execute(repo: &str, out: &Path, stable_tag: &str, nightly_tag: &str) -> Result<()> {
    let repo = repo.trim();
    release::validate_repo(repo)?;

    info!(repo, stable_tag, nightly_tag, "rendering downloads page");

    let document = page::render_page(&GhCli, repo, stable_tag, nightly_tag)?;

    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(out, document)?;

    output::success(&format!("wrote {}", out.display()));
    Ok(())
}
