//! Release lookup through the GitHub CLI.
//!
//! All API access goes through `gh` so the tool inherits whatever
//! authentication the environment already has, token or keyring alike.
//! The renderer only ever asks "the release for this tag, if any", and
//! the [`ReleaseSource`] trait keeps that seam narrow enough for tests
//! to substitute canned payloads instead of shelling out.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::core::release::Release;
use crate::error::{ReleaseError, Result};

/// Source of release metadata for repository tags.
pub trait ReleaseSource {
    /// Fetch the release tagged `tag`, or `None` if no such release
    /// exists yet.
    fn fetch_release(&self, repo: &str, tag: &str) -> Result<Option<Release>>;
}

/// Queries releases with `gh api repos/{repo}/releases/tags/{tag}`.
pub struct GhCli;

impl GhCli {
    /// Locate the gh executable on PATH.
    fn resolve() -> Result<PathBuf> {
        which::which("gh").map_err(|_| ReleaseError::GhNotFound.into())
    }
}

impl ReleaseSource for GhCli {
    fn fetch_release(&self, repo: &str, tag: &str) -> Result<Option<Release>> {
        let gh = Self::resolve()?;
        let endpoint = format!("repos/{}/releases/tags/{}", repo, tag);
        debug!(endpoint = %endpoint, "querying release");

        let output = Command::new(&gh)
            .args(["api", &endpoint])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ReleaseError::GhFailed {
                command: format!("gh api {}", endpoint),
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if is_not_found(&stderr) {
                debug!(endpoint = %endpoint, "no release for tag");
                return Ok(None);
            }
            return Err(ReleaseError::GhFailed {
                command: format!("gh api {}", endpoint),
                stderr: stderr.trim().to_string(),
            }
            .into());
        }

        let release: Release =
            serde_json::from_slice(&output.stdout).map_err(ReleaseError::from)?;
        debug!(tag_name = %release.tag_name, assets = release.assets.len(), "release fetched");
        Ok(Some(release))
    }
}

/// Whether gh stderr describes a missing release rather than a real
/// failure. Missing is normal: nightly tags lag behind stable ones.
fn is_not_found(stderr: &str) -> bool {
    stderr.contains("HTTP 404") || stderr.contains("Not Found")
}
