//! Release metadata.
//!
//! Typed view of the GitHub release payload plus the small parsing
//! helpers the page renderer needs: the version line from the release
//! notes and a friendly publish timestamp.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{ReleaseError, Result};

/// Marker line the release workflow writes into every release body.
const VERSION_PREFIX: &str = "- Version:";

/// A GitHub release, as returned by
/// `gh api repos/{repo}/releases/tags/{tag}`.
///
/// Only the fields the renderer reads; the rest of the payload is
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// A single uploaded artifact on a release.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
}

impl Release {
    /// Names of all named assets on this release.
    pub fn asset_names(&self) -> Vec<&str> {
        self.assets
            .iter()
            .map(|a| a.name.as_str())
            .filter(|n| !n.is_empty())
            .collect()
    }

    /// Version declared in the release notes, if any.
    ///
    /// The first `- Version: <value>` line wins.
    pub fn version(&self) -> Option<String> {
        let body = self.body.as_deref()?;
        body.lines()
            .find_map(|line| line.strip_prefix(VERSION_PREFIX))
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    /// Publish timestamp rendered as `YYYY-MM-DD HH:MM:SS UTC`.
    ///
    /// A timestamp chrono cannot parse passes through unchanged; a
    /// wrong-looking date on the page beats a failed deploy.
    pub fn published_utc(&self) -> Option<String> {
        self.published_at
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(format_publish_date)
    }

    /// Canonical web page for this release, falling back to the tag URL
    /// when the payload carries none.
    pub fn page_url(&self, repo: &str, tag: &str) -> String {
        self.html_url
            .clone()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| tag_url(repo, tag))
    }
}

/// Web page for a tag, whether or not a release exists for it.
pub fn tag_url(repo: &str, tag: &str) -> String {
    format!("https://github.com/{}/releases/tag/{}", repo, tag)
}

fn format_publish_date(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Validate an `owner/name` repository identifier.
pub fn validate_repo(repo: &str) -> Result<()> {
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok(())
        }
        _ => Err(ReleaseError::InvalidRepo(repo.to_string()).into()),
    }
}
