//! Downloads page assembly.
//!
//! Builds the Markdown document served to users: a mirror list, one
//! section per channel tag, and per-asset direct plus mirrored links.
//! Rendering is pure once the release payloads are in hand, so the
//! whole document can be tested without touching the network.

use std::collections::BTreeSet;

use tracing::debug;

use crate::core::constants::{KNOWN_ASSETS, PROXY_BASES};
use crate::core::github::ReleaseSource;
use crate::core::release;
use crate::error::Result;

/// Render the complete downloads page for both channels.
pub fn render_page(
    source: &dyn ReleaseSource,
    repo: &str,
    stable_tag: &str,
    nightly_tag: &str,
) -> Result<String> {
    let mut lines: Vec<String> = vec![
        "# Downloads".to_string(),
        String::new(),
        "> This page is generated automatically by GitHub Actions; do not edit it by hand."
            .to_string(),
        String::new(),
        "Mirror nodes (prepend any node to the full direct-link URL):".to_string(),
    ];
    for &(_, base) in PROXY_BASES {
        lines.push(format!("- `{}`", base));
    }
    lines.push(String::new());

    let stable_title = format!("Stable ({})", stable_tag);
    lines.extend(render_release_section(source, repo, stable_tag, &stable_title)?);

    let nightly_title = format!("Nightly ({})", nightly_tag);
    lines.extend(render_release_section(source, repo, nightly_tag, &nightly_title)?);

    lines.push("> iOS / tvOS packages are unsigned; sign them before installing.".to_string());

    debug!(lines = lines.len(), "rendered downloads page");
    Ok(lines.join("\n") + "\n")
}

/// Render one channel section: heading, release facts, asset table,
/// and any leftover files.
fn render_release_section(
    source: &dyn ReleaseSource,
    repo: &str,
    tag: &str,
    title: &str,
) -> Result<Vec<String>> {
    let release = match source.fetch_release(repo, tag)? {
        Some(release) => release,
        None => {
            return Ok(vec![
                format!("## {}", title),
                String::new(),
                format!(
                    "- Release: [`{}`]({}) (not yet created)",
                    tag,
                    release::tag_url(repo, tag)
                ),
                String::new(),
            ]);
        }
    };

    let mut lines = vec![format!("## {}", title), String::new()];
    lines.push(format!(
        "- Release: [`{}`]({})",
        tag,
        release.page_url(repo, tag)
    ));
    if let Some(version) = release.version() {
        lines.push(format!("- Version: `{}`", version));
    }
    if let Some(published) = release.published_utc() {
        lines.push(format!("- Published (UTC): `{}`", published));
    }
    lines.push(String::new());

    lines.push("| Platform | Direct | Mirrors |".to_string());
    lines.push("| --- | --- | --- |".to_string());

    let names: BTreeSet<&str> = release.asset_names().into_iter().collect();
    let mut remaining = names.clone();
    for &(platform, asset_name) in KNOWN_ASSETS {
        if !names.contains(asset_name) {
            continue;
        }
        remaining.remove(asset_name);
        let direct = direct_url(repo, tag, asset_name);
        lines.push(format!(
            "| {} | [{}]({}) | {} |",
            platform,
            asset_name,
            direct,
            mirror_links(&direct)
        ));
    }

    if !remaining.is_empty() {
        lines.push(String::new());
        lines.push("**Other files**".to_string());
        for asset_name in &remaining {
            let direct = direct_url(repo, tag, asset_name);
            lines.push(format!(
                "- [{}]({}) (mirrors: {})",
                asset_name,
                direct,
                mirror_links(&direct)
            ));
        }
    }

    lines.push(String::new());
    Ok(lines)
}

/// Direct download URL for an asset of a tagged release.
fn direct_url(repo: &str, tag: &str, asset: &str) -> String {
    format!(
        "https://github.com/{}/releases/download/{}/{}",
        repo, tag, asset
    )
}

/// Prefix a mirror base onto a direct URL without doubling the slash.
fn proxy_url(base: &str, direct: &str) -> String {
    if base.ends_with('/') {
        format!("{}{}", base, direct)
    } else {
        format!("{}/{}", base, direct)
    }
}

/// One link per mirror for `direct`, joined with ` · `.
fn mirror_links(direct: &str) -> String {
    PROXY_BASES
        .iter()
        .map(|(name, base)| format!("[{}]({})", name, proxy_url(base, direct)))
        .collect::<Vec<_>>()
        .join(" · ")
}
