//! Constants used throughout slipway.
//!
//! Centralizes magic strings and configuration values.

/// Environment variable carrying the base64-encoded signing keystore.
pub const KEYSTORE_ENV: &str = "ANDROID_KEYSTORE_BASE64";

/// Default output path for the recovered keystore.
pub const DEFAULT_KEYSTORE_PATH: &str = "android/release.keystore";

/// Smallest decoded keystore size we accept, in bytes.
///
/// Real keystores are kilobytes; anything below this is a truncated or
/// corrupted secret, and writing it out would only break the signing
/// step later with a far more confusing error.
pub const MIN_KEYSTORE_LEN: usize = 32;

/// Default output path for the downloads page.
pub const DEFAULT_PAGE_PATH: &str = "docs/download.md";

/// Repository queried when neither `--repo` nor `GITHUB_REPOSITORY`
/// is set.
pub const DEFAULT_REPO: &str = "zzzwannasleep/LinPlayer";

/// Mirror hosts, in display order.
///
/// Each asset link is offered once per mirror by prefixing the base URL
/// onto the full direct download URL.
pub const PROXY_BASES: &[(&str, &str)] = &[
    ("v6", "https://v6.gh-proxy.org/"),
    ("gh-proxy", "https://gh-proxy.org/"),
    ("hk", "https://hk.gh-proxy.org/"),
    ("cdn", "https://cdn.gh-proxy.org/"),
    ("edgeone", "https://edgeone.gh-proxy.org/"),
];

/// Platform labels for the artifact filenames the release workflow
/// uploads, in display order.
///
/// Assets missing from a release are skipped; assets present but not
/// listed here render under "Other files".
pub const KNOWN_ASSETS: &[(&str, &str)] = &[
    ("Android (arm64-v8a)", "LinPlayer-Android-arm64-v8a.apk"),
    ("Android TV", "LinPlayer-Android-TV.apk"),
    ("Android (universal)", "LinPlayer-Android.apk"),
    ("Windows (installer, x64)", "LinPlayer-Windows-Setup-x64.exe"),
    ("Linux (x86_64)", "LinPlayer-Linux-x86_64.tar.gz"),
    ("iOS (unsigned)", "LinPlayer-iOS-unsigned.ipa"),
    ("Apple TV (tvOS, unsigned, optional)", "LinPlayer-AppleTV-unsigned.ipa"),
    ("macOS (Apple Silicon)", "LinPlayer-macOS-arm64.dmg"),
    ("macOS (Intel)", "LinPlayer-macOS-x86_64.dmg"),
];
