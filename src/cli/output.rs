//! Terminal output helpers.
//!
//! One voice for everything slipway prints: confirmations and key/value
//! detail on stdout, failures on stderr. Styling honors `NO_COLOR` and
//! otherwise follows the terminal's own capabilities.

use std::fmt::Display;

use console::Style;

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn paint(text: &str, style: Style) -> String {
    if colors_enabled() {
        style.apply_to(text).to_string()
    } else {
        text.to_string()
    }
}

/// Confirmation line, e.g. `✓ wrote keystore: android/release.keystore`.
pub fn success(msg: &str) {
    println!("{} {}", paint("✓", Style::new().green()), msg);
}

/// Failure line on stderr, e.g. `✗ ANDROID_KEYSTORE_BASE64 is empty or unset`.
pub fn error(msg: &str) {
    eprintln!("{} {}", paint("✗", Style::new().red()), msg);
}

/// Warning line, e.g. `⚠ secret was missing base64 padding (pad=2)`.
pub fn warn(msg: &str) {
    println!("{} {}", paint("⚠", Style::new().yellow()), msg);
}

/// Follow-up advice, e.g. `→ install the GitHub CLI: https://cli.github.com`.
pub fn hint(msg: &str) {
    println!(
        "{} {}",
        paint("→", Style::new().cyan()),
        paint(msg, Style::new().cyan())
    );
}

/// Indented key/value detail line, e.g. `  sha256  4f2a…`.
pub fn kv(label: &str, value: impl Display) {
    println!(
        "  {}  {}",
        paint(label, Style::new().dim()),
        paint(&value.to_string(), Style::new().bold())
    );
}
