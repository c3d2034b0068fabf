//! Test fixtures and constants.

/// Repository used by the stub gh payloads.
pub const TEST_REPO: &str = "acme/app";

/// A valid secret: 64 base64 characters decoding to 48 zero bytes.
pub const VALID_SECRET: &str =
    "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// The same payload in the URL-safe alphabet: decodes to 48 0xFF bytes.
pub const URL_SAFE_SECRET: &str =
    "________________________________________________________________";

/// Stable release payload: known assets plus one stray file.
pub const STABLE_RELEASE_JSON: &str = r#"{"tag_name":"latest","html_url":"https://github.com/acme/app/releases/tag/latest","body":"Release notes\n- Version: 1.2.3","published_at":"2024-01-02T03:04:05Z","assets":[{"name":"LinPlayer-Windows-Setup-x64.exe"},{"name":"LinPlayer-Android.apk"},{"name":"unknown-file.bin"}]}"#;

/// Nightly release payload with a single asset.
pub const NIGHTLY_RELEASE_JSON: &str = r#"{"tag_name":"nightly","html_url":"https://github.com/acme/app/releases/tag/nightly","body":"- Version: 1.3.0-nightly.20240105","published_at":"2024-01-05T00:30:00Z","assets":[{"name":"LinPlayer-Android-arm64-v8a.apk"}]}"#;

/// Build a stub gh script serving one JSON payload per tag.
///
/// The script matches on the endpoint argument (`$2`), prints the
/// payload for a listed tag, and answers every other tag with the same
/// stderr the real gh emits for a missing release. Payloads must not
/// contain single quotes.
pub fn gh_script(responses: &[(&str, &str)]) -> String {
    let mut script = String::from("#!/bin/sh\ncase \"$2\" in\n");
    for (tag, json) in responses {
        script.push_str(&format!("  */tags/{}) printf '%s' '{}' ;;\n", tag, json));
    }
    script.push_str("  *) printf '%s\\n' 'gh: Not Found (HTTP 404)' >&2; exit 1 ;;\nesac\n");
    script
}

/// Build a stub gh script that fails every call with `stderr`.
pub fn gh_failing_script(stderr: &str) -> String {
    format!("#!/bin/sh\nprintf '%s\\n' '{}' >&2\nexit 1\n", stderr)
}

/// Build a stub gh script that exits 0 but prints something that is
/// not JSON.
pub fn gh_garbage_script() -> String {
    "#!/bin/sh\nprintf '%s\\n' 'this is not json'\n".to_string()
}
