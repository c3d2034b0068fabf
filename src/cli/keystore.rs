//! Keystore command.
//!
//! Recovers the Android signing keystore from the
//! `ANDROID_KEYSTORE_BASE64` secret and writes it where the signing
//! step expects it.

use std::env;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::{constants, keystore};
use crate::error::Result;

/// Decode the keystore secret and write the binary keystore to `out`.
pub fn execute(out: &Path) -> Result<()> {
    let raw = Zeroizing::new(env::var(constants::KEYSTORE_ENV).unwrap_or_default());

    info!(var = constants::KEYSTORE_ENV, out = %out.display(), "recovering keystore");

    let decoded = keystore::decode(&raw)?;
    if decoded.stats.pad > 0 {
        // Encoders always emit padding; a padless value was stored mangled.
        output::warn(&format!(
            "secret was missing base64 padding (pad={})",
            decoded.stats.pad
        ));
    }
    keystore::write(out, &decoded.data)?;

    // The digest identifies the keystore across runs without revealing it.
    let digest = Sha256::digest(&*decoded.data);

    output::success(&format!("wrote keystore: {}", out.display()));
    output::kv("size", format!("{} bytes", decoded.data.len()));
    output::kv("sha256", format!("{:x}", digest));

    Ok(())
}
