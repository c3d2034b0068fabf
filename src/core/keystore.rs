//! Keystore recovery.
//!
//! Turns the normalized secret back into the binary signing keystore
//! the release workflow needs on disk.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::MIN_KEYSTORE_LEN;
use crate::core::normalize::{self, NormalizeStats};
use crate::error::{KeystoreError, Result};

/// A successfully recovered keystore.
pub struct Decoded {
    /// The binary keystore bytes.
    pub data: Zeroizing<Vec<u8>>,
    /// Character counts from the normalization pass.
    pub stats: NormalizeStats,
}

/// Normalize and strictly decode a raw keystore secret.
///
/// The decode is canonical: incorrect padding or stray bits reject the
/// whole secret rather than salvaging a prefix.
///
/// # Errors
///
/// `KeystoreError::EmptySecret` if `raw` is empty,
/// `KeystoreError::InvalidCharacters` or `KeystoreError::Decode` if the
/// cleaned text is not valid base64, and `KeystoreError::TooSmall` if
/// the decoded payload cannot plausibly be a keystore.
pub fn decode(raw: &str) -> Result<Decoded> {
    if raw.is_empty() {
        return Err(KeystoreError::EmptySecret.into());
    }

    let normalized = normalize::normalize(raw)?;
    let stats = normalized.stats();

    let data = STANDARD
        .decode(normalized.as_str())
        .map_err(|source| KeystoreError::Decode { source, stats })?;
    let data = Zeroizing::new(data);

    if data.len() < MIN_KEYSTORE_LEN {
        return Err(KeystoreError::TooSmall { len: data.len() }.into());
    }

    debug!(len = data.len(), "keystore decoded");
    Ok(Decoded { data, stats })
}

/// Write the decoded keystore, creating parent directories as needed.
pub fn write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(KeystoreError::WriteFailed)?;
    }
    fs::write(path, data).map_err(KeystoreError::WriteFailed)?;
    debug!(path = %path.display(), len = data.len(), "keystore written");
    Ok(())
}
