use thiserror::Error;

use crate::core::normalize::NormalizeStats;

/// Failures while recovering the signing keystore from its secret.
#[derive(Error, Debug)]
pub enum KeystoreError {
    #[error("ANDROID_KEYSTORE_BASE64 is empty or unset")]
    EmptySecret,

    #[error(
        "ANDROID_KEYSTORE_BASE64 contains non-base64 characters after normalization ({stats}); \
         re-generate the secret from the raw keystore bytes and paste the plain base64 string"
    )]
    InvalidCharacters { stats: NormalizeStats },

    #[error("failed to decode ANDROID_KEYSTORE_BASE64: {source} ({stats})")]
    Decode {
        source: base64::DecodeError,
        stats: NormalizeStats,
    },

    #[error("decoded keystore is unexpectedly small ({len} bytes); refusing to continue")]
    TooSmall { len: usize },

    #[error("failed to write keystore: {0}")]
    WriteFailed(#[source] std::io::Error),
}

/// Failures while querying releases or assembling the downloads page.
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("GitHub CLI (gh) not found; install it or run inside GitHub Actions")]
    GhNotFound,

    #[error("command failed: {command}: {stderr}")]
    GhFailed { command: String, stderr: String },

    #[error("failed to parse JSON from gh output: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("repository must look like owner/name, got {0:?}")]
    InvalidRepo(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Keystore(#[from] KeystoreError),

    #[error(transparent)]
    Release(#[from] ReleaseError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
