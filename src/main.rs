//! Slipway - release-pipeline helpers for CI.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use slipway::cli::output;
use slipway::cli::{execute, Cli};
use slipway::error::{Error, KeystoreError, ReleaseError};

fn main() {
    let cli = Cli::parse();

    // SLIPWAY_LOG wins over --verbose when both are present.
    let filter = EnvFilter::try_from_env("SLIPWAY_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("slipway=debug")
        } else {
            EnvFilter::new("slipway=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        // Pair the message with a next step where one exists.
        let error_msg = e.to_string();
        let suggestion = match &e {
            Error::Keystore(KeystoreError::EmptySecret) => {
                Some("set ANDROID_KEYSTORE_BASE64 to the base64 of the keystore file")
            }
            Error::Release(ReleaseError::GhNotFound) => {
                Some("install the GitHub CLI: https://cli.github.com")
            }
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
