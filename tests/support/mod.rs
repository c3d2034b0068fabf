//! Shared harness for the slipway integration tests.
//!
//! Every test drives the real binary inside a throwaway directory with
//! a fully controlled environment.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Scratch environment for a single test.
///
/// Each test gets its own working directory plus a bin directory that
/// becomes the child's entire PATH, so the `gh` the tool finds is
/// exactly the stub the test installed, or nothing at all. Children are
/// configured per command rather than through process-global state, so
/// tests run in parallel safely.
pub struct Test {
    /// Temporary directory the command runs in
    pub dir: TempDir,
    /// Temporary directory serving as the child's PATH
    pub bin: TempDir,
}

impl Test {
    /// Stand up a fresh environment with nothing installed.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let bin = TempDir::new().expect("failed to create temp bin dir");

        Self { dir, bin }
    }

    /// Install a stub `gh` executable into the bin directory.
    #[cfg(unix)]
    pub fn install_gh(&self, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin.path().join("gh");
        fs::write(&path, script).expect("failed to write stub gh");
        let mut perms = fs::metadata(&path)
            .expect("failed to stat stub gh")
            .permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("failed to chmod stub gh");
    }

    /// Absolute path of `rel` inside the test working directory.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Read a file from the test working directory as a string.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("failed to read file")
    }

    /// Read a file from the test working directory as bytes.
    pub fn read_bytes(&self, rel: &str) -> Vec<u8> {
        fs::read(self.path(rel)).expect("failed to read file")
    }
}
