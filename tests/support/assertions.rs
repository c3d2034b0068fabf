//! Assertion helpers over raw process output.

use std::process::Output;

/// Assert the command exited successfully, dumping both streams if not.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed ({})\n--- stdout ---\n{}\n--- stderr ---\n{}",
        output.status,
        stdout(output),
        stderr(output)
    );
}

/// Assert the command exited with a failure status.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "command unexpectedly succeeded\n--- stdout ---\n{}",
        stdout(output)
    );
}

/// Lossy stdout of a finished command.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Lossy stderr of a finished command.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert stdout contains `expected`.
pub fn assert_stdout_contains(output: &Output, expected: &str) {
    let out = stdout(output);
    assert!(
        out.contains(expected),
        "expected stdout to contain {:?}\n--- stdout ---\n{}",
        expected,
        out
    );
}

/// Assert stderr contains `expected`.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "expected stderr to contain {:?}\n--- stderr ---\n{}",
        expected,
        err
    );
}

/// Assert stdout does not contain `excluded`.
pub fn assert_stdout_excludes(output: &Output, excluded: &str) {
    let out = stdout(output);
    assert!(
        !out.contains(excluded),
        "stdout must not contain {:?}\n--- stdout ---\n{}",
        excluded,
        out
    );
}

/// Assert stderr does not contain `excluded`.
pub fn assert_stderr_excludes(output: &Output, excluded: &str) {
    let err = stderr(output);
    assert!(
        !err.contains(excluded),
        "stderr must not contain {:?}\n--- stderr ---\n{}",
        excluded,
        err
    );
}
