//! Test helpers for behavioral specifications.
//!
//! Provides small builders for running the svcguard CLI in isolated
//! temp directories.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use assert_cmd::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the svcguard binary, with the
/// environment variables it reads cleared.
pub fn svcguard_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("svcguard"));
    for var in [
        "SVCGUARD_CONFIG",
        "SVCGUARD_PATTERN",
        "SVCGUARD_LOG",
        "COLOR",
        "NO_COLOR",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// `svcguard check` running inside `dir`.
pub fn check_in(dir: &TempDir) -> Command {
    let mut cmd = svcguard_cmd();
    cmd.arg("check").current_dir(dir.path());
    cmd
}

/// Temp directory marked as a git root so config discovery stops inside it.
pub fn temp_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

/// Temp git root containing a svcguard.toml with the given content.
pub fn temp_dir_with_config(content: &str) -> TempDir {
    let dir = temp_dir();
    std::fs::write(dir.path().join("svcguard.toml"), content).unwrap();
    dir
}
