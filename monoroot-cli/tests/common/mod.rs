//! Common test utilities for CLI integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary monorepo layout for driving the binary.
///
/// The fixture holds the `TempDir` alive for the test's duration and
/// exposes canonicalized paths so stdout comparisons are stable even when
/// the temp directory itself sits behind a symlink.
pub struct TestRepo {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonicalized workspace top (contains the workspace manifest).
    pub root: PathBuf,
    /// Canonicalized nested member package directory.
    pub member: PathBuf,
}

#[allow(dead_code)]
impl TestRepo {
    /// Create a workspace manifest at the top and a plain member below it.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().join("repo");
        let member = root.join("packages").join("app");
        fs::create_dir_all(&member).unwrap();

        fs::write(
            root.join("package.json"),
            r#"{"name": "repo", "workspaces": ["packages/*"]}"#,
        )
        .unwrap();
        fs::write(
            member.join("package.json"),
            r#"{"name": "app", "version": "0.1.0"}"#,
        )
        .unwrap();

        let root = fs::canonicalize(&root).unwrap();
        let member = fs::canonicalize(&member).unwrap();
        Self {
            temp_dir,
            root,
            member,
        }
    }

    /// Create a plain directory tree with no workspace manifest anywhere
    /// below the temp dir.
    pub fn without_workspace() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().join("plain");
        let member = root.join("project");
        fs::create_dir_all(&member).unwrap();

        fs::write(
            member.join("package.json"),
            r#"{"name": "standalone", "version": "1.0.0"}"#,
        )
        .unwrap();

        let root = fs::canonicalize(&root).unwrap();
        let member = fs::canonicalize(&member).unwrap();
        Self {
            temp_dir,
            root,
            member,
        }
    }

    /// A command running inside the member directory with ambient
    /// configuration cleared.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("monoroot").expect("failed to find monoroot binary");
        cmd.current_dir(&self.member)
            .env_remove("MONOROOT_ROOT_DIR")
            .env_remove("MONOROOT_LOG_LEVEL")
            .env_remove("MONOROOT_ENV");
        cmd
    }
}
