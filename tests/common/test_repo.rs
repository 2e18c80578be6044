//! TestRepo helper for integration tests.
//!
//! Provides a temporary git repository for testing reference resolution.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// A temporary git repository for testing.
///
/// The repository is automatically cleaned up when the TestRepo is dropped.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new git repository in a temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");

        let output = Command::new("git")
            .args(["init", "-q"])
            .current_dir(dir.path())
            .output()
            .expect("Failed to execute git init");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!("git init failed: {}", stderr);
        }

        let repo = Self { dir };

        // A committer identity independent of the host configuration
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);

        repo
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Execute a git command in this repository.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to execute git command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "git {:?} failed with exit code {:?}:\n{}",
                args,
                output.status.code(),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Write a file and commit it, returning the abbreviated commit hash.
    pub fn commit_file(&self, name: &str, content: &str, message: &str) -> String {
        std::fs::write(self.path().join(name), content).expect("Failed to write file");
        self.git(&["add", name]);
        self.git(&["commit", "-q", "-m", message]);
        self.git(&["rev-parse", "--short", "HEAD"]).trim().to_string()
    }

    /// The full hash of HEAD.
    pub fn head_hash(&self) -> String {
        self.git(&["rev-parse", "HEAD"]).trim().to_string()
    }
}
