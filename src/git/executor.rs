//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::PathBuf;
use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;

use super::constants::{self, commands, errors, flags, special};
use super::parser;
use super::GitError;
use crate::model::CommitSummary;

/// Matches a plausible object-id prefix: hex only, at most 40 chars.
///
/// Anything else (branch names, revision expressions) is outside what a
/// todo line's reference column can name and resolves to nothing without
/// spawning git.
static HEX_REFERENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]+$").expect("Invalid hex reference regex"));

/// Executor for git commands
#[derive(Debug, Clone, Default)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    /// Run a git command with the given arguments
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new(constants::GIT_COMMAND);

        // Add repository path if specified
        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
        }

        cmd.args(args);

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            // Check for common error patterns
            if stderr.to_lowercase().contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Get the git version
    pub fn version(&self) -> Result<String, GitError> {
        let output = self.run(&[flags::VERSION])?;
        // Output format: "git version 2.43.0"
        let trimmed = output.trim();
        Ok(trimmed
            .strip_prefix(special::VERSION_PREFIX)
            .unwrap_or(trimmed)
            .to_string())
    }

    /// Resolve a todo-line reference to a one-line commit summary.
    ///
    /// Returns Ok(None) when the reference cannot name a commit: it is not
    /// a hex object-id prefix, or git reports an unknown/ambiguous
    /// revision. Errors are reserved for real failures (no git binary,
    /// not a repository, unparseable output).
    pub fn resolve(&self, reference: &str) -> Result<Option<CommitSummary>, GitError> {
        if !Self::is_candidate_reference(reference) {
            return Ok(None);
        }

        let output = self.run(&[
            commands::LOG,
            flags::MAX_COUNT,
            flags::SUMMARY_FORMAT,
            reference,
            flags::END_OF_REVISIONS,
        ]);

        match output {
            Ok(output) => parser::parse_summary(&output).map(Some),
            Err(GitError::CommandFailed { ref stderr, .. }) if is_unknown_revision(stderr) => {
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Whether a reference string could name an object at all.
    fn is_candidate_reference(reference: &str) -> bool {
        reference.len() <= special::MAX_REFERENCE_LEN && HEX_REFERENCE_REGEX.is_match(reference)
    }
}

/// Detect "the revision just doesn't exist" stderr patterns.
fn is_unknown_revision(stderr: &str) -> bool {
    let stderr = stderr.to_lowercase();
    stderr.contains(errors::UNKNOWN_REVISION)
        || stderr.contains(errors::BAD_REVISION)
        || stderr.contains(errors::BAD_OBJECT)
        || stderr.contains(errors::AMBIGUOUS_ARGUMENT)
}
