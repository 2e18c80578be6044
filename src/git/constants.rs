//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and special values.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// git subcommands
pub mod commands {
    pub const LOG: &str = "log";
}

/// git command flags
pub mod flags {
    /// Run as if started in the given directory (global flag)
    pub const REPO_PATH: &str = "-C";
    /// Limit log to a single commit
    pub const MAX_COUNT: &str = "-1";
    /// Log output template: abbreviated hash, TAB, subject
    pub const SUMMARY_FORMAT: &str = "--format=%h%x09%s";
    /// Terminates revision arguments so a reference is never read as a path
    pub const END_OF_REVISIONS: &str = "--";
    /// Show version
    pub const VERSION: &str = "--version";
}

/// Special git values
pub mod special {
    /// Field separator emitted by `%x09` in the summary format
    pub const FIELD_SEPARATOR: char = '\t';

    /// Version output prefix (e.g., "git version 2.43.0")
    pub const VERSION_PREFIX: &str = "git version ";

    /// Longest possible hex object id (SHA-1), in hex characters
    pub const MAX_REFERENCE_LEN: usize = 40;
}

/// Error detection patterns in git output
pub mod errors {
    /// Pattern indicating not a git repository
    pub const NOT_A_REPO: &str = "not a git repository";

    /// Patterns indicating the reference simply does not resolve
    pub const UNKNOWN_REVISION: &str = "unknown revision";
    pub const BAD_REVISION: &str = "bad revision";
    /// Full-length ids that name nothing ("fatal: bad object <sha>")
    pub const BAD_OBJECT: &str = "bad object";
    pub const AMBIGUOUS_ARGUMENT: &str = "ambiguous argument";
}
