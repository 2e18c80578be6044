//! Commit summary data model

/// A resolved commit, as shown next to a todo line.
///
/// Produced by [`crate::git::GitExecutor::resolve`]; the parse/serialize
/// path never touches this.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitSummary {
    /// Abbreviated commit ID, as git chose to abbreviate it
    pub commit_id: String,

    /// First line of the commit message
    pub subject: String,
}

impl CommitSummary {
    /// Display string for the subject.
    pub fn display_subject(&self) -> &str {
        if self.subject.is_empty() {
            "(no commit message)"
        } else {
            &self.subject
        }
    }
}
