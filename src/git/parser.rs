//! git output parser
//!
//! Parses the output of `git log -1 --format=%h%x09%s` into a
//! [`CommitSummary`].

use super::constants::special::FIELD_SEPARATOR;
use super::GitError;
use crate::model::CommitSummary;

/// Parse one summary record: `<abbreviated id> TAB <subject>`.
///
/// The subject may itself contain tabs, so only the first separator
/// splits; an empty subject (commit with no message) is valid.
pub(super) fn parse_summary(output: &str) -> Result<CommitSummary, GitError> {
    let line = output
        .lines()
        .next()
        .ok_or_else(|| GitError::ParseError("Empty summary output".to_string()))?;

    let (commit_id, subject) = line.split_once(FIELD_SEPARATOR).ok_or_else(|| {
        GitError::ParseError(format!("Expected TAB-separated summary, got: {line}"))
    })?;

    if commit_id.is_empty() {
        return Err(GitError::ParseError(format!(
            "Missing commit id in summary: {line}"
        )));
    }

    Ok(CommitSummary {
        commit_id: commit_id.to_string(),
        subject: subject.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_summary() {
        let summary = parse_summary("abc1234\tAdd the thing\n").unwrap();
        assert_eq!(summary.commit_id, "abc1234");
        assert_eq!(summary.subject, "Add the thing");
    }

    #[test]
    fn test_parse_summary_empty_subject() {
        let summary = parse_summary("abc1234\t\n").unwrap();
        assert_eq!(summary.commit_id, "abc1234");
        assert_eq!(summary.subject, "");
    }

    #[test]
    fn test_parse_summary_subject_with_tab() {
        // Only the first TAB splits; the rest belongs to the subject
        let summary = parse_summary("abc1234\tcol1\tcol2\n").unwrap();
        assert_eq!(summary.subject, "col1\tcol2");
    }

    #[test]
    fn test_parse_summary_rejects_garbage() {
        assert!(matches!(
            parse_summary(""),
            Err(GitError::ParseError(_))
        ));
        assert!(matches!(
            parse_summary("no separator here"),
            Err(GitError::ParseError(_))
        ));
        assert!(matches!(
            parse_summary("\tsubject without id"),
            Err(GitError::ParseError(_))
        ));
    }
}
