//! Rebase instruction data model
//!
//! One variant per operation in the git-rebase-todo format. The `Display`
//! impl renders the canonical text line for each variant and is the exact
//! inverse of [`crate::todo::parse_line`] for every constructible value.

use std::fmt;

/// How `fixup` treats the commit message of the folded commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FixupMessage {
    /// Plain `fixup`: discard this commit's message, keep the previous one
    #[default]
    Discard,
    /// `fixup -C`: keep only this commit's message
    Use,
    /// `fixup -c`: like `-C`, but open the editor
    UseAndEdit,
}

impl FixupMessage {
    /// The literal flag prefix rendered before the reference.
    ///
    /// Includes its own trailing space when non-empty, so rendering is
    /// always `"fixup {flag}{reference}"`.
    pub fn flag(self) -> &'static str {
        match self {
            FixupMessage::Discard => "",
            FixupMessage::Use => "-C ",
            FixupMessage::UseAndEdit => "-c ",
        }
    }

    /// Match a command-line flag token (`-C` or `-c`, exact case).
    ///
    /// Returns None for anything else, in which case the token is a
    /// reference and the message mode defaults to [`FixupMessage::Discard`].
    pub fn from_flag(token: &str) -> Option<Self> {
        match token {
            "-C" => Some(FixupMessage::Use),
            "-c" => Some(FixupMessage::UseAndEdit),
            _ => None,
        }
    }
}

/// The original merge commit referenced by `merge -C`/`-c`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergeOriginal {
    /// Reference to the original merge commit whose message is reused
    pub reference: String,
    /// True for `-c` (stop to reword the message), false for `-C`
    pub reword: bool,
}

impl MergeOriginal {
    /// The flag rendered before the reference (`-c` or `-C`).
    pub fn flag(&self) -> &'static str {
        if self.reword { "-c" } else { "-C" }
    }
}

/// One parsed line of a git-rebase-todo file.
///
/// References are opaque, case-sensitive strings to this model; no
/// abbreviation or object-id normalization happens here. Free-form
/// payloads (`Exec` command text, `Merge` oneline) are captured verbatim
/// from the source line and rendered back without re-escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RebaseInstruction {
    /// `p, pick <commit>` = use commit
    Pick { reference: String },

    /// `r, reword <commit>` = use commit, but edit the commit message
    Reword { reference: String },

    /// `e, edit <commit>` = use commit, but stop for amending
    Edit { reference: String },

    /// `s, squash <commit>` = use commit, but meld into previous commit
    Squash { reference: String },

    /// `f, fixup [-C | -c] <commit>` = like "squash" but keep only the
    /// previous commit's log message, unless `-C` is used, in which case
    /// keep only this commit's message; `-c` is same as `-C` but opens
    /// the editor
    Fixup {
        reference: String,
        message: FixupMessage,
    },

    /// `x, exec <command>` = run command (the rest of the line) using shell
    ///
    /// The command is everything the grammar sliced after the name token,
    /// so it is non-empty and starts with a non-whitespace character; an
    /// `Exec` built by hand with an empty or whitespace-leading command
    /// renders to a line the grammar will not read back.
    Exec { command: String },

    /// `b, break` = stop here (continue rebase later with `git rebase --continue`)
    Break,

    /// `d, drop <commit>` = remove commit
    Drop { reference: String },

    /// `l, label <label>` = label current HEAD with a name
    Label { name: String },

    /// `t, reset <label>` = reset HEAD to a label
    Reset { name: String },

    /// `m, merge [-C <commit> | -c <commit>] <label> [# <oneline>]`
    /// create a merge commit using the original merge commit's message
    /// (or the oneline, if no original merge commit was specified)
    ///
    /// Like the exec command text, a present oneline is non-empty and
    /// starts with a non-whitespace character; the grammar never produces
    /// `Some("")` (a bare `#` marker parses as no oneline at all).
    Merge {
        original: Option<MergeOriginal>,
        label: String,
        oneline: Option<String>,
    },
}

impl RebaseInstruction {
    /// The reference this instruction acts on, if it is a single-reference
    /// ("basic") instruction.
    pub fn reference(&self) -> Option<&str> {
        match self {
            RebaseInstruction::Pick { reference }
            | RebaseInstruction::Reword { reference }
            | RebaseInstruction::Edit { reference }
            | RebaseInstruction::Squash { reference }
            | RebaseInstruction::Fixup { reference, .. }
            | RebaseInstruction::Drop { reference } => Some(reference),
            RebaseInstruction::Exec { .. }
            | RebaseInstruction::Break
            | RebaseInstruction::Label { .. }
            | RebaseInstruction::Reset { .. }
            | RebaseInstruction::Merge { .. } => None,
        }
    }
}

impl fmt::Display for RebaseInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RebaseInstruction::Pick { reference } => write!(f, "pick {reference}"),
            RebaseInstruction::Reword { reference } => write!(f, "reword {reference}"),
            RebaseInstruction::Edit { reference } => write!(f, "edit {reference}"),
            RebaseInstruction::Squash { reference } => write!(f, "squash {reference}"),
            RebaseInstruction::Fixup { reference, message } => {
                write!(f, "fixup {}{reference}", message.flag())
            }
            RebaseInstruction::Exec { command } => write!(f, "exec {command}"),
            RebaseInstruction::Break => write!(f, "break"),
            RebaseInstruction::Drop { reference } => write!(f, "drop {reference}"),
            RebaseInstruction::Label { name } => write!(f, "label {name}"),
            RebaseInstruction::Reset { name } => write!(f, "reset {name}"),
            RebaseInstruction::Merge {
                original,
                label,
                oneline,
            } => {
                write!(f, "merge ")?;
                if let Some(original) = original {
                    write!(f, "{} {} ", original.flag(), original.reference)?;
                }
                write!(f, "{label}")?;
                if let Some(oneline) = oneline {
                    write!(f, " # {oneline}")?;
                }
                Ok(())
            }
        }
    }
}
