//! Line grammar for the git-rebase-todo format
//!
//! One recognizer per instruction kind. Each recognizer checks the command
//! name (long form or its documented single-letter alias) and the argument
//! count, then builds the instruction. `parse_line` folds the recognizers
//! in a fixed order with first-success semantics, so adding an instruction
//! kind is a one-line insertion into [`RECOGNIZERS`].


use std::ops::RangeInclusive;

use super::tokenizer::{Token, tokenize};
use crate::model::{FixupMessage, MergeOriginal, RebaseInstruction};

/// A recognizer for one instruction kind.
///
/// Gets the token list and the original line (for verbatim rest-of-line
/// slicing). A None result means "not this kind, try the next one".
type Recognizer = fn(&[Token<'_>], &str) -> Option<RebaseInstruction>;

/// All recognizers, tried in order; the first success wins.
const RECOGNIZERS: &[Recognizer] = &[
    pick, reword, edit, squash, fixup, exec, break_, drop, label, reset, merge,
];

/// Parse one line of a todo file.
///
/// Returns None for blank lines, comments (first non-whitespace character
/// is `#`), and lines no recognizer understands. Unrecognized lines are
/// dropped silently: the format is hand-edited, and refusing to parse a
/// stray line would lose the rest of the script.
pub fn parse_line(line: &str) -> Option<RebaseInstruction> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let tokens = tokenize(line);
    RECOGNIZERS
        .iter()
        .find_map(|recognize| recognize(&tokens, line))
}

/// Match the command name and argument count, returning the argument
/// tokens on success.
fn arguments<'a, 'b>(
    tokens: &'b [Token<'a>],
    long: &str,
    short: &str,
    arity: RangeInclusive<usize>,
) -> Option<&'b [Token<'a>]> {
    let (name, args) = tokens.split_first()?;
    if name.value != long && name.value != short {
        return None;
    }
    if !arity.contains(&args.len()) {
        return None;
    }
    Some(args)
}

/// Recognize a command whose first argument is its reference (or label).
///
/// Anything after that argument is the commit subject git appends for the
/// user's benefit; it is ignored, not an error.
fn single_reference(
    tokens: &[Token<'_>],
    long: &str,
    short: &str,
    build: fn(String) -> RebaseInstruction,
) -> Option<RebaseInstruction> {
    arguments(tokens, long, short, 1..=usize::MAX).map(|args| build(args[0].value.to_string()))
}

fn pick(tokens: &[Token<'_>], _line: &str) -> Option<RebaseInstruction> {
    single_reference(tokens, "pick", "p", |reference| RebaseInstruction::Pick {
        reference,
    })
}

fn reword(tokens: &[Token<'_>], _line: &str) -> Option<RebaseInstruction> {
    single_reference(tokens, "reword", "r", |reference| {
        RebaseInstruction::Reword { reference }
    })
}

fn edit(tokens: &[Token<'_>], _line: &str) -> Option<RebaseInstruction> {
    single_reference(tokens, "edit", "e", |reference| RebaseInstruction::Edit {
        reference,
    })
}

fn squash(tokens: &[Token<'_>], _line: &str) -> Option<RebaseInstruction> {
    single_reference(tokens, "squash", "s", |reference| {
        RebaseInstruction::Squash { reference }
    })
}

/// `fixup [-C | -c] <commit>`
///
/// The first argument is a message-mode flag only when it matches `-C` or
/// `-c` exactly; anything else is the reference itself with the default
/// (discard) mode. A lone flag with no reference is no match. Trailing
/// subject text after the reference is ignored.
fn fixup(tokens: &[Token<'_>], _line: &str) -> Option<RebaseInstruction> {
    let args = arguments(tokens, "fixup", "f", 1..=usize::MAX)?;
    match FixupMessage::from_flag(args[0].value) {
        Some(message) => {
            let reference = args.get(1)?;
            Some(RebaseInstruction::Fixup {
                reference: reference.value.to_string(),
                message,
            })
        }
        None => Some(RebaseInstruction::Fixup {
            reference: args[0].value.to_string(),
            message: FixupMessage::Discard,
        }),
    }
}

/// `exec <command>` - the command is the rest of the line, verbatim.
fn exec(tokens: &[Token<'_>], line: &str) -> Option<RebaseInstruction> {
    let args = arguments(tokens, "exec", "x", 1..=usize::MAX)?;
    Some(RebaseInstruction::Exec {
        command: args[0].rest_of(line).to_string(),
    })
}

fn break_(tokens: &[Token<'_>], _line: &str) -> Option<RebaseInstruction> {
    arguments(tokens, "break", "b", 0..=0).map(|_| RebaseInstruction::Break)
}

fn drop(tokens: &[Token<'_>], _line: &str) -> Option<RebaseInstruction> {
    single_reference(tokens, "drop", "d", |reference| RebaseInstruction::Drop {
        reference,
    })
}

fn label(tokens: &[Token<'_>], _line: &str) -> Option<RebaseInstruction> {
    single_reference(tokens, "label", "l", |name| RebaseInstruction::Label {
        name,
    })
}

fn reset(tokens: &[Token<'_>], _line: &str) -> Option<RebaseInstruction> {
    single_reference(tokens, "reset", "t", |name| RebaseInstruction::Reset {
        name,
    })
}

/// `merge [-C <commit> | -c <commit>] <label> [# <oneline>]`
///
/// The most irregular grammar in the format:
/// - one argument: just the label;
/// - flag form: `-C`/`-c` (matched case-insensitively, lowercase means
///   reword), original commit, label, and an optional oneline sliced
///   verbatim from the fifth argument onward (the fourth is the `#`
///   marker);
/// - no flag but more than two arguments: label plus oneline sliced from
///   the third argument;
/// - exactly two arguments without a flag: malformed, no match.
fn merge(tokens: &[Token<'_>], line: &str) -> Option<RebaseInstruction> {
    let args = arguments(tokens, "merge", "m", 1..=usize::MAX)?;

    if args.len() == 1 {
        return Some(RebaseInstruction::Merge {
            original: None,
            label: args[0].value.to_string(),
            oneline: None,
        });
    }

    if args[0].value.eq_ignore_ascii_case("-c") {
        if args.len() < 3 {
            return None;
        }
        return Some(RebaseInstruction::Merge {
            original: Some(MergeOriginal {
                reference: args[1].value.to_string(),
                reword: args[0].value == "-c",
            }),
            label: args[2].value.to_string(),
            oneline: (args.len() >= 5).then(|| args[4].rest_of(line).to_string()),
        });
    }

    if args.len() > 2 {
        return Some(RebaseInstruction::Merge {
            original: None,
            label: args[0].value.to_string(),
            oneline: Some(args[2].rest_of(line).to_string()),
        });
    }

    None
}
