//! git-rebase-todo text format layer
//!
//! This module turns raw todo text into [`crate::model::RebaseInstruction`]
//! values and back. Parsing is tolerant by design: blank lines, comments,
//! and lines no recognizer understands are silently skipped, never errors,
//! so a hand-edited script can always be read.

pub mod parser;
mod tokenizer;

pub use parser::parse_line;
pub use tokenizer::{Token, tokenize};
