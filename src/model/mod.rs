//! Data models for rebase-todo
//!
//! This module contains UI-independent data structures representing
//! rebase concepts like instructions, todo documents, and commit summaries.

mod basic;
mod document;
mod instruction;
mod summary;

pub use basic::BasicKind;
pub use document::TodoDocument;
pub use instruction::{FixupMessage, MergeOriginal, RebaseInstruction};
pub use summary::CommitSummary;
