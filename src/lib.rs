//! rebase-todo - Parser and editing model for git interactive rebase
//!
//! A library for reading, editing, and writing the `git-rebase-todo`
//! instruction list that `git rebase -i` hands to its sequence editor.
//!
//! This library provides:
//! - [`model`]: Domain models (instructions, documents, commit summaries)
//! - [`todo`]: Tokenizer and line grammar for the todo format
//! - [`git`]: Git command execution for resolving references

pub mod git;
pub mod model;
pub mod todo;
