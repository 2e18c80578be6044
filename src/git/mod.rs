//! git command execution layer
//!
//! This module handles running git and parsing its output. Only the
//! display-side reference resolver lives here; the todo parse/serialize
//! path never shells out.

pub mod constants;
mod executor;
mod parser;

pub use executor::GitExecutor;

use std::io;
use thiserror::Error;

/// Errors that can occur when executing git commands
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("Failed to parse git output: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,
}
