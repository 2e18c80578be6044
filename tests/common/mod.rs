//! Common test utilities for integration tests.
//!
//! This module provides helpers for creating and managing temporary
//! git repositories in tests.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(unused_macros)]

/// Skip the current test when git is not installed.
macro_rules! skip_if_no_git {
    () => {
        if std::process::Command::new("git")
            .arg("--version")
            .output()
            .is_err()
        {
            eprintln!("git not found in PATH; skipping test");
            return;
        }
    };
}

pub mod test_repo;

pub use test_repo::TestRepo;
