//! Gitcmd - thin wrapper around the git command line
//!
//! Shells out to an installed `git` binary, runs commands against a working
//! copy, and parses the resulting text into typed values. It is not a VCS
//! abstraction: git itself must be on the host, and its output format is
//! treated as the external contract.
//!
//! This library provides:
//! - [`git`]: git command execution and output parsing
//! - [`model`]: typed values parsed from git output

pub mod git;
pub mod model;

pub use git::{GitError, GitRunner, Repository};
pub use model::Commit;
