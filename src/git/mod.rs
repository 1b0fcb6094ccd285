//! git command execution layer
//!
//! This module handles executing git commands and parsing their output.

pub mod constants;
/// Parser module (public for integration testing)
pub mod parser;
mod repository;
mod runner;

pub use repository::Repository;
pub use runner::GitRunner;

use std::io;
use thiserror::Error;

/// Errors that can occur when running git commands
#[derive(Error, Debug)]
pub enum GitError {
    /// The target path holds no `.git` metadata. Raised at handle
    /// construction, never deferred to first use.
    #[error("Not a git repository: {path}")]
    InvalidRepository { path: String },

    /// git exited non-zero; the message is its captured stderr, verbatim.
    #[error("{stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    /// Rejected before git is ever invoked.
    #[error("Commit message can not be empty")]
    EmptyCommitMessage,

    #[error("Failed to parse git output: {0}")]
    ParseError(String),

    #[error("git is not installed or not in PATH")]
    GitNotFound,

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}
