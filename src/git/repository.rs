//! Repository handle
//!
//! One method per git operation. Every method composes an argument vector,
//! delegates to [`GitRunner`], and trims output only where the operation
//! returns a scalar.

use std::path::{Path, PathBuf};

use super::GitError;
use super::constants::{self, commands, flags};
use super::parser::Parser;
use super::runner::GitRunner;
use crate::model::Commit;

/// Handle to a git working copy
///
/// Construction validates that the path holds `.git` metadata; the path and
/// the git binary are fixed for the handle's lifetime. All operations block
/// until git exits and surface git's own stderr on failure.
#[derive(Debug, Clone)]
pub struct Repository {
    runner: GitRunner,
}

impl Repository {
    /// Open a working copy using the default `git` binary
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, GitError> {
        Self::with_git_path(path, constants::GIT_COMMAND)
    }

    /// Open a working copy using a specific git binary
    pub fn with_git_path(
        path: impl Into<PathBuf>,
        git_path: impl Into<String>,
    ) -> Result<Self, GitError> {
        let path = path.into();
        if !path.join(constants::GIT_DIR).exists() {
            return Err(GitError::InvalidRepository {
                path: path.display().to_string(),
            });
        }

        Ok(Self {
            runner: GitRunner::with_git_path(path, git_path),
        })
    }

    /// Initialise a repository in a directory that is not one yet and
    /// return a handle to it
    pub fn init_at(path: impl Into<PathBuf>) -> Result<Self, GitError> {
        let runner = GitRunner::new(path);
        runner.run(&[commands::INIT])?;

        Ok(Self { runner })
    }

    /// Path to the working copy
    pub fn path(&self) -> &Path {
        self.runner.repo_path()
    }

    /// Name or path of the git binary in use
    pub fn git_path(&self) -> &str {
        self.runner.git_path()
    }

    /// Stage file(s) for the next commit
    pub fn add(&self, targets: &[&str]) -> Result<String, GitError> {
        let mut args = vec![commands::ADD];
        args.extend_from_slice(targets);

        self.runner.run(&args)
    }

    /// Check out a revision, discarding local changes
    pub fn checkout(&self, revision: &str) -> Result<String, GitError> {
        self.runner
            .run(&[commands::CHECKOUT, flags::FORCE, flags::QUIET, revision])
    }

    /// Commit file(s) and return the resulting commit record
    ///
    /// An empty or whitespace-only message is rejected before git is ever
    /// invoked.
    pub fn commit(&self, targets: &[&str], message: &str) -> Result<Commit, GitError> {
        if message.trim().is_empty() {
            return Err(GitError::EmptyCommitMessage);
        }

        let mut args = vec![commands::COMMIT];
        args.extend_from_slice(targets);
        args.push(flags::MESSAGE);
        args.push(message);
        self.runner.run(&args)?;

        self.commits(Some(1), false)?
            .into_iter()
            .next()
            .ok_or_else(|| GitError::ParseError("no commit found after committing".to_string()))
    }

    /// Return repository commits, newest-first by default
    ///
    /// `limit` caps the listing via `--max-count`; `reverse` asks git itself
    /// for oldest-first output. The parser preserves whatever order git
    /// emitted.
    pub fn commits(&self, limit: Option<usize>, reverse: bool) -> Result<Vec<Commit>, GitError> {
        let max_count;
        let mut args = vec![
            commands::LOG,
            flags::NO_MERGES,
            flags::DATE_ORDER,
            flags::FORMAT_MEDIUM,
        ];
        if let Some(limit) = limit {
            max_count = format!("{}{limit}", flags::MAX_COUNT);
            args.push(&max_count);
        }
        if reverse {
            args.push(flags::REVERSE);
        }

        let output = self.runner.run(&args)?;
        Parser::parse_log(&output)
    }

    /// Name of the currently checked-out branch
    pub fn current_branch(&self) -> Result<String, GitError> {
        let output = self.runner.run(&[
            commands::SYMBOLIC_REF,
            flags::SHORT_REF,
            flags::QUIET_REF,
            constants::HEAD,
        ])?;

        Ok(output.trim().to_string())
    }

    /// Diff between two branches or commits, untrimmed
    pub fn diff(&self, from: &str, to: &str) -> Result<String, GitError> {
        self.runner.run(&[commands::DIFF, flags::NO_EXT_DIFF, from, to])
    }

    /// Reinitialise the repository in place
    pub fn init(&self) -> Result<String, GitError> {
        self.runner.run(&[commands::INIT])
    }

    /// Whether the working copy has no uncommitted or untracked changes
    pub fn is_clean(&self) -> Result<bool, GitError> {
        let output = self.runner.run(&[commands::STATUS, flags::SHORT_STATUS])?;

        Ok(output.is_empty())
    }

    /// Pull a branch from a remote
    pub fn pull(&self, remote: &str, branch: &str, rebase: bool) -> Result<String, GitError> {
        let mut args = vec![commands::PULL];
        if rebase {
            args.push(flags::REBASE);
        }
        args.push(remote);
        args.push(branch);

        self.runner.run(&args)
    }

    /// Run a `git remote` subcommand, trimmed
    ///
    /// Pass `&[]` to list remotes, `&["-v"]` for the verbose listing, or
    /// `&["add", name, url]` and friends to manage them.
    pub fn remote(&self, args: &[&str]) -> Result<String, GitError> {
        let mut full = vec![commands::REMOTE];
        full.extend_from_slice(args);

        Ok(self.runner.run(&full)?.trim().to_string())
    }
}
