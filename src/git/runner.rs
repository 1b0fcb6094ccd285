//! git command runner
//!
//! Handles running git commands and capturing their output.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::GitError;
use super::constants::{self, env};

/// Runner for git commands against a single working copy
///
/// Arguments are passed as a vector of discrete tokens, never through a
/// shell, so no escaping of the repository path or user input is involved.
#[derive(Debug, Clone)]
pub struct GitRunner {
    /// Path to the working copy the commands operate against
    repo_path: PathBuf,
    /// Name or path of the git binary to invoke
    git_path: String,
}

impl GitRunner {
    /// Create a runner that invokes the default `git` binary
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self::with_git_path(repo_path, constants::GIT_COMMAND)
    }

    /// Create a runner that invokes a specific git binary
    pub fn with_git_path(repo_path: impl Into<PathBuf>, git_path: impl Into<String>) -> Self {
        Self {
            repo_path: repo_path.into(),
            git_path: git_path.into(),
        }
    }

    /// Path to the working copy this runner operates against
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// Name or path of the git binary this runner invokes
    pub fn git_path(&self) -> &str {
        &self.git_path
    }

    /// Run a git command with the given arguments
    ///
    /// The process runs with its working directory set to the repository
    /// path and `LC_ALL=en_US.UTF-8` forced, so date and diagnostic text
    /// keeps a parseable shape regardless of the host locale.
    ///
    /// Blocks until the process exits; no timeout, no retries. On a zero
    /// exit status returns captured stdout unmodified; on a non-zero exit
    /// status fails with captured stderr, verbatim.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let output = Command::new(&self.git_path)
            .env(env::LOCALE_VAR, env::LOCALE)
            .current_dir(&self.repo_path)
            .args(args)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    GitError::GitNotFound
                } else {
                    GitError::IoError(e)
                }
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }
}
