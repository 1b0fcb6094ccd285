//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and formats.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// Directory marker that identifies a working copy
pub const GIT_DIR: &str = ".git";

/// Symbolic ref of the checked-out branch
pub const HEAD: &str = "HEAD";

/// git subcommands
pub mod commands {
    pub const ADD: &str = "add";
    pub const CHECKOUT: &str = "checkout";
    pub const COMMIT: &str = "commit";
    pub const DIFF: &str = "diff";
    pub const INIT: &str = "init";
    pub const LOG: &str = "log";
    pub const PULL: &str = "pull";
    pub const REMOTE: &str = "remote";
    pub const STATUS: &str = "status";
    pub const SYMBOLIC_REF: &str = "symbolic-ref";
}

/// git command flags
pub mod flags {
    /// Throw away local changes on checkout
    pub const FORCE: &str = "--force";
    /// Suppress progress and feedback messages
    pub const QUIET: &str = "--quiet";
    /// Commit message follows as the next argument
    pub const MESSAGE: &str = "-m";
    /// Skip merge commits in log output
    pub const NO_MERGES: &str = "--no-merges";
    /// Traverse history in commit timestamp order
    pub const DATE_ORDER: &str = "--date-order";
    /// The fixed log format the parser understands
    pub const FORMAT_MEDIUM: &str = "--format=medium";
    /// Limit log output; the count is appended (e.g. "--max-count=5")
    pub const MAX_COUNT: &str = "--max-count=";
    /// Emit log output oldest-first
    pub const REVERSE: &str = "--reverse";
    /// Never invoke external diff helpers
    pub const NO_EXT_DIFF: &str = "--no-ext-diff";
    /// Rebase instead of merge on pull
    pub const REBASE: &str = "--rebase";
    /// Short, script-friendly status output
    pub const SHORT_STATUS: &str = "-s";
    /// Shorten refs/heads/<name> to <name>
    pub const SHORT_REF: &str = "--short";
    /// Exit silently instead of printing an error on detached HEAD
    pub const QUIET_REF: &str = "-q";
}

/// Environment forced onto every invocation
pub mod env {
    /// Locale variable overridden so output text stays stable
    pub const LOCALE_VAR: &str = "LC_ALL";
    /// Locale under which git's date and diagnostic text is parseable
    pub const LOCALE: &str = "en_US.UTF-8";
}

/// Fixed output formats consumed by the parsers
pub mod format {
    /// Date layout in `--format=medium` log output,
    /// e.g. "Thu Jun 5 10:34:01 2014 +0200"
    pub const MEDIUM_DATE: &str = "%a %b %e %H:%M:%S %Y %z";
}
