//! Data models for gitcmd
//!
//! Typed values parsed out of git's text output.

mod commit;

pub use commit::Commit;
