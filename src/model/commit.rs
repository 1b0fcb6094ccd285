//! Commit (log entry) data model

use std::fmt;

use chrono::{DateTime, FixedOffset};

/// A single commit parsed from `git log` output
///
/// Fully formed on construction and immutable afterwards; the parser never
/// hands out a partially populated record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Full hexadecimal object id
    pub hash: String,

    /// Author exactly as git printed it, e.g. "Jane Doe <jane@example.com>"
    pub author: String,

    /// Author date, carrying its UTC offset
    pub timestamp: DateTime<FixedOffset>,

    /// First line of the commit message, trimmed; may be empty
    pub summary: String,
}

impl Commit {
    /// Create a commit record
    pub fn new(
        hash: impl Into<String>,
        author: impl Into<String>,
        timestamp: DateTime<FixedOffset>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            hash: hash.into(),
            author: author.into(),
            timestamp,
            summary: summary.into(),
        }
    }

    /// Abbreviated object id for display
    pub fn short_hash(&self) -> &str {
        self.hash.get(..7).unwrap_or(&self.hash)
    }
}

impl fmt::Display for Commit {
    /// Render in the shape of a medium-format log block
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "commit {}\nAuthor: {}\nDate:   {}\n\n    {}\n",
            self.hash,
            self.author,
            self.timestamp.to_rfc2822(),
            self.summary
        )
    }
}
