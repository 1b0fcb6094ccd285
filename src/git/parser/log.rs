//! Log output parser (git log --format=medium)

use chrono::DateTime;

use super::Parser;
use crate::git::GitError;
use crate::git::constants::format;
use crate::model::Commit;

/// Partial commit block carried across lines while scanning
///
/// A `commit` line fills `hash`, an `Author:` line fills `author`, and a
/// `Date:` line drains both into a finished record. Blocks are not required
/// to be contiguous: a `Date:` line seen without both fields pending is
/// skipped, leaving whatever is pending untouched.
#[derive(Debug, Default)]
struct PendingBlock {
    hash: Option<String>,
    author: Option<String>,
}

impl PendingBlock {
    /// Take both fields when the block is complete, leaving a partial block
    /// untouched otherwise
    fn finish(&mut self) -> Option<(String, String)> {
        if self.hash.is_none() || self.author.is_none() {
            return None;
        }
        self.hash.take().zip(self.author.take())
    }
}

impl Parser {
    /// Parse `git log --format=medium` output into a list of Commits
    ///
    /// Single forward pass over the lines. Keyword lines are recognized by
    /// their first single-space-separated token, so indented message body
    /// lines (which start with a space) never open or finalize a block.
    /// The summary is taken from the line two below the `Date:` line, or
    /// empty when the output ends before it. Output order matches input
    /// block order; no re-sorting happens here.
    ///
    /// Input with no `commit` blocks yields an empty list. An unparsable
    /// date fails the whole call; no partial list is returned.
    pub fn parse_log(output: &str) -> Result<Vec<Commit>, GitError> {
        let lines: Vec<&str> = output.lines().collect();
        let mut commits = Vec::new();
        let mut pending = PendingBlock::default();

        for (i, line) in lines.iter().enumerate() {
            match line.split(' ').next() {
                Some("commit") => {
                    // Second whitespace token; decorations after the hash
                    // (e.g. "(HEAD -> master)") are ignored
                    pending.hash = line.split_whitespace().nth(1).map(str::to_string);
                }
                Some("Author:") => {
                    pending.author = Some(rest_of_line(line));
                }
                Some("Date:") => {
                    if let Some((hash, author)) = pending.finish() {
                        let date_text = rest_of_line(line);
                        let timestamp =
                            DateTime::parse_from_str(&date_text, format::MEDIUM_DATE).map_err(
                                |e| GitError::ParseError(format!("invalid date {date_text:?}: {e}")),
                            )?;
                        let summary = lines.get(i + 2).map(|l| l.trim()).unwrap_or("");

                        commits.push(Commit::new(hash, author, timestamp, summary));
                    }
                }
                _ => {}
            }
        }

        Ok(commits)
    }
}

/// Everything after the first whitespace token, rejoined with single spaces
fn rest_of_line(line: &str) -> String {
    line.split_whitespace().skip(1).collect::<Vec<_>>().join(" ")
}
