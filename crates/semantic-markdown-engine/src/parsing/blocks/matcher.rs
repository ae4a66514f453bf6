//! Depth-tracking search for the line that closes a semantic block.
//!
//! Only re-openings of the *same* tag name count as nesting. Lines holding
//! other tags are inert, so `<A>`, `<B>`, `</A>`, `</B>` pairs `<A>` with the
//! third line.

use log::trace;

use crate::parsing::tags::{is_closing_tag_line, match_opening_tag};

use super::state::BlockState;

/// Line-addressable text, as the matcher sees it.
pub trait LineSource {
    /// Text of `line`; lines past the end read as empty.
    fn line_content(&self, line: usize) -> &str;
}

impl LineSource for BlockState<'_> {
    fn line_content(&self, line: usize) -> &str {
        self.line_text(line)
    }
}

impl LineSource for [&str] {
    fn line_content(&self, line: usize) -> &str {
        self.get(line).copied().unwrap_or("")
    }
}

/// Outcome of scanning for a closing tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// The block closes on `end_line`.
    Found { end_line: usize },
    /// The range ended with the block still open.
    NotFound,
}

impl MatchResult {
    pub fn found(self) -> bool {
        matches!(self, MatchResult::Found { .. })
    }

    pub fn end_line(self) -> Option<usize> {
        match self {
            MatchResult::Found { end_line } => Some(end_line),
            MatchResult::NotFound => None,
        }
    }
}

/// Finds the line closing the `name` block opened on `start_line`.
///
/// Scans `start_line + 1 .. end_line`. The depth starts at one, grows on every
/// opening tag line with the same name and shrinks on every `</name>` line.
/// The line that brings it back to zero is the match.
pub fn find_matching_close<L>(lines: &L, start_line: usize, end_line: usize, name: &str) -> MatchResult
where
    L: LineSource + ?Sized,
{
    let mut depth = 1usize;
    for line in start_line + 1..end_line {
        let text = lines.line_content(line);
        if match_opening_tag(text).is_some_and(|tag| tag.name == name) {
            depth += 1;
            trace!("<{name}> reopened on line {line}, depth {depth}");
        } else if is_closing_tag_line(text, name) {
            depth -= 1;
            trace!("</{name}> on line {line}, depth {depth}");
            if depth == 0 {
                return MatchResult::Found { end_line: line };
            }
        }
    }
    MatchResult::NotFound
}
