use xi_rope::Rope;

use super::span::Span;

/// A reference to a single line in the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The line text as a string, newline included.
    pub text: String,
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to preserve newline characters, which is important for
/// accurate span tracking during block parsing.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        let len = line.len();
        offset += len;
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}

/// Byte offsets of one line, as seen by the block tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMarks {
    /// Full physical line including its terminator.
    pub line: Span,
    /// Line content after leading spaces/tabs and before `\n` / `\r\n`.
    pub content: Span,
}

impl LineMarks {
    fn from_line_ref(lr: &LineRef) -> Self {
        let without_eol = lr.text.trim_end_matches('\n').trim_end_matches('\r');
        let indent = without_eol.len() - without_eol.trim_start_matches([' ', '\t']).len();
        Self {
            line: lr.span,
            content: Span {
                start: lr.span.start + indent,
                end: lr.span.start + without_eol.len(),
            },
        }
    }

    /// Number of indentation bytes before the content.
    #[must_use]
    pub fn indent(&self) -> usize {
        self.content.start - self.line.start
    }

    /// True when the line has no content besides whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.content.is_empty()
    }
}

/// Line-addressable view of a source buffer.
///
/// Built once per parse; every block rule addresses lines by index into this
/// table and slices the source with the recorded spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineTable {
    marks: Vec<LineMarks>,
}

impl LineTable {
    /// Builds the table from a rope.
    pub fn from_rope(rope: &Rope) -> Self {
        Self {
            marks: lines_with_spans(rope)
                .map(|lr| LineMarks::from_line_ref(&lr))
                .collect(),
        }
    }

    /// Builds the table from a string slice.
    pub fn new(src: &str) -> Self {
        Self::from_rope(&Rope::from(src))
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Offsets for `line`, or `None` past the end of the buffer.
    pub fn get(&self, line: usize) -> Option<LineMarks> {
        self.marks.get(line).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineMarks> {
        self.marks.iter()
    }
}
