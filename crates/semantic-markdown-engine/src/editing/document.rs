use std::{borrow::Cow, fmt, ops::Range};

use xi_rope::{Rope, delta::DeltaElement};

use crate::editing::{Cmd, Patch, commands};

/// Language id of Markdown documents.
pub const MARKDOWN_LANGUAGE: &str = "markdown";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("document is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("offset {offset} is past the end of the document (length {len})")]
    OutOfBounds { offset: usize, len: usize },
    #[error("offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },
    #[error("range {start}..{end} ends before it starts")]
    InvalidRange { start: usize, end: usize },
    #[error("line {line} does not exist (document has {count} lines)")]
    LineOutOfRange { line: usize, count: usize },
}

/// A text document open in the editor.
///
/// ## Single Source of Truth (xi-rope buffer)
/// - **Lossless storage**: Entire document in one `xi_rope::Rope` buffer
/// - **Exact round-trip**: `to_bytes()` returns identical content to original
///
/// ## Command-Based Editing
/// - All changes flow through [`Cmd`], compiled to xi-rope deltas
/// - Selection positions transform with every edit
/// - The version counter increments once per applied command
///
/// All offsets are byte offsets into the UTF-8 text.
///
/// ```rust
/// # use semantic_markdown_engine::editing::{Cmd, Document};
/// let mut doc = Document::from_bytes(b"<b>").unwrap();
/// doc.set_selection(3..3).unwrap();
/// doc.apply(Cmd::InsertText { at: 3, text: "bold".into() }).unwrap();
///
/// assert_eq!(doc.text(), "<b>bold");
/// assert_eq!(doc.selection(), 7..7);
/// assert_eq!(doc.line_prefix(7).unwrap(), "<b>bold");
/// ```
#[derive(Clone)]
pub struct Document {
    /// xi-rope buffer containing the entire document
    pub(crate) buffer: Rope,
    /// Current selection/cursor position as byte offsets in buffer
    pub(crate) selection: Range<usize>,
    /// Version counter incremented on each edit (enables change detection)
    pub(crate) version: u64,
    pub(crate) language_id: String,
}

impl Document {
    /// Create a new Markdown document from raw bytes, cursor at the end.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocumentError> {
        let text = std::str::from_utf8(bytes)?;
        let buffer = Rope::from(text);
        let len = buffer.len();
        Ok(Self {
            buffer,
            selection: len..len,
            version: 0,
            language_id: MARKDOWN_LANGUAGE.to_string(),
        })
    }

    pub fn with_language_id(mut self, language_id: impl Into<String>) -> Self {
        self.language_id = language_id.into();
        self
    }

    /// Get the document's content as raw bytes (exact round-trip)
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buffer.to_string().into_bytes()
    }

    /// Apply a command, returning what changed.
    ///
    /// The command's range is validated against the current buffer first; a
    /// rejected command leaves the document untouched.
    pub fn apply(&mut self, cmd: Cmd) -> Result<Patch, DocumentError> {
        self.check_range(&cmd.range())?;

        let delta = commands::compile_command(self, &cmd);

        // Track inserted ranges for the patch
        let mut changed = Vec::new();
        let mut cursor = 0;
        for op in delta.els.iter() {
            match op {
                DeltaElement::Copy(from, to) => {
                    cursor += to - from;
                }
                DeltaElement::Insert(inserted) => {
                    let start = cursor;
                    let end = cursor + inserted.len();
                    changed.push(start..end);
                    cursor = end;
                }
            }
        }

        self.buffer = delta.apply(&self.buffer);

        let new_selection = commands::transform_selection_for_command(&self.selection, &cmd);
        self.selection = new_selection.clone();
        self.version += 1;

        Ok(Patch {
            changed,
            new_selection,
            version: self.version,
        })
    }

    /// Get the current selection range
    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// Set the selection range
    pub fn set_selection(&mut self, selection: Range<usize>) -> Result<(), DocumentError> {
        self.check_range(&selection)?;
        self.selection = selection;
        Ok(())
    }

    /// Get the current version
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    pub fn is_markdown(&self) -> bool {
        self.language_id == MARKDOWN_LANGUAGE
    }

    /// Get the current text content
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn rope(&self) -> &Rope {
        &self.buffer
    }

    /// Get the buffer length
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    /// Text of `range`.
    pub fn slice(&self, range: Range<usize>) -> Result<Cow<'_, str>, DocumentError> {
        self.check_range(&range)?;
        Ok(self.buffer.slice_to_cow(range))
    }

    /// Number of lines; a trailing newline starts one more (empty) line.
    pub fn line_count(&self) -> usize {
        self.buffer.line_of_offset(self.buffer.len()) + 1
    }

    /// Zero-based line containing `offset`.
    pub fn line_of_offset(&self, offset: usize) -> Result<usize, DocumentError> {
        self.check_offset(offset)?;
        Ok(self.buffer.line_of_offset(offset))
    }

    /// Byte offset where `line` starts.
    pub fn offset_of_line(&self, line: usize) -> Result<usize, DocumentError> {
        let count = self.line_count();
        if line >= count {
            return Err(DocumentError::LineOutOfRange { line, count });
        }
        Ok(self.buffer.offset_of_line(line))
    }

    /// Byte range of `line`'s text, line terminator excluded.
    pub fn line_range(&self, line: usize) -> Result<Range<usize>, DocumentError> {
        let start = self.offset_of_line(line)?;
        let next = if line + 1 < self.line_count() {
            self.buffer.offset_of_line(line + 1)
        } else {
            self.buffer.len()
        };
        let raw = self.buffer.slice_to_cow(start..next);
        let text = raw.trim_end_matches('\n').trim_end_matches('\r');
        Ok(start..start + text.len())
    }

    /// Text of `line`, line terminator excluded.
    pub fn line_text(&self, line: usize) -> Result<Cow<'_, str>, DocumentError> {
        let range = self.line_range(line)?;
        Ok(self.buffer.slice_to_cow(range))
    }

    /// Text from the start of `offset`'s line up to `offset`.
    pub fn line_prefix(&self, offset: usize) -> Result<Cow<'_, str>, DocumentError> {
        let line = self.line_of_offset(offset)?;
        let start = self.buffer.offset_of_line(line);
        self.slice(start..offset)
    }

    /// Text from `offset` to the end of its line, terminator excluded.
    pub fn line_suffix(&self, offset: usize) -> Result<Cow<'_, str>, DocumentError> {
        let line = self.line_of_offset(offset)?;
        let end = self.line_range(line)?.end.max(offset);
        self.slice(offset..end)
    }

    fn check_offset(&self, offset: usize) -> Result<(), DocumentError> {
        let len = self.buffer.len();
        if offset > len {
            return Err(DocumentError::OutOfBounds { offset, len });
        }
        if !self.buffer.is_codepoint_boundary(offset) {
            return Err(DocumentError::NotCharBoundary { offset });
        }
        Ok(())
    }

    fn check_range(&self, range: &Range<usize>) -> Result<(), DocumentError> {
        if range.start > range.end {
            return Err(DocumentError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
        self.check_offset(range.start)?;
        self.check_offset(range.end)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("text", &self.text())
            .field("selection", &self.selection)
            .field("version", &self.version)
            .field("language_id", &self.language_id)
            .finish()
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        // Compare buffer content as strings since Node doesn't implement PartialEq
        self.buffer.to_string() == other.buffer.to_string()
            && self.selection == other.selection
            && self.version == other.version
            && self.language_id == other.language_id
    }
}
