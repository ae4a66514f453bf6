use std::{borrow::Cow, ops::Range};

use xi_rope::{Delta, Rope, RopeInfo, delta::Builder};

use crate::editing::{Document, Snippet};

/// Commands that can be applied to the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    InsertText { at: usize, text: String },
    DeleteRange { range: Range<usize> },
    ReplaceRange { range: Range<usize>, text: String },
    /// Replaces `range` with the snippet text and puts the cursor on its
    /// placeholder.
    InsertSnippet { range: Range<usize>, snippet: Snippet },
}

impl Cmd {
    /// The pre-edit byte range this command replaces.
    pub fn range(&self) -> Range<usize> {
        match self {
            Cmd::InsertText { at, .. } => *at..*at,
            Cmd::DeleteRange { range }
            | Cmd::ReplaceRange { range, .. }
            | Cmd::InsertSnippet { range, .. } => range.clone(),
        }
    }

    /// The text this command puts in place of [`Cmd::range`].
    pub fn inserted_text(&self) -> Cow<'_, str> {
        match self {
            Cmd::InsertText { text, .. } | Cmd::ReplaceRange { text, .. } => Cow::Borrowed(text),
            Cmd::DeleteRange { .. } => Cow::Borrowed(""),
            Cmd::InsertSnippet { snippet, .. } => Cow::Owned(snippet.text()),
        }
    }
}

/// Compile a command into a delta
pub(crate) fn compile_command(doc: &Document, cmd: &Cmd) -> Delta<RopeInfo> {
    let mut builder = Builder::new(doc.len());
    let range = cmd.range();
    match cmd {
        Cmd::DeleteRange { .. } => builder.delete(range),
        _ => builder.replace(range, Rope::from(cmd.inserted_text().as_ref())),
    }
    builder.build()
}

/// Transform selection based on the command being applied
pub(crate) fn transform_selection_for_command(range: &Range<usize>, cmd: &Cmd) -> Range<usize> {
    let edit = cmd.range();
    if let Cmd::InsertSnippet { snippet, .. } = cmd {
        let cursor = edit.start + snippet.cursor_offset();
        return cursor..cursor;
    }
    let inserted = cmd.inserted_text().len();
    // A selection the edit overwrites collapses to the end of the new text.
    if !range.is_empty() && edit.start <= range.start && range.end <= edit.end {
        let cursor = edit.start + inserted;
        return cursor..cursor;
    }
    map_offset(range.start, &edit, inserted)..map_offset(range.end, &edit, inserted)
}

/// Where `pos` ends up after `edit` is replaced by `inserted` bytes.
///
/// Offsets before the edit stay put, offsets after it shift by the net
/// change, and offsets inside it land at the end of the inserted text. An
/// insertion exactly at `pos` pushes it right, the way typing moves a caret.
fn map_offset(pos: usize, edit: &Range<usize>, inserted: usize) -> usize {
    if pos < edit.start || (pos == edit.start && !edit.is_empty()) {
        pos
    } else if pos >= edit.end {
        pos - edit.len() + inserted
    } else {
        edit.start + inserted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::DocumentError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_text_at_beginning() {
        let mut doc = Document::from_bytes(b"Hello World").unwrap();
        doc.set_selection(0..0).unwrap();

        let patch = doc
            .apply(Cmd::InsertText {
                at: 0,
                text: "Start: ".to_string(),
            })
            .unwrap();

        assert_eq!(doc.text(), "Start: Hello World");
        assert_eq!(patch.version, 1);
        assert_eq!(patch.changed, vec![0..7]);
        assert_eq!(patch.new_selection, 7..7);
    }

    #[test]
    fn test_insert_text_in_middle() {
        let mut doc = Document::from_bytes(b"Hello World").unwrap();
        doc.set_selection(5..5).unwrap();

        let patch = doc
            .apply(Cmd::InsertText {
                at: 5,
                text: " Beautiful".to_string(),
            })
            .unwrap();

        assert_eq!(doc.text(), "Hello Beautiful World");
        assert_eq!(patch.changed, vec![5..15]);
        assert_eq!(patch.new_selection, 15..15);
    }

    #[test]
    fn test_insert_text_after_selection_leaves_it() {
        let mut doc = Document::from_bytes(b"Hello").unwrap();
        doc.set_selection(1..2).unwrap();

        let patch = doc
            .apply(Cmd::InsertText {
                at: 5,
                text: " World".to_string(),
            })
            .unwrap();

        assert_eq!(doc.text(), "Hello World");
        assert_eq!(patch.changed, vec![5..11]);
        assert_eq!(patch.new_selection, 1..2);
    }

    #[test]
    fn test_delete_range_single_char() {
        let mut doc = Document::from_bytes(b"Hello World").unwrap();
        doc.set_selection(5..5).unwrap();

        let patch = doc.apply(Cmd::DeleteRange { range: 5..6 }).unwrap();

        assert_eq!(doc.text(), "HelloWorld");
        assert_eq!(patch.new_selection, 5..5);
        assert!(patch.changed.is_empty());
        assert_eq!(patch.version, 1);
    }

    #[test]
    fn test_delete_range_multiple_chars() {
        let mut doc = Document::from_bytes(b"Hello World").unwrap();
        doc.set_selection(11..11).unwrap();

        let patch = doc.apply(Cmd::DeleteRange { range: 5..11 }).unwrap();

        assert_eq!(doc.text(), "Hello");
        assert_eq!(patch.new_selection, 5..5);
    }

    #[test]
    fn test_replace_selection_collapses_to_end_of_text() {
        let mut doc = Document::from_bytes(b"Hello World").unwrap();
        doc.set_selection(6..11).unwrap();

        let patch = doc
            .apply(Cmd::ReplaceRange {
                range: 6..11,
                text: "Rust".to_string(),
            })
            .unwrap();

        assert_eq!(doc.text(), "Hello Rust");
        assert_eq!(patch.changed, vec![6..10]);
        assert_eq!(patch.new_selection, 10..10);
    }

    #[test]
    fn test_replace_before_selection_shifts_it() {
        let mut doc = Document::from_bytes(b"abc def").unwrap();
        doc.set_selection(4..7).unwrap();

        doc.apply(Cmd::ReplaceRange {
            range: 0..3,
            text: "x".to_string(),
        })
        .unwrap();

        assert_eq!(doc.text(), "x def");
        assert_eq!(doc.selection(), 2..5);
    }

    #[test]
    fn test_insert_snippet_places_cursor_at_placeholder() {
        let mut doc = Document::from_bytes(b"<b></b>").unwrap();
        doc.set_selection(3..3).unwrap();

        let patch = doc
            .apply(Cmd::InsertSnippet {
                range: 3..3,
                snippet: Snippet::new("\n", "\n"),
            })
            .unwrap();

        assert_eq!(doc.text(), "<b>\n\n</b>");
        assert_eq!(patch.new_selection, 4..4);
        assert_eq!(patch.changed, vec![3..5]);
    }

    #[test]
    fn test_out_of_bounds_is_an_error() {
        let mut doc = Document::from_bytes(b"abc").unwrap();
        let err = doc
            .apply(Cmd::InsertText {
                at: 4,
                text: "x".to_string(),
            })
            .unwrap_err();
        assert_eq!(err, DocumentError::OutOfBounds { offset: 4, len: 3 });
        assert_eq!(doc.version(), 0);
    }

    #[test]
    fn test_mid_character_offset_is_an_error() {
        let mut doc = Document::from_bytes("é".as_bytes()).unwrap();
        let err = doc.apply(Cmd::DeleteRange { range: 0..1 }).unwrap_err();
        assert_eq!(err, DocumentError::NotCharBoundary { offset: 1 });
        assert_eq!(doc.text(), "é");
    }

    #[test]
    fn test_reversed_range_is_an_error() {
        let mut doc = Document::from_bytes(b"abc").unwrap();
        #[allow(clippy::reversed_empty_ranges)]
        let err = doc.apply(Cmd::DeleteRange { range: 2..1 }).unwrap_err();
        assert_eq!(err, DocumentError::InvalidRange { start: 2, end: 1 });
    }
}
