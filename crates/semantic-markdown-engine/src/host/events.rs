use std::{fmt, ops::Range};

/// Handle of a document open in a [`Session`](super::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(pub(crate) u64);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc#{}", self.0)
    }
}

/// One replaced range within a document edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentChange {
    /// Replaced byte range, in offsets from before the edit.
    pub range: Range<usize>,
    /// Text now occupying the start of `range`.
    pub text: String,
}

/// A batch of changes applied to one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocumentChangeEvent {
    pub document: DocumentId,
    pub changes: Vec<ContentChange>,
}

/// Notifications the host queues for extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    TextChanged(TextDocumentChangeEvent),
    SelectionChanged {
        document: DocumentId,
        selection: Range<usize>,
    },
    /// The focused editor changed; `None` when no editor is focused.
    ActiveEditorChanged(Option<DocumentId>),
}

/// A key press delivered to the workbench.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Char(char),
}
