use std::{
    collections::{BTreeMap, HashMap, VecDeque},
    ops::Range,
};

use log::trace;

use crate::editing::{Cmd, Document, DocumentError, Patch, Snippet};

use super::events::{ContentChange, DocumentId, HostEvent, Key, TextDocumentChangeEvent};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("no open document {0}")]
    UnknownDocument(DocumentId),
    #[error("no command named `{0}`")]
    UnknownCommand(String),
    #[error("command `{0}` is already registered")]
    DuplicateCommand(String),
    #[error("no active editor")]
    NoActiveEditor,
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// A registered command. Commands run against the whole session.
pub type CommandFn = fn(&mut Session) -> Result<(), HostError>;

/// Routes a key to a command while the `when` clause holds.
///
/// `when` is a context key name, optionally negated with `!`; `None` always
/// holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub key: Key,
    pub command: String,
    pub when: Option<String>,
}

/// Editor state shared between the host and its extensions.
///
/// Every mutation that an extension could observe queues a [`HostEvent`];
/// nothing is dispatched until the owner drains the queue with
/// [`Session::next_event`].
#[derive(Debug, Default)]
pub struct Session {
    documents: BTreeMap<DocumentId, Document>,
    next_id: u64,
    active: Option<DocumentId>,
    context: HashMap<String, bool>,
    commands: HashMap<String, CommandFn>,
    keybindings: Vec<Keybinding>,
    events: VecDeque<HostEvent>,
}

impl Session {
    /// Name of the built-in command that types text into the active editor.
    pub const TYPE_COMMAND: &'static str = "type";

    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document without focusing it.
    pub fn open(&mut self, document: Document) -> DocumentId {
        let id = DocumentId(self.next_id);
        self.next_id += 1;
        self.documents.insert(id, document);
        id
    }

    /// Focuses the editor for `id`.
    pub fn show(&mut self, id: DocumentId) -> Result<(), HostError> {
        self.document(id)?;
        self.active = Some(id);
        self.events.push_back(HostEvent::ActiveEditorChanged(Some(id)));
        Ok(())
    }

    /// Leaves no editor focused.
    pub fn close_editor(&mut self) {
        self.active = None;
        self.events.push_back(HostEvent::ActiveEditorChanged(None));
    }

    /// Removes a document, unfocusing it first when it is active.
    pub fn close(&mut self, id: DocumentId) -> Result<Document, HostError> {
        let document = self
            .documents
            .remove(&id)
            .ok_or(HostError::UnknownDocument(id))?;
        if self.active == Some(id) {
            self.close_editor();
        }
        Ok(document)
    }

    pub fn document(&self, id: DocumentId) -> Result<&Document, HostError> {
        self.documents.get(&id).ok_or(HostError::UnknownDocument(id))
    }

    pub fn active_id(&self) -> Option<DocumentId> {
        self.active
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.active.and_then(|id| self.documents.get(&id))
    }

    /// Moves the active editor's selection.
    pub fn set_selection(&mut self, selection: Range<usize>) -> Result<(), HostError> {
        let id = self.active.ok_or(HostError::NoActiveEditor)?;
        let document = self
            .documents
            .get_mut(&id)
            .ok_or(HostError::UnknownDocument(id))?;
        document.set_selection(selection.clone())?;
        self.events.push_back(HostEvent::SelectionChanged {
            document: id,
            selection,
        });
        Ok(())
    }

    /// Applies `cmd` to a document and queues the resulting change events.
    pub fn edit(&mut self, id: DocumentId, cmd: Cmd) -> Result<Patch, HostError> {
        let document = self
            .documents
            .get_mut(&id)
            .ok_or(HostError::UnknownDocument(id))?;
        let before = document.selection();
        let change = ContentChange {
            range: cmd.range(),
            text: cmd.inserted_text().into_owned(),
        };
        let patch = document.apply(cmd)?;

        self.events
            .push_back(HostEvent::TextChanged(TextDocumentChangeEvent {
                document: id,
                changes: vec![change],
            }));
        if patch.new_selection != before {
            self.events.push_back(HostEvent::SelectionChanged {
                document: id,
                selection: patch.new_selection.clone(),
            });
        }
        Ok(patch)
    }

    /// The built-in `type` command: replaces the active selection with
    /// `text`. Typing a lone newline carries the current line's leading
    /// whitespace onto the new line. Without an active editor this does
    /// nothing.
    pub fn type_text(&mut self, text: &str) -> Result<(), HostError> {
        let Some(id) = self.active else {
            trace!("`{}` with no active editor ignored", Self::TYPE_COMMAND);
            return Ok(());
        };
        let document = self.document(id)?;
        let selection = document.selection();
        let mut insert = text.to_string();
        if text == "\n" {
            let prefix = document.line_prefix(selection.start)?;
            insert.extend(prefix.chars().take_while(|c| matches!(c, ' ' | '\t')));
        }
        self.edit(
            id,
            Cmd::ReplaceRange {
                range: selection,
                text: insert,
            },
        )?;
        Ok(())
    }

    /// Inserts `snippet` over `range` of the active editor, text verbatim.
    pub fn insert_snippet(&mut self, snippet: Snippet, range: Range<usize>) -> Result<(), HostError> {
        let id = self.active.ok_or(HostError::NoActiveEditor)?;
        trace!("inserting snippet {snippet:?} at {range:?} in {id}");
        self.edit(id, Cmd::InsertSnippet { range, snippet })?;
        Ok(())
    }

    pub fn set_context(&mut self, key: &str, value: bool) {
        if self.context.insert(key.to_string(), value) != Some(value) {
            trace!("context `{key}` = {value}");
        }
    }

    /// Current value of a context key; unset keys read as false.
    pub fn context(&self, key: &str) -> bool {
        self.context.get(key).copied().unwrap_or(false)
    }

    pub fn register_command(&mut self, name: &str, command: CommandFn) -> Result<(), HostError> {
        if self.commands.contains_key(name) {
            return Err(HostError::DuplicateCommand(name.to_string()));
        }
        self.commands.insert(name.to_string(), command);
        Ok(())
    }

    pub fn execute_command(&mut self, name: &str) -> Result<(), HostError> {
        let command = *self
            .commands
            .get(name)
            .ok_or_else(|| HostError::UnknownCommand(name.to_string()))?;
        trace!("executing `{name}`");
        command(self)
    }

    pub fn bind_key(&mut self, binding: Keybinding) {
        self.keybindings.push(binding);
    }

    /// Command bound to `key` under the current context. Later bindings win.
    pub fn resolve_key(&self, key: Key) -> Option<&str> {
        self.keybindings
            .iter()
            .rev()
            .find(|b| b.key == key && b.when.as_deref().is_none_or(|w| self.when_holds(w)))
            .map(|b| b.command.as_str())
    }

    fn when_holds(&self, when: &str) -> bool {
        match when.strip_prefix('!') {
            Some(key) => !self.context(key.trim()),
            None => self.context(when.trim()),
        }
    }

    /// Takes the oldest undelivered event.
    pub fn next_event(&mut self) -> Option<HostEvent> {
        self.events.pop_front()
    }
}
