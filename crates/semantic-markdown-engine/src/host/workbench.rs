use std::ops::Range;

use log::trace;

use crate::editing::Document;

use super::{
    events::{DocumentId, HostEvent, Key},
    session::{HostError, Session},
};

/// Something the workbench activates once and then feeds every event.
pub trait Extension {
    /// Registers commands, keybindings and initial context.
    fn activate(&self, session: &mut Session) -> Result<(), HostError>;

    fn handle_event(&self, session: &mut Session, event: &HostEvent) -> Result<(), HostError>;
}

/// A session driven the way a user drives an editor: open, select, press keys.
///
/// Every action pumps the event queue to completion before returning.
#[derive(Debug)]
pub struct Workbench<E> {
    session: Session,
    extension: E,
}

impl<E: Extension> Workbench<E> {
    pub fn new(extension: E) -> Result<Self, HostError> {
        let mut session = Session::new();
        extension.activate(&mut session)?;
        let mut workbench = Self { session, extension };
        workbench.pump()?;
        Ok(workbench)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn extension(&self) -> &E {
        &self.extension
    }

    /// Opens `document` in a focused editor.
    pub fn open(&mut self, document: Document) -> Result<DocumentId, HostError> {
        let id = self.session.open(document);
        self.session.show(id)?;
        self.pump()?;
        Ok(id)
    }

    pub fn show(&mut self, id: DocumentId) -> Result<(), HostError> {
        self.session.show(id)?;
        self.pump()
    }

    pub fn close_editor(&mut self) -> Result<(), HostError> {
        self.session.close_editor();
        self.pump()
    }

    pub fn select(&mut self, selection: Range<usize>) -> Result<(), HostError> {
        self.session.set_selection(selection)?;
        self.pump()
    }

    /// Presses one key. A bound command runs if its `when` clause holds;
    /// otherwise the key is typed.
    pub fn press(&mut self, key: Key) -> Result<(), HostError> {
        match self.session.resolve_key(key).map(str::to_string) {
            Some(command) => self.session.execute_command(&command)?,
            None => match key {
                Key::Enter => self.session.type_text("\n")?,
                Key::Char(c) => self.session.type_text(c.encode_utf8(&mut [0; 4]))?,
            },
        }
        self.pump()
    }

    /// Types `text` one key at a time; `\n` presses Enter.
    pub fn type_str(&mut self, text: &str) -> Result<(), HostError> {
        for c in text.chars() {
            let key = if c == '\n' { Key::Enter } else { Key::Char(c) };
            self.press(key)?;
        }
        Ok(())
    }

    /// Text of the focused document.
    pub fn active_text(&self) -> Option<String> {
        self.session.active_document().map(Document::text)
    }

    /// Delivers queued events until the queue is empty.
    pub fn pump(&mut self) -> Result<(), HostError> {
        while let Some(event) = self.session.next_event() {
            trace!("dispatching {event:?}");
            self.extension.handle_event(&mut self.session, &event)?;
        }
        Ok(())
    }
}
