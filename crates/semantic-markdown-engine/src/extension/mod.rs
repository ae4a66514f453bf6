//! # Semantic Markdown Extension
//!
//! Wires semantic blocks into a Markdown processor and the editing
//! conveniences into a host session.
//!
//! - **Rendering**: [`SemanticMarkdown::extend_markdown`] registers the
//!   `semantic_block` rule ahead of `html_block`.
//! - **Auto-close** (`auto_close`): typing `>` after `<name ...` inserts
//!   `</name>` after the cursor.
//! - **Between-tags context** (`context`): keeps
//!   [`BETWEEN_TAGS_CONTEXT`] true while the cursor sits in `<name>|</name>`.
//! - **Enter** (`enter`): [`ENTER_COMMAND`], bound to Enter while the context
//!   key holds, splits the tag pair onto separate lines.

pub mod auto_close;
pub mod context;
pub mod enter;

use log::{debug, info};

use crate::{
    host::{Extension, HostError, HostEvent, Key, Keybinding, Session, TextDocumentChangeEvent},
    parsing::{
        Markdown,
        blocks::{
            BlockRuler, RulerError, SemanticClasses,
            semantic::{INSERT_BEFORE, RULE_NAME, semantic_block},
        },
    },
};

pub use auto_close::auto_close_edit;
pub use context::{between_tags_context, cursor_between_tags, enclosing_tag_pair};
pub use enter::on_enter;

/// Command splitting `<tag>|</tag>` onto three lines.
pub const ENTER_COMMAND: &str = "semantic-markdown.onEnter";
/// Context key: cursor between a matching opening and closing tag.
pub const BETWEEN_TAGS_CONTEXT: &str = "semantic-markdown:betweenTags";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub classes: SemanticClasses,
    /// Insert `</name>` when an opening tag is finished with `>`.
    pub auto_close_tags: bool,
    /// Bind Enter to [`ENTER_COMMAND`] while the cursor is between tags.
    pub split_on_enter: bool,
    /// Let a balanced block start on the line right after paragraph text.
    pub interrupt_paragraph: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            classes: SemanticClasses::default(),
            auto_close_tags: true,
            split_on_enter: true,
            interrupt_paragraph: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SemanticMarkdown {
    settings: Settings,
}

impl SemanticMarkdown {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Registers the `semantic_block` rule on `md` and applies the classes.
    pub fn extend_markdown(&self, md: &mut Markdown) -> Result<(), RulerError> {
        let alt: &[&'static str] = if self.settings.interrupt_paragraph {
            &[BlockRuler::PARAGRAPH_CHAIN]
        } else {
            &[]
        };
        md.ruler_mut()
            .before(INSERT_BEFORE, RULE_NAME, semantic_block, alt)?;
        md.options.classes = self.settings.classes.clone();
        Ok(())
    }

    /// A default processor with semantic blocks registered.
    pub fn markdown(&self) -> Result<Markdown, RulerError> {
        let mut md = Markdown::new();
        self.extend_markdown(&mut md)?;
        Ok(md)
    }

    /// Auto-closes a tag finished by the first change of `event`.
    ///
    /// Works on the focused editor and only when the change happened there.
    pub fn on_did_change_text_document(
        &self,
        session: &mut Session,
        event: &TextDocumentChangeEvent,
    ) -> Result<(), HostError> {
        if !self.settings.auto_close_tags {
            return Ok(());
        }
        let Some(change) = event.changes.first() else {
            return Ok(());
        };
        if session.active_id() != Some(event.document) {
            return Ok(());
        }
        let document = session.document(event.document)?;
        if !document.is_markdown() {
            return Ok(());
        }
        if let Some(cmd) = auto_close_edit(document, change) {
            session.edit(event.document, cmd)?;
        }
        Ok(())
    }

    /// Recomputes [`BETWEEN_TAGS_CONTEXT`] for the focused editor.
    pub fn update_context(&self, session: &mut Session) {
        let between = between_tags_context(session.active_document());
        session.set_context(BETWEEN_TAGS_CONTEXT, between);
    }
}

impl Extension for SemanticMarkdown {
    fn activate(&self, session: &mut Session) -> Result<(), HostError> {
        session.register_command(ENTER_COMMAND, on_enter)?;
        if self.settings.split_on_enter {
            session.bind_key(Keybinding {
                key: Key::Enter,
                command: ENTER_COMMAND.to_string(),
                when: Some(BETWEEN_TAGS_CONTEXT.to_string()),
            });
        }
        self.update_context(session);
        info!("semantic markdown active");
        Ok(())
    }

    fn handle_event(&self, session: &mut Session, event: &HostEvent) -> Result<(), HostError> {
        match event {
            HostEvent::TextChanged(change) => {
                self.on_did_change_text_document(session, change)?;
                if session.active_id() == Some(change.document) {
                    self.update_context(session);
                }
            }
            HostEvent::SelectionChanged { .. } | HostEvent::ActiveEditorChanged(_) => {
                self.update_context(session);
            }
        }
        debug!(
            "{BETWEEN_TAGS_CONTEXT} = {}",
            session.context(BETWEEN_TAGS_CONTEXT)
        );
        Ok(())
    }
}
