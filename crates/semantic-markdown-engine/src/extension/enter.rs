use log::debug;

use crate::{
    editing::{Document, Snippet},
    host::{HostError, Session},
};

use super::context::cursor_between_tags;

/// Enter between `<tag>` and `</tag>`: opens an empty line between them with
/// the cursor on it, inserted verbatim so no indentation is added. Anywhere
/// else it types a plain newline.
pub fn on_enter(session: &mut Session) -> Result<(), HostError> {
    let target = session
        .active_document()
        .filter(|doc| cursor_between_tags(doc))
        .map(Document::selection);

    match target {
        Some(selection) => {
            debug!("splitting tag pair at {}", selection.start);
            session.insert_snippet(Snippet::parse("\n$0\n"), selection)
        }
        None => session.type_text("\n"),
    }
}
