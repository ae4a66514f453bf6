use log::debug;

use crate::{
    editing::{Cmd, Document, Snippet},
    host::ContentChange,
    parsing::tags,
};

/// The edit that closes a tag the user just finished with `>`.
///
/// `document` is the post-edit text and `change` the first change of the
/// batch. Returns `None` unless the change typed exactly `>` at the end of an
/// opening tag that is not self-closing and not already followed by its
/// closing tag. The returned command puts the cursor before the inserted
/// closing tag.
pub fn auto_close_edit(document: &Document, change: &ContentChange) -> Option<Cmd> {
    if change.text != ">" {
        return None;
    }
    let position = change.range.start + 1;
    let before = document.line_prefix(position).ok()?;
    let content = before.strip_suffix('>')?;
    if content.ends_with('/') {
        return None;
    }
    let name = tags::unfinished_opening_tag(content)?;

    let closing = tags::closing_tag(name);
    let after = document.line_suffix(position).ok()?;
    if after.starts_with(&closing) {
        debug!("<{name}> at {position} is already closed");
        return None;
    }

    debug!("auto-closing <{name}> at {position}");
    Some(Cmd::InsertSnippet {
        range: position..position,
        snippet: Snippet::new("", closing),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// Types `>` at `at` and returns the document plus the change it caused.
    fn typed_gt(text: &str, at: usize) -> (Document, ContentChange) {
        let mut doc = Document::from_bytes(text.as_bytes()).unwrap();
        doc.apply(Cmd::InsertText {
            at,
            text: ">".to_string(),
        })
        .unwrap();
        let change = ContentChange {
            range: at..at,
            text: ">".to_string(),
        };
        (doc, change)
    }

    #[test]
    fn closes_tag_with_attributes() {
        let (doc, change) = typed_gt("<div class=\"x\"", 14);
        assert_eq!(
            auto_close_edit(&doc, &change),
            Some(Cmd::InsertSnippet {
                range: 15..15,
                snippet: Snippet::new("", "</div>"),
            })
        );
    }

    #[test]
    fn closes_tag_mid_document() {
        let (doc, change) = typed_gt("intro\nsee <span rest", 15);
        assert_eq!(
            auto_close_edit(&doc, &change),
            Some(Cmd::InsertSnippet {
                range: 16..16,
                snippet: Snippet::new("", "</span>"),
            })
        );
    }

    #[rstest]
    #[case::self_closing("<br/", 4)]
    #[case::not_a_tag("a - b", 4)]
    #[case::already_closed("<span</span>", 5)]
    #[case::closing_tag("</b", 3)]
    fn leaves_text_alone(#[case] text: &str, #[case] at: usize) {
        let (doc, change) = typed_gt(text, at);
        assert_eq!(auto_close_edit(&doc, &change), None);
    }

    #[test]
    fn ignores_other_text() {
        let doc = Document::from_bytes(b"<b>").unwrap();
        let change = ContentChange {
            range: 2..3,
            text: "b>".to_string(),
        };
        assert_eq!(auto_close_edit(&doc, &change), None);
    }

    #[test]
    fn stale_change_ranges_are_ignored() {
        let doc = Document::from_bytes(b"<b>").unwrap();
        let change = ContentChange {
            range: 10..10,
            text: ">".to_string(),
        };
        assert_eq!(auto_close_edit(&doc, &change), None);
    }
}
