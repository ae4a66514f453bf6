use crate::{editing::Document, parsing::tags};

/// Name shared by an opening tag ending `before` and a closing tag starting
/// `after`, as in `<b>|</b>`.
pub fn enclosing_tag_pair<'a>(before: &'a str, after: &str) -> Option<&'a str> {
    let open = tags::opening_tag_before(before)?;
    let close = tags::closing_tag_after(after)?;
    (open == close).then_some(open)
}

/// True when the selection is empty and the cursor sits directly between
/// an opening tag and its same-named closing tag on one line.
pub fn cursor_between_tags(document: &Document) -> bool {
    let selection = document.selection();
    if !selection.is_empty() {
        return false;
    }
    let (Ok(before), Ok(after)) = (
        document.line_prefix(selection.start),
        document.line_suffix(selection.start),
    ) else {
        return false;
    };
    enclosing_tag_pair(&before, &after).is_some()
}

/// Value of the between-tags context key for the focused document.
pub fn between_tags_context(document: Option<&Document>) -> bool {
    document.is_some_and(|doc| doc.is_markdown() && cursor_between_tags(doc))
}
