//! Typing sessions against an activated semantic markdown extension.

use pretty_assertions::assert_eq;
use semantic_markdown_engine::{
    BETWEEN_TAGS_CONTEXT, Cmd, Document, Key, SemanticMarkdown, Workbench,
};

fn editor(text: &str, cursor: usize) -> Workbench<SemanticMarkdown> {
    let mut wb = Workbench::new(SemanticMarkdown::default()).unwrap();
    wb.open(Document::from_bytes(text.as_bytes()).unwrap())
        .unwrap();
    wb.select(cursor..cursor).unwrap();
    wb
}

fn selection(wb: &Workbench<SemanticMarkdown>) -> std::ops::Range<usize> {
    wb.session().active_document().unwrap().selection()
}

fn between_tags(wb: &Workbench<SemanticMarkdown>) -> bool {
    wb.session().context(BETWEEN_TAGS_CONTEXT)
}

#[test]
fn typing_an_opening_tag_closes_it() {
    let mut wb = editor("", 0);
    wb.type_str("<div class=\"x\">").unwrap();

    assert_eq!(wb.active_text().unwrap(), "<div class=\"x\"></div>");
    assert_eq!(selection(&wb), 15..15);
    assert!(between_tags(&wb));
}

#[test]
fn self_closing_tag_is_left_alone() {
    let mut wb = editor("", 0);
    wb.type_str("<br/>").unwrap();
    assert_eq!(wb.active_text().unwrap(), "<br/>");
    assert!(!between_tags(&wb));
}

#[test]
fn existing_closing_tag_is_not_duplicated() {
    let mut wb = editor("<span</span>", 5);
    wb.press(Key::Char('>')).unwrap();
    assert_eq!(wb.active_text().unwrap(), "<span></span>");
    assert_eq!(selection(&wb), 6..6);
}

#[test]
fn comparison_operators_do_not_close_anything() {
    let mut wb = editor("", 0);
    wb.type_str("a > b and x->y").unwrap();
    assert_eq!(wb.active_text().unwrap(), "a > b and x->y");
}

#[test]
fn context_tracks_the_cursor() {
    let mut wb = editor("<b></b>", 3);
    assert!(between_tags(&wb));

    wb.select(2..4).unwrap();
    assert!(!between_tags(&wb));

    wb.select(7..7).unwrap();
    assert!(!between_tags(&wb));

    wb.select(3..3).unwrap();
    assert!(between_tags(&wb));
}

#[test]
fn context_clears_when_the_editor_closes() {
    let mut wb = editor("<b></b>", 3);
    wb.close_editor().unwrap();
    assert!(!between_tags(&wb));
}

#[test]
fn enter_between_tags_splits_them() {
    let mut wb = editor("<b></b>", 3);
    wb.press(Key::Enter).unwrap();

    assert_eq!(wb.active_text().unwrap(), "<b>\n\n</b>");
    assert_eq!(selection(&wb), 4..4);
    assert!(!between_tags(&wb));
}

#[test]
fn split_inserts_no_indentation() {
    let mut wb = editor("  <Note></Note>", 8);
    wb.press(Key::Enter).unwrap();
    assert_eq!(wb.active_text().unwrap(), "  <Note>\n\n</Note>");
    assert_eq!(selection(&wb), 9..9);
}

#[test]
fn enter_elsewhere_is_a_normal_newline() {
    let mut wb = editor("  <b>x</b>", 6);
    wb.press(Key::Enter).unwrap();
    assert_eq!(wb.active_text().unwrap(), "  <b>x\n  </b>");
}

#[test]
fn write_a_block_from_scratch() {
    let mut wb = editor("", 0);
    wb.type_str("<Note>\nRemember this.").unwrap();

    assert_eq!(wb.active_text().unwrap(), "<Note>\nRemember this.\n</Note>");
    let md = wb.extension().markdown().unwrap();
    assert_eq!(
        md.render(&wb.active_text().unwrap()),
        "<div class=\"semantic-block\">\n<div class=\"semantic-header\">Note</div>\n<p>Remember this.</p>\n</div>\n"
    );
}

#[test]
fn background_documents_are_not_auto_closed() {
    let mut wb = editor("", 0);
    let background = wb.session().active_id().unwrap();
    wb.open(Document::from_bytes(b"notes").unwrap()).unwrap();

    wb.session_mut()
        .edit(
            background,
            Cmd::InsertText {
                at: 0,
                text: "<b".to_string(),
            },
        )
        .unwrap();
    wb.session_mut()
        .edit(
            background,
            Cmd::InsertText {
                at: 2,
                text: ">".to_string(),
            },
        )
        .unwrap();
    wb.pump().unwrap();

    assert_eq!(wb.session().document(background).unwrap().text(), "<b>");
    assert_eq!(wb.active_text().unwrap(), "notes");
}
