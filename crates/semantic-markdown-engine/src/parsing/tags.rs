//! # Tag Grammar
//!
//! Whole-line custom tags delimit semantic blocks:
//!
//! ```text
//! <Note>            opening tag line, name = "Note"
//! <Note kind="x">   opening tag line with opaque attribute text
//! </Note>           closing tag line for "Note"
//! ```
//!
//! A tag name is one or more ASCII letters, digits, `-` or `_`. Names are
//! compared byte for byte, so `<note>` does not close with `</Note>`.
//!
//! Block recognition only accepts a tag that makes up the *entire* trimmed
//! line. The cursor-relative helpers at the bottom of this module apply the
//! same name grammar to the text on either side of an editor cursor.

use std::sync::OnceLock;

use regex::Regex;

/// An opening tag recognised on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagToken<'a> {
    /// The tag name between `<` and the first whitespace or `>`.
    pub name: &'a str,
    /// Everything between the name and the closing `>`, trimmed.
    /// Passed through untouched; `None` when there is no attribute text.
    pub attributes: Option<&'a str>,
}

fn opening_line_regex() -> &'static Regex {
    static OPENING_LINE: OnceLock<Regex> = OnceLock::new();
    OPENING_LINE.get_or_init(|| {
        Regex::new(r"^<([A-Za-z0-9_-]+)(?:\s(.*))?>$").expect("Invalid opening tag regex")
    })
}

fn opening_before_cursor_regex() -> &'static Regex {
    static OPENING_BEFORE: OnceLock<Regex> = OnceLock::new();
    OPENING_BEFORE.get_or_init(|| {
        Regex::new(r"<([A-Za-z0-9_-]+)(?:\s+[^>]*)?>$").expect("Invalid opening tag regex")
    })
}

fn unfinished_opening_regex() -> &'static Regex {
    static UNFINISHED: OnceLock<Regex> = OnceLock::new();
    UNFINISHED.get_or_init(|| {
        Regex::new(r"<([A-Za-z0-9_-]+)(?:\s+[^>]*)?$").expect("Invalid unfinished tag regex")
    })
}

fn closing_after_cursor_regex() -> &'static Regex {
    static CLOSING_AFTER: OnceLock<Regex> = OnceLock::new();
    CLOSING_AFTER
        .get_or_init(|| Regex::new(r"^</([A-Za-z0-9_-]+)>").expect("Invalid closing tag regex"))
}

/// Matches a line whose whole trimmed content is an opening tag.
pub fn match_opening_tag(line: &str) -> Option<TagToken<'_>> {
    let caps = opening_line_regex().captures(line.trim())?;
    let name = caps.get(1)?.as_str();
    let attributes = caps
        .get(2)
        .map(|m| m.as_str().trim())
        .filter(|attrs| !attrs.is_empty());
    Some(TagToken { name, attributes })
}

/// True when the trimmed line is exactly `</name>`.
pub fn is_closing_tag_line(line: &str, name: &str) -> bool {
    line.trim()
        .strip_prefix("</")
        .and_then(|rest| rest.strip_suffix('>'))
        == Some(name)
}

/// The closing tag text for `name`.
pub fn closing_tag(name: &str) -> String {
    format!("</{name}>")
}

/// Name of the opening tag that ends exactly at the end of `text`.
///
/// `text` is typically the part of a line before the cursor.
pub fn opening_tag_before(text: &str) -> Option<&str> {
    opening_before_cursor_regex()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Name of an opening tag that is still missing its `>` at the end of `text`.
pub fn unfinished_opening_tag(text: &str) -> Option<&str> {
    unfinished_opening_regex()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Name of the closing tag that starts exactly at the start of `text`.
///
/// `text` is typically the part of a line after the cursor.
pub fn closing_tag_after(text: &str) -> Option<&str> {
    closing_after_cursor_regex()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("<Note>", "Note")]
    #[case("  <Note>  ", "Note")]
    #[case("<call-out_2>", "call-out_2")]
    #[case("<div class=\"x\">", "div")]
    #[case("<br />", "br")]
    fn opening_tag_lines(#[case] line: &str, #[case] name: &str) {
        assert_eq!(match_opening_tag(line).map(|t| t.name), Some(name));
    }

    #[rstest]
    #[case("Note")]
    #[case("<Note> trailing prose")]
    #[case("prose <Note>")]
    #[case("</Note>")]
    #[case("<br/>")]
    #[case("<>")]
    #[case("<Not e")]
    #[case("<Nöte>")]
    fn not_opening_tag_lines(#[case] line: &str) {
        assert_eq!(match_opening_tag(line), None);
    }

    #[test]
    fn attributes_are_opaque() {
        let tag = match_opening_tag("<Card title=\"a > b\" data-x>").unwrap();
        assert_eq!(tag.name, "Card");
        assert_eq!(tag.attributes, Some("title=\"a > b\" data-x"));

        let bare = match_opening_tag("<Card >").unwrap();
        assert_eq!(bare.attributes, None);
    }

    #[rstest]
    #[case("</Note>", "Note", true)]
    #[case("   </Note>\t", "Note", true)]
    #[case("</note>", "Note", false)]
    #[case("</Note> text", "Note", false)]
    #[case("</Notes>", "Note", false)]
    #[case("</ Note>", "Note", false)]
    fn closing_tag_lines(#[case] line: &str, #[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_closing_tag_line(line, name), expected);
    }

    #[test]
    fn closing_tag_text() {
        assert_eq!(closing_tag("Note"), "</Note>");
    }

    #[rstest]
    #[case("<b>", Some("b"))]
    #[case("text <span class=\"a\">", Some("span"))]
    #[case("<a><b>", Some("b"))]
    #[case("<b> ", None)]
    #[case("<b/>", None)]
    #[case("b>", None)]
    fn opening_before_cursor(#[case] text: &str, #[case] expected: Option<&str>) {
        assert_eq!(opening_tag_before(text), expected);
    }

    #[rstest]
    #[case("<div", Some("div"))]
    #[case("<div class=\"x\"", Some("div"))]
    #[case("see <span", Some("span"))]
    #[case("<div>", None)]
    #[case("div", None)]
    fn unfinished_tags(#[case] text: &str, #[case] expected: Option<&str>) {
        assert_eq!(unfinished_opening_tag(text), expected);
    }

    #[rstest]
    #[case("</b>", Some("b"))]
    #[case("</b> more", Some("b"))]
    #[case(" </b>", None)]
    #[case("<b>", None)]
    fn closing_after_cursor(#[case] text: &str, #[case] expected: Option<&str>) {
        assert_eq!(closing_tag_after(text), expected);
    }
}
