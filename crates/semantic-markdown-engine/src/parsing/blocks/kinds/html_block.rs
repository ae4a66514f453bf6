use crate::parsing::{
    blocks::state::BlockState,
    token::{Nesting, TokenKind},
};

pub const RULE_NAME: &str = "html_block";

/// Where a raw HTML block stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlEnd {
    /// Runs up to (not including) the next blank line.
    BlankLine,
    /// Runs through the line containing `-->`.
    CommentClose,
}

pub struct HtmlBlock;

impl HtmlBlock {
    pub const COMMENT_OPEN: &'static str = "<!--";
    pub const COMMENT_CLOSE: &'static str = "-->";

    /// How a raw HTML block starting with `text` ends, if `text` starts one.
    ///
    /// Accepts comments and lines starting with an HTML-style opening or
    /// closing tag name (`<div`, `</section>`, `<br/>`).
    pub fn opener(text: &str) -> Option<HtmlEnd> {
        if text.starts_with(Self::COMMENT_OPEN) {
            return Some(HtmlEnd::CommentClose);
        }
        let rest = text.strip_prefix('<')?;
        let rest = rest.strip_prefix('/').unwrap_or(rest);
        if !rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return None;
        }
        let name_len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
            .unwrap_or(rest.len());
        let after = &rest[name_len..];
        let ends_name = after.is_empty()
            || after.starts_with(char::is_whitespace)
            || after.starts_with('>')
            || after.starts_with("/>");
        ends_name.then_some(HtmlEnd::BlankLine)
    }
}

pub fn html_block(state: &mut BlockState<'_>, start_line: usize, end_line: usize, silent: bool) -> bool {
    let Some(end_kind) = HtmlBlock::opener(state.line_text(start_line)) else {
        return false;
    };
    if silent {
        return true;
    }

    let mut next = start_line;
    match end_kind {
        HtmlEnd::CommentClose => {
            while next < end_line {
                let closes = state.line_text(next).contains(HtmlBlock::COMMENT_CLOSE);
                next += 1;
                if closes {
                    break;
                }
            }
        }
        HtmlEnd::BlankLine => {
            next += 1;
            while next < end_line && !state.is_blank(next) {
                next += 1;
            }
        }
    }

    let content = state.raw_lines(start_line, next).to_string();
    let token = state.push(TokenKind::HtmlBlock, "", Nesting::SelfClosing);
    token.content = content;
    token.map = Some(start_line..next);

    state.line = next;
    true
}
