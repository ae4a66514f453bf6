use crate::parsing::{
    blocks::state::BlockState,
    token::{Nesting, TokenKind},
};

pub const RULE_NAME: &str = "heading";

/// ATX heading with owned marker constants.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;
    const TAGS: [&'static str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

    /// Level and inline content of an ATX heading line.
    ///
    /// An optional closing run of `#` is dropped when it is separated from
    /// the content by whitespace.
    pub fn parse(text: &str) -> Option<(usize, &str)> {
        let level = text.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let rest = &text[level..];
        if !(rest.is_empty() || rest.starts_with([' ', '\t'])) {
            return None;
        }

        let content = rest.trim();
        let without_closing = content.trim_end_matches(Self::MARKER);
        let content = if without_closing.is_empty() {
            ""
        } else if without_closing.ends_with([' ', '\t']) {
            without_closing.trim_end()
        } else {
            content
        };
        Some((level, content))
    }

    /// HTML tag for a heading level in `1..=MAX_LEVEL`.
    pub fn tag(level: usize) -> &'static str {
        Self::TAGS[level.clamp(1, Self::MAX_LEVEL) - 1]
    }
}

pub fn heading(state: &mut BlockState<'_>, start_line: usize, _end_line: usize, silent: bool) -> bool {
    let Some((level, content)) = Heading::parse(state.line_text(start_line)) else {
        return false;
    };
    if silent {
        return true;
    }

    let tag = Heading::tag(level);
    let open = state.push(TokenKind::HeadingOpen, tag, Nesting::Open);
    open.map = Some(start_line..start_line + 1);

    let inline = state.push(TokenKind::Inline, "", Nesting::SelfClosing);
    inline.content = content.to_string();
    inline.map = Some(start_line..start_line + 1);

    state.push(TokenKind::HeadingClose, tag, Nesting::Close);
    state.line = start_line + 1;
    true
}
