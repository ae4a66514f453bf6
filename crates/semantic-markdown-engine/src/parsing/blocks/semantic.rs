//! The `semantic_block` rule.
//!
//! A balanced pair of whole-line custom tags becomes a titled container:
//!
//! ```text
//! <Note>                 div.semantic-block
//! Remember **this**.       div.semantic-header  "Note"
//! </Note>                  <p>Remember **this**.</p>
//! ```
//!
//! The interior lines go back through the full rule chain, so fences,
//! headings and further semantic blocks nest inside. An opening tag without
//! a matching close is declined and left to the rules after this one.

use log::debug;

use crate::parsing::{
    tags::match_opening_tag,
    token::{Nesting, TokenKind},
};

use super::{
    matcher::{MatchResult, find_matching_close},
    state::BlockState,
};

pub const RULE_NAME: &str = "semantic_block";
/// The rule is registered immediately ahead of this one so it gets first
/// refusal on lines raw HTML would otherwise swallow.
pub const INSERT_BEFORE: &str = "html_block";

/// CSS classes put on the rendered container and its header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticClasses {
    pub container: String,
    pub header: String,
}

impl SemanticClasses {
    pub const CONTAINER: &'static str = "semantic-block";
    pub const HEADER: &'static str = "semantic-header";
}

impl Default for SemanticClasses {
    fn default() -> Self {
        Self {
            container: Self::CONTAINER.to_string(),
            header: Self::HEADER.to_string(),
        }
    }
}

/// Block rule recognising a semantic block opening on `start_line`.
pub fn semantic_block(
    state: &mut BlockState<'_>,
    start_line: usize,
    end_line: usize,
    silent: bool,
) -> bool {
    let text = state.line_text(start_line);
    if !text.starts_with('<') {
        return false;
    }
    let Some(tag) = match_opening_tag(text) else {
        return false;
    };

    let close_line = match find_matching_close(&*state, start_line, end_line, tag.name) {
        MatchResult::Found { end_line } => end_line,
        MatchResult::NotFound => {
            debug!(
                "<{}> on line {start_line} is never closed before line {end_line}, leaving it to later rules",
                tag.name
            );
            return false;
        }
    };

    if silent {
        return true;
    }

    debug!(
        "semantic block <{}> spans lines {start_line}..={close_line}",
        tag.name
    );
    let options = state.options;
    let classes = &options.classes;

    let open = state.push(TokenKind::DivOpen, "div", Nesting::Open);
    open.set_attr("class", classes.container.as_str());
    open.map = Some(start_line..close_line + 1);
    open.info = tag.attributes.unwrap_or_default().to_string();

    let header = state.push(TokenKind::DivOpen, "div", Nesting::Open);
    header.set_attr("class", classes.header.as_str());

    let title = state.push(TokenKind::Inline, "", Nesting::SelfClosing);
    title.content = tag.name.to_string();
    title.map = Some(start_line..start_line + 1);

    state.push(TokenKind::DivClose, "div", Nesting::Close);

    state.tokenize(start_line + 1, close_line);

    state.push(TokenKind::DivClose, "div", Nesting::Close);

    state.line = close_line + 1;
    true
}
