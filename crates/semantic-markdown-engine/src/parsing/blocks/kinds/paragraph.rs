use crate::parsing::{
    blocks::{
        ruler::{BlockRuleFn, BlockRuler},
        state::BlockState,
    },
    token::{Nesting, TokenKind},
};

pub const RULE_NAME: &str = "paragraph";

/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default leaf block
/// when no other block opener matches. Inline parsing is applied
/// to paragraph content.
pub struct Paragraph;

/// Accepts any line. Continues until a blank line or a line on which a rule
/// from the `paragraph` terminator chain matches in silent mode.
pub fn paragraph(
    state: &mut BlockState<'_>,
    start_line: usize,
    end_line: usize,
    _silent: bool,
) -> bool {
    let terminators: Vec<BlockRuleFn> = state
        .ruler()
        .terminators(BlockRuler::PARAGRAPH_CHAIN)
        .collect();

    let mut next = start_line + 1;
    while next < end_line && !state.is_blank(next) {
        if terminators
            .iter()
            .any(|rule| rule(state, next, end_line, true))
        {
            break;
        }
        next += 1;
    }

    let content = (start_line..next)
        .map(|line| state.line_text(line))
        .collect::<Vec<_>>()
        .join("\n");

    let open = state.push(TokenKind::ParagraphOpen, "p", Nesting::Open);
    open.map = Some(start_line..next);

    let inline = state.push(TokenKind::Inline, "", Nesting::SelfClosing);
    inline.content = content.trim().to_string();
    inline.map = Some(start_line..next);

    state.push(TokenKind::ParagraphClose, "p", Nesting::Close);
    state.line = next;
    true
}
