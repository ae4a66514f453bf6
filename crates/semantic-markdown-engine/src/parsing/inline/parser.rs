use crate::parsing::rope::span::Span;

use super::{cursor::Cursor, kinds::CodeSpan, types::InlineNode};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset where `s` begins (for absolute span positions)
/// - `s`: The inline content to parse
///
/// # Returns
/// A vector of inline nodes covering the entire input. Text between code
/// spans is emitted as `InlineNode::Text`.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span::new(start, end)));
        }
    }

    while !cur.eof() {
        if cur.peek() == Some(CodeSpan::TICK) {
            match try_parse_code_span(&mut cur) {
                Some(node) => {
                    let sp = node.span();
                    flush_text(&mut out, text_start, sp.start);
                    text_start = sp.end;
                    out.push(node);
                }
                // An unmatched run is literal text; skip all of it so a
                // shorter run inside it cannot open a span.
                None => cur.bump_n(cur.run_len(CodeSpan::TICK)),
            }
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to parse a code span starting at the current backtick run.
///
/// Returns `None` if no run of the same length closes it; the cursor is
/// restored in that case.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let open_len = cur.run_len(CodeSpan::TICK);
    if open_len == 0 {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(open_len);
    let inner_start = cur.pos();

    while !cur.eof() {
        let run = cur.run_len(CodeSpan::TICK);
        if run == open_len {
            let inner_end = cur.pos();
            cur.bump_n(run);
            return Some(InlineNode::CodeSpan {
                full: Span::new(start, cur.pos()),
                inner: Span::new(inner_start, inner_end),
            });
        }
        if run > 0 {
            cur.bump_n(run);
        } else {
            cur.bump();
        }
    }

    *cur = saved;
    None
}
