use crate::parsing::{
    blocks::state::BlockState,
    token::{Nesting, TokenKind},
};

pub const RULE_NAME: &str = "fence";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn marker(self) -> char {
        match self {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        }
    }
}

/// A run of fence markers at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    /// Number of marker characters in the run.
    pub len: usize,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";
    pub const MIN_LEN: usize = 3;

    pub fn sig(remainder: &str) -> Option<FenceSig> {
        let t = remainder.trim_end_matches(['\r', '\n']);
        let kind = if t.starts_with(Self::BACKTICKS) {
            FenceKind::Backticks
        } else if t.starts_with(Self::TILDES) {
            FenceKind::Tildes
        } else {
            return None;
        };
        let len = t.chars().take_while(|&c| c == kind.marker()).count();
        Some(FenceSig { kind, len })
    }

    /// True when `line` closes a fence opened with `open`: same marker, at
    /// least as long, nothing but whitespace after it.
    pub fn closes(open: FenceSig, line: &str) -> bool {
        match Self::sig(line) {
            Some(sig) => {
                sig.kind == open.kind && sig.len >= open.len && line[sig.len..].trim().is_empty()
            }
            None => false,
        }
    }
}

/// Block rule for fenced code. Runs to the closing fence, or to `end_line`
/// when the fence is never closed.
pub fn fence(state: &mut BlockState<'_>, start_line: usize, end_line: usize, silent: bool) -> bool {
    let text = state.line_text(start_line);
    let Some(open) = CodeFence::sig(text) else {
        return false;
    };
    let info = text[open.len..].trim();
    if open.kind == FenceKind::Backticks && info.contains('`') {
        return false;
    }
    if silent {
        return true;
    }

    let mut next = start_line + 1;
    let mut closed = false;
    while next < end_line {
        if CodeFence::closes(open, state.line_text(next)) {
            closed = true;
            break;
        }
        next += 1;
    }
    let last = if closed { next + 1 } else { next };

    let content = state.raw_lines(start_line + 1, next).to_string();
    let token = state.push(TokenKind::Fence, "code", Nesting::SelfClosing);
    token.info = info.to_string();
    token.content = content;
    token.map = Some(start_line..last);

    state.line = last;
    true
}
