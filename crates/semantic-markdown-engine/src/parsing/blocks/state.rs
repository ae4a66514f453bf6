use crate::parsing::{
    rope::{LineMarks, LineTable, slice::slice_str, span::Span},
    token::{Nesting, Token, TokenKind},
};

use super::{ruler::BlockRuler, semantic::SemanticClasses};

/// Options shared by every rule during a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Nesting level at which the tokenizer stops descending.
    pub max_nesting: usize,
    /// CSS classes put on semantic block containers and headers.
    pub classes: SemanticClasses,
}

impl ParseOptions {
    pub const DEFAULT_MAX_NESTING: usize = 100;
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_nesting: Self::DEFAULT_MAX_NESTING,
            classes: SemanticClasses::default(),
        }
    }
}

/// Mutable parse state handed to every block rule.
pub struct BlockState<'a> {
    /// The full source being parsed.
    pub src: &'a str,
    /// Line offsets into `src`.
    pub lines: &'a LineTable,
    /// Output token stream.
    pub tokens: Vec<Token>,
    /// Next line to tokenize. A rule that accepts a line sets this past
    /// the last line it consumed.
    pub line: usize,
    /// Current nesting level of the token stream.
    pub level: usize,
    pub options: &'a ParseOptions,
    ruler: &'a BlockRuler,
}

impl<'a> BlockState<'a> {
    pub fn new(
        src: &'a str,
        lines: &'a LineTable,
        ruler: &'a BlockRuler,
        options: &'a ParseOptions,
    ) -> Self {
        Self {
            src,
            lines,
            tokens: Vec::new(),
            line: 0,
            level: 0,
            options,
            ruler,
        }
    }

    /// The rule chain driving this parse.
    pub fn ruler(&self) -> &'a BlockRuler {
        self.ruler
    }

    /// Offsets of `line`, if it exists.
    pub fn marks(&self, line: usize) -> Option<LineMarks> {
        self.lines.get(line)
    }

    /// Text of `line` without indentation or line terminator.
    ///
    /// Lines past the end of the buffer read as empty.
    pub fn line_text(&self, line: usize) -> &'a str {
        self.marks(line)
            .map(|m| slice_str(self.src, m.content))
            .unwrap_or("")
    }

    pub fn is_blank(&self, line: usize) -> bool {
        self.marks(line).is_none_or(|m| m.is_blank())
    }

    /// Raw source of lines `[from, to)`, indentation and terminators included.
    pub fn raw_lines(&self, from: usize, to: usize) -> &'a str {
        if from >= to {
            return "";
        }
        let start = match self.marks(from) {
            Some(m) => m.line.start,
            None => return "",
        };
        let end = self
            .marks(to)
            .map(|m| m.line.start)
            .unwrap_or(self.src.len());
        slice_str(self.src, Span { start, end })
    }

    /// Appends a token at the current nesting level and returns it for
    /// further decoration.
    pub fn push(&mut self, kind: TokenKind, tag: &'static str, nesting: Nesting) -> &mut Token {
        if nesting == Nesting::Close {
            self.level = self.level.saturating_sub(1);
        }
        let mut token = Token::new(kind, tag, nesting);
        token.level = self.level;
        if nesting == Nesting::Open {
            self.level += 1;
        }
        self.tokens.push(token);
        let last = self.tokens.len() - 1;
        &mut self.tokens[last]
    }

    /// Runs the rule chain over lines `[start, end)`, appending to this
    /// state's token stream.
    pub fn tokenize(&mut self, start: usize, end: usize) {
        let ruler = self.ruler;
        ruler.tokenize(self, start, end);
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}
