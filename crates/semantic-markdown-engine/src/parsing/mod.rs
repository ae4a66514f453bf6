pub mod blocks;
pub mod inline;
pub mod rope;
pub mod tags;
pub mod token;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use crate::render::{RenderOptions, render_html};
use blocks::{BlockRuler, BlockState, ParseOptions};
use rope::LineTable;
use token::Token;

/// A configured Markdown processor: rule chain plus parse and render options.
///
/// The default instance knows only the generic block rules; extensions such
/// as semantic blocks register themselves through [`Markdown::ruler_mut`].
#[derive(Debug, Clone, Default)]
pub struct Markdown {
    ruler: BlockRuler,
    pub options: ParseOptions,
    pub render_options: RenderOptions,
}

impl Markdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ruler(&self) -> &BlockRuler {
        &self.ruler
    }

    pub fn ruler_mut(&mut self) -> &mut BlockRuler {
        &mut self.ruler
    }

    /// Tokenizes a whole document.
    pub fn parse(&self, src: &str) -> Vec<Token> {
        let lines = LineTable::new(src);
        self.parse_lines(src, &lines)
    }

    /// Tokenizes the current contents of a rope buffer.
    pub fn parse_rope(&self, rope: &Rope) -> Vec<Token> {
        let src = rope.to_string();
        let lines = LineTable::from_rope(rope);
        self.parse_lines(&src, &lines)
    }

    /// Parses and renders a document to HTML.
    pub fn render(&self, src: &str) -> String {
        render_html(&self.parse(src), &self.render_options)
    }

    fn parse_lines(&self, src: &str, lines: &LineTable) -> Vec<Token> {
        let mut state = BlockState::new(src, lines, &self.ruler, &self.options);
        state.tokenize(0, lines.len());
        state.into_tokens()
    }
}
