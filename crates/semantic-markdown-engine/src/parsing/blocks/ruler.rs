use log::{debug, trace};

use super::{
    kinds::{code_fence, heading, html_block, paragraph},
    state::BlockState,
};

/// Signature shared by every block rule.
///
/// `(state, start_line, end_line, silent)`: try to recognise a block starting
/// at `start_line` without reading at or past `end_line`. When `silent` is
/// true the rule only reports whether it would match. Otherwise a matching
/// rule emits its tokens, sets `state.line` past the consumed lines and
/// returns true. Declining returns false and leaves the state untouched.
pub type BlockRuleFn = fn(&mut BlockState<'_>, usize, usize, bool) -> bool;

/// A named entry in the rule chain.
#[derive(Debug, Clone)]
pub struct BlockRule {
    pub name: &'static str,
    pub func: BlockRuleFn,
    /// Chains this rule may terminate, e.g. `"paragraph"`.
    pub alt: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulerError {
    #[error("no block rule named `{0}`")]
    UnknownRule(String),
    #[error("block rule `{0}` is already registered")]
    DuplicateRule(String),
}

/// Ordered chain of block rules. Earlier rules get first refusal on a line.
#[derive(Debug, Clone)]
pub struct BlockRuler {
    rules: Vec<BlockRule>,
}

impl BlockRuler {
    /// Name of the chain a rule joins to be allowed to end a paragraph.
    pub const PARAGRAPH_CHAIN: &'static str = "paragraph";

    /// An empty chain.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule at the lowest priority.
    pub fn push(
        &mut self,
        name: &'static str,
        func: BlockRuleFn,
        alt: &[&'static str],
    ) -> Result<(), RulerError> {
        self.ensure_unique(name)?;
        self.rules.push(BlockRule {
            name,
            func,
            alt: alt.to_vec(),
        });
        Ok(())
    }

    /// Inserts a rule immediately ahead of the rule called `anchor`.
    pub fn before(
        &mut self,
        anchor: &str,
        name: &'static str,
        func: BlockRuleFn,
        alt: &[&'static str],
    ) -> Result<(), RulerError> {
        self.ensure_unique(name)?;
        let idx = self
            .position(anchor)
            .ok_or_else(|| RulerError::UnknownRule(anchor.to_string()))?;
        self.rules.insert(
            idx,
            BlockRule {
                name,
                func,
                alt: alt.to_vec(),
            },
        );
        debug!("registered block rule `{name}` before `{anchor}`");
        Ok(())
    }

    /// Rule names in priority order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name)
    }

    /// Rules allowed to terminate `chain`, in priority order.
    pub fn terminators<'r>(&'r self, chain: &'r str) -> impl Iterator<Item = BlockRuleFn> + 'r {
        self.rules
            .iter()
            .filter(move |r| r.alt.iter().any(|a| *a == chain))
            .map(|r| r.func)
    }

    /// Tokenizes lines `[start, end)` into `state`.
    ///
    /// Blank lines are skipped. Once the token nesting level reaches
    /// `ParseOptions::max_nesting` the rest of the range is dropped.
    pub fn tokenize(&self, state: &mut BlockState<'_>, start: usize, end: usize) {
        let mut line = start;
        while line < end {
            if state.is_blank(line) {
                line += 1;
                continue;
            }
            if state.level >= state.options.max_nesting {
                debug!(
                    "nesting limit {} reached at line {line}, dropping lines {line}..{end}",
                    state.options.max_nesting
                );
                line = end;
                break;
            }

            state.line = line;
            let accepted = self.rules.iter().find(|r| (r.func)(state, line, end, false));
            match accepted {
                Some(rule) => trace!("line {line}: `{}` consumed to {}", rule.name, state.line),
                None => trace!("line {line}: no rule matched"),
            }
            // Every accepted line must move the cursor forward.
            if accepted.is_none() || state.line <= line {
                state.line = line + 1;
            }
            line = state.line;
        }
        state.line = line;
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.rules.iter().position(|r| r.name == name)
    }

    fn ensure_unique(&self, name: &str) -> Result<(), RulerError> {
        match self.position(name) {
            Some(_) => Err(RulerError::DuplicateRule(name.to_string())),
            None => Ok(()),
        }
    }
}

impl Default for BlockRuler {
    /// The standard chain: `fence`, `heading`, `html_block`, `paragraph`.
    fn default() -> Self {
        let para = vec![Self::PARAGRAPH_CHAIN];
        Self {
            rules: vec![
                BlockRule {
                    name: code_fence::RULE_NAME,
                    func: code_fence::fence,
                    alt: para.clone(),
                },
                BlockRule {
                    name: heading::RULE_NAME,
                    func: heading::heading,
                    alt: para.clone(),
                },
                BlockRule {
                    name: html_block::RULE_NAME,
                    func: html_block::html_block,
                    alt: Vec::new(),
                },
                BlockRule {
                    name: paragraph::RULE_NAME,
                    func: paragraph::paragraph,
                    alt: Vec::new(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{
        blocks::state::ParseOptions,
        rope::LineTable,
        token::{Nesting, TokenKind},
    };

    fn one_line(state: &mut BlockState<'_>, start: usize, _end: usize, silent: bool) -> bool {
        if !silent {
            let token = state.push(TokenKind::Inline, "", Nesting::SelfClosing);
            token.content = format!("line {start}");
            state.line = start + 1;
        }
        true
    }

    fn never(_: &mut BlockState<'_>, _: usize, _: usize, _: bool) -> bool {
        false
    }

    #[test]
    fn default_chain_order() {
        let ruler = BlockRuler::default();
        let names: Vec<_> = ruler.names().collect();
        assert_eq!(names, vec!["fence", "heading", "html_block", "paragraph"]);
    }

    #[test]
    fn before_inserts_ahead_of_anchor() {
        let mut ruler = BlockRuler::default();
        ruler.before("html_block", "custom", never, &[]).unwrap();
        let names: Vec<_> = ruler.names().collect();
        assert_eq!(
            names,
            vec!["fence", "heading", "custom", "html_block", "paragraph"]
        );
    }

    #[test]
    fn before_unknown_anchor_fails() {
        let mut ruler = BlockRuler::new();
        assert_eq!(
            ruler.before("html_block", "custom", never, &[]),
            Err(RulerError::UnknownRule("html_block".to_string()))
        );
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut ruler = BlockRuler::default();
        assert_eq!(
            ruler.push("paragraph", never, &[]),
            Err(RulerError::DuplicateRule("paragraph".to_string()))
        );
    }

    #[test]
    fn terminators_follow_alt_lists() {
        let ruler = BlockRuler::default();
        assert_eq!(ruler.terminators("paragraph").count(), 2);
        assert_eq!(ruler.terminators("blockquote").count(), 0);
    }

    #[test]
    fn tokenize_skips_blank_lines() {
        let mut ruler = BlockRuler::new();
        ruler.push("one_line", one_line, &[]).unwrap();
        let src = "a\n\n  \nb\n";
        let lines = LineTable::new(src);
        let options = ParseOptions::default();
        let mut state = BlockState::new(src, &lines, &ruler, &options);
        state.tokenize(0, lines.len());

        let contents: Vec<_> = state.tokens.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["line 0", "line 3"]);
        assert_eq!(state.line, 4);
    }

    #[test]
    fn unmatched_lines_are_skipped() {
        let mut ruler = BlockRuler::new();
        ruler.push("never", never, &[]).unwrap();
        let src = "a\nb\n";
        let lines = LineTable::new(src);
        let options = ParseOptions::default();
        let mut state = BlockState::new(src, &lines, &ruler, &options);
        state.tokenize(0, lines.len());
        assert!(state.tokens.is_empty());
        assert_eq!(state.line, 2);
    }
}
