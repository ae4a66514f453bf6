use std::ops::Range;

/// What a token represents in the rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    DivOpen,
    DivClose,
    ParagraphOpen,
    ParagraphClose,
    HeadingOpen,
    HeadingClose,
    /// Inline content; `content` is rendered by the inline renderer.
    Inline,
    /// Fenced code; `content` is the raw code, `info` the info string.
    Fence,
    /// Raw HTML passed through verbatim.
    HtmlBlock,
}

impl TokenKind {
    /// Stable snake_case name, as used in token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::DivOpen => "div_open",
            TokenKind::DivClose => "div_close",
            TokenKind::ParagraphOpen => "paragraph_open",
            TokenKind::ParagraphClose => "paragraph_close",
            TokenKind::HeadingOpen => "heading_open",
            TokenKind::HeadingClose => "heading_close",
            TokenKind::Inline => "inline",
            TokenKind::Fence => "fence",
            TokenKind::HtmlBlock => "html_block",
        }
    }
}

/// How a token affects the nesting level of the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nesting {
    Open,
    Close,
    SelfClosing,
}

/// One entry of the block token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// HTML tag name used when rendering (`div`, `p`, `h2`, ...).
    pub tag: &'static str,
    pub nesting: Nesting,
    /// HTML attributes, rendered in order.
    pub attrs: Vec<(String, String)>,
    /// Source lines `[start, end)` this token covers.
    pub map: Option<Range<usize>>,
    pub content: String,
    /// Opaque extra text: fence info string, semantic tag attributes.
    pub info: String,
    /// Nesting level at which the token was emitted.
    pub level: usize,
}

impl Token {
    pub fn new(kind: TokenKind, tag: &'static str, nesting: Nesting) -> Self {
        Self {
            kind,
            tag,
            nesting,
            attrs: Vec::new(),
            map: None,
            content: String::new(),
            info: String::new(),
            level: 0,
        }
    }

    /// Value of the first attribute called `name`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| *key == name) {
            Some(existing) => existing.1 = value,
            None => self.attrs.push((name, value)),
        }
    }
}

/// Renders a token stream as one indented line per token.
///
/// ```text
/// div_open.semantic-block @0..3
///   div_open.semantic-header
///     inline "Note" @0..1
/// ```
pub fn dump(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&"  ".repeat(token.level));
        out.push_str(token.kind.name());
        if let Some(class) = token.attr("class") {
            out.push('.');
            out.push_str(class);
        }
        if !token.content.is_empty() {
            out.push_str(&format!(" {:?}", token.content));
        }
        if let Some(map) = &token.map {
            out.push_str(&format!(" @{}..{}", map.start, map.end));
        }
        out.push('\n');
    }
    out
}
