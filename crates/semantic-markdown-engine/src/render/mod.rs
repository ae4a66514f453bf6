//! # HTML Rendering
//!
//! Turns a block token stream into HTML. Line breaks follow the usual
//! Markdown renderer convention: a newline after every block close tag and
//! after block open tags unless inline content or the matching close follows
//! directly.
//!
//! ```text
//! <div class="semantic-block">
//! <div class="semantic-header">Note</div>
//! <p>hello</p>
//! </div>
//! ```

mod page;

pub use page::{DEFAULT_STYLESHEET, Stylesheet, standalone_page};

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{
    inline::{InlineNode, kinds::CodeSpan, parse_inline},
    rope::slice_str,
    token::{Nesting, Token, TokenKind},
};

/// Switches for the HTML renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Adds `data-line="N"` (first source line) to every block token with a
    /// line map, for preview scroll sync.
    pub source_line_attrs: bool,
}

/// Renders a token stream to an HTML fragment.
pub fn render_html(tokens: &[Token], options: &RenderOptions) -> String {
    let mut out = String::new();
    for (idx, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Inline => render_inline(&mut out, &token.content),
            TokenKind::Fence => render_fence(&mut out, token, options),
            TokenKind::HtmlBlock => out.push_str(&token.content),
            _ => render_tag(&mut out, token, tokens.get(idx + 1), options),
        }
    }
    out
}

fn render_tag(out: &mut String, token: &Token, next: Option<&Token>, options: &RenderOptions) {
    out.push('<');
    if token.nesting == Nesting::Close {
        out.push('/');
    }
    out.push_str(token.tag);
    if token.nesting != Nesting::Close {
        render_attrs(out, token, options);
    }
    out.push('>');

    let need_lf = match (token.nesting, next) {
        (Nesting::Open, Some(next)) => {
            next.kind != TokenKind::Inline
                && !(next.nesting == Nesting::Close && next.tag == token.tag)
        }
        _ => true,
    };
    if need_lf {
        out.push('\n');
    }
}

fn render_attrs(out: &mut String, token: &Token, options: &RenderOptions) {
    for (name, value) in &token.attrs {
        push_attr(out, name, value);
    }
    push_line_attr(out, token, options);
}

fn push_line_attr(out: &mut String, token: &Token, options: &RenderOptions) {
    if !options.source_line_attrs {
        return;
    }
    if let Some(map) = &token.map {
        push_attr(out, "data-line", &map.start.to_string());
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&encode_double_quoted_attribute(value));
    out.push('"');
}

fn render_fence(out: &mut String, token: &Token, options: &RenderOptions) {
    out.push_str("<pre");
    push_line_attr(out, token, options);
    out.push_str("><code");
    if let Some(lang) = token.info.split_whitespace().next() {
        push_attr(out, "class", &format!("language-{lang}"));
    }
    out.push('>');
    out.push_str(&encode_text(&token.content));
    out.push_str("</code></pre>\n");
}

fn render_inline(out: &mut String, content: &str) {
    for node in parse_inline(0, content) {
        match node {
            InlineNode::Text(span) => out.push_str(&encode_text(slice_str(content, span))),
            InlineNode::CodeSpan { inner, .. } => {
                let code = CodeSpan::strip_padding(slice_str(content, inner));
                out.push_str("<code>");
                out.push_str(&encode_text(code));
                out.push_str("</code>");
            }
        }
    }
}
