use html_escape::{encode_double_quoted_attribute, encode_text};

/// Styles for semantic blocks: a bordered container with a small caps header.
pub const DEFAULT_STYLESHEET: &str = "\
.semantic-block {
  border: 1px solid #c8ccd0;
  border-radius: 4px;
  margin: 1em 0;
  padding: 0 1em 0.5em;
}
.semantic-block .semantic-block {
  margin: 0.5em 0;
}
.semantic-header {
  font-size: 0.8em;
  font-weight: bold;
  font-variant: small-caps;
  margin: 0 -1em 0.5em;
  padding: 0.25em 1em;
  border-bottom: 1px solid #c8ccd0;
  background: #f3f4f6;
}
";

/// Where a standalone page gets its styles from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stylesheet<'a> {
    /// CSS text placed in a `<style>` element.
    Embedded(&'a str),
    /// URL or path referenced by a `<link>` element.
    Linked(&'a str),
}

impl Default for Stylesheet<'_> {
    fn default() -> Self {
        Stylesheet::Embedded(DEFAULT_STYLESHEET)
    }
}

/// Wraps a rendered fragment in a complete HTML document.
pub fn standalone_page(title: &str, body: &str, stylesheet: Stylesheet<'_>) -> String {
    let style = match stylesheet {
        Stylesheet::Embedded(css) => format!("<style>\n{css}</style>"),
        Stylesheet::Linked(href) => format!(
            "<link rel=\"stylesheet\" href=\"{}\">",
            encode_double_quoted_attribute(href)
        ),
    };
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n{style}\n</head>\n<body>\n{body}</body>\n</html>\n",
        encode_text(title)
    )
}
