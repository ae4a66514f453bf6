use std::fmt;

/// Literal text to insert with a single cursor placeholder.
///
/// Displayed in the usual snippet notation, with `$0` marking where the
/// cursor lands:
///
/// ```text
/// Snippet::new("", "</b>")    =>  $0</b>
/// Snippet::new("\n", "\n")    =>  \n$0\n
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub before: String,
    pub after: String,
}

impl Snippet {
    pub const CURSOR: &'static str = "$0";

    pub fn new(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
        }
    }

    /// Parses snippet notation. Without a `$0` the cursor goes at the end.
    pub fn parse(template: &str) -> Self {
        match template.split_once(Self::CURSOR) {
            Some((before, after)) => Self::new(before, after),
            None => Self::new(template, ""),
        }
    }

    /// The text that ends up in the document.
    pub fn text(&self) -> String {
        format!("{}{}", self.before, self.after)
    }

    /// Cursor position relative to the start of the inserted text.
    pub fn cursor_offset(&self) -> usize {
        self.before.len()
    }

    pub fn len(&self) -> usize {
        self.before.len() + self.after.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.before, Self::CURSOR, self.after)
    }
}
