use relative_path::{RelativePath, RelativePathBuf};

/// A Markdown source file, addressed relative to the directory being rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownFile {
    relative_path: RelativePathBuf,
    title: String,
}

impl MarkdownFile {
    /// Extension of rendered output files.
    pub const HTML_EXTENSION: &'static str = "html";

    /// Create a new MarkdownFile from a relative path
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let title = relative_path
            .file_stem()
            .filter(|stem| !stem.is_empty())
            .unwrap_or("Untitled")
            .to_string();
        Self {
            relative_path,
            title,
        }
    }

    /// Get the relative path
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// File name without extension, used as the page title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sibling path the rendered HTML is written to
    pub fn html_path(&self) -> RelativePathBuf {
        self.relative_path.with_extension(Self::HTML_EXTENSION)
    }
}

impl From<RelativePathBuf> for MarkdownFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for MarkdownFile {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}
