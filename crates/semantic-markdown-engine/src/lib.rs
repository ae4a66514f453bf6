//! Semantic HTML blocks for Markdown.
//!
//! Whole-line custom tags such as `<Note>` ... `</Note>` become nested,
//! titled containers when rendered, and an editor extension closes tags as
//! they are typed and splits `<tag>|</tag>` on Enter.
//!
//! ```rust
//! use semantic_markdown_engine::SemanticMarkdown;
//!
//! let md = SemanticMarkdown::default().markdown().unwrap();
//! let html = md.render("<Note>\nRemember this.\n</Note>\n");
//! assert_eq!(
//!     html,
//!     "<div class=\"semantic-block\">\n<div class=\"semantic-header\">Note</div>\n<p>Remember this.</p>\n</div>\n"
//! );
//! ```

pub mod editing;
pub mod extension;
pub mod host;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use editing::{Cmd, Document, DocumentError, Patch, Snippet};
pub use extension::{BETWEEN_TAGS_CONTEXT, ENTER_COMMAND, SemanticMarkdown, Settings};
pub use host::{Extension, HostError, HostEvent, Key, Session, Workbench};
pub use io::IoError;
pub use models::MarkdownFile;
pub use parsing::{
    Markdown,
    blocks::{ParseOptions, RulerError, SemanticClasses},
    token::Token,
};
pub use render::{RenderOptions, Stylesheet};
