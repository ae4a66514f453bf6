//! # Block Kinds
//!
//! The generic rules of the default chain. Each kind owns its delimiter
//! constants; the rule functions never hardcode syntax scattered elsewhere.
//!
//! - **`code_fence`**: ```` ``` ```` / `~~~` fenced code, a raw zone
//! - **`heading`**: ATX headings `#` .. `######`
//! - **`html_block`**: raw HTML passed through verbatim
//! - **`paragraph`**: the fallback for any other non-blank line

pub mod code_fence;
pub mod heading;
pub mod html_block;
pub mod paragraph;

pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use heading::Heading;
pub use html_block::{HtmlBlock, HtmlEnd};
pub use paragraph::Paragraph;
