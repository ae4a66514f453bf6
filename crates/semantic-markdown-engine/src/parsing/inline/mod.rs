//! # Inline Parsing
//!
//! Cursor-based inline parsing for the content of `Inline` tokens
//! (paragraph text, heading text, semantic block titles).
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, CodeSpan)
//! - **`kinds`**: inline types with owned delimiters (CodeSpan)
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with position tracking
//! - **`parser`**: `parse_inline()` main entry point
//!
//! Code spans are raw zones: their content is emitted verbatim (escaped by
//! the renderer) and nothing inside them is parsed further.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
