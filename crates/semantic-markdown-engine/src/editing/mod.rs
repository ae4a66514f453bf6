/*!
 * # Editing Core
 *
 * The editor model the conveniences operate on.
 *
 * ## Architecture Overview
 *
 * ### 1. Single Source of Truth: xi-rope Buffer
 * - The entire document is stored in a single **`xi_rope::Rope`** buffer
 * - Saving writes rope bytes verbatim; nothing is regenerated from a model
 *
 * ### 2. Command-Based Editing
 * - All edits are **Commands** (`Cmd` enum) compiled to xi-rope **Deltas**
 * - Offsets are validated first: out-of-bounds or mid-character offsets are
 *   a `DocumentError`, never a panic
 * - Every applied command bumps the document version and returns a **Patch**
 *
 * ### 3. Snippets
 * - A **`Snippet`** is literal text around one cursor placeholder (`$0`)
 * - Inserting a snippet places the cursor at the placeholder, with no
 *   indentation applied to the inserted lines
 *
 * ## Module Structure
 *
 * - **`document`**: `Document` (buffer, selection, version, language id)
 * - **`commands`**: `Cmd` enum, delta compilation and selection transform
 * - **`patch`**: Edit result metadata including changed ranges and new selection
 * - **`snippet`**: `Snippet`
 *
 * ## Usage Pattern
 *
 * ```rust
 * use semantic_markdown_engine::editing::*;
 *
 * let mut doc = Document::from_bytes(b"<b>").unwrap();
 * let patch = doc
 *     .apply(Cmd::InsertSnippet {
 *         range: 3..3,
 *         snippet: Snippet::new("", "</b>"),
 *     })
 *     .unwrap();
 *
 * assert_eq!(doc.text(), "<b></b>");
 * assert_eq!(patch.new_selection, 3..3);
 * ```
 */

pub mod commands;
pub mod document;
pub mod patch;
pub mod snippet;

pub use commands::Cmd;
pub use document::{Document, DocumentError, MARKDOWN_LANGUAGE};
pub use patch::Patch;
pub use snippet::Snippet;
