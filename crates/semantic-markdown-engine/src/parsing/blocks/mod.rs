//! # Block Parsing
//!
//! Rule-chain block tokenizer with semantic HTML blocks.
//!
//! ## Parsing Model
//!
//! 1. **Line table** (`rope::LineTable`): each line's span, indentation and
//!    content span is computed once per parse.
//!
//! 2. **Rule chain** (`ruler`): a `BlockRuler` holds named rules in priority
//!    order. At every non-blank line the first rule that accepts the line
//!    emits its tokens and advances `BlockState::line` past what it consumed.
//!
//! ## Modules
//!
//! - **`state`**: `BlockState` (source, line table, token sink) and `ParseOptions`
//! - **`ruler`**: `BlockRuler`, the ordered chain of `BlockRule`s
//! - **`matcher`**: `find_matching_close`, the depth-tracking close-tag scan
//! - **`semantic`**: the `semantic_block` rule built on the matcher
//! - **`kinds`**: generic rules with owned delimiters (fence, heading, HTML, paragraph)
//!
//! ## Key Invariants
//!
//! - A rule either declines without touching the state or consumes at least
//!   one line and emits balanced tokens
//! - Rules called with `silent = true` never emit tokens
//! - Semantic blocks recurse through the same chain for their interior lines

pub mod kinds;
pub mod matcher;
pub mod ruler;
pub mod semantic;
pub mod state;

pub use matcher::{LineSource, MatchResult, find_matching_close};
pub use ruler::{BlockRule, BlockRuleFn, BlockRuler, RulerError};
pub use semantic::{SemanticClasses, semantic_block};
pub use state::{BlockState, ParseOptions};
