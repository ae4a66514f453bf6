pub mod lines;
pub mod slice;
pub mod span;

pub use lines::{LineMarks, LineRef, LineTable, lines_with_spans};
pub use slice::{slice_str, slice_to_string};
pub use span::Span;
