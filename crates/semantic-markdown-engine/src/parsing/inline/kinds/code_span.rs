/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones" - no other inline parsing occurs inside them.
/// A span opened by a run of N backticks is closed only by a run of exactly
/// N backticks.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Strips one leading and one trailing space from code span content
    /// when both are present and the content is not all spaces.
    pub fn strip_padding(inner: &str) -> &str {
        let b = inner.as_bytes();
        if b.len() >= 2 && b[0] == b' ' && b[b.len() - 1] == b' ' && b.iter().any(|&c| c != b' ') {
            &inner[1..inner.len() - 1]
        } else {
            inner
        }
    }
}
