use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the rope as an owned String.
///
/// This allocates; prefer working with spans where possible.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    rope.slice_to_cow(sp.start..sp.end).into_owned()
}

/// Borrows the text for a span from a string source.
///
/// Returns an empty string when the span does not fall on char boundaries
/// inside `src`.
pub fn slice_str(src: &str, sp: Span) -> &str {
    src.get(sp.start..sp.end).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_to_string_full_span() {
        let rope = Rope::from("hello world");
        let sp = Span { start: 0, end: 11 };
        assert_eq!(slice_to_string(&rope, sp), "hello world");
    }

    #[test]
    fn slice_to_string_partial_span() {
        let rope = Rope::from("hello world");
        let sp = Span { start: 6, end: 11 };
        assert_eq!(slice_to_string(&rope, sp), "world");
    }

    #[test]
    fn slice_str_matches_rope_slice() {
        let src = "<Note>\nbody\n";
        let sp = Span { start: 7, end: 11 };
        assert_eq!(slice_str(src, sp), "body");
        assert_eq!(slice_to_string(&Rope::from(src), sp), "body");
    }

    #[test]
    fn slice_str_out_of_bounds_is_empty() {
        assert_eq!(slice_str("abc", Span { start: 2, end: 10 }), "");
    }
}
