//! Whole-pipeline tests for block parsing.
//!
//! Token streams are compared through `token::dump`, one line per token,
//! and every stream is run through the invariant checks.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    Markdown,
    blocks::{
        BlockRuler, ParseOptions,
        semantic::{INSERT_BEFORE, RULE_NAME, semantic_block},
    },
    rope::LineTable,
    token::{Token, dump},
};

fn semantic_markdown() -> Markdown {
    let mut md = Markdown::new();
    md.ruler_mut()
        .before(INSERT_BEFORE, RULE_NAME, semantic_block, &[])
        .unwrap();
    md
}

fn parse_checked(md: &Markdown, src: &str) -> Vec<Token> {
    let tokens = md.parse(src);
    invariants::check(&tokens, LineTable::new(src).len());
    tokens
}

fn assert_dump(src: &str, expected: &str) {
    assert_eq!(dump(&parse_checked(&semantic_markdown(), src)), expected);
}

#[test]
fn single_block() {
    assert_dump(
        "<Note>\nhello\n</Note>\n",
        "\
div_open.semantic-block @0..3
  div_open.semantic-header
    inline \"Note\" @0..1
  div_close
  paragraph_open @1..2
    inline \"hello\" @1..2
  paragraph_close
div_close
",
    );
}

#[test]
fn same_name_nesting_pairs_outer_with_last_close() {
    assert_dump(
        "<A>\n<A>\nx\n</A>\n</A>\n",
        "\
div_open.semantic-block @0..5
  div_open.semantic-header
    inline \"A\" @0..1
  div_close
  div_open.semantic-block @1..4
    div_open.semantic-header
      inline \"A\" @1..2
    div_close
    paragraph_open @2..3
      inline \"x\" @2..3
    paragraph_close
  div_close
div_close
",
    );
}

#[test]
fn unterminated_block_falls_through_to_raw_html() {
    assert_dump(
        "<Note>\ntext\n",
        "html_block \"<Note>\\ntext\\n\" @0..2\n",
    );
}

#[test]
fn other_names_are_inert_to_the_matcher() {
    // `<B>` has no close inside `<A>`'s interior, so it stays raw HTML.
    assert_dump(
        "<A>\n<B>\n</A>\n</B>\n",
        "\
div_open.semantic-block @0..3
  div_open.semantic-header
    inline \"A\" @0..1
  div_close
  html_block \"<B>\\n\" @1..2
div_close
html_block \"</B>\\n\" @3..4
",
    );
}

#[test]
fn generic_blocks_nest_inside() {
    assert_dump(
        "<Tip>\n# Title\n\n```rust\nlet x = 1;\n```\n</Tip>\nafter\n",
        "\
div_open.semantic-block @0..7
  div_open.semantic-header
    inline \"Tip\" @0..1
  div_close
  heading_open @1..2
    inline \"Title\" @1..2
  heading_close
  fence \"let x = 1;\\n\" @3..6
div_close
paragraph_open @7..8
  inline \"after\" @7..8
paragraph_close
",
    );
}

#[test]
fn empty_block_has_only_the_header() {
    assert_dump(
        "<Empty>\n</Empty>",
        "\
div_open.semantic-block @0..2
  div_open.semantic-header
    inline \"Empty\" @0..1
  div_close
div_close
",
    );
}

#[rstest]
#[case("<Note>\n<Note>\nx\n</Note>\n")]
#[case("<A>\n<B>\n</B>\n</A>\n<A>\n")]
#[case("text\n<Note>\n\n</Note>\n\n- item\n")]
#[case("<!--\n<Note>\n-->\n</Note>\n")]
#[case("~~~\n<Note>\n~~~\n</Note>\n")]
#[case("")]
fn parsing_twice_is_identical(#[case] src: &str) {
    let md = semantic_markdown();
    let first = parse_checked(&md, src);
    let second = parse_checked(&md, src);
    assert_eq!(first, second);
}

#[test]
fn paragraph_swallows_block_by_default() {
    let tokens = parse_checked(&semantic_markdown(), "intro\n<Note>\nx\n</Note>\n");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].content, "intro\n<Note>\nx\n</Note>");
}

#[test]
fn interrupting_rule_ends_paragraph() {
    let mut md = Markdown::new();
    md.ruler_mut()
        .before(
            INSERT_BEFORE,
            RULE_NAME,
            semantic_block,
            &[BlockRuler::PARAGRAPH_CHAIN],
        )
        .unwrap();
    let tokens = parse_checked(&md, "intro\n<Note>\nx\n</Note>\n");
    assert_eq!(tokens[1].content, "intro");
    assert_eq!(tokens[0].map, Some(0..1));
    assert_eq!(tokens[3].attr("class"), Some("semantic-block"));
    assert_eq!(tokens[3].map, Some(1..4));
}

#[test]
fn unbalanced_block_does_not_interrupt_paragraph() {
    let mut md = Markdown::new();
    md.ruler_mut()
        .before(
            INSERT_BEFORE,
            RULE_NAME,
            semantic_block,
            &[BlockRuler::PARAGRAPH_CHAIN],
        )
        .unwrap();
    let tokens = parse_checked(&md, "intro\n<Note>\nx\n");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].content, "intro\n<Note>\nx");
}

#[test]
fn nesting_limit_drops_deep_content() {
    let mut md = semantic_markdown();
    md.options.max_nesting = 2;
    let tokens = parse_checked(&md, "<A>\n<B>\ntext\n</B>\n</A>\n");
    assert!(tokens.iter().all(|t| t.content != "text"));
    let titles: Vec<_> = tokens
        .iter()
        .filter(|t| t.level > 0 && !t.content.is_empty())
        .map(|t| t.content.as_str())
        .collect();
    assert_eq!(titles, vec!["A", "B"]);
}

#[test]
fn deep_nesting_stays_balanced() {
    let depth = 150;
    let mut src = String::new();
    for _ in 0..depth {
        src.push_str("<D>\n");
    }
    for _ in 0..depth {
        src.push_str("</D>\n");
    }
    let tokens = parse_checked(&semantic_markdown(), &src);
    // The innermost container still gets its header before the limit bites.
    assert!(
        tokens
            .iter()
            .all(|t| t.level <= ParseOptions::DEFAULT_MAX_NESTING + 1)
    );
}

#[test]
fn rope_and_str_parse_alike() {
    let src = "<Note>\r\nbody\r\n</Note>\r\n";
    let md = semantic_markdown();
    assert_eq!(md.parse(src), md.parse_rope(&xi_rope::Rope::from(src)));
}
