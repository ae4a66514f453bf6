// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some `code` content.\n\n<Note>\nInside a note.\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n</Note>\n\n<div>\nraw html\n</div>\n\n";
    base.repeat(size)
}

/// `depth` levels of alternating same-name and different-name blocks.
#[allow(dead_code)]
pub fn generate_nested_blocks(sections: usize, depth: usize) -> String {
    let mut content = String::new();
    for section in 0..sections {
        content.push_str(&format!("# Section {section}\n\n"));
        for level in 0..depth {
            content.push_str(&format!("<Level{}>\n", level % 2));
            content.push_str("Some paragraph content at this level.\n\n");
        }
        for level in (0..depth).rev() {
            content.push_str(&format!("</Level{}>\n", level % 2));
        }
        content.push('\n');
    }
    content
}

/// An opening tag on every line with no closing tags: each probe scans to
/// the end of the document and declines.
#[allow(dead_code)]
pub fn generate_unclosed_tags(lines: usize) -> String {
    "<Open>\n".repeat(lines)
}
